use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Crew roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personnel {
    pub id: Uuid,
    pub name: String,
    /// Display skill, e.g. "Electrician".
    pub skill: String,
}
