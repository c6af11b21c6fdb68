use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Personnel;

/// A crew member placed on an order.
///
/// `name` and `skill` are copied from the roster when the assignment is made
/// and are not refreshed afterwards, so they may lag behind roster edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Surrogate key; the natural key is `(order_id, personnel_id)`.
    pub id: Uuid,
    pub order_id: Uuid,
    pub personnel_id: Uuid,
    pub name: String,
    pub skill: String,
    pub assigned_at: DateTime<Utc>,
}

impl Assignment {
    pub fn snapshot(order_id: Uuid, personnel: &Personnel, assigned_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            personnel_id: personnel.id,
            name: personnel.name.to_owned(),
            skill: personnel.skill.to_owned(),
            assigned_at,
        }
    }
}
