//! Inputs of the multi-field mutating operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::{DocumentationKind, RabItem, Schedule};

/// Customer submission of a new service request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderCommand {
    pub category: String,
    pub description: String,
    pub address: String,
    pub schedule: Schedule,
    pub declared_budget: String,
}

/// Supervisor's budget proposal for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeRabCommand {
    pub order_id: Uuid,
    pub items: Vec<RabItem>,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordExpenseCommand {
    pub rab_id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub unit_price: i64,
}

/// Upload of a proof artifact.
#[derive(Debug, Clone)]
pub struct AttachDocumentationCommand {
    pub order_id: Uuid,
    pub file_name: String,
    pub content: Vec<u8>,
    pub caption: String,
    /// Derived from `caption` when absent.
    pub kind: Option<DocumentationKind>,
}
