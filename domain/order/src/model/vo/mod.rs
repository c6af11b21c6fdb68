mod actor;
mod query;

#[rustfmt::skip]
pub use {
    actor::{Actor, Role},
    query::{
        total_spent, DocumentationFilter, OrderDetail, OrderFilter, OrderSummary,
        Reconciliation,
    },
};

use serde::{Deserialize, Serialize};

use crate::model::entity::RabStatus;

/// Approver's verdict on a pending RAB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RabDecision {
    Approved,
    Rejected,
}

impl From<RabDecision> for RabStatus {
    fn from(value: RabDecision) -> Self {
        match value {
            RabDecision::Approved => Self::Approved,
            RabDecision::Rejected => Self::Rejected,
        }
    }
}
