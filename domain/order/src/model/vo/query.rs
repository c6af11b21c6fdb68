use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::{
    Assignment, Documentation, DocumentationKind, Expense, Order, OrderStatus, Rab, Schedule,
};

/// Listing filter; `None` fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    pub category: Option<String>,
    pub status: Option<OrderStatus>,
    /// Case-insensitive match over description, address and category.
    pub text_search: Option<String>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(category) = &self.category {
            if !order.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        match self.text_search.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => {
                let text = text.to_lowercase();
                [&order.description, &order.address, &order.category]
                    .iter()
                    .any(|el| el.to_lowercase().contains(&text))
            }
            _ => true,
        }
    }
}

/// Row of an order listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub category: String,
    pub address: String,
    pub schedule: Schedule,
    pub declared_budget: String,
    pub status: OrderStatus,
    pub progress: u8,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            category: order.category.to_owned(),
            address: order.address.to_owned(),
            schedule: order.schedule.to_owned(),
            declared_budget: order.declared_budget.to_owned(),
            status: order.status,
            progress: order.progress,
            created_at: order.created_at,
        }
    }
}

/// Estimated against actual spend of one RAB. Advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    pub rab_id: Uuid,
    pub estimated: i64,
    pub actual: i64,
    /// `actual - estimated`; positive means over the estimate.
    pub variance: i64,
}

impl Reconciliation {
    pub fn of(rab: &Rab, expenses: &[Expense]) -> Self {
        let actual = total_spent(expenses);
        let estimated = rab.total_cost();
        Self {
            rab_id: rab.id,
            estimated,
            actual,
            variance: actual.saturating_sub(estimated),
        }
    }
}

/// Sum of every expense amount, saturating on overflow.
pub fn total_spent(expenses: &[Expense]) -> i64 {
    expenses
        .iter()
        .map(|el| el.amount().unwrap_or(i64::MAX))
        .fold(0i64, i64::saturating_add)
}

/// Order with everything hanging off it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub order: Order,
    pub assignments: Vec<Assignment>,
    /// Most recent proposal.
    pub rab: Option<Rab>,
    pub reconciliation: Option<Reconciliation>,
    pub documentation: Vec<Documentation>,
}

/// Documentation listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentationFilter {
    #[default]
    All,
    /// Everything except payment proof.
    Progress,
    PaymentProof,
}

impl DocumentationFilter {
    pub fn accepts(self, kind: DocumentationKind) -> bool {
        match self {
            Self::All => true,
            Self::Progress => kind != DocumentationKind::PaymentProof,
            Self::PaymentProof => kind == DocumentationKind::PaymentProof,
        }
    }
}
