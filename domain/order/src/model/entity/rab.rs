use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    exception::{OrderException, OrderResult},
    model::vo::RabDecision,
};

/// Budget proposal (Rencana Anggaran Biaya) for one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RabRecord")]
pub struct Rab {
    pub id: Uuid,
    pub order_id: Uuid,
    /// Proposing supervisor.
    pub supervisor_id: Uuid,
    pub rationale: String,
    pub items: Vec<RabItem>,
    /// Always `sum(quantity * unit_price)` over `items`.
    total_cost: i64,
    pub status: RabStatus,
    /// Earlier decided proposal of the same order this one replaces.
    pub supersedes: Option<Uuid>,
    pub decided_by: Option<Uuid>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Stored shape of a [`Rab`]. The total is recomputed on load and a stored
/// total that disagrees with the items is rejected.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RabRecord {
    id: Uuid,
    order_id: Uuid,
    supervisor_id: Uuid,
    rationale: String,
    items: Vec<RabItem>,
    #[serde(default)]
    total_cost: Option<i64>,
    status: RabStatus,
    #[serde(default)]
    supersedes: Option<Uuid>,
    #[serde(default)]
    decided_by: Option<Uuid>,
    #[serde(default)]
    decided_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<RabRecord> for Rab {
    type Error = OrderException;

    fn try_from(record: RabRecord) -> OrderResult<Self> {
        let total_cost = total_of(&record.items)?;
        if let Some(stored) = record.total_cost.filter(|el| *el != total_cost) {
            return Err(OrderException::invalid_argument(format!(
                "RAB {} stores total {stored}, items sum to {total_cost}",
                record.id
            )));
        }
        Ok(Self {
            id: record.id,
            order_id: record.order_id,
            supervisor_id: record.supervisor_id,
            rationale: record.rationale,
            items: record.items,
            total_cost,
            status: record.status,
            supersedes: record.supersedes,
            decided_by: record.decided_by,
            decided_at: record.decided_at,
            created_at: record.created_at,
        })
    }
}

/// Line item of a [`Rab`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RabItem {
    pub name: String,
    pub quantity: u32,
    /// Price per unit in rupiah.
    pub unit_price: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RabStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for RabStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

impl RabItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn subtotal(&self) -> Option<i64> {
        self.unit_price.checked_mul(i64::from(self.quantity))
    }

    fn validate(&self, nth: usize) -> OrderResult<()> {
        if self.name.trim().is_empty() {
            return Err(OrderException::invalid_argument(format!("item {nth} has no name")));
        }
        if self.quantity == 0 {
            return Err(OrderException::invalid_argument(format!(
                "item {nth} ({}) must have a positive quantity",
                self.name
            )));
        }
        if self.unit_price < 0 {
            return Err(OrderException::invalid_argument(format!(
                "item {nth} ({}) has a negative unit price",
                self.name
            )));
        }
        Ok(())
    }
}

/// Validates `items` and returns their total.
pub fn total_of(items: &[RabItem]) -> OrderResult<i64> {
    if items.is_empty() {
        return Err(OrderException::invalid_argument("RAB needs at least one item"));
    }
    items.iter().enumerate().try_fold(0i64, |acc, (nth, item)| {
        item.validate(nth)?;
        item.subtotal()
            .and_then(|el| acc.checked_add(el))
            .ok_or_else(|| OrderException::invalid_argument("RAB total overflows"))
    })
}

impl Rab {
    pub fn propose(
        order_id: Uuid,
        supervisor_id: Uuid,
        items: Vec<RabItem>,
        rationale: &str,
        supersedes: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> OrderResult<Self> {
        let total_cost = total_of(&items)?;
        Ok(Self {
            id: Uuid::new_v4(),
            order_id,
            supervisor_id,
            rationale: rationale.trim().to_owned(),
            items,
            total_cost,
            status: RabStatus::Pending,
            supersedes,
            decided_by: None,
            decided_at: None,
            created_at: now,
        })
    }

    pub fn total_cost(&self) -> i64 {
        self.total_cost
    }

    pub fn is_decided(&self) -> bool {
        self.status != RabStatus::Pending
    }

    /// Replaces the items of a pending proposal and recomputes the total.
    pub fn edit_items(&mut self, items: Vec<RabItem>) -> OrderResult<()> {
        if self.is_decided() {
            return Err(OrderException::RabLocked {
                rab_id: self.id,
                status: self.status,
            });
        }
        self.total_cost = total_of(&items)?;
        self.items = items;
        Ok(())
    }

    /// One-shot: a decided proposal refuses every further decision.
    pub fn decide(
        &mut self,
        approver: Uuid,
        decision: RabDecision,
        now: DateTime<Utc>,
    ) -> OrderResult<()> {
        if self.is_decided() {
            return Err(OrderException::invalid_transition("decide on RAB", self.status));
        }
        self.status = decision.into();
        self.decided_by = Some(approver);
        self.decided_at = Some(now);
        Ok(())
    }
}
