use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exception::{OrderException, OrderResult};

/// Actual spend recorded against a RAB. Never edited once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub rab_id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub unit_price: i64,
    pub recorded_by: Uuid,
    pub recorded_at: DateTime<Utc>,
}

impl Expense {
    pub fn record(
        rab_id: Uuid,
        recorded_by: Uuid,
        name: &str,
        quantity: u32,
        unit_price: i64,
        now: DateTime<Utc>,
    ) -> OrderResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(OrderException::invalid_argument("expense needs an item name"));
        }
        if quantity == 0 {
            return Err(OrderException::invalid_argument("expense quantity must be positive"));
        }
        if unit_price < 0 {
            return Err(OrderException::invalid_argument("expense unit price is negative"));
        }
        let expense = Self {
            id: Uuid::new_v4(),
            rab_id,
            name: name.to_owned(),
            quantity,
            unit_price,
            recorded_by,
            recorded_at: now,
        };
        if expense.amount().is_none() {
            return Err(OrderException::invalid_argument("expense amount overflows"));
        }
        Ok(expense)
    }

    pub fn amount(&self) -> Option<i64> {
        self.unit_price.checked_mul(i64::from(self.quantity))
    }
}
