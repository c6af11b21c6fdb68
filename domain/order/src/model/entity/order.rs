use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exception::{OrderException, OrderResult};

/// A customer's service request and the single source of truth for its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Kind of work requested, e.g. "Electrical".
    pub category: String,
    pub description: String,
    pub address: String,
    pub schedule: Schedule,
    /// Customer-declared budget, display only.
    pub declared_budget: String,
    pub status: OrderStatus,
    /// 0 to 100.
    pub progress: u8,
    /// Supervisor's duration estimate, e.g. "2 Hari".
    pub time_estimate: Option<String>,
    pub cancel_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Requested visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub date: NaiveDate,
    /// Free-form slot label, e.g. "08:00 - 10:00".
    pub time_slot: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    AwaitingValidation,
    Working,
    Done,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AwaitingValidation => "awaiting validation",
            Self::Working => "working",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

impl Order {
    pub const COMPLETE: u8 = 100;

    /// Fails with [`OrderException::OrderLocked`] once the order reached a terminal state.
    pub fn ensure_mutable(&self) -> OrderResult<()> {
        if self.status.is_terminal() || self.progress >= Self::COMPLETE {
            return Err(OrderException::OrderLocked {
                order_id: self.id,
                status: self.status,
            });
        }
        Ok(())
    }

    pub fn has_time_estimate(&self) -> bool {
        self.time_estimate.as_deref().is_some_and(|el| !el.trim().is_empty())
    }

    pub fn record_estimate(&mut self, estimate: &str, now: DateTime<Utc>) -> OrderResult<()> {
        self.ensure_mutable()?;
        if self.status != OrderStatus::AwaitingValidation {
            return Err(OrderException::invalid_transition("record an estimate", self.status));
        }
        let estimate = estimate.trim();
        if estimate.is_empty() {
            return Err(OrderException::invalid_argument("time estimate must not be empty"));
        }
        self.time_estimate = Some(estimate.to_owned());
        self.updated_at = now;
        Ok(())
    }

    /// Moves the order to [`OrderStatus::Working`]. The assignment count is
    /// supplied by the caller since assignments live outside the aggregate.
    pub fn begin_work(&mut self, assignment_count: usize, now: DateTime<Utc>) -> OrderResult<()> {
        if self.status != OrderStatus::AwaitingValidation {
            return Err(OrderException::invalid_transition("begin work", self.status));
        }
        if assignment_count == 0 {
            return Err(OrderException::precondition(format!(
                "order {} has no assigned personnel",
                self.id
            )));
        }
        if !self.has_time_estimate() {
            return Err(OrderException::precondition(format!(
                "order {} has no time estimate",
                self.id
            )));
        }
        self.status = OrderStatus::Working;
        self.updated_at = now;
        Ok(())
    }

    /// Writes progress; reaching 100 completes the order in the same write.
    pub fn update_progress(&mut self, percent: i32, now: DateTime<Utc>) -> OrderResult<()> {
        let percent = u8::try_from(percent)
            .ok()
            .filter(|el| *el <= Self::COMPLETE)
            .ok_or_else(|| {
                OrderException::invalid_argument(format!(
                    "progress {percent} is outside of 0..=100"
                ))
            })?;
        self.ensure_mutable()?;
        if self.status != OrderStatus::Working {
            return Err(OrderException::invalid_transition("update progress", self.status));
        }
        self.progress = percent;
        if percent == Self::COMPLETE {
            self.status = OrderStatus::Done;
        }
        self.updated_at = now;
        Ok(())
    }

    pub fn cancel(&mut self, reason: &str, now: DateTime<Utc>) -> OrderResult<()> {
        if self.status.is_terminal() {
            return Err(OrderException::invalid_transition("cancel", self.status));
        }
        self.status = OrderStatus::Cancelled;
        // Progress is only meaningful for working or done orders.
        self.progress = 0;
        let reason = reason.trim();
        self.cancel_reason = (!reason.is_empty()).then(|| reason.to_owned());
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        let now = Utc::now();
        Order {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            category: "Electrical".to_owned(),
            description: "Rewire the kitchen".to_owned(),
            address: "Jl. Merdeka 1".to_owned(),
            schedule: Schedule {
                date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
                time_slot: "08:00 - 10:00".to_owned(),
            },
            declared_budget: "Rp 5,000,000".to_owned(),
            status: OrderStatus::AwaitingValidation,
            progress: 0,
            time_estimate: None,
            cancel_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn begin_work_needs_crew_and_estimate() {
        let now = Utc::now();
        let mut order = order();
        assert!(matches!(
            order.begin_work(0, now),
            Err(OrderException::PreconditionNotMet { .. })
        ));
        assert!(matches!(
            order.begin_work(1, now),
            Err(OrderException::PreconditionNotMet { .. })
        ));
        order.record_estimate("  2 Hari ", now).unwrap();
        assert_eq!(order.time_estimate.as_deref(), Some("2 Hari"));
        order.begin_work(1, now).unwrap();
        assert_eq!(order.status, OrderStatus::Working);
        assert!(matches!(
            order.begin_work(1, now),
            Err(OrderException::InvalidTransition { .. })
        ));
    }

    #[test]
    fn progress_bounds_and_completion() {
        let now = Utc::now();
        let mut order = order();
        order.record_estimate("2 Hari", now).unwrap();
        order.begin_work(1, now).unwrap();

        for bad in [-1, 101, 1000] {
            let before = order.clone();
            assert!(matches!(
                order.update_progress(bad, now),
                Err(OrderException::InvalidArgument { .. })
            ));
            assert_eq!(order, before);
        }

        order.update_progress(50, now).unwrap();
        assert_eq!(order.status, OrderStatus::Working);
        order.update_progress(100, now).unwrap();
        assert_eq!(order.status, OrderStatus::Done);
        assert!(matches!(
            order.update_progress(80, now),
            Err(OrderException::OrderLocked { .. })
        ));
        assert_eq!(order.progress, 100);
    }

    #[test]
    fn progress_requires_working() {
        let mut order = order();
        assert!(matches!(
            order.update_progress(10, Utc::now()),
            Err(OrderException::InvalidTransition { .. })
        ));
        assert_eq!(order.progress, 0);
    }

    #[test]
    fn cancel_only_from_open_states() {
        let now = Utc::now();
        let mut order = order();
        order.record_estimate("1 Hari", now).unwrap();
        order.begin_work(2, now).unwrap();
        order.update_progress(40, now).unwrap();
        order.cancel("customer moved", now).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(order.progress, 0);
        assert_eq!(order.cancel_reason.as_deref(), Some("customer moved"));
        assert!(matches!(
            order.cancel("again", now),
            Err(OrderException::InvalidTransition { .. })
        ));
        assert!(matches!(
            order.record_estimate("3 Hari", now),
            Err(OrderException::OrderLocked { .. })
        ));
    }

    #[test]
    fn wire_names_are_camel_case() {
        let value = serde_json::to_value(order()).unwrap();
        assert_eq!(value["status"], "AwaitingValidation");
        assert_eq!(value["declaredBudget"], "Rp 5,000,000");
        assert_eq!(value["schedule"]["timeSlot"], "08:00 - 10:00");
        assert!(value["timeEstimate"].is_null());
    }
}
