use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    command::RecordExpenseCommand,
    exception::OrderResult,
    model::{
        entity::Expense,
        vo::{Actor, Reconciliation},
    },
};

/// Advisory record of actual spend. Never blocks on the estimate.
#[async_trait]
pub trait ExpenseService: Send + Sync {
    async fn record_expense(&self, actor: Actor, command: RecordExpenseCommand)
        -> OrderResult<Expense>;

    async fn list_expenses(&self, rab_id: Uuid) -> OrderResult<Vec<Expense>>;

    async fn total_actual(&self, rab_id: Uuid) -> OrderResult<i64>;

    async fn reconcile(&self, rab_id: Uuid) -> OrderResult<Reconciliation>;
}
