use architecture::DBRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Expense;

/// Append-only; implementations only need `insert` from [`DBRepository`].
#[async_trait]
pub trait ExpenseRepo: DBRepository<Expense> + Send + Sync {
    /// Expenses of a RAB in recording order.
    async fn get_by_rab(&self, rab_id: Uuid) -> anyhow::Result<Vec<Expense>>;
}
