use architecture::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_order::{model::entity::Expense, repository::ExpenseRepo};
use uuid::Uuid;

use super::MemoryRepository;

#[async_trait]
impl ExpenseRepo for MemoryRepository {
    async fn get_by_rab(&self, rab_id: Uuid) -> anyhow::Result<Vec<Expense>> {
        Ok(self.expenses.list(|el| el.rab_id == rab_id))
    }
}

#[async_trait]
impl ReadOnlyRepository<Expense> for MemoryRepository {
    async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Expense> {
        self.expenses.get(uuid)
    }
}

// Ledger rows are never rewritten; update and delete keep the bailing defaults.
#[async_trait]
impl MutableRepository<Expense> for MemoryRepository {
    async fn insert(&self, entity: &Expense) -> anyhow::Result<Uuid> {
        self.expenses.insert(entity)
    }
}

impl DBRepository<Expense> for MemoryRepository {}
