use architecture::ReadOnlyRepository;
use async_trait::async_trait;
use domain_order::{model::entity::Personnel, repository::PersonnelRepo};
use uuid::Uuid;

use super::MemoryRepository;

#[async_trait]
impl PersonnelRepo for MemoryRepository {
    async fn get_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Personnel>> {
        ids.iter().map(|id| self.personnel.get(*id)).collect()
    }
}

#[async_trait]
impl ReadOnlyRepository<Personnel> for MemoryRepository {
    async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Personnel> {
        self.personnel.get(uuid)
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Personnel>> {
        Ok(self.personnel.list(|_| true))
    }
}
