use architecture::ReadOnlyRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Personnel;

/// Crew roster, owned outside the core.
#[async_trait]
pub trait PersonnelRepo: ReadOnlyRepository<Personnel> + Send + Sync {
    /// Resolves every id or fails on the first unknown one.
    async fn get_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Personnel>>;
}
