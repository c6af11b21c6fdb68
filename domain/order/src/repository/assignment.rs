use architecture::ReadOnlyRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Assignment;

#[async_trait]
pub trait AssignmentRepo: ReadOnlyRepository<Assignment> + Send + Sync {
    /// Assignments of an order in insertion order.
    async fn get_by_order(&self, order_id: Uuid) -> anyhow::Result<Vec<Assignment>>;

    /// Inserts `added` and removes the pairs for `removed` personnel ids as
    /// one atomic write; either everything applies or nothing does.
    async fn apply_changes(
        &self,
        order_id: Uuid,
        added: &[Assignment],
        removed: &[Uuid],
    ) -> anyhow::Result<()>;
}
