use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    command::AttachDocumentationCommand,
    exception::OrderResult,
    model::{
        entity::Documentation,
        vo::{Actor, DocumentationFilter},
    },
};

#[async_trait]
pub trait DocumentationService: Send + Sync {
    /// Writes the blob, then the record.
    async fn attach(
        &self,
        actor: Actor,
        command: AttachDocumentationCommand,
    ) -> OrderResult<Documentation>;

    async fn list_by_order(
        &self,
        order_id: Uuid,
        filter: DocumentationFilter,
    ) -> OrderResult<Vec<Documentation>>;

    /// Deletes the blob, then the record.
    async fn remove(&self, id: Uuid, actor: Actor) -> OrderResult<()>;
}
