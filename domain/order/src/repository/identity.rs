use async_trait::async_trait;
use uuid::Uuid;

use crate::model::vo::Actor;

/// Resolves an authenticated principal to its role. Authentication itself
/// happens before the core is reached.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(&self, principal_id: Uuid) -> anyhow::Result<Actor>;
}
