use architecture::RepositoryError;
use async_trait::async_trait;
use dashmap::DashMap;
use domain_order::{model::vo::Actor, repository::IdentityProvider};
use uuid::Uuid;

/// Principal table filled at start-up.
#[derive(Default)]
pub struct StaticIdentityProvider {
    actors: DashMap<Uuid, Actor>,
}

impl StaticIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, actor: Actor) {
        self.actors.insert(actor.id, actor);
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn resolve(&self, principal_id: Uuid) -> anyhow::Result<Actor> {
        self.actors
            .get(&principal_id)
            .map(|el| *el.value())
            .ok_or_else(|| RepositoryError::not_found("principal", principal_id))
    }
}
