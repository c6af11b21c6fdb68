use std::sync::Arc;

use domain_order::{
    exception::OrderResult,
    model::vo::Actor,
    repository::{BlobStore, IdentityProvider},
    service::{
        AssignmentService, DocumentationService, ExpenseService, OrderLifecycleService,
        OrderQueryService, RabService,
    },
};
use infrastructure_memory::{MemoryRepository, OpendalBlobStore, StaticIdentityProvider};
use service_order::{
    AssignmentServiceImpl, DocumentationServiceImpl, ExpenseServiceImpl,
    OrderLifecycleServiceImpl, OrderQueryServiceImpl, RabServiceImpl,
};
use uuid::Uuid;

use crate::config::{BlobConfig, SystemConfig};

/// Every order service, sharing one repository and blob store.
#[derive(Clone)]
pub struct ServiceProvider {
    pub lifecycle: Arc<dyn OrderLifecycleService>,
    pub assignment: Arc<dyn AssignmentService>,
    pub rab: Arc<dyn RabService>,
    pub expense: Arc<dyn ExpenseService>,
    pub documentation: Arc<dyn DocumentationService>,
    pub query: Arc<dyn OrderQueryService>,
    identity: Arc<dyn IdentityProvider>,
}

impl ServiceProvider {
    pub fn build(config: &SystemConfig) -> anyhow::Result<Self> {
        let repo = Arc::new(MemoryRepository::new());
        for personnel in &config.personnel {
            repo.register_personnel(personnel.clone());
        }
        let identity = StaticIdentityProvider::new();
        for actor in &config.principals {
            identity.register(*actor);
        }
        let blob_store: Arc<dyn BlobStore> = Arc::new(match &config.blob {
            BlobConfig::Memory => OpendalBlobStore::memory()?,
            BlobConfig::Fs { root } => OpendalBlobStore::fs(root)?,
        });
        tracing::debug!(
            personnel = config.personnel.len(),
            principals = config.principals.len(),
            "seed data loaded"
        );

        Ok(Self {
            lifecycle: Arc::new(
                OrderLifecycleServiceImpl::builder()
                    .order_repo(repo.clone())
                    .assignment_repo(repo.clone())
                    .build(),
            ),
            assignment: Arc::new(
                AssignmentServiceImpl::builder()
                    .order_repo(repo.clone())
                    .assignment_repo(repo.clone())
                    .personnel_repo(repo.clone())
                    .build(),
            ),
            rab: Arc::new(
                RabServiceImpl::builder().order_repo(repo.clone()).rab_repo(repo.clone()).build(),
            ),
            expense: Arc::new(
                ExpenseServiceImpl::builder()
                    .rab_repo(repo.clone())
                    .expense_repo(repo.clone())
                    .build(),
            ),
            documentation: Arc::new(
                DocumentationServiceImpl::builder()
                    .order_repo(repo.clone())
                    .documentation_repo(repo.clone())
                    .blob_store(blob_store)
                    .build(),
            ),
            query: Arc::new(
                OrderQueryServiceImpl::builder()
                    .order_repo(repo.clone())
                    .assignment_repo(repo.clone())
                    .rab_repo(repo.clone())
                    .expense_repo(repo.clone())
                    .documentation_repo(repo)
                    .build(),
            ),
            identity: Arc::new(identity),
        })
    }

    /// Resolves an authenticated principal into the actor passed to services.
    pub async fn actor(&self, principal_id: Uuid) -> OrderResult<Actor> {
        Ok(self.identity.resolve(principal_id).await?)
    }
}
