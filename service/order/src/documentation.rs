use std::sync::Arc;

use architecture::ReadOnlyRepository;
use async_trait::async_trait;
use chrono::Utc;
use domain_order::{
    command::AttachDocumentationCommand,
    exception::{OrderException, OrderResult},
    model::{
        entity::{Documentation, DocumentationKind, Order},
        vo::{Actor, DocumentationFilter},
    },
    repository::{BlobStore, DocumentationRepo},
    service::DocumentationService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct DocumentationServiceImpl {
    order_repo: Arc<dyn ReadOnlyRepository<Order>>,
    documentation_repo: Arc<dyn DocumentationRepo>,
    blob_store: Arc<dyn BlobStore>,
}

#[async_trait]
impl DocumentationService for DocumentationServiceImpl {
    #[tracing::instrument(skip(self, command), fields(order_id = %command.order_id, caption = %command.caption))]
    async fn attach(
        &self,
        actor: Actor,
        command: AttachDocumentationCommand,
    ) -> OrderResult<Documentation> {
        let order = self.order_repo.get_by_id(command.order_id).await?;
        actor.ensure_staff_or_owner(order.customer_id, "attach documentation")?;
        if command.content.is_empty() {
            return Err(OrderException::invalid_argument("file is empty, no need to upload"));
        }
        let file_name = sanitize_file_name(&command.file_name)?;

        let id = Uuid::new_v4();
        let path = format!("orders/{}/{id}/{file_name}", order.id);
        let locator = self
            .blob_store
            .put(&command.content, &path)
            .await
            .map_err(|source| OrderException::StorageError { source })?;

        let documentation = Documentation {
            id,
            order_id: order.id,
            uploader_id: actor.id,
            locator,
            kind: command.kind.unwrap_or_else(|| DocumentationKind::classify(&command.caption)),
            caption: command.caption,
            created_at: Utc::now(),
        };
        if let Err(source) = self.insert(&documentation).await {
            // The blob stays behind; it is unreferenced and harmless.
            tracing::warn!(locator = %documentation.locator, "documentation record not saved, blob orphaned");
            return Err(OrderException::StorageError { source });
        }
        tracing::info!(documentation_id = %id, kind = %documentation.kind, "documentation attached");
        Ok(documentation)
    }

    async fn list_by_order(
        &self,
        order_id: Uuid,
        filter: DocumentationFilter,
    ) -> OrderResult<Vec<Documentation>> {
        let order = self.order_repo.get_by_id(order_id).await?;
        let mut documentation = self.documentation_repo.get_by_order(order.id).await?;
        documentation.retain(|el| filter.accepts(el.kind));
        documentation.sort_by_key(|el| el.created_at);
        Ok(documentation)
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: Uuid, actor: Actor) -> OrderResult<()> {
        let documentation = self.documentation_repo.get_by_id(id).await?;
        if !actor.is_staff() && actor.id != documentation.uploader_id {
            return Err(actor.unauthorized("remove documentation"));
        }
        self.blob_store
            .delete(&documentation.locator)
            .await
            .map_err(|source| OrderException::StorageError { source })?;
        self.documentation_repo.delete_by_id(id).await?;
        self.documentation_repo.save_changed().await?;
        Ok(())
    }
}

impl DocumentationServiceImpl {
    async fn insert(&self, documentation: &Documentation) -> anyhow::Result<()> {
        self.documentation_repo.insert(documentation).await?;
        self.documentation_repo.save_changed().await?;
        Ok(())
    }
}

/// Keeps the last path component so uploads cannot escape their order directory.
fn sanitize_file_name(file_name: &str) -> OrderResult<String> {
    let name = file_name.rsplit(|c| c == '/' || c == '\\').next().unwrap_or_default().trim();
    if name.is_empty() || name == "." || name == ".." {
        return Err(OrderException::invalid_argument(format!(
            "invalid file name: {file_name:?}"
        )));
    }
    Ok(name.to_owned())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain_order::{
        mock::{MockBlobStore, MockDocumentationRepo},
        model::entity::{OrderStatus, Schedule},
    };

    use super::*;

    struct OrderStub(Order);

    #[async_trait]
    impl ReadOnlyRepository<Order> for OrderStub {
        async fn get_by_id(&self, _uuid: Uuid) -> anyhow::Result<Order> {
            Ok(self.0.clone())
        }
    }

    fn order() -> Order {
        let now = Utc::now();
        Order {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            category: "Electrical".to_owned(),
            description: "Ganti stop kontak".to_owned(),
            address: "Jl. Mawar 2".to_owned(),
            schedule: Schedule {
                date: NaiveDate::from_ymd_opt(2026, 10, 30).unwrap(),
                time_slot: "15:00 - 17:00".to_owned(),
            },
            declared_budget: "Rp 500,000".to_owned(),
            status: OrderStatus::Done,
            progress: 100,
            time_estimate: Some("1 Hari".to_owned()),
            cancel_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn command(order_id: Uuid) -> AttachDocumentationCommand {
        AttachDocumentationCommand {
            order_id,
            file_name: "../../etc/bukti.jpg".to_owned(),
            content: b"jpeg".to_vec(),
            caption: "Bukti Pembayaran QRIS".to_owned(),
            kind: None,
        }
    }

    #[test]
    fn file_names_stay_inside_the_order() {
        assert_eq!(sanitize_file_name("../../etc/passwd").unwrap(), "passwd");
        assert_eq!(sanitize_file_name("C:\\foto\\progress.png").unwrap(), "progress.png");
        assert!(sanitize_file_name("uploads/").is_err());
        assert!(sanitize_file_name("..").is_err());
    }

    #[tokio::test]
    async fn failed_record_write_leaves_only_the_blob() {
        let order = order();
        let order_id = order.id;
        let customer = Actor::customer(order.customer_id);
        let mut blob_store = MockBlobStore::new();
        blob_store
            .expect_put()
            .withf(move |_, path| path.starts_with(&format!("orders/{order_id}/")) && path.ends_with("/bukti.jpg"))
            .times(1)
            .returning(|_, path| Ok(format!("memory://{path}")));
        blob_store.expect_delete().never();
        let mut documentation_repo = MockDocumentationRepo::new();
        documentation_repo
            .expect_insert()
            .withf(|doc| doc.kind == DocumentationKind::PaymentProof)
            .returning(|_| Err(anyhow::anyhow!("disk full")));

        let service = DocumentationServiceImpl::builder()
            .order_repo(Arc::new(OrderStub(order)))
            .documentation_repo(Arc::new(documentation_repo))
            .blob_store(Arc::new(blob_store))
            .build();
        let err = service.attach(customer, command(order_id)).await.unwrap_err();
        assert!(matches!(err, OrderException::StorageError { .. }));
    }

    #[tokio::test]
    async fn failed_blob_delete_keeps_the_record() {
        let order = order();
        let documentation = Documentation {
            id: Uuid::new_v4(),
            order_id: order.id,
            uploader_id: order.customer_id,
            locator: "memory://orders/x".to_owned(),
            caption: "Foto progress".to_owned(),
            kind: DocumentationKind::ProgressPhoto,
            created_at: Utc::now(),
        };
        let doc_id = documentation.id;
        let uploader = Actor::customer(order.customer_id);
        let mut documentation_repo = MockDocumentationRepo::new();
        documentation_repo.expect_get_by_id().returning(move |_| Ok(documentation.clone()));
        documentation_repo.expect_delete_by_id().never();
        let mut blob_store = MockBlobStore::new();
        blob_store
            .expect_delete()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("bucket unavailable")));

        let service = DocumentationServiceImpl::builder()
            .order_repo(Arc::new(OrderStub(order)))
            .documentation_repo(Arc::new(documentation_repo))
            .blob_store(Arc::new(blob_store))
            .build();
        let err = service.remove(doc_id, uploader).await.unwrap_err();
        assert!(matches!(err, OrderException::StorageError { .. }));
    }

    #[tokio::test]
    async fn other_customers_cannot_attach() {
        let order = order();
        let order_id = order.id;
        let mut blob_store = MockBlobStore::new();
        blob_store.expect_put().never();
        let service = DocumentationServiceImpl::builder()
            .order_repo(Arc::new(OrderStub(order)))
            .documentation_repo(Arc::new(MockDocumentationRepo::new()))
            .blob_store(Arc::new(blob_store))
            .build();
        let err = service
            .attach(Actor::customer(Uuid::new_v4()), command(order_id))
            .await
            .unwrap_err();
        assert!(matches!(err, OrderException::Unauthorized { .. }));
    }
}
