use architecture::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::{
    model::{
        entity::{Assignment, Documentation, Expense, Order, Personnel, Rab},
        vo::Actor,
    },
    repository::{
        AssignmentRepo, BlobStore, DocumentationRepo, ExpenseRepo, IdentityProvider, OrderRepo,
        PersonnelRepo, RabRepo,
    },
};

mock! {
    pub OrderRepo {}
    #[async_trait]
    impl OrderRepo for OrderRepo {
        async fn get_by_customer(&self, customer_id: Uuid) -> anyhow::Result<Vec<Order>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Order> for OrderRepo {
        async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Order>;
        async fn get_all(&self) -> anyhow::Result<Vec<Order>>;
    }
    #[async_trait]
    impl MutableRepository<Order> for OrderRepo {
        async fn update(&self, entity: &Order) -> anyhow::Result<()>;
        async fn insert(&self, entity: &Order) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Order> for OrderRepo {}
}

mock! {
    pub AssignmentRepo {}
    #[async_trait]
    impl AssignmentRepo for AssignmentRepo {
        async fn get_by_order(&self, order_id: Uuid) -> anyhow::Result<Vec<Assignment>>;
        async fn apply_changes(
            &self,
            order_id: Uuid,
            added: &[Assignment],
            removed: &[Uuid],
        ) -> anyhow::Result<()>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Assignment> for AssignmentRepo {
        async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Assignment>;
    }
}

mock! {
    pub PersonnelRepo {}
    #[async_trait]
    impl PersonnelRepo for PersonnelRepo {
        async fn get_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Personnel>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Personnel> for PersonnelRepo {
        async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Personnel>;
    }
}

mock! {
    pub RabRepo {}
    #[async_trait]
    impl RabRepo for RabRepo {
        async fn get_by_order(&self, order_id: Uuid) -> anyhow::Result<Vec<Rab>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Rab> for RabRepo {
        async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Rab>;
    }
    #[async_trait]
    impl MutableRepository<Rab> for RabRepo {
        async fn update(&self, entity: &Rab) -> anyhow::Result<()>;
        async fn insert(&self, entity: &Rab) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Rab> for RabRepo {}
}

mock! {
    pub ExpenseRepo {}
    #[async_trait]
    impl ExpenseRepo for ExpenseRepo {
        async fn get_by_rab(&self, rab_id: Uuid) -> anyhow::Result<Vec<Expense>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Expense> for ExpenseRepo {
        async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Expense>;
    }
    #[async_trait]
    impl MutableRepository<Expense> for ExpenseRepo {
        async fn insert(&self, entity: &Expense) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Expense> for ExpenseRepo {}
}

mock! {
    pub DocumentationRepo {}
    #[async_trait]
    impl DocumentationRepo for DocumentationRepo {
        async fn get_by_order(&self, order_id: Uuid) -> anyhow::Result<Vec<Documentation>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Documentation> for DocumentationRepo {
        async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Documentation>;
    }
    #[async_trait]
    impl MutableRepository<Documentation> for DocumentationRepo {
        async fn insert(&self, entity: &Documentation) -> anyhow::Result<Uuid>;
        async fn delete_by_id(&self, uuid: Uuid) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Documentation> for DocumentationRepo {}
}

mock! {
    pub BlobStore {}
    #[async_trait]
    impl BlobStore for BlobStore {
        async fn put(&self, bytes: &[u8], path: &str) -> anyhow::Result<String>;
        async fn delete(&self, locator: &str) -> anyhow::Result<()>;
    }
}

mock! {
    pub IdentityProvider {}
    #[async_trait]
    impl IdentityProvider for IdentityProvider {
        async fn resolve(&self, principal_id: Uuid) -> anyhow::Result<Actor>;
    }
}
