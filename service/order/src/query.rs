use std::sync::Arc;

use async_trait::async_trait;
use domain_order::{
    exception::OrderResult,
    model::vo::{Actor, OrderDetail, OrderFilter, OrderSummary, Reconciliation, Role},
    repository::{AssignmentRepo, DocumentationRepo, ExpenseRepo, OrderRepo, RabRepo},
    service::OrderQueryService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct OrderQueryServiceImpl {
    order_repo: Arc<dyn OrderRepo>,
    assignment_repo: Arc<dyn AssignmentRepo>,
    rab_repo: Arc<dyn RabRepo>,
    expense_repo: Arc<dyn ExpenseRepo>,
    documentation_repo: Arc<dyn DocumentationRepo>,
}

#[async_trait]
impl OrderQueryService for OrderQueryServiceImpl {
    #[tracing::instrument(skip(self))]
    async fn get_orders_for_actor(
        &self,
        actor: Actor,
        filter: OrderFilter,
    ) -> OrderResult<Vec<OrderSummary>> {
        let mut orders = match actor.role {
            Role::Customer => self.order_repo.get_by_customer(actor.id).await?,
            Role::Supervisor | Role::Admin => self.order_repo.get_all().await?,
        };
        orders.retain(|el| filter.matches(el));
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tracing::debug!(count = orders.len(), "orders listed");
        Ok(orders.iter().map(OrderSummary::from).collect())
    }

    async fn get_order_detail(&self, order_id: Uuid) -> OrderResult<OrderDetail> {
        let order = self.order_repo.get_by_id(order_id).await?;
        let mut assignments = self.assignment_repo.get_by_order(order.id).await?;
        assignments.sort_by_key(|el| el.assigned_at);
        let rab = self
            .rab_repo
            .get_by_order(order.id)
            .await?
            .into_iter()
            .max_by_key(|el| el.created_at);
        let reconciliation = match &rab {
            Some(rab) => {
                let expenses = self.expense_repo.get_by_rab(rab.id).await?;
                Some(Reconciliation::of(rab, &expenses))
            }
            None => None,
        };
        let mut documentation = self.documentation_repo.get_by_order(order.id).await?;
        documentation.sort_by_key(|el| el.created_at);
        Ok(OrderDetail {
            order,
            assignments,
            rab,
            reconciliation,
            documentation,
        })
    }
}
