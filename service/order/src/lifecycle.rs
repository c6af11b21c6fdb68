use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_order::{
    command::SubmitOrderCommand,
    exception::{OrderException, OrderResult},
    model::{
        entity::{Order, OrderStatus},
        vo::Actor,
    },
    repository::{AssignmentRepo, OrderRepo},
    service::OrderLifecycleService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct OrderLifecycleServiceImpl {
    order_repo: Arc<dyn OrderRepo>,
    assignment_repo: Arc<dyn AssignmentRepo>,
}

#[async_trait]
impl OrderLifecycleService for OrderLifecycleServiceImpl {
    #[tracing::instrument(skip(self))]
    async fn submit(&self, actor: Actor, command: SubmitOrderCommand) -> OrderResult<Order> {
        actor.ensure_customer("submit an order")?;
        let SubmitOrderCommand {
            category,
            description,
            address,
            schedule,
            declared_budget,
        } = command;
        for (field, value) in [
            ("category", &category),
            ("description", &description),
            ("address", &address),
            ("time slot", &schedule.time_slot),
        ] {
            if value.trim().is_empty() {
                return Err(OrderException::invalid_argument(format!("{field} must not be empty")));
            }
        }

        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            customer_id: actor.id,
            category: category.trim().to_owned(),
            description: description.trim().to_owned(),
            address: address.trim().to_owned(),
            schedule,
            declared_budget: declared_budget.trim().to_owned(),
            status: OrderStatus::AwaitingValidation,
            progress: 0,
            time_estimate: None,
            cancel_reason: None,
            created_at: now,
            updated_at: now,
        };
        self.order_repo.insert(&order).await?;
        self.order_repo.save_changed().await?;
        tracing::info!(order_id = %order.id, category = %order.category, "order submitted");
        Ok(order)
    }

    #[tracing::instrument(skip(self))]
    async fn record_estimate(
        &self,
        order_id: Uuid,
        actor: Actor,
        estimate: &str,
    ) -> OrderResult<Order> {
        actor.ensure_staff("record a time estimate")?;
        let mut order = self.load(order_id).await?;
        order.record_estimate(estimate, Utc::now())?;
        self.persist(&order).await?;
        Ok(order)
    }

    #[tracing::instrument(skip(self))]
    async fn begin_work(&self, order_id: Uuid, actor: Actor) -> OrderResult<Order> {
        actor.ensure_staff("begin work")?;
        let mut order = self.load(order_id).await?;
        let crew = self.assignment_repo.get_by_order(order_id).await?;
        order.begin_work(crew.len(), Utc::now())?;
        self.persist(&order).await?;
        tracing::info!(%order_id, crew = crew.len(), "order is now being worked on");
        Ok(order)
    }

    #[tracing::instrument(skip(self))]
    async fn update_progress(
        &self,
        order_id: Uuid,
        actor: Actor,
        percent: i32,
    ) -> OrderResult<Order> {
        actor.ensure_staff("update progress")?;
        let mut order = self.load(order_id).await?;
        order.update_progress(percent, Utc::now())?;
        self.persist(&order).await?;
        if order.status == OrderStatus::Done {
            tracing::info!(%order_id, "order completed");
        }
        Ok(order)
    }

    #[tracing::instrument(skip(self))]
    async fn cancel(&self, order_id: Uuid, actor: Actor, reason: &str) -> OrderResult<Order> {
        let mut order = self.load(order_id).await?;
        actor.ensure_staff_or_owner(order.customer_id, "cancel the order")?;
        order.cancel(reason, Utc::now())?;
        self.persist(&order).await?;
        tracing::info!(%order_id, by = %actor.role, "order cancelled");
        Ok(order)
    }

    async fn get(&self, order_id: Uuid) -> OrderResult<Order> {
        self.load(order_id).await
    }
}

impl OrderLifecycleServiceImpl {
    async fn load(&self, order_id: Uuid) -> OrderResult<Order> {
        Ok(self.order_repo.get_by_id(order_id).await?)
    }

    async fn persist(&self, order: &Order) -> OrderResult<()> {
        self.order_repo.update(order).await?;
        self.order_repo.save_changed().await?;
        Ok(())
    }
}
