use std::sync::Arc;

use architecture::ReadOnlyRepository;
use async_trait::async_trait;
use chrono::Utc;
use domain_order::{
    command::ProposeRabCommand,
    exception::{OrderException, OrderResult},
    model::{
        entity::{Order, OrderStatus, Rab, RabItem, RabStatus},
        vo::{Actor, RabDecision},
    },
    repository::RabRepo,
    service::RabService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct RabServiceImpl {
    order_repo: Arc<dyn ReadOnlyRepository<Order>>,
    rab_repo: Arc<dyn RabRepo>,
}

#[async_trait]
impl RabService for RabServiceImpl {
    #[tracing::instrument(skip(self))]
    async fn propose(&self, actor: Actor, command: ProposeRabCommand) -> OrderResult<Rab> {
        actor.ensure_staff("propose a RAB")?;
        let order = self.order_repo.get_by_id(command.order_id).await?;
        order.ensure_mutable()?;
        if order.status != OrderStatus::AwaitingValidation {
            return Err(OrderException::invalid_transition("propose a RAB", order.status));
        }

        let existing = self.rab_repo.get_by_order(order.id).await?;
        if let Some(pending) = existing.iter().find(|el| el.status == RabStatus::Pending) {
            return Err(OrderException::precondition(format!(
                "RAB {} of order {} is still pending",
                pending.id, order.id
            )));
        }
        let supersedes = existing.iter().max_by_key(|el| el.created_at).map(|el| el.id);

        let rab = Rab::propose(
            order.id,
            actor.id,
            command.items,
            &command.rationale,
            supersedes,
            Utc::now(),
        )?;
        self.rab_repo.insert(&rab).await?;
        self.rab_repo.save_changed().await?;
        tracing::info!(rab_id = %rab.id, order_id = %order.id, total = rab.total_cost(), "RAB proposed");
        Ok(rab)
    }

    #[tracing::instrument(skip(self))]
    async fn decide(
        &self,
        rab_id: Uuid,
        approver: Actor,
        decision: RabDecision,
    ) -> OrderResult<Rab> {
        let mut rab = self.rab_repo.get_by_id(rab_id).await?;
        let order = self.order_repo.get_by_id(rab.order_id).await?;
        approver.ensure_admin_or_owner(order.customer_id, "decide on a RAB")?;
        if !rab.is_decided() {
            order.ensure_mutable()?;
        }
        rab.decide(approver.id, decision, Utc::now())?;
        self.rab_repo.update(&rab).await?;
        self.rab_repo.save_changed().await?;
        tracing::info!(%rab_id, status = %rab.status, by = %approver.role, "RAB decided");
        Ok(rab)
    }

    #[tracing::instrument(skip(self))]
    async fn edit_items(
        &self,
        rab_id: Uuid,
        actor: Actor,
        items: Vec<RabItem>,
    ) -> OrderResult<Rab> {
        actor.ensure_staff("edit RAB items")?;
        let mut rab = self.rab_repo.get_by_id(rab_id).await?;
        if !actor.is_admin() && rab.supervisor_id != actor.id {
            return Err(actor.unauthorized("edit another supervisor's RAB"));
        }
        let order = self.order_repo.get_by_id(rab.order_id).await?;
        if !rab.is_decided() {
            order.ensure_mutable()?;
        }
        rab.edit_items(items)?;
        self.rab_repo.update(&rab).await?;
        self.rab_repo.save_changed().await?;
        Ok(rab)
    }

    async fn get(&self, rab_id: Uuid) -> OrderResult<Rab> {
        Ok(self.rab_repo.get_by_id(rab_id).await?)
    }

    async fn list_by_order(&self, order_id: Uuid) -> OrderResult<Vec<Rab>> {
        let order = self.order_repo.get_by_id(order_id).await?;
        let mut rabs = self.rab_repo.get_by_order(order.id).await?;
        rabs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rabs)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain_order::{mock::MockRabRepo, model::entity::Schedule};

    use super::*;

    struct OrderStub(Order);

    #[async_trait]
    impl ReadOnlyRepository<Order> for OrderStub {
        async fn get_by_id(&self, _uuid: Uuid) -> anyhow::Result<Order> {
            Ok(self.0.clone())
        }
    }

    fn order(status: OrderStatus) -> Order {
        let now = Utc::now();
        Order {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            category: "Electrical".to_owned(),
            description: "Pasang instalasi baru".to_owned(),
            address: "Jl. Anggrek 9".to_owned(),
            schedule: Schedule {
                date: NaiveDate::from_ymd_opt(2026, 11, 10).unwrap(),
                time_slot: "10:00 - 12:00".to_owned(),
            },
            declared_budget: "Rp 5,000,000".to_owned(),
            status,
            progress: 0,
            time_estimate: None,
            cancel_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn items() -> Vec<RabItem> {
        vec![RabItem::new("Kabel", 10, 15_000), RabItem::new("MCB", 2, 50_000)]
    }

    fn service(order: Order, rab_repo: MockRabRepo) -> RabServiceImpl {
        RabServiceImpl::builder()
            .order_repo(Arc::new(OrderStub(order)))
            .rab_repo(Arc::new(rab_repo))
            .build()
    }

    #[tokio::test]
    async fn propose_links_the_previous_decision() {
        let order = order(OrderStatus::AwaitingValidation);
        let order_id = order.id;
        let supervisor = Actor::supervisor(Uuid::new_v4());
        let mut rejected =
            Rab::propose(order_id, supervisor.id, items(), "first try", None, Utc::now()).unwrap();
        rejected.decide(order.customer_id, RabDecision::Rejected, Utc::now()).unwrap();
        let rejected_id = rejected.id;

        let mut rab_repo = MockRabRepo::new();
        rab_repo.expect_get_by_order().returning(move |_| Ok(vec![rejected.clone()]));
        rab_repo
            .expect_insert()
            .withf(move |rab| rab.supersedes == Some(rejected_id) && rab.total_cost() == 250_000)
            .times(1)
            .returning(|rab| Ok(rab.id));
        rab_repo.expect_save_changed().returning(|| Ok(true));

        let command = ProposeRabCommand {
            order_id,
            items: items(),
            rationale: "second try".to_owned(),
        };
        let rab = service(order, rab_repo).propose(supervisor, command).await.unwrap();
        assert_eq!(rab.status, RabStatus::Pending);
        assert_eq!(rab.supervisor_id, supervisor.id);
    }

    #[tokio::test]
    async fn only_one_pending_proposal_per_order() {
        let order = order(OrderStatus::AwaitingValidation);
        let order_id = order.id;
        let supervisor = Actor::supervisor(Uuid::new_v4());
        let pending = Rab::propose(order_id, supervisor.id, items(), "", None, Utc::now()).unwrap();
        let mut rab_repo = MockRabRepo::new();
        rab_repo.expect_get_by_order().returning(move |_| Ok(vec![pending.clone()]));
        rab_repo.expect_insert().never();

        let command = ProposeRabCommand {
            order_id,
            items: items(),
            rationale: String::new(),
        };
        let err = service(order, rab_repo).propose(supervisor, command).await.unwrap_err();
        assert!(matches!(err, OrderException::PreconditionNotMet { .. }));
    }

    #[tokio::test]
    async fn propose_requires_awaiting_validation() {
        let supervisor = Actor::supervisor(Uuid::new_v4());
        for (status, locked) in [(OrderStatus::Working, false), (OrderStatus::Cancelled, true)] {
            let order = order(status);
            let command = ProposeRabCommand {
                order_id: order.id,
                items: items(),
                rationale: String::new(),
            };
            let err = service(order, MockRabRepo::new())
                .propose(supervisor, command)
                .await
                .unwrap_err();
            if locked {
                assert!(matches!(err, OrderException::OrderLocked { .. }));
            } else {
                assert!(matches!(err, OrderException::InvalidTransition { .. }));
            }
        }
    }

    #[tokio::test]
    async fn supervisors_cannot_approve() {
        let order = order(OrderStatus::AwaitingValidation);
        let supervisor = Actor::supervisor(Uuid::new_v4());
        let rab = Rab::propose(order.id, supervisor.id, items(), "", None, Utc::now()).unwrap();
        let rab_id = rab.id;
        let mut rab_repo = MockRabRepo::new();
        rab_repo.expect_get_by_id().returning(move |_| Ok(rab.clone()));
        rab_repo.expect_update().never();

        let err = service(order, rab_repo)
            .decide(rab_id, supervisor, RabDecision::Approved)
            .await
            .unwrap_err();
        assert!(matches!(err, OrderException::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn only_the_proposer_edits() {
        let order = order(OrderStatus::AwaitingValidation);
        let rab = Rab::propose(order.id, Uuid::new_v4(), items(), "", None, Utc::now()).unwrap();
        let rab_id = rab.id;
        let mut rab_repo = MockRabRepo::new();
        rab_repo.expect_get_by_id().returning(move |_| Ok(rab.clone()));
        rab_repo.expect_update().never();

        let err = service(order, rab_repo)
            .edit_items(rab_id, Actor::supervisor(Uuid::new_v4()), items())
            .await
            .unwrap_err();
        assert!(matches!(err, OrderException::Unauthorized { .. }));
    }
}
