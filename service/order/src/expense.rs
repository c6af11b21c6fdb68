use std::sync::Arc;

use architecture::ReadOnlyRepository;
use async_trait::async_trait;
use chrono::Utc;
use domain_order::{
    command::RecordExpenseCommand,
    exception::OrderResult,
    model::{
        entity::{Expense, Rab, RabStatus},
        vo::{total_spent, Actor, Reconciliation},
    },
    repository::ExpenseRepo,
    service::ExpenseService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct ExpenseServiceImpl {
    rab_repo: Arc<dyn ReadOnlyRepository<Rab>>,
    expense_repo: Arc<dyn ExpenseRepo>,
}

#[async_trait]
impl ExpenseService for ExpenseServiceImpl {
    #[tracing::instrument(skip(self))]
    async fn record_expense(
        &self,
        actor: Actor,
        command: RecordExpenseCommand,
    ) -> OrderResult<Expense> {
        actor.ensure_staff("record an expense")?;
        let rab = self.rab_repo.get_by_id(command.rab_id).await?;
        if rab.status != RabStatus::Approved {
            // Advisory ledger: recorded regardless of the decision.
            tracing::debug!(rab_id = %rab.id, status = %rab.status, "expense recorded against undecided or rejected RAB");
        }
        let expense = Expense::record(
            rab.id,
            actor.id,
            &command.name,
            command.quantity,
            command.unit_price,
            Utc::now(),
        )?;
        self.expense_repo.insert(&expense).await?;
        self.expense_repo.save_changed().await?;
        Ok(expense)
    }

    async fn list_expenses(&self, rab_id: Uuid) -> OrderResult<Vec<Expense>> {
        let rab = self.rab_repo.get_by_id(rab_id).await?;
        let mut expenses = self.expense_repo.get_by_rab(rab.id).await?;
        expenses.sort_by_key(|el| el.recorded_at);
        Ok(expenses)
    }

    async fn total_actual(&self, rab_id: Uuid) -> OrderResult<i64> {
        Ok(total_spent(&self.list_expenses(rab_id).await?))
    }

    async fn reconcile(&self, rab_id: Uuid) -> OrderResult<Reconciliation> {
        let rab = self.rab_repo.get_by_id(rab_id).await?;
        let expenses = self.expense_repo.get_by_rab(rab.id).await?;
        let reconciliation = Reconciliation::of(&rab, &expenses);
        if reconciliation.variance > 0 {
            tracing::info!(%rab_id, variance = reconciliation.variance, "actual spend exceeds the estimate");
        }
        Ok(reconciliation)
    }
}

#[cfg(test)]
mod tests {
    use architecture::RepositoryError;
    use domain_order::{
        exception::OrderException, mock::MockExpenseRepo, model::entity::RabItem,
    };

    use super::*;

    struct RabStub(Option<Rab>);

    #[async_trait]
    impl ReadOnlyRepository<Rab> for RabStub {
        async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Rab> {
            self.0.clone().ok_or_else(|| RepositoryError::not_found("rab", uuid))
        }
    }

    fn rab() -> Rab {
        Rab::propose(
            Uuid::new_v4(),
            Uuid::new_v4(),
            vec![RabItem::new("Semen", 5, 60_000)],
            "",
            None,
            Utc::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn pending_rab_still_accepts_expenses() {
        let rab = rab();
        let rab_id = rab.id;
        let mut expense_repo = MockExpenseRepo::new();
        expense_repo
            .expect_insert()
            .withf(|expense| expense.quantity == 6 && expense.unit_price == 65_000)
            .times(1)
            .returning(|expense| Ok(expense.id));
        expense_repo.expect_save_changed().returning(|| Ok(true));
        let service = ExpenseServiceImpl::builder()
            .rab_repo(Arc::new(RabStub(Some(rab))))
            .expense_repo(Arc::new(expense_repo))
            .build();

        let command = RecordExpenseCommand {
            rab_id,
            name: "Semen".to_owned(),
            quantity: 6,
            unit_price: 65_000,
        };
        let expense = service
            .record_expense(Actor::supervisor(Uuid::new_v4()), command)
            .await
            .unwrap();
        assert_eq!(expense.amount(), Some(390_000));
    }

    #[tokio::test]
    async fn unknown_rab_is_not_found() {
        let service = ExpenseServiceImpl::builder()
            .rab_repo(Arc::new(RabStub(None)))
            .expense_repo(Arc::new(MockExpenseRepo::new()))
            .build();
        let err = service.total_actual(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, OrderException::NotFound { entity: "rab", .. }));
    }
}
