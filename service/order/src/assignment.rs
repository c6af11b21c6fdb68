use std::{collections::HashSet, sync::Arc};

use architecture::ReadOnlyRepository;
use async_trait::async_trait;
use chrono::Utc;
use domain_order::{
    exception::{OrderException, OrderResult},
    model::{
        entity::{Assignment, Order, OrderStatus},
        vo::Actor,
    },
    repository::{AssignmentRepo, PersonnelRepo},
    service::AssignmentService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct AssignmentServiceImpl {
    order_repo: Arc<dyn ReadOnlyRepository<Order>>,
    assignment_repo: Arc<dyn AssignmentRepo>,
    personnel_repo: Arc<dyn PersonnelRepo>,
}

#[async_trait]
impl AssignmentService for AssignmentServiceImpl {
    #[tracing::instrument(skip(self))]
    async fn replace_assignments(
        &self,
        order_id: Uuid,
        actor: Actor,
        personnel_ids: &[Uuid],
    ) -> OrderResult<Vec<Assignment>> {
        actor.ensure_staff("assign personnel")?;
        let order = self.order_repo.get_by_id(order_id).await?;
        order.ensure_mutable()?;

        let mut seen = HashSet::new();
        let target = personnel_ids.iter().copied().filter(|el| seen.insert(*el)).collect::<Vec<_>>();
        let current = self.assignment_repo.get_by_order(order_id).await?;
        let current_ids = current.iter().map(|el| el.personnel_id).collect::<HashSet<_>>();

        let to_add = target.iter().copied().filter(|el| !current_ids.contains(el)).collect::<Vec<_>>();
        let to_remove = current
            .iter()
            .map(|el| el.personnel_id)
            .filter(|el| !seen.contains(el))
            .collect::<Vec<_>>();
        if to_add.is_empty() && to_remove.is_empty() {
            return Ok(sorted(current));
        }

        let roster = if to_add.is_empty() {
            vec![]
        } else {
            self.personnel_repo.get_by_ids(&to_add).await?
        };
        let now = Utc::now();
        let added = to_add
            .iter()
            .map(|id| {
                roster
                    .iter()
                    .find(|el| el.id == *id)
                    .map(|personnel| Assignment::snapshot(order_id, personnel, now))
                    .ok_or(OrderException::NotFound {
                        entity: "personnel",
                        id: *id,
                    })
            })
            .collect::<OrderResult<Vec<_>>>()?;

        if target.is_empty() && order.status == OrderStatus::Working {
            tracing::warn!(%order_id, "every crew member removed from a working order");
        }
        self.assignment_repo.apply_changes(order_id, &added, &to_remove).await?;
        tracing::info!(
            %order_id,
            added = added.len(),
            removed = to_remove.len(),
            "assignments replaced"
        );
        self.list_assignments(order_id).await
    }

    async fn list_assignments(&self, order_id: Uuid) -> OrderResult<Vec<Assignment>> {
        let order = self.order_repo.get_by_id(order_id).await?;
        Ok(sorted(self.assignment_repo.get_by_order(order.id).await?))
    }
}

/// Stable, so ties keep the repository's insertion order.
fn sorted(mut assignments: Vec<Assignment>) -> Vec<Assignment> {
    assignments.sort_by_key(|el| el.assigned_at);
    assignments
}
