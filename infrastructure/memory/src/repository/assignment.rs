use std::collections::HashSet;

use architecture::{RepositoryError, ReadOnlyRepository};
use async_trait::async_trait;
use domain_order::{model::entity::Assignment, repository::AssignmentRepo};
use uuid::Uuid;

use super::MemoryRepository;

#[async_trait]
impl AssignmentRepo for MemoryRepository {
    async fn get_by_order(&self, order_id: Uuid) -> anyhow::Result<Vec<Assignment>> {
        Ok(self.assignments.get(&order_id).map(|el| el.value().clone()).unwrap_or_default())
    }

    async fn apply_changes(
        &self,
        order_id: Uuid,
        added: &[Assignment],
        removed: &[Uuid],
    ) -> anyhow::Result<()> {
        let mut crew = self.assignments.entry(order_id).or_default();
        // Validate against the locked entry before touching it.
        let removed = removed.iter().copied().collect::<HashSet<_>>();
        let mut remaining = crew
            .iter()
            .map(|el| el.personnel_id)
            .filter(|el| !removed.contains(el))
            .collect::<HashSet<_>>();
        for assignment in added {
            if assignment.order_id != order_id {
                anyhow::bail!(
                    "assignment {} belongs to order {}, not {order_id}",
                    assignment.id,
                    assignment.order_id
                );
            }
            if !remaining.insert(assignment.personnel_id) {
                anyhow::bail!(
                    "personnel {} is already assigned to order {order_id}",
                    assignment.personnel_id
                );
            }
        }

        crew.retain(|el| !removed.contains(&el.personnel_id));
        crew.extend_from_slice(added);
        tracing::debug!(%order_id, size = crew.len(), "crew stored");
        Ok(())
    }
}

#[async_trait]
impl ReadOnlyRepository<Assignment> for MemoryRepository {
    async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Assignment> {
        self.assignments
            .iter()
            .find_map(|el| el.value().iter().find(|el| el.id == uuid).cloned())
            .ok_or_else(|| RepositoryError::not_found("assignment", uuid))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use domain_order::model::entity::Personnel;

    use super::*;

    fn personnel(name: &str) -> Personnel {
        Personnel {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            skill: "Carpenter".to_owned(),
        }
    }

    #[tokio::test]
    async fn rejected_change_leaves_the_crew_untouched() {
        let repo = MemoryRepository::new();
        let order_id = Uuid::new_v4();
        let (budi, sari) = (personnel("Budi"), personnel("Sari"));
        let first = Assignment::snapshot(order_id, &budi, Utc::now());
        repo.apply_changes(order_id, &[first.clone()], &[]).await.unwrap();

        let duplicate = Assignment::snapshot(order_id, &budi, Utc::now());
        let added = [Assignment::snapshot(order_id, &sari, Utc::now()), duplicate];
        assert!(repo.apply_changes(order_id, &added, &[]).await.is_err());
        assert_eq!(repo.get_by_order(order_id).await.unwrap(), vec![first]);
    }

    #[tokio::test]
    async fn swap_in_one_write() {
        let repo = MemoryRepository::new();
        let order_id = Uuid::new_v4();
        let (budi, sari) = (personnel("Budi"), personnel("Sari"));
        let first = Assignment::snapshot(order_id, &budi, Utc::now());
        repo.apply_changes(order_id, &[first.clone()], &[]).await.unwrap();

        // Re-adding someone removed in the same change is allowed.
        let again = Assignment::snapshot(order_id, &budi, Utc::now());
        let sari_row = Assignment::snapshot(order_id, &sari, Utc::now());
        repo.apply_changes(order_id, &[sari_row.clone(), again.clone()], &[budi.id])
            .await
            .unwrap();
        assert_eq!(repo.get_by_order(order_id).await.unwrap(), vec![sari_row, again.clone()]);
        let stored = ReadOnlyRepository::<Assignment>::get_by_id(&repo, again.id).await.unwrap();
        assert_eq!(stored, again);
    }
}
