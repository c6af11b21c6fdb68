mod assignment;
mod documentation;
mod expense;
mod order;
mod personnel;
mod rab;

use std::sync::atomic::{AtomicU64, Ordering};

use architecture::{AggregateRoot, RepositoryError};
use dashmap::{mapref::entry::Entry, DashMap};
use domain_order::model::entity::{
    Assignment, Documentation, Expense, Order, Personnel, Rab,
};
use uuid::Uuid;

/// Every order repository backed by process memory.
///
/// Writes apply immediately, so `save_changed` is a no-op. Listings come back
/// in insertion order.
pub struct MemoryRepository {
    orders: Table<Order>,
    /// Keyed by order id; one entry lock covers a whole crew change.
    assignments: DashMap<Uuid, Vec<Assignment>>,
    personnel: Table<Personnel>,
    rabs: Table<Rab>,
    expenses: Table<Expense>,
    documentation: Table<Documentation>,
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self {
            orders: Table::new("order"),
            assignments: DashMap::new(),
            personnel: Table::new("personnel"),
            rabs: Table::new("rab"),
            expenses: Table::new("expense"),
            documentation: Table::new("documentation"),
        }
    }
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a roster entry.
    pub fn register_personnel(&self, personnel: Personnel) {
        self.personnel.upsert(personnel);
    }
}

/// Insertion-ordered map of aggregates.
struct Table<T> {
    entity: &'static str,
    rows: DashMap<Uuid, (u64, T)>,
    sequence: AtomicU64,
}

impl<T> Table<T>
where
    T: AggregateRoot + Clone,
{
    fn new(entity: &'static str) -> Self {
        Self {
            entity,
            rows: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    fn get(&self, id: Uuid) -> anyhow::Result<T> {
        self.rows
            .get(&id)
            .map(|el| el.value().1.clone())
            .ok_or_else(|| RepositoryError::not_found(self.entity, id))
    }

    fn list(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let mut rows = self
            .rows
            .iter()
            .filter(|el| predicate(&el.value().1))
            .map(|el| el.value().clone())
            .collect::<Vec<_>>();
        rows.sort_by_key(|(sequence, _)| *sequence);
        rows.into_iter().map(|(_, el)| el).collect()
    }

    fn insert(&self, entity: &T) -> anyhow::Result<Uuid> {
        let id = entity.id();
        match self.rows.entry(id) {
            Entry::Occupied(_) => anyhow::bail!("{} {id} already exists", self.entity),
            Entry::Vacant(vacant) => {
                vacant.insert((self.next_sequence(), entity.clone()));
                Ok(id)
            }
        }
    }

    fn update(&self, entity: &T) -> anyhow::Result<()> {
        let id = entity.id();
        let mut row = self
            .rows
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(self.entity, id))?;
        row.1 = entity.clone();
        Ok(())
    }

    fn upsert(&self, entity: T) {
        let sequence = self.next_sequence();
        self.rows
            .entry(entity.id())
            .and_modify(|el| el.1 = entity.clone())
            .or_insert((sequence, entity));
    }

    fn remove(&self, id: Uuid) -> anyhow::Result<()> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(self.entity, id))
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use domain_order::model::entity::Personnel;

    use super::*;

    fn personnel(name: &str) -> Personnel {
        Personnel {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            skill: "Plumber".to_owned(),
        }
    }

    #[test]
    fn listing_keeps_insertion_order() {
        let table = Table::new("personnel");
        let crew = ["Budi", "Sari", "Agus", "Wati"].map(personnel);
        for el in &crew {
            table.insert(el).unwrap();
        }
        assert_eq!(table.list(|_| true), crew.to_vec());
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let table = Table::new("personnel");
        let budi = personnel("Budi");
        table.insert(&budi).unwrap();
        assert!(table.insert(&budi).is_err());
    }

    #[test]
    fn missing_rows_are_not_found() {
        let table = Table::<Personnel>::new("personnel");
        let ghost = personnel("Ghost");
        let err = table.update(&ghost).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RepositoryError>(),
            Some(RepositoryError::NotFound { entity: "personnel", .. })
        ));
        assert!(table.remove(ghost.id).is_err());
    }
}
