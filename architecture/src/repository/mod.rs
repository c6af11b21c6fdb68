//! Repository abstractions.
mod mutable_repository;
mod read_only_repository;

use uuid::Uuid;

#[rustfmt::skip]
pub use {
    mutable_repository::MutableRepository,
    read_only_repository::ReadOnlyRepository,
};

/// Database repository, readable and writable.
pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T>
where
    T: Send + Sync + crate::model::AggregateRoot + 'static,
{
}

/// Errors repositories raise that callers are expected to tell apart from
/// transport failures. Travels inside `anyhow::Error`; use
/// `err.downcast_ref::<RepositoryError>()` to recover it.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("No {entity} with id: {id}.")]
    NotFound { entity: &'static str, id: Uuid },
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: Uuid) -> anyhow::Error {
        Self::NotFound { entity, id }.into()
    }
}
