//! Building blocks shared by the domain crates: aggregate roots and the
//! repository abstractions their services are written against.

pub mod model;
pub mod repository;

#[rustfmt::skip]
pub use {
    model::AggregateRoot,
    repository::{DBRepository, MutableRepository, ReadOnlyRepository, RepositoryError},
};

#[doc(hidden)]
pub mod __private {
    pub use uuid::Uuid;
}
