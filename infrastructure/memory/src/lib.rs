//! In-process adapters for the order domain: repositories kept in memory,
//! blob storage through opendal, and a static identity table.

mod blob;
mod identity;
mod repository;

#[rustfmt::skip]
pub use {
    blob::OpendalBlobStore,
    identity::StaticIdentityProvider,
    repository::MemoryRepository,
};
