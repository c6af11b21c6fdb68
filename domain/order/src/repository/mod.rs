mod assignment;
mod blob;
mod documentation;
mod expense;
mod identity;
mod order;
mod personnel;
mod rab;

#[rustfmt::skip]
pub use {
    assignment::AssignmentRepo,
    blob::BlobStore,
    documentation::DocumentationRepo,
    expense::ExpenseRepo,
    identity::IdentityProvider,
    order::OrderRepo,
    personnel::PersonnelRepo,
    rab::RabRepo,
};
