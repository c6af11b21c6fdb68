mod assignment;
mod documentation;
mod expense;
mod lifecycle;
mod query;
mod rab;

#[rustfmt::skip]
pub use {
    assignment::AssignmentServiceImpl,
    documentation::DocumentationServiceImpl,
    expense::ExpenseServiceImpl,
    lifecycle::OrderLifecycleServiceImpl,
    query::OrderQueryServiceImpl,
    rab::RabServiceImpl,
};
