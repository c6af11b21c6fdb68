mod assignment;
mod documentation;
mod expense;
mod lifecycle;
mod query;
mod rab;

#[rustfmt::skip]
pub use {
    assignment::AssignmentService,
    documentation::DocumentationService,
    expense::ExpenseService,
    lifecycle::OrderLifecycleService,
    query::OrderQueryService,
    rab::RabService,
};
