pub mod assignment;
pub mod documentation;
pub mod expense;
pub mod order;
pub mod personnel;
pub mod rab;

use architecture::aggregate_root;

#[rustfmt::skip]
pub use {
    assignment::Assignment,
    documentation::{Documentation, DocumentationKind},
    expense::Expense,
    order::{Order, OrderStatus, Schedule},
    personnel::Personnel,
    rab::{Rab, RabItem, RabStatus},
};

aggregate_root!(Order, Assignment, Personnel, Rab, Expense, Documentation);
