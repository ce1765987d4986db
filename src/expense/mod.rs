//! Expenses: the data model, the in-memory ledger, and the pages and
//! endpoints for viewing and changing them.

mod aggregation;
mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod delete_page;
mod edit_endpoint;
mod edit_page;
mod form;
mod ledger;
mod list_endpoint;
mod mutation;
mod query;
mod response;
mod table;

pub use self::core::{Expense, ExpenseKind};
pub use aggregation::{GroupKey, Summary, aggregate_by};
pub use create_endpoint::create_expense_endpoint;
pub use create_page::get_create_expense_modal;
pub use delete_endpoint::delete_expenses_endpoint;
pub use delete_page::get_delete_expense_modal;
pub use edit_endpoint::edit_expense_endpoint;
pub use edit_page::get_edit_expense_modal;
pub use ledger::{Ledger, lock_ledger};
pub use list_endpoint::list_expenses_endpoint;
pub use query::TableQuery;
pub use response::LedgerState;
pub use table::{expense_table_view, get_expense_table, table_controls_view};

#[cfg(test)]
pub use self::core::sample_expenses;
#[cfg(test)]
pub use ledger::Mutation;
#[cfg(test)]
pub use mutation::DeleteExpensesForm;
#[cfg(test)]
pub use query::{KindFilter, SortDirection, SortKey};
