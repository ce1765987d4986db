//! The single owner of the in-memory expense list.
//!
//! Views only ever see snapshots of the list. Changes arrive as [Mutation]
//! intents which the ledger applies with the pure functions in
//! [crate::expense::mutation], swapping in the result on success.

use std::sync::{Mutex, MutexGuard};

use crate::{
    Error,
    expense::{
        core::{Expense, ExpenseId, sample_expenses},
        mutation::{
            DeleteExpensesForm, ExpenseForm, UpdateExpenseForm, create_expense, delete_expenses,
            update_expense,
        },
    },
};

/// A request to change the expense list.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Add a new expense.
    Create(ExpenseForm),
    /// Change an existing expense.
    Update(UpdateExpenseForm),
    /// Remove expenses by display ID.
    Delete(DeleteExpensesForm),
}

/// What a successful [Mutation] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// An expense was added with the given ID.
    Created(ExpenseId),
    /// The expense with the given display ID was changed.
    Updated(ExpenseId),
    /// This many expenses were removed.
    Deleted(usize),
}

impl MutationOutcome {
    /// The message to show the user.
    pub fn message(self) -> String {
        match self {
            MutationOutcome::Created(_) => "Expense added successfully".to_owned(),
            MutationOutcome::Updated(_) => "Expense updated successfully".to_owned(),
            MutationOutcome::Deleted(count) => format!("{count} expense(s) deleted successfully"),
        }
    }
}

/// Holds the current expense list and hands out IDs for new expenses.
#[derive(Debug, Clone)]
pub struct Ledger {
    expenses: Vec<Expense>,
    /// Only ever increases, so IDs are not reused after a delete.
    next_id: ExpenseId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Ledger {
    /// Create a ledger holding `expenses`.
    ///
    /// New expenses get IDs greater than any ID in `expenses`.
    pub fn new(expenses: Vec<Expense>) -> Self {
        let next_id = expenses
            .iter()
            .map(|expense| expense.id.max(expense.display_id))
            .max()
            .map_or(1, |id| id + 1);

        Self { expenses, next_id }
    }

    /// Create a ledger seeded with the sample expenses.
    pub fn with_sample_data() -> Self {
        Self::new(sample_expenses())
    }

    /// The current expenses in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// An owned copy of the current expenses for rendering outside the lock.
    pub fn snapshot(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Find an expense by its display ID.
    pub fn get(&self, display_id: ExpenseId) -> Option<&Expense> {
        self.expenses
            .iter()
            .find(|expense| expense.display_id == display_id)
    }

    /// Apply `mutation`, replacing the expense list if it succeeds.
    ///
    /// # Errors
    /// Returns the validation error from the mutation, in which case the
    /// ledger is unchanged.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationOutcome, Error> {
        let (next, outcome) = match mutation {
            Mutation::Create(form) => {
                let id = self.next_id;
                let next = create_expense(&self.expenses, id, &form)?;
                self.next_id += 1;
                (next, MutationOutcome::Created(id))
            }
            Mutation::Update(form) => {
                let (next, target) = update_expense(&self.expenses, &form)?;
                (next, MutationOutcome::Updated(target))
            }
            Mutation::Delete(form) => {
                let (next, count) = delete_expenses(&self.expenses, &form.ids)?;
                (next, MutationOutcome::Deleted(count))
            }
        };

        tracing::info!(
            "ledger updated: {outcome:?}, {} expense(s) remain",
            next.len()
        );
        self.expenses = next;

        Ok(outcome)
    }
}

/// Lock `ledger` for reading or applying a mutation.
///
/// # Errors
/// Returns [Error::LedgerLockError] if a thread panicked while holding the lock.
pub fn lock_ledger(ledger: &Mutex<Ledger>) -> Result<MutexGuard<'_, Ledger>, Error> {
    ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::{
        Error,
        expense::mutation::{DeleteExpensesForm, ExpenseForm, UpdateExpenseForm},
    };

    use super::{Ledger, Mutation, MutationOutcome, lock_ledger};

    fn create(amount: &str, category: &str) -> Mutation {
        Mutation::Create(ExpenseForm {
            amount: amount.to_owned(),
            kind: "Expense".to_owned(),
            category: category.to_owned(),
            date: "2025-02-01".to_owned(),
        })
    }

    fn delete(ids: &str) -> Mutation {
        Mutation::Delete(DeleteExpensesForm {
            ids: ids.to_owned(),
        })
    }

    #[test]
    fn new_ids_continue_after_largest_existing_id() {
        let mut ledger = Ledger::with_sample_data();

        let outcome = ledger.apply(create("10", "Books")).unwrap();

        assert_eq!(outcome, MutationOutcome::Created(6));
        assert_eq!(ledger.expenses().len(), 6);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut ledger = Ledger::with_sample_data();

        ledger.apply(delete("2")).unwrap();
        let outcome = ledger.apply(create("10", "Books")).unwrap();

        // The list has five records again but the new one must not be ID 5.
        assert_eq!(outcome, MutationOutcome::Created(6));
        let mut ids: Vec<_> = ledger.expenses().iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ledger.expenses().len());
    }

    #[test]
    fn failed_create_leaves_ledger_and_counter_unchanged() {
        let mut ledger = Ledger::with_sample_data();
        let before = ledger.snapshot();

        let result = ledger.apply(create("", "Food"));

        assert_eq!(result, Err(Error::MissingFields));
        assert_eq!(ledger.expenses(), before.as_slice());
        assert_eq!(
            ledger.apply(create("1", "Food")),
            Ok(MutationOutcome::Created(6))
        );
    }

    #[test]
    fn delete_reports_number_removed() {
        let mut ledger = Ledger::with_sample_data();

        assert_eq!(
            ledger.apply(delete("2,30")),
            Ok(MutationOutcome::Deleted(1))
        );
        assert!(ledger.get(2).is_none());
    }

    #[test]
    fn update_changes_the_selected_expense() {
        let mut ledger = Ledger::with_sample_data();

        let outcome = ledger
            .apply(Mutation::Update(UpdateExpenseForm {
                target: Some(3),
                amount: "35".to_owned(),
                kind: "Expense".to_owned(),
                category: "Bus".to_owned(),
                date: "2025-01-17".to_owned(),
            }))
            .unwrap();

        assert_eq!(outcome, MutationOutcome::Updated(3));
        let updated = ledger.get(3).unwrap();
        assert_eq!(updated.amount, 35.0);
        assert_eq!(updated.category, "Bus");
    }

    #[test]
    fn empty_ledger_starts_at_one() {
        let mut ledger = Ledger::default();

        assert_eq!(
            ledger.apply(create("1", "Food")),
            Ok(MutationOutcome::Created(1))
        );
    }

    #[test]
    fn poisoned_lock_is_an_error() {
        let ledger = Arc::new(Mutex::new(Ledger::default()));
        let poisoner = ledger.clone();

        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(lock_ledger(&ledger).err(), Some(Error::LedgerLockError));
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            MutationOutcome::Created(1).message(),
            "Expense added successfully"
        );
        assert_eq!(
            MutationOutcome::Deleted(2).message(),
            "2 expense(s) deleted successfully"
        );
    }
}
