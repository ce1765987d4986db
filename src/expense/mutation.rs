//! Pure functions that compute the next list of expenses for a create, update
//! or delete request.
//!
//! Each function either returns the full replacement list or an error, in
//! which case the caller keeps the current list.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, de};

use crate::{
    Error,
    expense::core::{Expense, ExpenseId, ExpenseKind, parse_amount, parse_date},
};

/// The form data for creating an expense.
///
/// Fields are kept as the submitted text so that bad input is reported as an
/// alert instead of being rejected by the extractor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseForm {
    /// The amount as typed by the user.
    #[serde(default)]
    pub amount: String,
    /// "Income" or "Expense".
    #[serde(default)]
    pub kind: String,
    /// The category label.
    #[serde(default)]
    pub category: String,
    /// When the expense happened, as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
}

/// The form data for updating an expense.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateExpenseForm {
    /// The display ID of the expense to update, `None` if nothing was selected.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub target: Option<ExpenseId>,
    /// The new amount as typed by the user.
    #[serde(default)]
    pub amount: String,
    /// The new kind, "Income" or "Expense".
    #[serde(default)]
    pub kind: String,
    /// The new category label.
    #[serde(default)]
    pub category: String,
    /// The new date, as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
}

/// The form data for deleting expenses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteExpensesForm {
    /// Comma separated display IDs, e.g. "1, 2,3".
    #[serde(default)]
    pub ids: String,
}

/// Deserialize an optional form value, treating an empty string as `None`.
///
/// Select inputs with a placeholder option submit an empty string when
/// nothing has been chosen.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let text = Option::<String>::deserialize(deserializer)?;

    match text.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Append a new expense with the ID `id` to `expenses`.
///
/// # Errors
/// Returns [Error::MissingFields] if the amount or category is blank,
/// [Error::InvalidAmount] if the amount is not a number, [Error::InvalidKind]
/// for an unknown kind and [Error::InvalidDate] for a blank or malformed date.
pub fn create_expense(
    expenses: &[Expense],
    id: ExpenseId,
    form: &ExpenseForm,
) -> Result<Vec<Expense>, Error> {
    let category = form.category.trim();

    if form.amount.trim().is_empty() || category.is_empty() {
        return Err(Error::MissingFields);
    }

    let amount = parse_amount(&form.amount)?;
    let kind: ExpenseKind = form.kind.parse()?;
    let date = parse_date(&form.date)?;

    let mut next = expenses.to_vec();
    next.push(Expense::new(id, amount, kind, category, date));

    Ok(next)
}

/// Replace the amount, kind, category and date of the expense selected in `form`.
///
/// # Errors
/// Returns [Error::NoExpenseSelected] if no target was selected,
/// [Error::UpdateMissingExpense] if no expense has the target display ID, or
/// an amount, kind or date error if those fields cannot be parsed.
pub fn update_expense(
    expenses: &[Expense],
    form: &UpdateExpenseForm,
) -> Result<(Vec<Expense>, ExpenseId), Error> {
    let target = form.target.ok_or(Error::NoExpenseSelected)?;

    if !expenses.iter().any(|expense| expense.display_id == target) {
        return Err(Error::UpdateMissingExpense);
    }

    let amount = parse_amount(&form.amount)?;
    let kind: ExpenseKind = form.kind.parse()?;
    let date = parse_date(&form.date)?;
    let category = form.category.trim();

    let next = expenses
        .iter()
        .map(|expense| {
            if expense.display_id == target {
                Expense {
                    amount,
                    kind,
                    category: category.to_owned(),
                    date,
                    ..expense.clone()
                }
            } else {
                expense.clone()
            }
        })
        .collect();

    Ok((next, target))
}

/// Parse comma separated display IDs, skipping entries that are not numbers.
pub fn parse_ids(text: &str) -> Vec<ExpenseId> {
    text.split(',')
        .filter_map(|id| id.trim().parse().ok())
        .collect()
}

/// Remove every expense whose display ID appears in `ids_text`.
///
/// IDs that do not match an expense are ignored.
///
/// # Returns
/// The remaining expenses and how many were removed.
///
/// # Errors
/// Returns [Error::NoIdsEntered] if `ids_text` is blank.
pub fn delete_expenses(expenses: &[Expense], ids_text: &str) -> Result<(Vec<Expense>, usize), Error> {
    if ids_text.trim().is_empty() {
        return Err(Error::NoIdsEntered);
    }

    let ids = parse_ids(ids_text);
    let next: Vec<Expense> = expenses
        .iter()
        .filter(|expense| !ids.contains(&expense.display_id))
        .cloned()
        .collect();
    let removed = expenses.len() - next.len();

    Ok((next, removed))
}
