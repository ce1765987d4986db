//! Defines the core data model for expenses and the sample records used to
//! seed a new ledger.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{
    Date,
    macros::{date, format_description},
};

use crate::Error;

/// The integer type used for expense IDs.
pub type ExpenseId = u64;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseKind {
    /// Money that was earned, e.g. a salary payment.
    Income,
    /// Money that was spent, e.g. groceries.
    Expense,
}

impl ExpenseKind {
    /// The label shown to the user, e.g. "Income".
    pub fn label(self) -> &'static str {
        match self {
            ExpenseKind::Income => "Income",
            ExpenseKind::Expense => "Expense",
        }
    }
}

impl Display for ExpenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(ExpenseKind::Income),
            "expense" => Ok(ExpenseKind::Expense),
            _ => Err(Error::InvalidKind(s.to_owned())),
        }
    }
}

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID assigned by the ledger when the expense was created.
    pub id: ExpenseId,
    /// The ID shown to the user. Set equal to `id` on creation.
    pub display_id: ExpenseId,
    /// How much money was earned or spent.
    ///
    /// Whether this counts towards income or expenses is decided by `kind`,
    /// not the sign of the amount.
    pub amount: f64,
    /// Whether the amount was earned or spent.
    pub kind: ExpenseKind,
    /// A free text label, e.g. "Food".
    pub category: String,
    /// When the expense happened.
    pub date: Date,
}

impl Expense {
    /// Create a new expense whose display ID is the same as its ID.
    pub fn new(id: ExpenseId, amount: f64, kind: ExpenseKind, category: &str, date: Date) -> Self {
        Self {
            id,
            display_id: id,
            amount,
            kind,
            category: category.to_owned(),
            date,
        }
    }

    /// The amount as plain text without currency formatting, e.g. "1200" or "12.5".
    pub fn amount_text(&self) -> String {
        self.amount.to_string()
    }
}

/// Parse user supplied text as an amount of money.
///
/// # Errors
/// Returns [Error::MissingFields] if `text` is blank and [Error::InvalidAmount]
/// if it is not a finite number.
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    let text = text.trim();

    if text.is_empty() {
        return Err(Error::MissingFields);
    }

    match text.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}

/// Parse a date in the `YYYY-MM-DD` format sent by date inputs.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is blank or not a calendar date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    let text = text.trim();

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// The records a new ledger starts with.
pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::new(1, 1200.0, ExpenseKind::Income, "Salary", date!(2025 - 01 - 15)),
        Expense::new(2, 50.0, ExpenseKind::Expense, "Food", date!(2025 - 01 - 16)),
        Expense::new(3, 30.0, ExpenseKind::Expense, "Transport", date!(2025 - 01 - 17)),
        Expense::new(4, 200.0, ExpenseKind::Expense, "Shopping", date!(2025 - 01 - 18)),
        Expense::new(5, 500.0, ExpenseKind::Income, "Freelance", date!(2025 - 01 - 20)),
    ]
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use time::macros::date;

    use super::{ExpenseKind, parse_amount, parse_date, sample_expenses};

    #[test]
    fn parses_kind_case_insensitively() {
        assert_eq!("Income".parse::<ExpenseKind>(), Ok(ExpenseKind::Income));
        assert_eq!("expense".parse::<ExpenseKind>(), Ok(ExpenseKind::Expense));
        assert_eq!(
            "refund".parse::<ExpenseKind>(),
            Err(Error::InvalidKind("refund".to_owned()))
        );
    }

    #[test]
    fn parse_amount_rejects_blank_and_garbage() {
        assert_eq!(parse_amount("  "), Err(Error::MissingFields));
        assert_eq!(
            parse_amount("twelve"),
            Err(Error::InvalidAmount("twelve".to_owned()))
        );
        assert_eq!(
            parse_amount("inf"),
            Err(Error::InvalidAmount("inf".to_owned()))
        );
        assert_eq!(parse_amount(" 12.50 "), Ok(12.5));
        assert_eq!(parse_amount("-3"), Ok(-3.0));
    }

    #[test]
    fn parse_date_accepts_date_input_values_only() {
        assert_eq!(parse_date("2025-01-15"), Ok(date!(2025 - 01 - 15)));
        assert_eq!(parse_date(""), Err(Error::InvalidDate(String::new())));
        assert_eq!(
            parse_date("2025-02-30"),
            Err(Error::InvalidDate("2025-02-30".to_owned()))
        );
        assert_eq!(
            parse_date("15/01/2025"),
            Err(Error::InvalidDate("15/01/2025".to_owned()))
        );
    }

    #[test]
    fn amount_text_matches_plain_number_formatting() {
        let expenses = sample_expenses();

        assert_eq!(expenses[0].amount_text(), "1200");

        let mut expense = expenses[1].clone();
        expense.amount = 12.5;
        assert_eq!(expense.amount_text(), "12.5");
    }

    #[test]
    fn sample_ids_are_unique_and_match_display_ids() {
        let expenses = sample_expenses();

        for (index, expense) in expenses.iter().enumerate() {
            assert_eq!(expense.id, index as u64 + 1);
            assert_eq!(expense.id, expense.display_id);
        }
    }
}
