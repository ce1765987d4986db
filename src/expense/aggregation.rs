//! Sums expense amounts into groups for the dashboard charts and cards.
//!
//! Groups are returned in the order their key is first seen in the input so
//! that chart colours stay stable as records are appended.

use std::collections::HashMap;

use crate::expense::core::{Expense, ExpenseKind};

/// The field used to group expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    /// Group by the free text category.
    Category,
    /// Group by income/expense.
    Kind,
}

/// The total amount for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    /// The category or kind label.
    pub label: String,
    /// The sum of the amounts in the group.
    pub total: f64,
}

/// Sum the amounts of `expenses` grouped by `key`.
///
/// # Returns
/// One [GroupTotal] per distinct key in first-occurrence order, or an empty
/// vector for empty input.
pub fn aggregate_by(expenses: &[Expense], key: GroupKey) -> Vec<GroupTotal> {
    let mut totals: Vec<GroupTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        let label = match key {
            GroupKey::Category => expense.category.as_str(),
            GroupKey::Kind => expense.kind.label(),
        };

        match positions.get(label) {
            Some(&position) => totals[position].total += expense.amount,
            None => {
                positions.insert(label, totals.len());
                totals.push(GroupTotal {
                    label: label.to_owned(),
                    total: expense.amount,
                });
            }
        }
    }

    totals
}

/// The headline numbers shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Sum of all income amounts.
    pub total_income: f64,
    /// Sum of all expense amounts.
    pub total_expense: f64,
    /// Income minus expenses.
    pub balance: f64,
    /// The number of records.
    pub count: usize,
}

impl Summary {
    /// Calculate the summary for `expenses`.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let sum_kind = |kind: ExpenseKind| -> f64 {
            expenses
                .iter()
                .filter(|expense| expense.kind == kind)
                .map(|expense| expense.amount)
                .sum()
        };

        let total_income = sum_kind(ExpenseKind::Income);
        let total_expense = sum_kind(ExpenseKind::Expense);

        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            count: expenses.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::expense::core::{Expense, ExpenseKind, sample_expenses};

    use super::{GroupKey, GroupTotal, Summary, aggregate_by};

    fn total(groups: &[GroupTotal]) -> f64 {
        groups.iter().map(|group| group.total).sum()
    }

    #[test]
    fn groups_follow_first_occurrence_order() {
        let expenses = vec![
            Expense::new(1, 10.0, ExpenseKind::Expense, "Transport", date!(2025 - 01 - 01)),
            Expense::new(2, 20.0, ExpenseKind::Expense, "Food", date!(2025 - 01 - 02)),
            Expense::new(3, 5.0, ExpenseKind::Expense, "Transport", date!(2025 - 01 - 03)),
            Expense::new(4, 100.0, ExpenseKind::Income, "Alpha", date!(2025 - 01 - 04)),
        ];

        let got = aggregate_by(&expenses, GroupKey::Category);

        assert_eq!(
            got,
            vec![
                GroupTotal {
                    label: "Transport".to_owned(),
                    total: 15.0
                },
                GroupTotal {
                    label: "Food".to_owned(),
                    total: 20.0
                },
                GroupTotal {
                    label: "Alpha".to_owned(),
                    total: 100.0
                },
            ]
        );
    }

    #[test]
    fn groups_by_kind_label() {
        let got = aggregate_by(&sample_expenses(), GroupKey::Kind);

        assert_eq!(
            got,
            vec![
                GroupTotal {
                    label: "Income".to_owned(),
                    total: 1700.0
                },
                GroupTotal {
                    label: "Expense".to_owned(),
                    total: 280.0
                },
            ]
        );
    }

    #[test]
    fn empty_input_gives_no_groups() {
        assert!(aggregate_by(&[], GroupKey::Category).is_empty());
        assert!(aggregate_by(&[], GroupKey::Kind).is_empty());
    }

    #[test]
    fn group_sums_agree_with_total_amount() {
        let mut expenses = sample_expenses();
        expenses.push(Expense::new(
            6,
            0.25,
            ExpenseKind::Expense,
            "Food",
            date!(2025 - 02 - 01),
        ));
        let want: f64 = expenses.iter().map(|expense| expense.amount).sum();

        let by_category = total(&aggregate_by(&expenses, GroupKey::Category));
        let by_kind = total(&aggregate_by(&expenses, GroupKey::Kind));

        assert_eq!(by_category, want);
        assert_eq!(by_kind, want);
    }

    #[test]
    fn categories_are_not_canonicalised() {
        let expenses = vec![
            Expense::new(1, 1.0, ExpenseKind::Expense, "food", date!(2025 - 01 - 01)),
            Expense::new(2, 2.0, ExpenseKind::Expense, "Food", date!(2025 - 01 - 01)),
        ];

        assert_eq!(aggregate_by(&expenses, GroupKey::Category).len(), 2);
    }

    #[test]
    fn summary_of_salary_and_food() {
        let expenses = vec![
            Expense::new(1, 1200.0, ExpenseKind::Income, "Salary", date!(2025 - 01 - 15)),
            Expense::new(2, 50.0, ExpenseKind::Expense, "Food", date!(2025 - 01 - 16)),
        ];

        let summary = Summary::from_expenses(&expenses);

        assert_eq!(
            summary,
            Summary {
                total_income: 1200.0,
                total_expense: 50.0,
                balance: 1150.0,
                count: 2,
            }
        );
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        assert_eq!(Summary::from_expenses(&[]), Summary::default());
    }
}
