//! Search, kind filtering and column sorting for the expense table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::expense::core::{Expense, ExpenseKind};

/// Restricts the table to one kind of expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    /// Show income and expenses.
    #[default]
    All,
    /// Show income only.
    Income,
    /// Show expenses only.
    Expense,
}

impl KindFilter {
    fn is_all(&self) -> bool {
        *self == KindFilter::All
    }

    fn matches(self, kind: ExpenseKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == ExpenseKind::Income,
            KindFilter::Expense => kind == ExpenseKind::Expense,
        }
    }

    /// The value used for this filter in query strings and form inputs.
    pub fn as_query_value(self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Income => "income",
            KindFilter::Expense => "expense",
        }
    }
}

/// A column of the expense table that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// The user-facing ID, compared numerically.
    Id,
    /// The date, compared chronologically.
    Date,
    /// The category, compared as text.
    Category,
    /// The kind label, compared as text.
    Kind,
    /// The amount, compared numerically.
    Amount,
}

impl SortKey {
    /// The value used for this key in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Date => "date",
            SortKey::Category => "category",
            SortKey::Kind => "kind",
            SortKey::Amount => "amount",
        }
    }
}

/// The order to sort a column in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// The value used for this direction in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// The active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// The column to sort by.
    pub key: SortKey,
    /// The order to sort in.
    pub direction: SortDirection,
}

impl SortState {
    /// The sort state after the user selects the column `key`.
    ///
    /// Selecting a new column sorts it ascending. Selecting the current column
    /// goes from ascending to descending, and from descending back to
    /// unsorted.
    pub fn cycle(current: Option<SortState>, key: SortKey) -> Option<SortState> {
        match current {
            Some(SortState {
                key: current_key,
                direction: SortDirection::Asc,
            }) if current_key == key => Some(SortState {
                key,
                direction: SortDirection::Desc,
            }),
            Some(SortState {
                key: current_key,
                direction: SortDirection::Desc,
            }) if current_key == key => None,
            _ => Some(SortState {
                key,
                direction: SortDirection::Asc,
            }),
        }
    }
}

/// The search, filter and sort options for the expense table.
///
/// Round-trips through URL query strings, e.g.
/// `?q=food&filter=expense&sort=amount&dir=desc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    /// Free text to search for in the category, kind and amount.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub q: String,
    /// Which kinds of expense to show.
    #[serde(default, skip_serializing_if = "KindFilter::is_all")]
    pub filter: KindFilter,
    /// The column to sort by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
    /// The direction to sort in, ascending if not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<SortDirection>,
}

impl TableQuery {
    /// The active sort, if any.
    pub fn sort_state(&self) -> Option<SortState> {
        self.sort.map(|key| SortState {
            key,
            direction: self.dir.unwrap_or(SortDirection::Asc),
        })
    }

    /// A copy of this query with the sort replaced by `sort`.
    pub fn with_sort(&self, sort: Option<SortState>) -> Self {
        Self {
            sort: sort.map(|state| state.key),
            dir: sort.map(|state| state.direction),
            ..self.clone()
        }
    }

    /// The URL for `route` with this query appended.
    pub fn to_url(&self, route: &str) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(query) if query.is_empty() => route.to_owned(),
            Ok(query) => format!("{route}?{query}"),
            Err(error) => {
                tracing::error!("could not encode table query {self:?}: {error}");
                route.to_owned()
            }
        }
    }
}

/// Apply the search, kind filter and sort in `query` to `expenses`.
///
/// Search and kind filter must both match for a row to be kept. The search
/// term is matched as typed, surrounding whitespace included. Sorting is
/// stable, so rows that compare equal keep their original order.
pub fn filter_and_sort(expenses: &[Expense], query: &TableQuery) -> Vec<Expense> {
    let term = query.q.as_str();
    let lowercase_term = term.to_lowercase();

    let mut rows: Vec<Expense> = expenses
        .iter()
        .filter(|expense| term.is_empty() || matches_search(expense, term, &lowercase_term))
        .filter(|expense| query.filter.matches(expense.kind))
        .cloned()
        .collect();

    if let Some(sort) = query.sort_state() {
        rows.sort_by(|a, b| {
            let ordering = compare_by(a, b, sort.key);

            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    rows
}

fn matches_search(expense: &Expense, term: &str, lowercase_term: &str) -> bool {
    expense.category.to_lowercase().contains(lowercase_term)
        || expense.kind.label().to_lowercase().contains(lowercase_term)
        || expense.amount_text().contains(term)
}

fn compare_by(a: &Expense, b: &Expense, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.display_id.cmp(&b.display_id),
        SortKey::Amount => a.amount.total_cmp(&b.amount),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Category => locale_compare(&a.category, &b.category),
        SortKey::Kind => locale_compare(a.kind.label(), b.kind.label()),
    }
}

/// Compare text the way a person would alphabetise it: ignoring case first,
/// then placing lowercase before uppercase.
fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
