//! The summary cards at the top of the dashboard.

use maud::{Markup, html};

use crate::{expense::Summary, html::format_currency};

const CARD_CLASS: &str = "bg-white dark:bg-gray-800 border border-gray-200
    dark:border-gray-700 rounded-lg p-4 shadow-md flex flex-col gap-1";

/// Renders the total balance, income, expense and transaction count cards.
pub(super) fn summary_cards_view(summary: &Summary) -> Markup {
    let balance_style = if summary.balance >= 0.0 {
        "text-green-600 dark:text-green-400"
    } else {
        "text-red-600 dark:text-red-400"
    };

    html! {
        section
            id="summary-cards"
            class="w-full grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-6"
        {
            (card("balance", "Total Balance", &format_currency(summary.balance), balance_style))
            (card(
                "income",
                "Total Income",
                &format_currency(summary.total_income),
                "text-green-600 dark:text-green-400",
            ))
            (card(
                "expense",
                "Total Expense",
                &format_currency(summary.total_expense),
                "text-red-600 dark:text-red-400",
            ))
            (card("count", "Transactions", &summary.count.to_string(), ""))
        }
    }
}

fn card(id: &str, title: &str, value: &str, value_style: &str) -> Markup {
    html! {
        div class=(CARD_CLASS) data-card=(id)
        {
            h3 class="text-sm font-medium text-gray-600 dark:text-gray-400" { (title) }

            p class={ "text-2xl font-bold " (value_style) } data-card-value
            {
                (value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        expense::{Summary, sample_expenses},
        html::format_currency,
    };

    use super::summary_cards_view;

    fn card_value(html: &Html, id: &str) -> (String, String) {
        let selector = Selector::parse(&format!("[data-card={id}] [data-card-value]")).unwrap();
        let value = html.select(&selector).next().expect("card not found");

        (
            value.text().collect::<String>().trim().to_owned(),
            value.value().attr("class").unwrap_or_default().to_owned(),
        )
    }

    #[test]
    fn shows_totals_for_sample_data() {
        let summary = Summary::from_expenses(&sample_expenses());

        let html = Html::parse_fragment(&summary_cards_view(&summary).into_string());

        let (balance, balance_class) = card_value(&html, "balance");
        assert_eq!(balance, format_currency(1420.0));
        assert!(balance_class.contains("text-green-600"));
        assert_eq!(card_value(&html, "income").0, format_currency(1700.0));
        assert_eq!(card_value(&html, "expense").0, format_currency(280.0));
        assert_eq!(card_value(&html, "count").0, "5");
    }

    #[test]
    fn negative_balance_is_red() {
        let summary = Summary {
            total_income: 10.0,
            total_expense: 25.0,
            balance: -15.0,
            count: 2,
        };

        let html = Html::parse_fragment(&summary_cards_view(&summary).into_string());

        let (balance, balance_class) = card_value(&html, "balance");
        assert_eq!(balance, format_currency(-15.0));
        assert!(balance.starts_with('-'));
        assert!(balance_class.contains("text-red-600"));
    }
}
