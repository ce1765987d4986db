//! The form fields and modal dialog shared by the add, update and delete forms.

use maud::{Markup, html};
use time::Date;

use crate::{
    expense::core::ExpenseKind,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The values to pre-fill the expense form fields with.
pub struct ExpenseFormDefaults<'a> {
    /// The amount as plain text, see [crate::Expense::amount_text].
    pub amount: Option<String>,
    pub kind: ExpenseKind,
    pub category: Option<&'a str>,
    pub date: Date,
    pub autofocus_amount: bool,
}

pub fn expense_form_fields(defaults: &ExpenseFormDefaults<'_>) -> Markup {
    html! {
        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="any"
                    placeholder="0.00"
                    required
                    value=[defaults.amount.as_deref()]
                    autofocus[defaults.autofocus_amount]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label
                for="kind"
                class=(FORM_LABEL_STYLE)
            {
                "Type"
            }

            select
                name="kind"
                id="kind"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for kind in [ExpenseKind::Income, ExpenseKind::Expense] {
                    option value=(kind) selected[kind == defaults.kind] { (kind) }
                }
            }
        }

        div
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            input
                name="category"
                id="category"
                type="text"
                placeholder="e.g. Food, Transport, Salary"
                required
                value=[defaults.category]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                required
                value=(defaults.date)
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// Wrap `content` in a modal dialog with a close button.
///
/// The dialog is rendered into `#modal-container`, closing it empties the container.
pub fn modal(title: &str, subtitle: &str, content: &Markup) -> Markup {
    html! {
        div
            id="modal"
            class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50 p-4"
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
        {
            div
                class="w-full max-w-md rounded-lg bg-white p-6 shadow-xl
                    text-gray-900 dark:bg-gray-800 dark:text-white"
            {
                div class="flex items-start justify-between mb-4"
                {
                    div
                    {
                        h2 id="modal-title" class="text-xl font-bold" { (title) }

                        p
                            id="modal-subtitle"
                            class="mt-1 text-sm text-gray-500 dark:text-gray-400"
                        {
                            (subtitle)
                        }
                    }

                    button
                        type="button"
                        class="rounded-lg p-1.5 hover:bg-gray-200 dark:hover:bg-gray-700"
                        aria-label="Close"
                        onclick="document.getElementById('modal-container').innerHTML = ''"
                    {
                        "✕"
                    }
                }

                (content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::expense::core::ExpenseKind;

    use super::{ExpenseFormDefaults, expense_form_fields, modal};

    fn render_fields(defaults: &ExpenseFormDefaults<'_>) -> Html {
        Html::parse_fragment(&expense_form_fields(defaults).into_string())
    }

    #[test]
    fn selects_default_kind() {
        for (kind, want) in [
            (ExpenseKind::Income, "Income"),
            (ExpenseKind::Expense, "Expense"),
        ] {
            let html = render_fields(&ExpenseFormDefaults {
                amount: None,
                kind,
                category: None,
                date: date!(2025 - 01 - 15),
                autofocus_amount: false,
            });

            let selected = html
                .select(&Selector::parse("select[name=kind] option[selected]").unwrap())
                .next()
                .expect("No selected option");
            assert_eq!(selected.value().attr("value"), Some(want));
        }
    }

    #[test]
    fn prefills_values() {
        let html = render_fields(&ExpenseFormDefaults {
            amount: Some("12.345".to_owned()),
            kind: ExpenseKind::Expense,
            category: Some("Food"),
            date: date!(2025 - 01 - 16),
            autofocus_amount: true,
        });

        let value_of = |selector: &str| -> Option<String> {
            html.select(&Selector::parse(selector).unwrap())
                .next()
                .and_then(|element| element.value().attr("value").map(str::to_owned))
        };
        assert_eq!(value_of("input[name=amount]").as_deref(), Some("12.345"));
        assert_eq!(value_of("input[name=category]").as_deref(), Some("Food"));
        assert_eq!(value_of("input[name=date]").as_deref(), Some("2025-01-16"));
    }

    #[test]
    fn modal_has_title_and_content() {
        let content = maud::html!(p { "Hello" });
        let html = Html::parse_fragment(
            &modal("Add Expense", "Add a new income or expense entry", &content).into_string(),
        );

        let title = html
            .select(&Selector::parse("#modal-title").unwrap())
            .next()
            .expect("No modal title");
        assert_eq!(title.text().collect::<String>(), "Add Expense");
        let subtitle = html
            .select(&Selector::parse("#modal-subtitle").unwrap())
            .next()
            .expect("No modal subtitle");
        assert_eq!(
            subtitle.text().collect::<String>(),
            "Add a new income or expense entry"
        );
        assert!(html.html().contains("Hello"));
    }
}
