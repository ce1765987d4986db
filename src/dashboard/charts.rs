//! Chart generation and rendering for the dashboard.
//!
//! Two ECharts visualisations summarise the expense list:
//! - **Expenses by Category**: a pie chart of the total amount per category
//! - **Income vs Expenses**: a bar chart of the total amount per kind
//!
//! Each chart is generated as an ECharts option object and rendered with an
//! HTML container plus an inline script that initialises it. The script runs
//! both on the first page load and whenever htmx swaps the content in again.

use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, JsFunction, Label,
        Orient, Tooltip, Trigger,
    },
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    expense::{Expense, GroupKey, aggregate_by},
    html::CARD_STYLE,
};

/// The ECharts build loaded on the dashboard page.
pub(super) const ECHARTS_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

const PALETTE: [&str; 6] = [
    "hsl(195 100% 39%)",
    "hsl(186 100% 55%)",
    "hsl(142 76% 36%)",
    "hsl(0 84% 60%)",
    "hsl(270 76% 48%)",
    "hsl(30 100% 50%)",
];

/// A dashboard chart with its HTML container ID, title and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The heading shown above the chart
    pub title: &'static str,
    /// The ECharts configuration, a JavaScript object literal
    pub options: String,
}

/// Build the dashboard charts, or `None` if there is nothing to chart.
pub(super) fn build_dashboard_charts(expenses: &[Expense]) -> Option<[DashboardChart; 2]> {
    if expenses.is_empty() {
        return None;
    }

    Some([
        DashboardChart {
            id: "category-chart",
            title: "Expenses by Category",
            options: category_chart(expenses).to_string(),
        },
        DashboardChart {
            id: "kind-chart",
            title: "Income vs Expenses",
            options: kind_chart(expenses).to_string(),
        },
    ])
}

/// Renders the "Financial Overview" section.
///
/// Shows a placeholder message instead of empty charts when `charts` is `None`.
pub(super) fn charts_view(charts: Option<&[DashboardChart]>) -> Markup {
    html!(
        section
            id="charts"
            class={ "w-full mb-6 " (CARD_STYLE) }
        {
            h2 class="text-xl font-bold mb-4" { "Financial Overview" }

            @match charts {
                Some(charts) => {
                    div class="grid grid-cols-1 lg:grid-cols-2 gap-8"
                    {
                        @for chart in charts {
                            div
                            {
                                h3 class="text-lg font-semibold text-center mb-2" { (chart.title) }

                                div
                                    id=(chart.id)
                                    class="min-h-[300px] rounded"
                                {}
                            }
                        }
                    }

                    script { (charts_script(charts)) }
                }
                None => {
                    p class="text-center py-12 text-gray-500 dark:text-gray-400"
                    {
                        "No expense data available to display charts"
                    }
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
fn charts_script(charts: &[DashboardChart]) -> PreEscaped<String> {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    if (!chartDom || typeof echarts === "undefined") return;
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    new ResizeObserver(() => chart.resize()).observe(chartDom);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id,
                escape_script_text(&chart.options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    PreEscaped(script_content)
}

/// Stop free text in the chart options (e.g. a category named "</script>")
/// from ending the inline script element early.
///
/// Only `</` and `<!--` are special inside a script element. Both can only
/// appear in the options inside string literals, where `\/` and `\!` are the
/// same characters.
fn escape_script_text(options: &str) -> String {
    options.replace("</", "<\\/").replace("<!--", "<\\!--")
}

fn category_chart(expenses: &[Expense]) -> Chart {
    let totals = aggregate_by(expenses, GroupKey::Category);
    let data: Vec<(f64, &str)> = totals
        .iter()
        .map(|group| (group.total, group.label.as_str()))
        .collect();

    Chart::new()
        .color(PALETTE.iter().map(|&colour| Color::from(colour)).collect())
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().orient(Orient::Horizontal).bottom(0))
        .series(
            Pie::new()
                .name("Amount")
                .radius(vec!["0%", "60%"])
                .center(vec!["50%", "45%"])
                .label(Label::new().formatter("{b}: {d}%"))
                .data(data),
        )
}

fn kind_chart(expenses: &[Expense]) -> Chart {
    let totals = aggregate_by(expenses, GroupKey::Kind);
    let (labels, values): (Vec<String>, Vec<f64>) = totals
        .into_iter()
        .map(|group| (group.label, group.total))
        .unzip();

    Chart::new()
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Amount")
                .item_style(ItemStyle::new().color(PALETTE[0]))
                .data(values),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
