//! The transaction table on the dashboard.

use maud::{Markup, html};
use time::format_description::well_known::Rfc3339;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    api::TransactionType,
    dashboard::view_model::DashboardTransaction,
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
};

/// The max number of graphemes to display in the title column before
/// truncating and displaying ellipses.
const MAX_TITLE_GRAPHEMES: usize = 32;

fn value_class(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "income text-green-700 dark:text-green-300",
        TransactionType::Outcome => "outcome text-red-700 dark:text-red-300",
    }
}

/// Outcome is shown with a leading minus, the formatted value itself is unsigned.
fn signed_value(transaction: &DashboardTransaction) -> String {
    match transaction.kind {
        TransactionType::Income => transaction.formatted_value.clone(),
        TransactionType::Outcome => format!("- {}", transaction.formatted_value),
    }
}

/// Truncate long titles, returning the full title as a tooltip when truncated.
fn format_title(title: &str) -> (String, Option<&str>) {
    let title_length = title.graphemes(true).count();

    if title_length <= MAX_TITLE_GRAPHEMES {
        (title.to_owned(), None)
    } else {
        let truncated: String = title.graphemes(true).take(MAX_TITLE_GRAPHEMES - 3).collect();
        (truncated + "...", Some(title))
    }
}

pub(super) fn transactions_table_view(transactions: &[DashboardTransaction]) -> Markup {
    html! {
        section id="transactions" class="w-full overflow-x-auto rounded"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Price" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class="sr-only" { "Actions" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (transaction_row_view(transaction))
                    }

                    @if transactions.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td
                                colspan="5"
                                data-empty-state="true"
                                class="px-6 py-4 text-center"
                            {
                                "No transactions yet."
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row_view(transaction: &DashboardTransaction) -> Markup {
    let (title, tooltip) = format_title(&transaction.title);
    let delete_url = format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id.as_str());
    let confirm_message = format!(
        "Are you sure you want to delete the transaction '{}'? This cannot be undone.",
        transaction.title
    );
    let datetime = transaction.created_at.format(&Rfc3339).ok();

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class={ (TABLE_CELL_STYLE) " title text-gray-900 dark:text-white" } title=[tooltip]
            {
                (title)
            }
            td class={ (TABLE_CELL_STYLE) " whitespace-nowrap " (value_class(transaction.kind)) }
            {
                (signed_value(transaction))
            }
            td class=(TABLE_CELL_STYLE) { (transaction.category.title) }
            td class=(TABLE_CELL_STYLE)
            {
                time datetime=[datetime] { (transaction.formatted_date) }
            }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    class=(BUTTON_DELETE_STYLE)
                    aria-label={ "Delete " (transaction.title) }
                    hx-delete=(delete_url)
                    hx-confirm=(confirm_message)
                    hx-target="#dashboard-content"
                    hx-target-error="#alert-container"
                    hx-swap="innerHTML"
                {
                    "Delete"
                }
            }
        }
    }
}
