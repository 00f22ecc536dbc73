//! The income, outcome and total cards at the top of the dashboard.

use maud::{Markup, html};

use crate::dashboard::view_model::FormattedBalance;

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-6 shadow-md flex flex-col gap-4";

const TOTAL_CARD_STYLE: &str = "bg-orange-500 text-white rounded-lg p-6 \
    shadow-md flex flex-col gap-4";

/// Renders the three balance cards.
///
/// When `is_stale` is set a note explains that the totals still include a
/// transaction that has since been deleted.
pub(super) fn balance_cards_view(balance: &FormattedBalance, is_stale: bool) -> Markup {
    html! {
        section id="balance" class="w-full mb-8"
        {
            div class="grid grid-cols-1 md:grid-cols-3 gap-4"
            {
                (balance_card("Income", "balance-income", &balance.income, CARD_STYLE))
                (balance_card("Outcome", "balance-outcome", &balance.outcome, CARD_STYLE))
                (balance_card("Total", "balance-total", &balance.total, TOTAL_CARD_STYLE))
            }

            @if is_stale {
                p
                    id="balance-stale-note"
                    class="mt-2 text-sm text-gray-600 dark:text-gray-400"
                {
                    "These totals were calculated before your last deletion. \
                    Refresh to update them."
                }
            }
        }
    }
}

fn balance_card(label: &str, test_id: &str, amount: &str, style: &str) -> Markup {
    html! {
        div class=(style)
        {
            header class="flex justify-between items-center"
            {
                p class="text-base" { (label) }
            }

            h2 class="text-3xl font-medium whitespace-nowrap" data-testid=(test_id)
            {
                (amount)
            }
        }
    }
}
