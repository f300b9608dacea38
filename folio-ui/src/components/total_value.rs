//! Total Value Card
//!
//! Headline portfolio value. The amount is counted up by the core's
//! counter animation once the card scrolls into view.

use folio::charts::TOTAL_PORTFOLIO_VALUE;
use folio::format::{format_currency, format_rupees};
use folio::page::{TOTAL_AMOUNT_ID, TOTAL_VALUE_CARD_ID};
use leptos::*;

#[component]
pub fn TotalValueCard() -> impl IntoView {
    view! {
        <section id=TOTAL_VALUE_CARD_ID class="total-value-card bg-gray-800 rounded-xl p-6 text-center">
            <h2 class="text-gray-400 text-sm uppercase tracking-wide">"Total Portfolio Value"</h2>
            <div id=TOTAL_AMOUNT_ID class="total-amount text-5xl font-bold mt-2">
                {format_rupees(TOTAL_PORTFOLIO_VALUE)}
            </div>
            <p class="text-gray-400 mt-1">{format_currency(TOTAL_PORTFOLIO_VALUE)}</p>
        </section>
    }
}
