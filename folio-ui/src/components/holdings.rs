//! Holdings and Policy Sections
//!
//! Text breakdowns of the portfolio, with glossary explanations on hover.

use folio::charts::{asset_allocation, growth_projection, portfolio_holdings, ProjectionYear};
use folio::format::{format_currency, LAKH};
use folio::page::terms_in;
use leptos::*;

/// Hover text explaining the glossary terms in `text`
fn glossary_title(text: &str) -> String {
    terms_in(text)
        .into_iter()
        .map(|(term, description)| format!("{}: {}", term, description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Holdings list and per-category fund breakdown
#[component]
pub fn CategorySection() -> impl IntoView {
    view! {
        <section id="category-section" class="category-section bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Holdings"</h2>

            <div class="space-y-2">
                {portfolio_holdings()
                    .iter()
                    .map(|holding| view! {
                        <div
                            class="fund-item flex items-center justify-between py-2 border-b border-gray-700 last:border-0"
                            title={glossary_title(holding.label)}
                        >
                            <span>{holding.label}</span>
                            <span class="font-semibold">
                                {format_currency(holding.value_lakhs * LAKH)}
                                <span class="text-gray-400 text-sm ml-2">{format!("{}%", holding.percentage)}</span>
                            </span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="grid md:grid-cols-2 gap-4 mt-6">
                {asset_allocation()
                    .iter()
                    .map(|category| view! {
                        <div class="bg-gray-700 rounded-lg p-4">
                            <h3 class="font-semibold">{format!("{}: {}%", category.name, category.percentage)}</h3>
                            <ul class="text-sm text-gray-300 mt-2 space-y-1">
                                {category
                                    .breakdown
                                    .iter()
                                    .map(|line| view! { <li title={glossary_title(line)}>{*line}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// A run of consecutive years sharing one growth assumption
#[derive(Debug, Clone, PartialEq)]
struct GrowthPhase {
    first_year: u16,
    last_year: u16,
    rate: f64,
}

/// Group the projection into phases of equal growth rate, skipping the
/// base year (which has no growth)
fn growth_phases(years: &[ProjectionYear]) -> Vec<GrowthPhase> {
    let mut phases: Vec<GrowthPhase> = Vec::new();
    for year in years.iter().filter(|y| y.growth_rate > 0.0) {
        match phases.last_mut() {
            Some(phase) if phase.rate == year.growth_rate => phase.last_year = year.year,
            _ => phases.push(GrowthPhase {
                first_year: year.year,
                last_year: year.year,
                rate: year.growth_rate,
            }),
        }
    }
    phases
}

/// Investment policy: target allocation and growth assumptions
#[component]
pub fn PolicyCard() -> impl IntoView {
    view! {
        <section id="ips-card" class="ips-card bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Investment Policy"</h2>
            <div class="grid md:grid-cols-2 gap-6">
                <ul class="space-y-1">
                    {asset_allocation()
                        .iter()
                        .map(|c| view! { <li>{format!("{}: {}%", c.name, c.percentage)}</li> })
                        .collect_view()}
                </ul>
                <ul class="space-y-1">
                    {growth_phases(growth_projection())
                        .into_iter()
                        .map(|phase| view! {
                            <li>{format!("{}-{}: {}% a year", phase.first_year, phase.last_year, phase.rate)}</li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_phases() {
        let phases = growth_phases(growth_projection());
        assert_eq!(
            phases,
            vec![
                GrowthPhase { first_year: 2025, last_year: 2029, rate: 11.2 },
                GrowthPhase { first_year: 2030, last_year: 2034, rate: 10.0 },
                GrowthPhase { first_year: 2035, last_year: 2039, rate: 9.0 },
            ]
        );
    }

    #[test]
    fn test_glossary_title() {
        assert!(glossary_title("PPF Self").starts_with("PPF: Public Provident Fund"));
        assert_eq!(glossary_title("Savings Account"), "");
    }
}
