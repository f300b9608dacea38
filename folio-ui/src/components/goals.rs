//! Goal Progress Cards

use folio::page::{GoalProgress, GOAL_PROGRESS};
use leptos::*;

/// One card per goal, each with a progress bar
#[component]
pub fn GoalCards() -> impl IntoView {
    view! {
        <section class="grid md:grid-cols-3 gap-4">
            {GOAL_PROGRESS
                .iter()
                .enumerate()
                .map(|(idx, goal)| view! { <GoalCard number={idx + 1} goal={*goal} /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn GoalCard(number: usize, goal: GoalProgress) -> impl IntoView {
    view! {
        <div id={goal.card} class="goal-card bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-300">{format!("Goal {}", number)}</span>
                <span class="text-sm font-semibold">{format!("{}%", goal.width_percent)}</span>
            </div>
            <div class="progress-bar bg-gray-700 rounded h-2 mt-3">
                <div
                    id={goal.fill}
                    class="progress-fill bg-primary-500 rounded h-2 transition-all"
                    style=format!("width: {}%", goal.width_percent)
                />
            </div>
        </div>
    }
}
