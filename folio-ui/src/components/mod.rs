//! UI Components
//!
//! Leptos components for the dashboard page.

pub mod chart;
pub mod goals;
pub mod holdings;
pub mod total_value;

pub use chart::{animate_charts, ChartCard};
pub use goals::GoalCards;
pub use holdings::{CategorySection, PolicyCard};
pub use total_value::TotalValueCard;
