//! Dashboard Charts
//!
//! Literal portfolio data, the series built from it and the chart
//! configurations handed to a renderer.
//!
//! ## Charts
//!
//! - **Portfolio composition** (pie): 13 holdings valued in lakhs
//! - **Asset allocation** (doughnut): 4 categories with fund breakdowns
//! - **Growth projection** (bar): portfolio value in crores, 2024-2039

pub mod config;
pub mod data;
pub mod labels;
pub mod series;

pub use config::{
    dashboard_charts, AnimationOptions, AxisOptions, ChartConfig, ChartId, ChartKind,
    LegendPosition, Tooltip, CHART_ANIMATION_MS,
};
pub use data::{
    asset_allocation, growth_projection, portfolio_holdings, AllocationCategory, Holding,
    ProjectionYear, ALLOCATION_COLORS, PORTFOLIO_COLORS, TOTAL_PORTFOLIO_VALUE,
};
pub use labels::{
    allocation_tooltip, growth_bar_color, growth_tick_label, growth_tooltip, holding_legend_label,
    holding_tooltip,
};
pub use series::{allocation_series, composition_series, growth_series, ChartSeries, SeriesPoint};
