//! Chart Configuration
//!
//! Renderer-agnostic description of each dashboard chart: data, colours,
//! legend and tooltip text, axes and entry animation. Serializes to JSON for
//! any charting front-end.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::data::{
    asset_allocation, growth_projection, portfolio_holdings, ALLOCATION_COLORS, PORTFOLIO_COLORS,
};
use super::labels::{
    allocation_tooltip, growth_bar_color, growth_tooltip, holding_legend_label, holding_tooltip,
};
use super::series::{allocation_series, composition_series, growth_series, ChartSeries};
use crate::animation::Easing;
use crate::error::{DashboardError, DashboardResult};

/// Entry animation length shared by all charts
pub const CHART_ANIMATION_MS: u64 = 2000;

/// The three dashboard charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartId {
    Portfolio,
    Allocation,
    Growth,
}

impl ChartId {
    pub const ALL: [ChartId; 3] = [ChartId::Portfolio, ChartId::Allocation, ChartId::Growth];

    /// Element id of the canvas the chart is drawn on
    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartId::Portfolio => "portfolioChart",
            ChartId::Allocation => "allocationChart",
            ChartId::Growth => "growthChart",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartId::Portfolio => "portfolio",
            ChartId::Allocation => "allocation",
            ChartId::Growth => "growth",
        }
    }

    /// Build this chart's configuration
    pub fn config(self) -> ChartConfig {
        match self {
            ChartId::Portfolio => ChartConfig::portfolio(),
            ChartId::Allocation => ChartConfig::allocation(),
            ChartId::Growth => ChartConfig::growth(),
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "portfolio" | "composition" | "portfoliochart" => Ok(ChartId::Portfolio),
            "allocation" | "allocationchart" => Ok(ChartId::Allocation),
            "growth" | "projection" | "growthchart" => Ok(ChartId::Growth),
            _ => Err(DashboardError::UnknownChart(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Doughnut,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Right,
    Bottom,
    Hidden,
}

/// Hover text for one data point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisOptions {
    pub x_title: String,
    pub y_title: String,
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationOptions {
    pub duration_ms: u64,
    pub easing: Easing,
    /// Sweep pie/doughnut segments in from zero angle
    pub animate_rotate: bool,
}

/// Everything a renderer needs to draw one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub id: ChartId,
    pub canvas: &'static str,
    pub kind: ChartKind,
    pub series: ChartSeries,
    /// One colour per point
    pub colors: Vec<String>,
    pub border_color: &'static str,
    pub border_width: u32,
    /// Doughnut hole as a percentage of the radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout_percent: Option<u8>,
    pub legend: LegendPosition,
    /// One legend entry per point; empty when the legend is hidden
    pub legend_labels: Vec<String>,
    /// One tooltip per point
    pub tooltips: Vec<Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axes: Option<AxisOptions>,
    pub animation: AnimationOptions,
}

impl ChartConfig {
    /// Pie chart of every holding, valued in lakhs
    pub fn portfolio() -> Self {
        let holdings = portfolio_holdings();

        Self {
            id: ChartId::Portfolio,
            canvas: ChartId::Portfolio.canvas_id(),
            kind: ChartKind::Pie,
            series: composition_series(),
            colors: PORTFOLIO_COLORS.iter().map(|c| c.to_string()).collect(),
            border_color: "#ffffff",
            border_width: 3,
            cutout_percent: None,
            legend: LegendPosition::Right,
            legend_labels: holdings.iter().map(holding_legend_label).collect(),
            tooltips: holdings
                .iter()
                .map(|h| Tooltip {
                    title: None,
                    lines: holding_tooltip(h),
                })
                .collect(),
            axes: None,
            animation: AnimationOptions {
                duration_ms: CHART_ANIMATION_MS,
                easing: Easing::EaseOutQuart,
                animate_rotate: true,
            },
        }
    }

    /// Doughnut chart of the category split
    pub fn allocation() -> Self {
        let categories = asset_allocation();

        Self {
            id: ChartId::Allocation,
            canvas: ChartId::Allocation.canvas_id(),
            kind: ChartKind::Doughnut,
            series: allocation_series(),
            colors: ALLOCATION_COLORS.iter().map(|c| c.to_string()).collect(),
            border_color: "#ffffff",
            border_width: 4,
            cutout_percent: Some(40),
            legend: LegendPosition::Bottom,
            legend_labels: categories.iter().map(|c| c.name.to_string()).collect(),
            tooltips: categories
                .iter()
                .map(|c| Tooltip {
                    title: None,
                    lines: allocation_tooltip(c),
                })
                .collect(),
            axes: None,
            animation: AnimationOptions {
                duration_ms: CHART_ANIMATION_MS,
                easing: Easing::EaseOutQuart,
                animate_rotate: true,
            },
        }
    }

    /// Bar chart of the 15-year projection, coloured by value band
    pub fn growth() -> Self {
        let years = growth_projection();

        Self {
            id: ChartId::Growth,
            canvas: ChartId::Growth.canvas_id(),
            kind: ChartKind::Bar,
            series: growth_series(),
            colors: years
                .iter()
                .map(|y| growth_bar_color(y.value_crores).to_string())
                .collect(),
            border_color: "#1FB8CD",
            border_width: 2,
            cutout_percent: None,
            legend: LegendPosition::Hidden,
            legend_labels: Vec::new(),
            tooltips: years
                .iter()
                .map(|y| {
                    let (title, lines) = growth_tooltip(y);
                    Tooltip {
                        title: Some(title),
                        lines,
                    }
                })
                .collect(),
            axes: Some(AxisOptions {
                x_title: "Year".to_string(),
                y_title: "Portfolio Value (₹ Crores)".to_string(),
                begin_at_zero: true,
            }),
            animation: AnimationOptions {
                duration_ms: CHART_ANIMATION_MS,
                easing: Easing::EaseOutQuart,
                animate_rotate: false,
            },
        }
    }

    /// Tooltip for the point at `index`
    pub fn tooltip(&self, index: usize) -> Option<&Tooltip> {
        self.tooltips.get(index)
    }

    pub fn to_json(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// All dashboard charts in page order
pub fn dashboard_charts() -> Vec<ChartConfig> {
    ChartId::ALL.iter().map(|id| id.config()).collect()
}
