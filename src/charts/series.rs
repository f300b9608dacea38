//! Chart series

use serde::Serialize;

use super::data::{asset_allocation, growth_projection, portfolio_holdings};

/// A labelled value in a series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Named, ordered sequence of points. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    name: String,
    points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn new<L>(name: impl Into<String>, points: impl IntoIterator<Item = (L, f64)>) -> Self
    where
        L: Into<String>,
    {
        Self {
            name: name.into(),
            points: points
                .into_iter()
                .map(|(label, value)| SeriesPoint {
                    label: label.into(),
                    value,
                })
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&SeriesPoint> {
        self.points.get(index)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of all values
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Largest value, `None` for an empty series
    pub fn max(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }
}

/// Holding values in lakhs
pub fn composition_series() -> ChartSeries {
    ChartSeries::new(
        "Portfolio Composition",
        portfolio_holdings().iter().map(|h| (h.label, h.value_lakhs)),
    )
}

/// Category shares in percent
pub fn allocation_series() -> ChartSeries {
    ChartSeries::new(
        "Asset Allocation",
        asset_allocation().iter().map(|c| (c.name, c.percentage)),
    )
}

/// Projected value in crores, labelled by year
pub fn growth_series() -> ChartSeries {
    ChartSeries::new(
        "Portfolio Value (₹ Crores)",
        growth_projection()
            .iter()
            .map(|y| (y.year.to_string(), y.value_crores)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_accessors() {
        let series = ChartSeries::new("test", vec![("a", 1.0), ("b", 2.5)]);
        assert_eq!(series.name(), "test");
        assert_eq!(series.labels(), vec!["a", "b"]);
        assert_eq!(series.values(), vec![1.0, 2.5]);
        assert_eq!(series.total(), 3.5);
        assert_eq!(series.max(), Some(2.5));
        assert_eq!(series.get(1).map(|p| p.label.as_str()), Some("b"));
        assert!(series.get(2).is_none());
    }

    #[test]
    fn test_empty_series() {
        let series = ChartSeries::new("empty", Vec::<(String, f64)>::new());
        assert!(series.is_empty());
        assert_eq!(series.max(), None);
        assert_eq!(series.total(), 0.0);
    }

    #[test]
    fn test_dashboard_series() {
        assert_eq!(composition_series().len(), 13);
        assert_eq!(allocation_series().total(), 104.0);

        let growth = growth_series();
        assert_eq!(growth.labels()[0], "2024");
        assert_eq!(growth.max(), Some(18.14));
    }
}
