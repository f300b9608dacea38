//! Legend, tooltip and axis text for the dashboard charts

use super::data::{AllocationCategory, Holding, ProjectionYear, TOTAL_PORTFOLIO_VALUE};
use crate::format::{format_rupees, RUPEE};

/// `HDFC Mid Cap Fund: ₹25L (7.8%)`
pub fn holding_legend_label(holding: &Holding) -> String {
    format!(
        "{}: {}{}L ({}%)",
        holding.label, RUPEE, holding.value_lakhs, holding.percentage
    )
}

pub fn holding_tooltip(holding: &Holding) -> Vec<String> {
    vec![
        format!("Value: {}{} Lakhs", RUPEE, holding.value_lakhs),
        format!("Percentage: {}%", holding.percentage),
        format!("Total Portfolio: {}", format_rupees(TOTAL_PORTFOLIO_VALUE)),
    ]
}

/// Category share, a blank separator, then the fund breakdown
pub fn allocation_tooltip(category: &AllocationCategory) -> Vec<String> {
    let mut lines = vec![
        format!("{}: {}%", category.name, category.percentage),
        String::new(),
    ];
    lines.extend(category.breakdown.iter().map(|line| line.to_string()));
    lines
}

/// Tooltip title and lines for one projection bar
pub fn growth_tooltip(year: &ProjectionYear) -> (String, Vec<String>) {
    (
        format!("Year {}", year.year),
        vec![
            format!("Portfolio Value: {}{} Crores", RUPEE, year.value_crores),
            format!("Growth Rate: {}%", year.growth_rate),
            "Target Achievement Progress".to_string(),
        ],
    )
}

/// Bar colour by projected value in crores
pub fn growth_bar_color(value_crores: f64) -> &'static str {
    if value_crores > 15.0 {
        "#1FB8CD"
    } else if value_crores > 10.0 {
        "#FFC185"
    } else if value_crores > 5.0 {
        "#5D878F"
    } else {
        "#B4413C"
    }
}

/// Y-axis tick for the growth chart (`₹5 Cr`)
pub fn growth_tick_label(value_crores: f64) -> String {
    format!("{}{} Cr", RUPEE, value_crores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::data::{asset_allocation, growth_projection, portfolio_holdings};

    #[test]
    fn test_holding_text() {
        let holdings = portfolio_holdings();
        assert_eq!(holding_legend_label(&holdings[0]), "HDFC Mid Cap Fund: ₹25L (7.8%)");
        assert_eq!(holding_legend_label(&holdings[8]), "PPF Self: ₹15.86L (5%)");

        assert_eq!(
            holding_tooltip(&holdings[6]),
            vec![
                "Value: ₹70 Lakhs".to_string(),
                "Percentage: 21.9%".to_string(),
                "Total Portfolio: ₹3,18,96,000".to_string(),
            ]
        );
    }

    #[test]
    fn test_allocation_tooltip() {
        let lines = allocation_tooltip(&asset_allocation()[2]);
        assert_eq!(
            lines,
            vec![
                "Hybrid Funds: 10%",
                "",
                "DSP Dynamic Asset Allocation: 5%",
                "ICICI Balanced Advantage: 5%",
            ]
        );
    }

    #[test]
    fn test_growth_tooltip() {
        let (title, lines) = growth_tooltip(&growth_projection()[0]);
        assert_eq!(title, "Year 2024");
        assert_eq!(lines[0], "Portfolio Value: ₹3.19 Crores");
        assert_eq!(lines[1], "Growth Rate: 0%");

        let (_, lines) = growth_tooltip(&growth_projection()[1]);
        assert_eq!(lines[1], "Growth Rate: 11.2%");
    }

    #[test]
    fn test_growth_bar_color_thresholds() {
        assert_eq!(growth_bar_color(18.14), "#1FB8CD");
        assert_eq!(growth_bar_color(15.0), "#FFC185");
        assert_eq!(growth_bar_color(12.62), "#FFC185");
        assert_eq!(growth_bar_color(10.0), "#5D878F");
        assert_eq!(growth_bar_color(5.12), "#5D878F");
        assert_eq!(growth_bar_color(5.0), "#B4413C");
        assert_eq!(growth_bar_color(3.19), "#B4413C");
    }

    #[test]
    fn test_tick_label() {
        assert_eq!(growth_tick_label(5.0), "₹5 Cr");
        assert_eq!(growth_tick_label(2.5), "₹2.5 Cr");
    }
}
