//! Literal portfolio figures shown on the dashboard

use serde::Serialize;

use crate::format::AmountValue;

/// Total portfolio value in rupees (₹3,18,96,000)
pub const TOTAL_PORTFOLIO_VALUE: AmountValue = 31_896_000.0;

/// A single investment line in the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Holding {
    pub label: &'static str,
    /// Current value in lakhs
    pub value_lakhs: f64,
    /// Share of the total portfolio
    pub percentage: f64,
}

/// A target allocation bucket and the funds that make it up
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationCategory {
    pub name: &'static str,
    pub percentage: f64,
    pub breakdown: &'static [&'static str],
}

/// Projected portfolio value at the end of a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionYear {
    pub year: u16,
    pub value_crores: f64,
    /// Assumed annual growth rate for the year, in percent
    pub growth_rate: f64,
}

const fn holding(label: &'static str, value_lakhs: f64, percentage: f64) -> Holding {
    Holding {
        label,
        value_lakhs,
        percentage,
    }
}

const fn year(year: u16, value_crores: f64, growth_rate: f64) -> ProjectionYear {
    ProjectionYear {
        year,
        value_crores,
        growth_rate,
    }
}

const HOLDINGS: [Holding; 13] = [
    holding("HDFC Mid Cap Fund", 25.0, 7.8),
    holding("Parag Parikh Flexi Cap", 35.0, 11.0),
    holding("ICICI Value Discovery", 40.0, 12.5),
    holding("ICICI Thematic FoF", 25.0, 7.8),
    holding("Nippon Nivesh Lakshya", 35.0, 11.0),
    holding("Aditya Birla Balanced", 28.0, 8.8),
    holding("Bank FD (6 months)", 70.0, 21.9),
    holding("Bank FD (1 month)", 10.7, 3.4),
    holding("PPF Self", 15.86, 5.0),
    holding("PPF Daughter", 12.5, 3.9),
    holding("PF Employer", 4.9, 1.5),
    holding("Savings Account", 13.5, 4.2),
    holding("HDFC Life Insurance", 3.5, 1.1),
];

/// Slice colours for the composition chart, one per holding
pub const PORTFOLIO_COLORS: [&str; 13] = [
    "#1FB8CD", "#FFC185", "#B4413C", "#ECEBD5", "#5D878F", "#DB4545", "#D2BA4C", "#964325",
    "#944454", "#13343B", "#FF6B6B", "#4ECDC4", "#45B7D1",
];

const ALLOCATION: [AllocationCategory; 4] = [
    AllocationCategory {
        name: "Equity Funds",
        percentage: 39.0,
        breakdown: &[
            "Large Cap: 10%",
            "Mid Cap: 8%",
            "Small Cap: 5%",
            "Flexi Cap: 6%",
            "ELSS: 6%",
            "Hybrid: 4%",
        ],
    },
    AllocationCategory {
        name: "Debt Funds",
        percentage: 50.0,
        breakdown: &[
            "Short Term Debt: 20%",
            "Liquid: 20%",
            "Long Term Debt: 10%",
        ],
    },
    AllocationCategory {
        name: "Hybrid Funds",
        percentage: 10.0,
        breakdown: &[
            "DSP Dynamic Asset Allocation: 5%",
            "ICICI Balanced Advantage: 5%",
        ],
    },
    AllocationCategory {
        name: "Gold",
        percentage: 5.0,
        breakdown: &["Axis Gold Fund: 5%"],
    },
];

/// Segment colours for the allocation chart
pub const ALLOCATION_COLORS: [&str; 4] = ["#1FB8CD", "#FFC185", "#B4413C", "#5D878F"];

const PROJECTION: [ProjectionYear; 16] = [
    year(2024, 3.19, 0.0),
    year(2025, 3.61, 11.2),
    year(2026, 4.03, 11.2),
    year(2027, 4.60, 11.2),
    year(2028, 5.12, 11.2),
    year(2029, 5.68, 11.2),
    year(2030, 6.02, 10.0),
    year(2031, 6.61, 10.0),
    year(2032, 7.25, 10.0),
    year(2033, 6.71, 10.0),
    year(2034, 7.45, 10.0),
    year(2035, 12.62, 9.0),
    year(2036, 13.83, 9.0),
    year(2037, 15.14, 9.0),
    year(2038, 16.58, 9.0),
    year(2039, 18.14, 9.0),
];

pub fn portfolio_holdings() -> &'static [Holding] {
    &HOLDINGS
}

pub fn asset_allocation() -> &'static [AllocationCategory] {
    &ALLOCATION
}

pub fn growth_projection() -> &'static [ProjectionYear] {
    &PROJECTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LAKH;

    #[test]
    fn test_holdings_sum_to_total() {
        let total_lakhs: f64 = portfolio_holdings().iter().map(|h| h.value_lakhs).sum();
        assert!((total_lakhs * LAKH - TOTAL_PORTFOLIO_VALUE).abs() < 1.0);
        assert_eq!(portfolio_holdings().len(), PORTFOLIO_COLORS.len());
    }

    #[test]
    fn test_projection_covers_fifteen_years() {
        let years = growth_projection();
        assert_eq!(years.first().map(|y| y.year), Some(2024));
        assert_eq!(years.last().map(|y| y.year), Some(2039));
        assert!(years.windows(2).all(|w| w[1].year == w[0].year + 1));
    }

    #[test]
    fn test_allocation_categories() {
        let names: Vec<_> = asset_allocation().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Equity Funds", "Debt Funds", "Hybrid Funds", "Gold"]);
        assert_eq!(asset_allocation()[3].breakdown, &["Axis Gold Fund: 5%"]);
    }
}
