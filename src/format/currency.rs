//! Rupee formatting with South Asian digit grouping

/// A rupee amount. Non-negative in practice; other values are formatted
/// best-effort.
pub type AmountValue = f64;

/// 10^5
pub const LAKH: AmountValue = 100_000.0;

/// 10^7
pub const CRORE: AmountValue = 10_000_000.0;

/// Currency symbol prefixed to every formatted amount
pub const RUPEE: &str = "₹";

/// Format an amount using crore / lakh units when it is large enough.
///
/// - `>= 1 Cr` renders as `₹3.19 Cr`
/// - `>= 1 L` renders as `₹15.00 L`
/// - anything smaller renders as a grouped integer, e.g. `₹45,000`
pub fn format_currency(amount: AmountValue) -> String {
    if amount >= CRORE {
        format!("{}{} Cr", RUPEE, fixed_2(amount / CRORE))
    } else if amount >= LAKH {
        format!("{}{} L", RUPEE, fixed_2(amount / LAKH))
    } else {
        format_rupees(amount)
    }
}

/// Two decimal places, with an exact half-cent rounded up (`1.125` -> `1.13`).
///
/// Values that only look like a tie in decimal (`1.005` is stored just
/// below it) round to their nearest neighbour as usual.
fn fixed_2(value: f64) -> String {
    let doubled = value * 200.0;
    let exact_tie = doubled.fract() == 0.0
        && doubled.rem_euclid(2.0) == 1.0
        && value.mul_add(200.0, -doubled) == 0.0;

    if exact_tie {
        format!("{:.2}", (doubled + 1.0) / 200.0)
    } else {
        format!("{:.2}", value)
    }
}

/// Format an amount as a grouped integer with the rupee prefix (`₹3,18,96,000`)
pub fn format_rupees(amount: AmountValue) -> String {
    format!("{}{}", RUPEE, group_indian(amount))
}

/// Group an amount's integer digits the South Asian way: the last three
/// digits, then pairs (`31896000` -> `3,18,96,000`).
///
/// Fractions are rounded to the nearest integer.
pub fn group_indian(amount: AmountValue) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_digits(&digits);

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::with_capacity(head.len() / 2 + 1);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_crores() {
        assert_eq!(format_currency(31_896_000.0), "₹3.19 Cr");
        assert_eq!(format_currency(10_000_000.0), "₹1.00 Cr");
        assert_eq!(format_currency(181_400_000.0), "₹18.14 Cr");
        assert_eq!(format_currency(10_005_000.0), "₹1.00 Cr");
        assert_eq!(format_currency(10_060_000.0), "₹1.01 Cr");
    }

    #[test]
    fn test_half_cent_rounds_up() {
        assert_eq!(format_currency(11_250_000.0), "₹1.13 Cr");
        assert_eq!(format_currency(112_500.0), "₹1.13 L");
        assert_eq!(format_currency(1_062_500.0), "₹10.63 L");
        assert_eq!(format_currency(1_087_500.0), "₹10.88 L");

        // 1.005 is stored just below the tie
        assert_eq!(format_currency(100_500.0), "₹1.00 L");
    }

    #[test]
    fn test_format_lakhs() {
        assert_eq!(format_currency(1_500_000.0), "₹15.00 L");
        assert_eq!(format_currency(100_000.0), "₹1.00 L");
        assert_eq!(format_currency(9_999_999.0), "₹100.00 L");
        assert_eq!(format_currency(100_001.0), "₹1.00 L");
        assert_eq!(format_currency(9_994_999.0), "₹99.95 L");
    }

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_currency(999.0), "₹999");
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(45_000.0), "₹45,000");
        assert_eq!(format_currency(99_999.0), "₹99,999");
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(999.0), "999");
        assert_eq!(group_indian(1_000.0), "1,000");
        assert_eq!(group_indian(12_345.0), "12,345");
        assert_eq!(group_indian(123_456.0), "1,23,456");
        assert_eq!(group_indian(31_896_000.0), "3,18,96,000");
        assert_eq!(group_indian(1_234_567_890.0), "1,23,45,67,890");
    }

    #[test]
    fn test_group_indian_best_effort() {
        assert_eq!(group_indian(-45_000.0), "-45,000");
        assert_eq!(group_indian(1_234.6), "1,235");
        assert_eq!(group_indian(-0.2), "0");
        assert_eq!(group_indian(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(31_896_000.0), "₹3,18,96,000");
        assert_eq!(format_rupees(500.0), "₹500");
    }
}
