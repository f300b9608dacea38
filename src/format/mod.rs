//! Amount Formatting
//!
//! Pure functions turning rupee amounts into display strings and goal
//! progress into rounded percentages.
//!
//! ## Example
//!
//! ```rust
//! use folio::format::{calculate_progress_percentage, format_currency};
//!
//! assert_eq!(format_currency(31_896_000.0), "₹3.19 Cr");
//! assert_eq!(format_currency(1_500_000.0), "₹15.00 L");
//! assert_eq!(calculate_progress_percentage(58.0, 1000.0).unwrap(), 5.8);
//! ```

pub mod currency;
pub mod progress;

pub use currency::{
    format_currency, format_rupees, group_indian, AmountValue, CRORE, LAKH, RUPEE,
};
pub use progress::calculate_progress_percentage;
