//! Goal progress percentages

use super::AmountValue;
use crate::error::{DashboardError, DashboardResult};

/// Percentage of `target` reached by `current`, rounded to one decimal place.
///
/// A zero target is rejected with [`DashboardError::InvalidTarget`] rather
/// than reported as 0%.
pub fn calculate_progress_percentage(
    current: AmountValue,
    target: AmountValue,
) -> DashboardResult<f64> {
    if target == 0.0 {
        return Err(DashboardError::InvalidTarget);
    }

    Ok(((current / target) * 100.0 * 10.0).round() / 10.0)
}
