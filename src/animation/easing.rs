//! Easing curves

use serde::Serialize;

/// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// No easing
    Linear,
    /// `1 - (1 - p)^4`: fast start, long deceleration
    #[default]
    EaseOutQuart,
}

impl Easing {
    /// Apply the curve. Input is clamped to `[0, 1]`.
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::EaseOutQuart => 1.0 - (1.0 - p).powi(4),
        }
    }

    /// Name used by chart configurations
    pub fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOutQuart => "easeOutQuart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_quart_endpoints() {
        assert_eq!(Easing::EaseOutQuart.apply(0.0), 0.0);
        assert_eq!(Easing::EaseOutQuart.apply(1.0), 1.0);
        assert_eq!(Easing::EaseOutQuart.apply(0.5), 0.9375);
    }

    #[test]
    fn test_ease_out_quart_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..=100 {
            let eased = Easing::EaseOutQuart.apply(step as f64 / 100.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::EaseOutQuart.apply(1.5), 1.0);
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
    }
}
