//! Progress percentage and color-tier mapping.
//!
//! # Responsibility
//! - Derive a completion percentage from completed/total counts.
//! - Map a percentage onto the four-tier progress color scale.
//!
//! # Invariants
//! - An empty collection is 0% complete, never NaN.
//! - Tier boundaries are inclusive lower bounds of the higher bucket:
//!   exactly 25 is Orange, exactly 75 is Green.

use serde::{Deserialize, Serialize};

/// Completion percentage in `[0, 100]`.
///
/// Guards the `total == 0` case explicitly so an empty class reports 0
/// instead of a NaN that would poison downstream comparisons.
pub fn progress_percent(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(completed) / f64::from(total) * 100.0
}

/// Progress bar color tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressColor {
    /// Less than 25% complete.
    Red,
    /// 25% up to (excluding) 50%.
    Orange,
    /// 50% up to (excluding) 75%.
    Yellow,
    /// 75% and above.
    Green,
}

impl ProgressColor {
    /// Maps a percentage onto its tier. Boundary values land in the upper
    /// bucket.
    pub fn for_percent(percent: f64) -> Self {
        if percent < 25.0 {
            Self::Red
        } else if percent < 50.0 {
            Self::Orange
        } else if percent < 75.0 {
            Self::Yellow
        } else {
            Self::Green
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{progress_percent, ProgressColor};

    #[test]
    fn zero_total_is_zero_percent() {
        let percent = progress_percent(0, 0);
        assert_eq!(percent, 0.0);
        assert!(!percent.is_nan());
    }

    #[test]
    fn half_complete_is_fifty_percent() {
        assert_eq!(progress_percent(2, 4), 50.0);
    }

    #[test]
    fn tier_boundaries_round_up() {
        assert_eq!(ProgressColor::for_percent(24.9), ProgressColor::Red);
        assert_eq!(ProgressColor::for_percent(25.0), ProgressColor::Orange);
        assert_eq!(ProgressColor::for_percent(49.999), ProgressColor::Orange);
        assert_eq!(ProgressColor::for_percent(50.0), ProgressColor::Yellow);
        assert_eq!(ProgressColor::for_percent(74.999), ProgressColor::Yellow);
        assert_eq!(ProgressColor::for_percent(75.0), ProgressColor::Green);
        assert_eq!(ProgressColor::for_percent(100.0), ProgressColor::Green);
    }

    #[test]
    fn color_serializes_snake_case() {
        let json = serde_json::to_string(&ProgressColor::Orange).unwrap();
        assert_eq!(json, "\"orange\"");
    }
}
