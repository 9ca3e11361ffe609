//! Grading of reported GPS accuracy.

use serde::Serialize;

/// How trustworthy a device fix is, from its accuracy radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GpsAccuracy {
    /// Under 50 m.
    Excellent,
    /// Under 100 m.
    Good,
    /// Under 500 m.
    Fair,
    /// Everything else, including NaN.
    Poor,
}

impl GpsAccuracy {
    pub fn from_meters(accuracy_m: f64) -> Self {
        if accuracy_m < 50.0 {
            GpsAccuracy::Excellent
        } else if accuracy_m < 100.0 {
            GpsAccuracy::Good
        } else if accuracy_m < 500.0 {
            GpsAccuracy::Fair
        } else {
            GpsAccuracy::Poor
        }
    }

    /// True for fixes under 100 m.
    pub fn is_good(&self) -> bool {
        matches!(self, GpsAccuracy::Excellent | GpsAccuracy::Good)
    }

    /// Short hint for the user.
    pub fn message(&self) -> &'static str {
        match self {
            GpsAccuracy::Excellent => "Excellent GPS signal",
            GpsAccuracy::Good => "Good GPS signal",
            GpsAccuracy::Fair => "Weak GPS signal (try going outside)",
            GpsAccuracy::Poor => "Very weak signal - using approximate location",
        }
    }
}

#[cfg(test)]
mod accuracy_tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(GpsAccuracy::from_meters(0.0), GpsAccuracy::Excellent);
        assert_eq!(GpsAccuracy::from_meters(49.9), GpsAccuracy::Excellent);
        assert_eq!(GpsAccuracy::from_meters(50.0), GpsAccuracy::Good);
        assert_eq!(GpsAccuracy::from_meters(100.0), GpsAccuracy::Fair);
        assert_eq!(GpsAccuracy::from_meters(499.0), GpsAccuracy::Fair);
        assert_eq!(GpsAccuracy::from_meters(500.0), GpsAccuracy::Poor);
        assert_eq!(GpsAccuracy::from_meters(f64::NAN), GpsAccuracy::Poor);
    }

    #[test]
    fn test_is_good() {
        assert!(GpsAccuracy::Excellent.is_good());
        assert!(GpsAccuracy::Good.is_good());
        assert!(!GpsAccuracy::Fair.is_good());
        assert!(!GpsAccuracy::Poor.is_good());
        assert_eq!(GpsAccuracy::Fair.message(), "Weak GPS signal (try going outside)");
    }
}
