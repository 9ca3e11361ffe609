//! Walking-time estimates and distance labels.

use crate::config::WALKING_SPEED_MPS;
use crate::path::WalkingTime;

/// Estimates walking time at the default pace of 1.4 m/s.
///
/// Both the seconds and the minutes are rounded half away from zero:
/// `seconds = round(d / 1.4)`, `minutes = round(seconds / 60)`.
pub fn estimate_walking_time(distance_m: f64) -> WalkingTime {
    estimate_walking_time_at(distance_m, WALKING_SPEED_MPS)
}

/// Estimates walking time at a custom pace.
///
/// An infinite distance saturates to `i64::MAX` seconds; NaN maps to 0.
pub fn estimate_walking_time_at(distance_m: f64, speed_mps: f64) -> WalkingTime {
    let seconds = (distance_m / speed_mps).round() as i64;
    WalkingTime::from_seconds(seconds)
}

/// Formats a distance for the route panel, e.g. `"1.25 km"`.
pub fn format_distance(distance_m: f64) -> String {
    format!("{:.2} km", distance_m / 1000.0)
}

#[cfg(test)]
mod walking_tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_zero_distance() {
        let time = estimate_walking_time(0.0);
        assert_eq!(time.seconds, 0);
        assert_eq!(time.minutes, 0);
        assert_eq!(time.label, "0 min");
    }

    #[test]
    fn test_one_minute() {
        let time = estimate_walking_time(84.0);
        assert_eq!(time.seconds, 60);
        assert_eq!(time.minutes, 1);
        assert_eq!(time.label, "1 min");
        assert_eq!(time.to_string(), "1 min");
    }

    /// 30 s is exactly half a minute and rounds up.
    #[test]
    fn test_half_minute_rounds_away_from_zero() {
        let time = estimate_walking_time(42.0);
        assert_eq!(time.seconds, 30);
        assert_eq!(time.minutes, 1);

        let time = estimate_walking_time(126.0);
        assert_eq!(time.seconds, 90);
        assert_eq!(time.minutes, 2);
    }

    #[test]
    fn test_short_walk_rounds_to_zero_minutes() {
        let time = estimate_walking_time(28.0);
        assert_eq!(time.seconds, 20);
        assert_eq!(time.minutes, 0);
        assert_eq!(time.label, "0 min");
    }

    #[test]
    fn test_custom_speed() {
        let time = estimate_walking_time_at(600.0, 1.0);
        assert_eq!(time.seconds, 600);
        assert_eq!(time.minutes, 10);
        assert_eq!(time.label, "10 min");
    }

    #[test]
    fn test_infinite_distance_saturates() {
        let time = estimate_walking_time(f64::INFINITY);
        assert_eq!(time.seconds, i64::MAX);
        assert!(time
            .arrival_at(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap())
            .is_none());
    }

    #[test]
    fn test_arrival() {
        let departure = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let time = estimate_walking_time(840.0);
        assert_eq!(time.seconds, 600);
        assert_eq!(
            time.arrival_at(departure),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 8, 10, 0).unwrap())
        );
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0.00 km");
        assert_eq!(format_distance(1250.0), "1.25 km");
        assert_eq!(format_distance(87.4), "0.09 km");
    }
}
