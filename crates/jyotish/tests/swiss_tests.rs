#![cfg(feature = "swisseph")]

use jyotish::chart::{ChartCalculator, ChartRequest};
use jyotish::ephemeris::{Body, SwissEphemerisAdapter};

// Needs Swiss Ephemeris data files under SWISS_EPHEMERIS_PATH.

#[test]
#[ignore]
fn test_swiss_chart_pipeline() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let chart = ChartCalculator::new(adapter)
        .calculate(
            &ChartRequest::new("1990-05-15", "14:30", 28.6139, 77.2090)
                .with_timezone("Asia/Kolkata"),
        )
        .unwrap();
    assert_eq!(chart.planets.len(), 12);
    let sun = chart.planet(Body::Sun).unwrap();
    // Mid-May sun is in sidereal Taurus
    assert_eq!(sun.sign.name(), "Taurus");
}

#[test]
#[ignore]
fn test_swiss_missing_path() {
    let result = SwissEphemerisAdapter::new(Some("/nonexistent/ephe".into()));
    assert!(result.is_err());
}
