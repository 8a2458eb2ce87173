mod common;

use approx::assert_abs_diff_eq;
use common::{fixture, jd_for, FrameBuilder};
use jyotish::ayanamsa::AyanamsaSystem;
use jyotish::chart::{ChartCalculator, ChartRequest};
use jyotish::ephemeris::{Body, Ephemeris, FixtureEphemeris};
use jyotish::error::{ChartError, EphemerisError, InvalidInputError};
use jyotish::time::Warning;
use jyotish::zodiac::ZodiacSign;
use std::sync::Arc;

fn request() -> ChartRequest {
    ChartRequest::new("1990-05-15", "14:30", 28.6139, 77.2090).with_name("Asha")
}

fn calculator() -> ChartCalculator<FixtureEphemeris> {
    ChartCalculator::new(fixture(vec![FrameBuilder::at("1990-05-15", "14:30").build()]))
}

#[test]
fn test_chart_has_twelve_bodies_in_order() {
    let chart = calculator().calculate(&request()).unwrap();
    let bodies: Vec<Body> = chart.planets.iter().map(|p| p.body).collect();
    assert_eq!(bodies.len(), 12);
    assert_eq!(bodies[0], Body::Sun);
    assert_eq!(&bodies[10..], &[Body::Ketu, Body::Rahu]);
    assert_eq!(chart.houses.len(), 12);
    assert_eq!(chart.name.as_deref(), Some("Asha"));
}

#[test]
fn test_sidereal_positions_and_houses() {
    let chart = calculator().calculate(&request()).unwrap();

    let sun = chart.planet(Body::Sun).unwrap();
    assert_abs_diff_eq!(sun.longitude, 40.0, epsilon = 1e-6);
    assert_eq!(sun.sign, ZodiacSign::Taurus);
    assert_abs_diff_eq!(sun.degree, 10.0, epsilon = 1e-6);
    assert_eq!(sun.house, 2);

    let moon = chart.moon().unwrap();
    assert_eq!(moon.sign, ZodiacSign::Cancer);
    assert_eq!(moon.house, 4);

    let expected = AyanamsaSystem::Lahiri.mean_offset(chart.julian_day());
    assert_abs_diff_eq!(chart.ayanamsa_value, expected, epsilon = 1e-12);
    assert_abs_diff_eq!(
        sun.tropical_longitude - sun.longitude,
        expected,
        epsilon = 1e-6
    );
}

#[test]
fn test_ketu_opposes_rahu() {
    let chart = calculator().calculate(&request()).unwrap();
    let rahu = chart.planet(Body::Rahu).unwrap();
    let ketu = chart.planet(Body::Ketu).unwrap();
    assert_abs_diff_eq!(ketu.longitude, 20.0, epsilon = 1e-6);
    assert_abs_diff_eq!(ketu.latitude, -rahu.latitude);
    assert_abs_diff_eq!(ketu.speed, -rahu.speed);
    assert!(ketu.retrograde);
    assert_eq!(rahu.house, 7);
    assert_eq!(ketu.house, 1);
}

#[test]
fn test_summary() {
    let chart = calculator().calculate(&request()).unwrap();
    let summary = &chart.summary;
    assert_eq!(summary.dominant_sign, Some(ZodiacSign::Taurus));
    assert_eq!(summary.dominant_house, Some(2));
    // Mercury, Saturn, Pluto, Rahu, Ketu
    assert_eq!(summary.retrograde_count, 5);
    assert_eq!(summary.sun_sign, Some(ZodiacSign::Taurus));
    assert_eq!(summary.moon_sign, Some(ZodiacSign::Cancer));
    assert_eq!(summary.ascendant_sign, Some(ZodiacSign::Aries));
    assert_eq!(summary.planets_by_sign.values().sum::<usize>(), 12);
}

#[test]
fn test_angles_and_cusp_rulers() {
    let chart = calculator().calculate(&request()).unwrap();
    assert_abs_diff_eq!(chart.angles.ascendant, 5.0, epsilon = 1e-6);
    assert_abs_diff_eq!(chart.angles.descendant, 185.0, epsilon = 1e-6);
    assert_abs_diff_eq!(chart.angles.midheaven, 275.0, epsilon = 1e-6);
    assert_abs_diff_eq!(chart.angles.imum_coeli, 95.0, epsilon = 1e-6);
    assert_eq!(chart.houses[0].ruler, Body::Mars);
    assert_eq!(chart.houses[6].sign, ZodiacSign::Libra);
}

#[test]
fn test_aspects_and_nakshatras_attached() {
    let chart = calculator().calculate(&request()).unwrap();
    // Sun 40, Moon 100
    assert!(chart
        .aspects
        .iter()
        .any(|a| a.from == Body::Sun && a.to == Body::Moon && a.exact_angle == 60.0));
    assert_eq!(chart.nakshatras.len(), 12);
    let moon = chart
        .nakshatras
        .iter()
        .find(|n| n.body == Body::Moon)
        .unwrap();
    // 100 degrees falls in Pushya (93.33 - 106.67)
    assert_eq!(moon.nakshatra_index, 8);
}

#[test]
fn test_house_wraparound_in_chart() {
    let frame = FrameBuilder::at("1990-05-15", "14:30")
        .ascendant(350.0)
        .body(Body::Venus, 359.0)
        .body(Body::Mercury, 1.0)
        .build();
    let chart = ChartCalculator::new(fixture(vec![frame]))
        .calculate(&request())
        .unwrap();
    assert_eq!(chart.planet(Body::Venus).unwrap().house, 1);
    assert_eq!(chart.planet(Body::Mercury).unwrap().house, 1);
    assert_eq!(chart.planet(Body::Sun).unwrap().house, 2);
}

#[test]
fn test_ascendant_sign_follows_first_house() {
    let frame = FrameBuilder::at("1990-05-15", "14:30")
        .first_cusp(0.5)
        .ascendant(38.0)
        .build();
    let chart = ChartCalculator::new(fixture(vec![frame]))
        .calculate(&request().with_house_system("whole_sign"))
        .unwrap();
    assert_eq!(chart.houses[0].sign, ZodiacSign::Aries);
    assert_eq!(ZodiacSign::from_longitude(chart.angles.ascendant), ZodiacSign::Taurus);
    assert_eq!(chart.summary.ascendant_sign, Some(ZodiacSign::Aries));
}

#[test]
fn test_invalid_input_never_reaches_adapter() {
    let calc = calculator();
    let err = calc
        .calculate(&ChartRequest::new("1990-05-15", "14:30", 91.0, 0.0))
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::InvalidInput(InvalidInputError::Latitude { .. })
    ));
    let mode = calc
        .ephemeris()
        .with(|adapter| Ok(adapter.current_sidereal_mode()))
        .unwrap();
    assert_eq!(mode, None);
}

#[test]
fn test_unknown_selector_rejected() {
    let err = calculator()
        .calculate(&request().with_house_system("topocentric"))
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::InvalidInput(InvalidInputError::HouseSystem { .. })
    ));
}

#[test]
fn test_adapter_failure_fails_whole_chart() {
    let frame = FrameBuilder::at("1990-05-15", "14:30").without(Body::Pluto).build();
    let err = ChartCalculator::new(fixture(vec![frame]))
        .calculate(&request())
        .unwrap_err();
    match err {
        ChartError::Ephemeris(EphemerisError::CalculationFailed { body, .. }) => {
            assert_eq!(body, "Pluto")
        }
        other => panic!("unexpected error {:?}", other),
    }

    let err = ChartCalculator::new(fixture(vec![]))
        .calculate(&request())
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::Ephemeris(EphemerisError::HouseCalculationFailed { .. })
    ));
}

#[test]
fn test_dst_warning_carried_on_chart() {
    // 01:30 happens twice in New York that night; standard time is 06:30 UTC
    let frame = FrameBuilder::at("2020-11-01", "06:30").build();
    let chart = ChartCalculator::new(fixture(vec![frame]))
        .calculate(
            &ChartRequest::new("2020-11-01", "01:30", 40.7128, -74.0060)
                .with_timezone("America/New_York"),
        )
        .unwrap();
    assert_abs_diff_eq!(chart.julian_day(), jd_for("2020-11-01", "06:30"), epsilon = 1e-9);
    assert!(matches!(
        chart.warnings(),
        [Warning::DstAmbiguous { timezone }] if timezone == "America/New_York"
    ));
}

#[test]
fn test_concurrent_charts_keep_their_own_frame() {
    let jd = jd_for("1990-05-15", "14:30");
    let calc = Arc::new(calculator());
    let systems = [
        AyanamsaSystem::Lahiri,
        AyanamsaSystem::Raman,
        AyanamsaSystem::Krishnamurti,
        AyanamsaSystem::Yukteshwar,
    ];

    std::thread::scope(|scope| {
        for system in systems {
            let calc = Arc::clone(&calc);
            scope.spawn(move || {
                for _ in 0..25 {
                    let chart = calc
                        .calculate(&request().with_ayanamsa(system.slug()))
                        .unwrap();
                    assert_eq!(chart.ayanamsa, system);
                    assert_abs_diff_eq!(
                        chart.ayanamsa_value,
                        system.mean_offset(jd),
                        epsilon = 1e-12
                    );
                }
            });
        }
    });

    let last = calc
        .ephemeris()
        .with(|adapter| adapter.ayanamsa(jd))
        .unwrap();
    assert!(last > 20.0);
}

#[test]
fn test_bundled_sample_fixture() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/ephemeris.json");
    let calculator = ChartCalculator::new(FixtureEphemeris::from_path(&path).unwrap());
    let chart = calculator
        .calculate(&request().with_timezone("Asia/Kolkata"))
        .unwrap();
    assert_eq!(chart.planets.len(), 12);
    assert_eq!(chart.nakshatras.len(), 12);
    assert!(chart.warnings().is_empty());
    let moon = chart.moon().unwrap();
    assert!(moon.longitude < 329.84 && moon.longitude > 300.0);
}
