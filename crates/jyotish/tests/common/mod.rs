#![allow(dead_code)]

use jyotish::ayanamsa::AyanamsaSystem;
use jyotish::ephemeris::{Body, EclipticPosition, FixtureEphemeris, FixtureFrame, HouseFrame};
use jyotish::time::TimeResolver;
use jyotish::zodiac::normalize_degrees;
use std::collections::BTreeMap;

/// Sidereal longitude and daily speed of every queried body.
pub const DEFAULT_BODIES: [(Body, f64, f64); 11] = [
    (Body::Sun, 40.0, 0.98),
    (Body::Moon, 100.0, 13.2),
    (Body::Mercury, 55.0, -0.4),
    (Body::Venus, 70.0, 1.2),
    (Body::Mars, 130.0, 0.6),
    (Body::Jupiter, 250.0, 0.1),
    (Body::Saturn, 290.0, -0.05),
    (Body::Uranus, 310.0, 0.03),
    (Body::Neptune, 320.0, 0.02),
    (Body::Pluto, 260.0, -0.01),
    (Body::Rahu, 200.0, -0.05),
];

pub fn jd_for(date: &str, time: &str) -> f64 {
    TimeResolver::resolve(date, time, None)
        .expect("valid fixture date")
        .julian_day
}

/// Builds frames from sidereal (Lahiri) placements so tests can reason in
/// the sidereal zodiac directly.
pub struct FrameBuilder {
    jd: f64,
    bodies: BTreeMap<Body, (f64, f64)>,
    ascendant: f64,
    first_cusp: Option<f64>,
}

impl FrameBuilder {
    pub fn at(date: &str, time: &str) -> Self {
        Self {
            jd: jd_for(date, time),
            bodies: DEFAULT_BODIES
                .iter()
                .map(|(body, lon, speed)| (*body, (*lon, *speed)))
                .collect(),
            ascendant: 5.0,
            first_cusp: None,
        }
    }

    pub fn body(mut self, body: Body, sidereal: f64) -> Self {
        let speed = self.bodies.get(&body).map(|(_, s)| *s).unwrap_or(1.0);
        self.bodies.insert(body, (sidereal, speed));
        self
    }

    pub fn without(mut self, body: Body) -> Self {
        self.bodies.remove(&body);
        self
    }

    /// Equal houses starting at this sidereal ascendant.
    pub fn ascendant(mut self, sidereal: f64) -> Self {
        self.ascendant = sidereal;
        self
    }

    /// Start the equal-house cusps here instead of at the ascendant.
    pub fn first_cusp(mut self, sidereal: f64) -> Self {
        self.first_cusp = Some(sidereal);
        self
    }

    pub fn build(self) -> FixtureFrame {
        let ayanamsa = AyanamsaSystem::Lahiri.mean_offset(self.jd);
        let tropical = |sidereal: f64| normalize_degrees(sidereal + ayanamsa);

        let bodies = self
            .bodies
            .iter()
            .map(|(body, (lon, speed))| {
                (
                    *body,
                    EclipticPosition {
                        lon: tropical(*lon),
                        lat: 0.5,
                        distance: 1.0,
                        speed_lon: *speed,
                    },
                )
            })
            .collect();

        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = tropical(self.first_cusp.unwrap_or(self.ascendant) + i as f64 * 30.0);
        }

        FixtureFrame {
            jd: self.jd,
            bodies,
            houses: HouseFrame {
                cusps,
                ascendant: tropical(self.ascendant),
                midheaven: tropical(self.ascendant + 270.0),
            },
        }
    }
}

pub fn fixture(frames: Vec<FixtureFrame>) -> FixtureEphemeris {
    FixtureEphemeris::new(frames)
}
