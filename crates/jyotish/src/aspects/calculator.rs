use crate::aspects::types::{Aspect, AspectDefinition, AspectKind};
use crate::chart::PlanetPosition;
use std::collections::HashMap;

/// Aspect table in match order. The first row within orb wins.
pub const ASPECT_TABLE: [AspectDefinition; 9] = [
    AspectDefinition { kind: AspectKind::Conjunction, angle: 0.0, orb: 8.0 },
    AspectDefinition { kind: AspectKind::Sextile, angle: 60.0, orb: 6.0 },
    AspectDefinition { kind: AspectKind::Square, angle: 90.0, orb: 8.0 },
    AspectDefinition { kind: AspectKind::Trine, angle: 120.0, orb: 8.0 },
    AspectDefinition { kind: AspectKind::Opposition, angle: 180.0, orb: 8.0 },
    AspectDefinition { kind: AspectKind::Quincunx, angle: 150.0, orb: 3.0 },
    AspectDefinition { kind: AspectKind::Semisextile, angle: 30.0, orb: 2.0 },
    AspectDefinition { kind: AspectKind::Semisquare, angle: 45.0, orb: 2.0 },
    AspectDefinition { kind: AspectKind::Sesquiquadrate, angle: 135.0, orb: 2.0 },
];

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Aspect calculator
#[derive(Debug, Clone)]
pub struct AspectCalculator {
    table: Vec<AspectDefinition>,
}

impl AspectCalculator {
    pub fn new() -> Self {
        Self {
            table: ASPECT_TABLE.to_vec(),
        }
    }

    /// Replace orbs per aspect kind. Row order is unchanged.
    pub fn with_orbs(orbs: &HashMap<AspectKind, f64>) -> Self {
        let table = ASPECT_TABLE
            .iter()
            .map(|def| AspectDefinition {
                orb: orbs.get(&def.kind).copied().unwrap_or(def.orb),
                ..*def
            })
            .collect();
        Self { table }
    }

    pub fn table(&self) -> &[AspectDefinition] {
        &self.table
    }

    /// Aspects between every unordered pair of bodies in one chart.
    pub fn compute_chart_aspects(&self, planets: &[PlanetPosition]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..planets.len() {
            for j in (i + 1)..planets.len() {
                if let Some(aspect) = self.aspect_between(&planets[i], &planets[j]) {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }

    /// Aspects from each body of chart A to each body of chart B, skipping
    /// a body paired with its own counterpart.
    pub fn compute_inter_chart_aspects(
        &self,
        planets_a: &[PlanetPosition],
        planets_b: &[PlanetPosition],
    ) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for p1 in planets_a {
            for p2 in planets_b {
                if p1.body == p2.body {
                    continue;
                }
                if let Some(aspect) = self.aspect_between(p1, p2) {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }

    fn aspect_between(&self, p1: &PlanetPosition, p2: &PlanetPosition) -> Option<Aspect> {
        let (def, separation, orb) = self.calculate_aspect(p1.longitude, p2.longitude)?;
        Some(Aspect {
            from: p1.body,
            to: p2.body,
            kind: def.kind,
            exact_angle: def.angle,
            separation,
            orb,
            applying: is_applying(p1.speed, p2.speed),
        })
    }

    /// First table row whose orb admits the separation of the two longitudes.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<(AspectDefinition, f64, f64)> {
        let separation = angular_separation(lon1, lon2);
        self.table.iter().find_map(|def| {
            let orb = (separation - def.angle).abs();
            (orb <= def.orb).then_some((*def, separation, orb))
        })
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Speed-only heuristic: the faster body is taken to be closing in.
fn is_applying(speed1: f64, speed2: f64) -> bool {
    speed1 > speed2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::Body;
    use crate::zodiac::{degree_in_sign, ZodiacSign};

    fn planet(body: Body, longitude: f64, speed: f64) -> PlanetPosition {
        PlanetPosition {
            body,
            tropical_longitude: longitude,
            longitude,
            latitude: 0.0,
            distance: 1.0,
            speed,
            retrograde: speed < 0.0,
            sign: ZodiacSign::from_longitude(longitude),
            degree: degree_in_sign(longitude),
            house: 1,
        }
    }

    #[test]
    fn test_separation_wraps() {
        assert!((angular_separation(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((angular_separation(0.0, 180.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_match_wins() {
        let calc = AspectCalculator::new();
        let (def, _, orb) = calc.calculate_aspect(10.0, 15.0).unwrap();
        assert_eq!(def.kind, AspectKind::Conjunction);
        assert!((orb - 5.0).abs() < 1e-9);
        let (def, _, _) = calc.calculate_aspect(0.0, 55.0).unwrap();
        assert_eq!(def.kind, AspectKind::Sextile);
        // quincunx orb is 3
        assert!(calc.calculate_aspect(0.0, 145.0).is_none());
        let (def, _, _) = calc.calculate_aspect(0.0, 148.0).unwrap();
        assert_eq!(def.kind, AspectKind::Quincunx);
    }

    #[test]
    fn test_chart_aspects_pairs_once() {
        let calc = AspectCalculator::new();
        let planets = vec![
            planet(Body::Sun, 10.0, 1.0),
            planet(Body::Moon, 130.0, 13.0),
            planet(Body::Mars, 100.0, 0.5),
        ];
        let aspects = calc.compute_chart_aspects(&planets);
        let trine = aspects.iter().find(|a| a.kind == AspectKind::Trine).unwrap();
        assert_eq!((trine.from, trine.to), (Body::Sun, Body::Moon));
        assert!(!trine.applying);
        let square = aspects.iter().find(|a| a.kind == AspectKind::Square).unwrap();
        assert_eq!((square.from, square.to), (Body::Sun, Body::Mars));
        assert!(square.applying);
        assert!(square.is_exact());
    }

    #[test]
    fn test_inter_chart_skips_same_body() {
        let calc = AspectCalculator::new();
        let a = vec![planet(Body::Sun, 10.0, 1.0)];
        let b = vec![planet(Body::Sun, 10.0, 1.0), planet(Body::Venus, 190.0, 1.2)];
        let aspects = calc.compute_inter_chart_aspects(&a, &b);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].kind, AspectKind::Opposition);
        assert_eq!(aspects[0].to, Body::Venus);
    }

    #[test]
    fn test_orb_overrides_keep_order() {
        let mut orbs = HashMap::new();
        orbs.insert(AspectKind::Conjunction, 2.0);
        let calc = AspectCalculator::with_orbs(&orbs);
        assert_eq!(calc.table()[0].orb, 2.0);
        assert_eq!(calc.table()[1].kind, AspectKind::Sextile);
        assert!(calc.calculate_aspect(0.0, 5.0).is_none());
    }
}
