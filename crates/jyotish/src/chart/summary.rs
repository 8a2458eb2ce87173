use crate::chart::types::{ChartSummary, PlanetPosition};
use crate::ephemeris::Body;
use crate::zodiac::ZodiacSign;
use std::collections::BTreeMap;

pub struct ChartSummarizer;

impl ChartSummarizer {
    /// `ascendant_sign` is the sign of the first house.
    pub fn summarize(
        planets: &[PlanetPosition],
        ascendant_sign: Option<ZodiacSign>,
    ) -> ChartSummary {
        let mut planets_by_sign = BTreeMap::new();
        let mut planets_by_house = BTreeMap::new();
        for planet in planets {
            *planets_by_sign.entry(planet.sign).or_insert(0) += 1;
            *planets_by_house.entry(planet.house).or_insert(0) += 1;
        }

        let sign_of = |body: Body| planets.iter().find(|p| p.body == body).map(|p| p.sign);

        ChartSummary {
            dominant_sign: dominant(planets.iter().map(|p| p.sign), &planets_by_sign),
            dominant_house: dominant(planets.iter().map(|p| p.house), &planets_by_house),
            retrograde_count: planets.iter().filter(|p| p.retrograde).count(),
            sun_sign: sign_of(Body::Sun),
            moon_sign: sign_of(Body::Moon),
            ascendant_sign,
            planets_by_sign,
            planets_by_house,
        }
    }
}

/// Highest-count key. Ties go to the key first seen in chart order.
fn dominant<K: Ord + Copy>(
    encounter_order: impl Iterator<Item = K>,
    counts: &BTreeMap<K, usize>,
) -> Option<K> {
    let mut best: Option<(K, usize)> = None;
    for key in encounter_order {
        let count = counts.get(&key).copied().unwrap_or(0);
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::degree_in_sign;

    fn planet(body: Body, longitude: f64, house: u8, retrograde: bool) -> PlanetPosition {
        PlanetPosition {
            body,
            tropical_longitude: longitude,
            longitude,
            latitude: 0.0,
            distance: 1.0,
            speed: if retrograde { -0.1 } else { 0.1 },
            retrograde,
            sign: ZodiacSign::from_longitude(longitude),
            degree: degree_in_sign(longitude),
            house,
        }
    }

    #[test]
    fn test_histograms_and_dominance() {
        let planets = vec![
            planet(Body::Sun, 40.0, 2, false),
            planet(Body::Moon, 100.0, 4, false),
            planet(Body::Mars, 45.0, 2, true),
            planet(Body::Venus, 110.0, 4, false),
            planet(Body::Saturn, 50.0, 3, true),
        ];
        let summary = ChartSummarizer::summarize(&planets, Some(ZodiacSign::Aries));
        assert_eq!(summary.planets_by_sign[&ZodiacSign::Taurus], 3);
        assert_eq!(summary.planets_by_sign[&ZodiacSign::Cancer], 2);
        assert_eq!(summary.dominant_sign, Some(ZodiacSign::Taurus));
        // houses 2 and 4 tie; 2 is seen first
        assert_eq!(summary.dominant_house, Some(2));
        assert_eq!(summary.retrograde_count, 2);
        assert_eq!(summary.sun_sign, Some(ZodiacSign::Taurus));
        assert_eq!(summary.moon_sign, Some(ZodiacSign::Cancer));
        assert_eq!(summary.ascendant_sign, Some(ZodiacSign::Aries));
        assert_eq!(summary.planets_by_house.values().sum::<usize>(), planets.len());
    }

    #[test]
    fn test_tie_follows_encounter_not_key_order() {
        let planets = vec![
            planet(Body::Sun, 200.0, 9, false),
            planet(Body::Moon, 10.0, 1, false),
        ];
        let summary = ChartSummarizer::summarize(&planets, None);
        assert_eq!(summary.dominant_sign, Some(ZodiacSign::Libra));
        assert_eq!(summary.dominant_house, Some(9));
        assert_eq!(summary.ascendant_sign, None);
    }

    #[test]
    fn test_empty_chart() {
        let summary = ChartSummarizer::summarize(&[], None);
        assert_eq!(summary.dominant_sign, None);
        assert_eq!(summary.retrograde_count, 0);
    }
}
