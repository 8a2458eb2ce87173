use crate::chart::houses::house_for_longitude;
use crate::chart::types::PlanetPosition;
use crate::ephemeris::{Body, EclipticPosition};
use crate::zodiac::{degree_in_sign, normalize_degrees, ZodiacSign};

/// Turns tropical adapter output into sidereal, house-placed positions.
pub struct PlanetPositionResolver<'a> {
    ayanamsa: f64,
    cusps: &'a [f64; 12],
}

impl<'a> PlanetPositionResolver<'a> {
    /// `cusps` are sidereal.
    pub fn new(ayanamsa: f64, cusps: &'a [f64; 12]) -> Self {
        Self { ayanamsa, cusps }
    }

    pub fn resolve(&self, body: Body, position: &EclipticPosition) -> PlanetPosition {
        let tropical = normalize_degrees(position.lon);
        let sidereal = normalize_degrees(tropical - self.ayanamsa);
        let house = house_for_longitude(sidereal, self.cusps);
        log::trace!("{} tropical {:.4} sidereal {:.4} house {}", body, tropical, sidereal, house);
        PlanetPosition {
            body,
            tropical_longitude: tropical,
            longitude: sidereal,
            latitude: position.lat,
            distance: position.distance,
            speed: position.speed_lon,
            retrograde: position.speed_lon < 0.0,
            sign: ZodiacSign::from_longitude(sidereal),
            degree: degree_in_sign(sidereal),
            house,
        }
    }

    /// Ketu, derived from Rahu. Always retrograde.
    pub fn south_node(&self, rahu: &PlanetPosition) -> PlanetPosition {
        let longitude = normalize_degrees(rahu.longitude + 180.0);
        PlanetPosition {
            body: Body::Ketu,
            tropical_longitude: normalize_degrees(rahu.tropical_longitude + 180.0),
            longitude,
            latitude: -rahu.latitude,
            distance: rahu.distance,
            speed: -rahu.speed,
            retrograde: true,
            sign: ZodiacSign::from_longitude(longitude),
            degree: degree_in_sign(longitude),
            house: house_for_longitude(longitude, self.cusps),
        }
    }

    /// Resolve queried bodies in order. Ketu is placed just ahead of Rahu.
    pub fn resolve_all<I>(&self, positions: I) -> Vec<PlanetPosition>
    where
        I: IntoIterator<Item = (Body, EclipticPosition)>,
    {
        let mut planets = Vec::with_capacity(12);
        for (body, position) in positions {
            let resolved = self.resolve(body, &position);
            if body == Body::Rahu {
                planets.push(self.south_node(&resolved));
            }
            planets.push(resolved);
        }
        planets
    }
}
