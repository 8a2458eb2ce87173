use crate::ayanamsa::AyanamsaSystem;
use crate::ephemeris::{Body, EclipticPosition, Ephemeris, GeoLocation, HouseFrame, HouseSystem};
use crate::error::EphemerisError;
use std::env;
use std::path::PathBuf;
use swisseph::swe::{calc_ut, houses_ex};
use swisseph::{AscMc, Cusp};

// FLG_SWIEPH (use Swiss Ephemeris files) | FLG_SPEED
const CALC_FLAGS: i32 = 2 | 256;

/// Swiss Ephemeris body codes. TRUE_NODE = 11.
fn swiss_body_code(body: Body) -> Option<u32> {
    match body {
        Body::Sun => Some(0),
        Body::Moon => Some(1),
        Body::Mercury => Some(2),
        Body::Venus => Some(3),
        Body::Mars => Some(4),
        Body::Jupiter => Some(5),
        Body::Saturn => Some(6),
        Body::Uranus => Some(7),
        Body::Neptune => Some(8),
        Body::Pluto => Some(9),
        Body::Rahu => Some(11),
        Body::Ketu => None,
    }
}

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    current_sidereal_mode: Option<AyanamsaSystem>,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        log::debug!("swiss ephemeris data at {}", path.display());
        Ok(Self {
            ephemeris_path: path,
            current_sidereal_mode: None,
        })
    }

    pub fn ephemeris_path(&self) -> &PathBuf {
        &self.ephemeris_path
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn body_position(&self, jd: f64, body: Body) -> Result<EclipticPosition, EphemerisError> {
        let code = swiss_body_code(body).ok_or_else(|| EphemerisError::CalculationFailed {
            body: body.name().to_string(),
            jd,
            message: "body has no ephemeris code".to_string(),
        })?;

        let result = calc_ut(jd, code, CALC_FLAGS as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body: body.name().to_string(),
                jd,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        Ok(EclipticPosition {
            lon: out[0],
            lat: out[1],
            distance: out[2],
            speed_lon: out[3],
        })
    }

    fn house_cusps(
        &self,
        jd: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, EphemerisError> {
        let (c, a) = houses_ex(jd, CALC_FLAGS, location.lat, location.lon, system.code() as i32);
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let frame = HouseFrame {
            cusps: [
                cusps.first, cusps.second, cusps.third, cusps.fourth,
                cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
                cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
            ],
            ascendant: ascmc.ascendant,
            midheaven: ascmc.mc,
        };

        if frame.cusps.iter().any(|c| !c.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite cusp for {:?} at lat {}", system, location.lat),
            });
        }
        Ok(frame)
    }

    fn set_sidereal_mode(&mut self, system: AyanamsaSystem) -> Result<(), EphemerisError> {
        // swisseph 0.1 exposes no set_sid_mode; the offset is derived from the
        // frame's reference epoch instead.
        self.current_sidereal_mode = Some(system);
        Ok(())
    }

    fn ayanamsa(&self, jd: f64) -> Result<f64, EphemerisError> {
        self.current_sidereal_mode
            .map(|system| system.mean_offset(jd))
            .ok_or_else(|| EphemerisError::ModeUnavailable {
                mode: "none".to_string(),
                message: "set_sidereal_mode must be called first".to_string(),
            })
    }
}
