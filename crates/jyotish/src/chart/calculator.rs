use crate::aspects::AspectCalculator;
use crate::ayanamsa::AyanamsaCalculator;
use crate::chart::houses::{build_house_cusps, cusp_longitudes};
use crate::chart::planets::PlanetPositionResolver;
use crate::chart::request::{ChartRequest, ValidatedChartRequest};
use crate::chart::summary::ChartSummarizer;
use crate::chart::types::{Angles, Chart};
use crate::ephemeris::{Ephemeris, SharedEphemeris, QUERIED_BODIES};
use crate::error::ChartError;
use crate::vedic::annotate_chart_nakshatras;
use crate::zodiac::normalize_degrees;

/// Runs the chart pipeline against one shared ephemeris adapter.
///
/// Safe to share between threads when the adapter is `Send`: every adapter
/// call goes through the [`SharedEphemeris`] lock.
pub struct ChartCalculator<E> {
    ephemeris: SharedEphemeris<E>,
    aspects: AspectCalculator,
}

impl<E: Ephemeris> ChartCalculator<E> {
    pub fn new(adapter: E) -> Self {
        Self {
            ephemeris: SharedEphemeris::new(adapter),
            aspects: AspectCalculator::new(),
        }
    }

    pub fn with_aspect_calculator(mut self, aspects: AspectCalculator) -> Self {
        self.aspects = aspects;
        self
    }

    pub fn aspect_calculator(&self) -> &AspectCalculator {
        &self.aspects
    }

    pub fn ephemeris(&self) -> &SharedEphemeris<E> {
        &self.ephemeris
    }

    pub fn calculate(&self, request: &ChartRequest) -> Result<Chart, ChartError> {
        let validated = request.validate()?;
        self.calculate_validated(validated)
    }

    pub fn calculate_validated(&self, request: ValidatedChartRequest) -> Result<Chart, ChartError> {
        let ValidatedChartRequest {
            name,
            moment,
            location,
            house_system,
            ayanamsa,
        } = request;
        let jd = moment.julian_day;

        let ayanamsa_value = AyanamsaCalculator::ayanamsa(&self.ephemeris, jd, ayanamsa)?;

        let frame = self
            .ephemeris
            .with(|adapter| adapter.house_cusps(jd, &location, house_system))?;
        let houses = build_house_cusps(&frame.cusps, ayanamsa_value);
        let cusps = cusp_longitudes(&houses);
        log::debug!("{} house cusps computed with {}", houses.len(), house_system.slug());

        let angles = Angles {
            ascendant: normalize_degrees(frame.ascendant - ayanamsa_value),
            midheaven: normalize_degrees(frame.midheaven - ayanamsa_value),
            descendant: normalize_degrees(frame.ascendant - ayanamsa_value + 180.0),
            imum_coeli: normalize_degrees(frame.midheaven - ayanamsa_value + 180.0),
        };

        let raw = self.ephemeris.with(|adapter| {
            QUERIED_BODIES
                .iter()
                .map(|&body| adapter.body_position(jd, body).map(|pos| (body, pos)))
                .collect::<Result<Vec<_>, _>>()
        })?;
        let planets = PlanetPositionResolver::new(ayanamsa_value, &cusps).resolve_all(raw);
        log::debug!("{} bodies resolved at JD {:.5}", planets.len(), jd);

        let aspects = self.aspects.compute_chart_aspects(&planets);
        let nakshatras = annotate_chart_nakshatras(&planets);
        let summary = ChartSummarizer::summarize(&planets, houses.first().map(|h| h.sign));
        log::debug!("{} aspects found", aspects.len());

        Ok(Chart {
            name,
            moment,
            location,
            house_system,
            ayanamsa,
            ayanamsa_value,
            planets,
            houses,
            angles,
            aspects,
            nakshatras,
            summary,
        })
    }
}
