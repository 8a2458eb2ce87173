use crate::aspects::AspectCalculator;
use crate::ayanamsa::AyanamsaSystem;
use crate::chart::{Chart, ChartCalculator, ChartRequest};
use crate::compatibility::dosha::DoshaDetector;
use crate::compatibility::koota::{KootaScorer, MoonProfile};
use crate::compatibility::types::{
    CompatibilityLevel, CompatibilityResult, DoshaRecord, DoshaType, KootaScore, KootaType,
    TOTAL_POINTS,
};
use crate::ephemeris::{Ephemeris, HouseSystem};
use crate::error::{ChartError, InvalidInputError};
use crate::vedic::nakshatra_for_longitude;
use serde::{Deserialize, Serialize};

/// Birth details of one partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDetails {
    #[serde(default)]
    pub name: Option<String>,
    pub birth_date: String,
    pub birth_time: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
}

fn default_house_system() -> String {
    HouseSystem::default().slug().to_string()
}

fn default_ayanamsa() -> String {
    AyanamsaSystem::default().slug().to_string()
}

/// Two partners sharing one house system and ayanamsa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub person1: PersonDetails,
    pub person2: PersonDetails,
    #[serde(default = "default_house_system")]
    pub house_system: String,
    #[serde(default = "default_ayanamsa")]
    pub ayanamsa: String,
}

impl MatchRequest {
    pub fn new(person1: PersonDetails, person2: PersonDetails) -> Self {
        Self {
            person1,
            person2,
            house_system: default_house_system(),
            ayanamsa: default_ayanamsa(),
        }
    }

    fn chart_request(&self, person: &PersonDetails) -> ChartRequest {
        ChartRequest {
            name: person.name.clone(),
            birth_date: person.birth_date.clone(),
            birth_time: person.birth_time.clone(),
            latitude: person.latitude,
            longitude: person.longitude,
            timezone: person.timezone.clone(),
            house_system: self.house_system.clone(),
            ayanamsa: self.ayanamsa.clone(),
        }
    }
}

pub struct CompatibilityAggregator;

impl CompatibilityAggregator {
    /// Validate both partners, compute both charts and compare them.
    pub fn match_request<E: Ephemeris>(
        calculator: &ChartCalculator<E>,
        request: &MatchRequest,
    ) -> Result<CompatibilityResult, ChartError> {
        let r1 = request.chart_request(&request.person1).validate();
        let r2 = request.chart_request(&request.person2).validate();
        let (r1, r2) = match (r1, r2) {
            (Ok(r1), Ok(r2)) => (r1, r2),
            (Err(e), Ok(_)) | (Ok(_), Err(e)) => return Err(e.into()),
            (Err(e1), Err(e2)) => {
                let mut errors = Vec::new();
                for err in [e1, e2] {
                    match err {
                        InvalidInputError::Multiple(inner) => errors.extend(inner),
                        other => errors.push(other),
                    }
                }
                return Err(InvalidInputError::Multiple(errors).into());
            }
        };

        let chart1 = calculator.calculate_validated(r1)?;
        let chart2 = calculator.calculate_validated(r2)?;
        Self::compare(chart1, chart2, calculator.aspect_calculator())
    }

    /// Score two computed charts.
    pub fn compare(
        chart1: Chart,
        chart2: Chart,
        aspects: &AspectCalculator,
    ) -> Result<CompatibilityResult, ChartError> {
        let moon1 = chart1.moon().ok_or(ChartError::MissingMoon)?;
        let moon2 = chart2.moon().ok_or(ChartError::MissingMoon)?;

        let n1 = nakshatra_for_longitude(moon1.longitude);
        let n2 = nakshatra_for_longitude(moon2.longitude);
        let p1 = MoonProfile {
            sign: moon1.sign,
            nakshatra: n1,
        };
        let p2 = MoonProfile {
            sign: moon2.sign,
            nakshatra: n2,
        };

        let koota_scores = KootaScorer::score_all(&p1, &p2);
        let total_points: f64 = koota_scores.iter().map(|k| k.points).sum();
        let percentage = total_points / TOTAL_POINTS * 100.0;
        let doshas = DoshaDetector::detect(&chart1, &chart2, n1, n2);
        let synastry = aspects.compute_inter_chart_aspects(&chart1.planets, &chart2.planets);

        log::debug!(
            "match scored {:.1}/{} with {} active doshas",
            total_points,
            TOTAL_POINTS,
            doshas.iter().filter(|d| d.is_active()).count()
        );

        Ok(CompatibilityResult {
            person1_name: chart1.name.clone(),
            person2_name: chart2.name.clone(),
            total_points,
            max_points: TOTAL_POINTS,
            percentage,
            level: CompatibilityLevel::from_percentage(percentage),
            person1_nakshatra: n1.clone(),
            person2_nakshatra: n2.clone(),
            summary: Self::summary(total_points, &koota_scores, &doshas),
            recommendations: Self::recommendations(total_points, &koota_scores, &doshas),
            koota_scores,
            doshas,
            synastry,
            person1_chart: chart1,
            person2_chart: chart2,
        })
    }

    pub fn summary(total_points: f64, kootas: &[KootaScore], doshas: &[DoshaRecord]) -> String {
        let percentage = total_points / TOTAL_POINTS * 100.0;
        let mut sentences = vec![format!(
            "This match scores {:.1} out of 36 points ({:.1}%).",
            total_points, percentage
        )];

        sentences.push(
            if percentage >= 75.0 {
                "This is an excellent match with strong compatibility across multiple dimensions."
            } else if percentage >= 60.0 {
                "This is a good match with solid compatibility."
            } else if percentage >= 50.0 {
                "This is an average match that can work with mutual understanding."
            } else {
                "This match faces challenges and requires careful consideration."
            }
            .to_string(),
        );

        let strong = koota_names(kootas, |k| k.percentage >= 75.0);
        if !strong.is_empty() {
            sentences.push(format!("Strong areas include: {}.", strong.join(", ")));
        }
        let weak = koota_names(kootas, |k| k.percentage < 50.0);
        if !weak.is_empty() {
            sentences.push(format!("Areas needing attention: {}.", weak.join(", ")));
        }

        let active: Vec<String> = doshas
            .iter()
            .filter(|d| d.is_active())
            .map(|d| d.dosha.to_string())
            .collect();
        if !active.is_empty() {
            sentences.push(format!("Active doshas: {}.", active.join(", ")));
        }

        sentences.join(" ")
    }

    pub fn recommendations(
        total_points: f64,
        kootas: &[KootaScore],
        doshas: &[DoshaRecord],
    ) -> Vec<String> {
        let percentage = total_points / TOTAL_POINTS * 100.0;
        let mut recommendations = vec![if percentage >= 75.0 {
            "This is an excellent match. Focus on nurturing the strong compatibility."
        } else if percentage >= 60.0 {
            "Work on strengthening the weaker compatibility areas."
        } else if percentage >= 50.0 {
            "Open communication and mutual understanding are key to success."
        } else {
            "Consider astrological remedies and counseling before proceeding."
        }
        .to_string()];

        for koota in kootas.iter().filter(|k| k.percentage < 50.0) {
            let advice = match koota.koota {
                KootaType::Gana => {
                    "Practice patience and understanding due to temperament differences."
                }
                KootaType::Nadi => "Consult an astrologer for Nadi Dosha remedies.",
                KootaType::Bhakoot => "Work on emotional understanding and financial planning.",
                _ => continue,
            };
            recommendations.push(advice.to_string());
        }

        for dosha in doshas.iter().filter(|d| d.is_active()) {
            recommendations.push(
                match dosha.dosha {
                    DoshaType::Manglik => "Perform Manglik Dosha remedies before marriage.",
                    DoshaType::Nadi => "Address Nadi Dosha through appropriate remedies.",
                }
                .to_string(),
            );
        }

        recommendations
    }
}

fn koota_names(kootas: &[KootaScore], pred: impl Fn(&KootaScore) -> bool) -> Vec<&'static str> {
    kootas
        .iter()
        .filter(|k| pred(*k))
        .map(|k| k.koota.name())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::types::Severity;
    use std::collections::BTreeMap;

    fn score(koota: KootaType, points: f64) -> KootaScore {
        KootaScore::new(koota, points, String::new(), BTreeMap::new())
    }

    fn dosha(dosha: DoshaType, affected: bool, cancelled: bool) -> DoshaRecord {
        DoshaRecord {
            dosha,
            person1_affected: affected,
            person2_affected: affected,
            severity: Severity::High,
            cancelled,
            cancellation_reason: None,
            remedies: Vec::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_summary_sentences() {
        let kootas = vec![score(KootaType::Nadi, 8.0), score(KootaType::Gana, 0.0)];
        let doshas = vec![
            dosha(DoshaType::Manglik, true, true),
            dosha(DoshaType::Nadi, true, false),
        ];
        let summary = CompatibilityAggregator::summary(18.0, &kootas, &doshas);
        assert!(summary.starts_with("This match scores 18.0 out of 36 points (50.0%)."));
        assert!(summary.contains("average match"));
        assert!(summary.contains("Strong areas include: Nadi."));
        assert!(summary.contains("Areas needing attention: Gana."));
        assert!(summary.ends_with("Active doshas: Nadi."));
    }

    #[test]
    fn test_recommendations_order() {
        let kootas = vec![
            score(KootaType::Gana, 0.0),
            score(KootaType::Bhakoot, 0.0),
            score(KootaType::Varna, 0.0),
        ];
        let doshas = vec![dosha(DoshaType::Manglik, true, false)];
        let recs = CompatibilityAggregator::recommendations(10.0, &kootas, &doshas);
        assert_eq!(
            recs,
            vec![
                "Consider astrological remedies and counseling before proceeding.",
                "Practice patience and understanding due to temperament differences.",
                "Work on emotional understanding and financial planning.",
                "Perform Manglik Dosha remedies before marriage.",
            ]
        );
    }

    #[test]
    fn test_excellent_band() {
        let recs = CompatibilityAggregator::recommendations(27.0, &[], &[]);
        assert_eq!(
            recs,
            vec!["This is an excellent match. Focus on nurturing the strong compatibility."]
        );
    }
}
