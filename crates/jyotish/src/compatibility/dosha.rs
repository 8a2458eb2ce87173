use crate::chart::Chart;
use crate::compatibility::types::{DoshaRecord, DoshaType, Severity};
use crate::ephemeris::Body;
use crate::vedic::Nakshatra;
use serde::{Deserialize, Serialize};

const MANGLIK_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

const MANGLIK_REMEDIES: [&str; 5] = [
    "Perform Mangal Shanti Puja",
    "Recite Hanuman Chalisa daily",
    "Wear red coral gemstone",
    "Fast on Tuesdays",
    "Worship Lord Hanuman",
];

const NADI_REMEDIES: [&str; 2] = [
    "Perform Nadi Dosha remedies",
    "Consult astrologer for specific remedies",
];

/// Mars placement of a single chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManglikStatus {
    pub is_manglik: bool,
    pub mars_house: Option<u8>,
    pub severity: Severity,
}

impl ManglikStatus {
    pub fn for_mars_house(house: u8) -> Self {
        let is_manglik = MANGLIK_HOUSES.contains(&house);
        let severity = match house {
            2 => Severity::Medium,
            _ if is_manglik => Severity::High,
            _ => Severity::None,
        };
        Self {
            is_manglik,
            mars_house: Some(house),
            severity,
        }
    }

    fn describe(&self) -> String {
        match self.mars_house {
            Some(house) => format!("Mars is in house {}", house),
            None => "Mars position unavailable".to_string(),
        }
    }
}

pub struct DoshaDetector;

impl DoshaDetector {
    pub fn manglik_status(chart: &Chart) -> ManglikStatus {
        chart
            .planet(Body::Mars)
            .map(|mars| ManglikStatus::for_mars_house(mars.house))
            .unwrap_or(ManglikStatus {
                is_manglik: false,
                mars_house: None,
                severity: Severity::None,
            })
    }

    /// Manglik dosha across two persons. Cancelled when both are Manglik.
    pub fn manglik(p1: &ManglikStatus, p2: &ManglikStatus) -> DoshaRecord {
        let cancelled = p1.is_manglik && p2.is_manglik;
        let remedies = if (p1.is_manglik || p2.is_manglik) && !cancelled {
            MANGLIK_REMEDIES.iter().map(|r| r.to_string()).collect()
        } else {
            Vec::new()
        };

        DoshaRecord {
            dosha: DoshaType::Manglik,
            person1_affected: p1.is_manglik,
            person2_affected: p2.is_manglik,
            severity: p1.severity.max(p2.severity),
            cancelled,
            cancellation_reason: cancelled
                .then(|| "Both persons are Manglik, dosha is cancelled".to_string()),
            remedies,
            description: format!("Person 1: {}, Person 2: {}", p1.describe(), p2.describe()),
        }
    }

    /// Nadi dosha: both persons share a nadi. Never cancelled.
    pub fn nadi(n1: &Nakshatra, n2: &Nakshatra) -> DoshaRecord {
        let present = n1.nadi == n2.nadi;
        DoshaRecord {
            dosha: DoshaType::Nadi,
            person1_affected: present,
            person2_affected: present,
            severity: if present { Severity::High } else { Severity::None },
            cancelled: false,
            cancellation_reason: None,
            remedies: if present {
                NADI_REMEDIES.iter().map(|r| r.to_string()).collect()
            } else {
                Vec::new()
            },
            description: format!("Person 1 Nadi: {}, Person 2 Nadi: {}", n1.nadi, n2.nadi),
        }
    }

    /// Manglik then Nadi.
    pub fn detect(
        chart1: &Chart,
        chart2: &Chart,
        n1: &Nakshatra,
        n2: &Nakshatra,
    ) -> Vec<DoshaRecord> {
        let p1 = Self::manglik_status(chart1);
        let p2 = Self::manglik_status(chart2);
        vec![Self::manglik(&p1, &p2), Self::nadi(n1, n2)]
    }
}
