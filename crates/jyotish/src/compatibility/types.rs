use crate::aspects::Aspect;
use crate::chart::Chart;
use crate::vedic::Nakshatra;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const TOTAL_POINTS: f64 = 36.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KootaType {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

impl KootaType {
    pub const ALL: [KootaType; 8] = [
        KootaType::Varna,
        KootaType::Vashya,
        KootaType::Tara,
        KootaType::Yoni,
        KootaType::GrahMaitri,
        KootaType::Gana,
        KootaType::Bhakoot,
        KootaType::Nadi,
    ];

    pub fn max_points(self) -> f64 {
        match self {
            Self::Varna => 1.0,
            Self::Vashya => 2.0,
            Self::Tara => 3.0,
            Self::Yoni => 4.0,
            Self::GrahMaitri => 5.0,
            Self::Gana => 6.0,
            Self::Bhakoot => 7.0,
            Self::Nadi => 8.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahMaitri => "Grah Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }
}

impl fmt::Display for KootaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    Excellent,
    VeryGood,
    Good,
    Average,
    BelowAverage,
    Poor,
}

// Float slack so that e.g. 32.4 / 36 still reads as 90%
const LEVEL_EPSILON: f64 = 1e-9;

impl CompatibilityLevel {
    /// Level for a percentage in [0, 100].
    pub fn from_percentage(percentage: f64) -> Self {
        let ratio = percentage / 100.0 + LEVEL_EPSILON;
        if ratio >= 0.9 {
            Self::Excellent
        } else if ratio >= 0.75 {
            Self::VeryGood
        } else if ratio >= 0.6 {
            Self::Good
        } else if ratio >= 0.4 {
            Self::Average
        } else if ratio >= 0.2 {
            Self::BelowAverage
        } else {
            Self::Poor
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KootaScore {
    pub koota: KootaType,
    pub points: f64,
    pub max_points: f64,
    pub percentage: f64,
    pub level: CompatibilityLevel,
    pub description: String,
    pub factors: BTreeMap<String, String>,
}

impl KootaScore {
    pub fn new(
        koota: KootaType,
        points: f64,
        description: String,
        factors: BTreeMap<String, String>,
    ) -> Self {
        let max_points = koota.max_points();
        let percentage = points / max_points * 100.0;
        Self {
            koota,
            points,
            max_points,
            percentage,
            level: CompatibilityLevel::from_percentage(percentage),
            description,
            factors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoshaType {
    Manglik,
    Nadi,
}

impl fmt::Display for DoshaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Ordered: `None < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    None,
    Medium,
    High,
}

impl Default for Severity {
    fn default() -> Self {
        Self::None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoshaRecord {
    pub dosha: DoshaType,
    pub person1_affected: bool,
    pub person2_affected: bool,
    pub severity: Severity,
    pub cancelled: bool,
    pub cancellation_reason: Option<String>,
    pub remedies: Vec<String>,
    pub description: String,
}

impl DoshaRecord {
    /// Affects at least one person and is not cancelled.
    pub fn is_active(&self) -> bool {
        (self.person1_affected || self.person2_affected) && !self.cancelled
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub person1_name: Option<String>,
    pub person2_name: Option<String>,
    pub total_points: f64,
    pub max_points: f64,
    pub percentage: f64,
    pub level: CompatibilityLevel,
    pub person1_nakshatra: Nakshatra,
    pub person2_nakshatra: Nakshatra,
    pub koota_scores: Vec<KootaScore>,
    pub doshas: Vec<DoshaRecord>,
    pub synastry: Vec<Aspect>,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub person1_chart: Chart,
    pub person2_chart: Chart,
}

impl CompatibilityResult {
    pub fn koota(&self, koota: KootaType) -> Option<&KootaScore> {
        self.koota_scores.iter().find(|k| k.koota == koota)
    }

    pub fn dosha(&self, dosha: DoshaType) -> Option<&DoshaRecord> {
        self.doshas.iter().find(|d| d.dosha == dosha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_points_sum_to_36() {
        let total: f64 = KootaType::ALL.iter().map(|k| k.max_points()).sum();
        assert_eq!(total, TOTAL_POINTS);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(CompatibilityLevel::from_percentage(90.0), CompatibilityLevel::Excellent);
        assert_eq!(
            CompatibilityLevel::from_percentage(32.4 / 36.0 * 100.0),
            CompatibilityLevel::Excellent
        );
        assert_eq!(CompatibilityLevel::from_percentage(89.9), CompatibilityLevel::VeryGood);
        assert_eq!(CompatibilityLevel::from_percentage(75.0), CompatibilityLevel::VeryGood);
        assert_eq!(CompatibilityLevel::from_percentage(60.0), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_percentage(40.0), CompatibilityLevel::Average);
        assert_eq!(CompatibilityLevel::from_percentage(20.0), CompatibilityLevel::BelowAverage);
        assert_eq!(CompatibilityLevel::from_percentage(19.9), CompatibilityLevel::Poor);
        assert_eq!(CompatibilityLevel::from_percentage(0.0), CompatibilityLevel::Poor);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::None);
        assert_eq!(Severity::Medium.max(Severity::High), Severity::High);
    }
}
