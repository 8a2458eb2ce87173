use crate::compatibility::tables::{
    bhakoot_points, gana_points, is_friend, nadi_points, tara_name, varna_of, varna_points,
    vashya_of, vashya_points, yoni_points,
};
use crate::compatibility::types::{KootaScore, KootaType};
use crate::vedic::{nakshatra_by_index, Nakshatra};
use crate::zodiac::ZodiacSign;
use std::collections::BTreeMap;

const FAVORABLE_TARAS: [u8; 5] = [1, 3, 5, 7, 9];

/// Moon sign and nakshatra of one person.
#[derive(Debug, Clone, Copy)]
pub struct MoonProfile<'a> {
    pub sign: ZodiacSign,
    pub nakshatra: &'a Nakshatra,
}

impl MoonProfile<'static> {
    pub fn from_indices(sign: ZodiacSign, nakshatra_index: u8) -> Self {
        Self {
            sign,
            nakshatra: nakshatra_by_index(nakshatra_index),
        }
    }
}

fn factors<const N: usize>(pairs: [(&str, String); N]) -> BTreeMap<String, String> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Ashtakoota scorer. Each koota is a pure function of the two moons.
pub struct KootaScorer;

impl KootaScorer {
    /// All eight kootas in canonical order.
    pub fn score_all(p1: &MoonProfile<'_>, p2: &MoonProfile<'_>) -> Vec<KootaScore> {
        vec![
            Self::varna(p1.sign, p2.sign),
            Self::vashya(p1.sign, p2.sign),
            Self::tara(p1.nakshatra, p2.nakshatra),
            Self::yoni(p1.nakshatra, p2.nakshatra),
            Self::grah_maitri(p1.sign, p2.sign),
            Self::gana(p1.nakshatra, p2.nakshatra),
            Self::bhakoot(p1.sign, p2.sign),
            Self::nadi(p1.nakshatra, p2.nakshatra),
        ]
    }

    pub fn varna(sign1: ZodiacSign, sign2: ZodiacSign) -> KootaScore {
        let (v1, v2) = (varna_of(sign1), varna_of(sign2));
        let points = varna_points(v1, v2);
        let mut description = format!("Person 1 Varna: {}, Person 2 Varna: {}. ", v1, v2);
        description.push_str(if points >= 1.0 {
            "Spiritual compatibility is present."
        } else {
            "Spiritual compatibility may need attention."
        });
        KootaScore::new(
            KootaType::Varna,
            points,
            description,
            factors([("person1_varna", v1.to_string()), ("person2_varna", v2.to_string())]),
        )
    }

    pub fn vashya(sign1: ZodiacSign, sign2: ZodiacSign) -> KootaScore {
        let (v1, v2) = (vashya_of(sign1), vashya_of(sign2));
        let points = vashya_points(v1, v2);
        let mut description = format!("Person 1 Vashya: {}, Person 2 Vashya: {}. ", v1, v2);
        description.push_str(if points >= 2.0 {
            "Excellent mutual control and attraction."
        } else if points >= 1.0 {
            "Good attraction with balanced control."
        } else {
            "May face challenges in mutual control."
        });
        KootaScore::new(
            KootaType::Vashya,
            points,
            description,
            factors([("person1_vashya", v1.to_string()), ("person2_vashya", v2.to_string())]),
        )
    }

    pub fn tara(n1: &Nakshatra, n2: &Nakshatra) -> KootaScore {
        let (a, b) = (i32::from(n1.index), i32::from(n2.index));
        let d1 = ((b - a).rem_euclid(27) + 1) as u8;
        let d2 = ((a - b).rem_euclid(27) + 1) as u8;

        let favorable = |d: u8| FAVORABLE_TARAS.contains(&d);
        let points = match (favorable(d1), favorable(d2)) {
            (true, true) => 3.0,
            (true, false) | (false, true) => 1.5,
            (false, false) => 0.0,
        };

        let (t1, t2) = (tara_name(d1), tara_name(d2));
        let mut description = format!("Person 1 Tara: {}, Person 2 Tara: {}. ", t1, t2);
        description.push_str(if points >= 3.0 {
            "Excellent health and well-being compatibility."
        } else if points > 0.0 {
            "Good health compatibility with some caution needed."
        } else {
            "Health and well-being compatibility needs attention."
        });
        KootaScore::new(
            KootaType::Tara,
            points,
            description,
            factors([
                ("person1_tara", t1.to_string()),
                ("person2_tara", t2.to_string()),
                ("person1_distance", d1.to_string()),
                ("person2_distance", d2.to_string()),
            ]),
        )
    }

    pub fn yoni(n1: &Nakshatra, n2: &Nakshatra) -> KootaScore {
        let points = yoni_points(n1.yoni, n2.yoni);
        let mut description = format!("Person 1 Yoni: {}, Person 2 Yoni: {}. ", n1.yoni, n2.yoni);
        description.push_str(if points >= 4.0 {
            "Excellent sexual and physical compatibility."
        } else if points >= 2.0 {
            "Good physical compatibility."
        } else {
            "Physical compatibility may need attention."
        });
        KootaScore::new(
            KootaType::Yoni,
            points,
            description,
            factors([
                ("person1_yoni", n1.yoni.to_string()),
                ("person2_yoni", n2.yoni.to_string()),
            ]),
        )
    }

    pub fn grah_maitri(sign1: ZodiacSign, sign2: ZodiacSign) -> KootaScore {
        let (r1, r2) = (sign1.ruler(), sign2.ruler());
        let points = if r1 == r2 {
            5.0
        } else if is_friend(r1, r2) || is_friend(r2, r1) {
            4.0
        } else {
            1.0
        };
        let mut description = format!("Person 1 Ruler: {}, Person 2 Ruler: {}. ", r1, r2);
        description.push_str(if points >= 5.0 {
            "Same planetary ruler - excellent compatibility."
        } else if points >= 4.0 {
            "Friendly planetary rulers - good compatibility."
        } else {
            "Planetary rulers need harmonization."
        });
        KootaScore::new(
            KootaType::GrahMaitri,
            points,
            description,
            factors([("person1_ruler", r1.to_string()), ("person2_ruler", r2.to_string())]),
        )
    }

    pub fn gana(n1: &Nakshatra, n2: &Nakshatra) -> KootaScore {
        let points = gana_points(n1.gana, n2.gana);
        let mut description = format!("Person 1 Gana: {}, Person 2 Gana: {}. ", n1.gana, n2.gana);
        description.push_str(if points >= 6.0 {
            "Excellent temperament compatibility."
        } else if points >= 5.0 {
            "Good temperament compatibility."
        } else {
            "Temperament differences may cause friction."
        });
        KootaScore::new(
            KootaType::Gana,
            points,
            description,
            factors([
                ("person1_gana", n1.gana.to_string()),
                ("person2_gana", n2.gana.to_string()),
            ]),
        )
    }

    /// Signs `0..=6` apart, mirrored around the circle.
    pub fn sign_distance(sign1: ZodiacSign, sign2: ZodiacSign) -> u8 {
        let distance = sign1.number().abs_diff(sign2.number());
        if distance > 6 {
            12 - distance
        } else {
            distance
        }
    }

    pub fn bhakoot(sign1: ZodiacSign, sign2: ZodiacSign) -> KootaScore {
        let distance = Self::sign_distance(sign1, sign2);
        let points = bhakoot_points(distance);
        let mut description = format!("Signs are {} positions apart. ", distance);
        description.push_str(if points >= 7.0 {
            "Excellent emotional and material prosperity."
        } else if points >= 3.0 {
            "Good emotional compatibility."
        } else if points >= 1.0 {
            "Moderate emotional compatibility."
        } else {
            "Emotional compatibility needs attention."
        });
        KootaScore::new(
            KootaType::Bhakoot,
            points,
            description,
            factors([
                ("distance", distance.to_string()),
                ("person1_sign", sign1.to_string()),
                ("person2_sign", sign2.to_string()),
            ]),
        )
    }

    pub fn nadi(n1: &Nakshatra, n2: &Nakshatra) -> KootaScore {
        let points = nadi_points(n1.nadi, n2.nadi);
        let mut description = format!("Person 1 Nadi: {}, Person 2 Nadi: {}. ", n1.nadi, n2.nadi);
        description.push_str(if points >= 8.0 {
            "Excellent health and progeny compatibility."
        } else {
            "Same Nadi - health and progeny issues may arise. Remedies recommended."
        });
        KootaScore::new(
            KootaType::Nadi,
            points,
            description,
            factors([
                ("person1_nadi", n1.nadi.to_string()),
                ("person2_nadi", n2.nadi.to_string()),
            ]),
        )
    }
}
