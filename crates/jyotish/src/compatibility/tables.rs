//! Reference tables for the eight kootas.

use crate::ephemeris::Body;
use crate::vedic::{Gana, Nadi, Yoni};
use crate::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Varna {
    Brahmin,
    Kshatriya,
    Vaishya,
    Shudra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vashya {
    Quadruped,
    Human,
    Water,
    Insect,
}

impl fmt::Display for Varna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Vashya {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// Indexed by sign, Aries first
const VARNA_BY_SIGN: [Varna; 12] = [
    Varna::Kshatriya,
    Varna::Vaishya,
    Varna::Shudra,
    Varna::Brahmin,
    Varna::Kshatriya,
    Varna::Vaishya,
    Varna::Shudra,
    Varna::Brahmin,
    Varna::Kshatriya,
    Varna::Vaishya,
    Varna::Shudra,
    Varna::Brahmin,
];

const VASHYA_BY_SIGN: [Vashya; 12] = [
    Vashya::Quadruped,
    Vashya::Quadruped,
    Vashya::Human,
    Vashya::Water,
    Vashya::Quadruped,
    Vashya::Human,
    Vashya::Human,
    Vashya::Insect,
    Vashya::Human,
    Vashya::Water,
    Vashya::Human,
    Vashya::Water,
];

pub fn varna_of(sign: ZodiacSign) -> Varna {
    VARNA_BY_SIGN[sign.index()]
}

pub fn vashya_of(sign: ZodiacSign) -> Vashya {
    VASHYA_BY_SIGN[sign.index()]
}

/// Row is person 1's varna, column person 2's.
const VARNA_MATRIX: [[f64; 4]; 4] = [
    [1.0, 1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 0.0, 0.0, 1.0],
];

pub fn varna_points(a: Varna, b: Varna) -> f64 {
    VARNA_MATRIX[a as usize][b as usize]
}

const GANA_MATRIX: [[f64; 3]; 3] = [
    [6.0, 5.0, 0.0],
    [5.0, 6.0, 0.0],
    [0.0, 0.0, 6.0],
];

pub fn gana_points(a: Gana, b: Gana) -> f64 {
    GANA_MATRIX[a as usize][b as usize]
}

pub fn nadi_points(a: Nadi, b: Nadi) -> f64 {
    if a == b {
        0.0
    } else {
        8.0
    }
}

/// Mirrored sign distance (0..=6) to points. Absent distances score 0.
const BHAKOOT_POINTS: [(u8, f64); 12] = [
    (1, 0.0),
    (2, 0.0),
    (3, 3.0),
    (4, 1.0),
    (5, 0.0),
    (6, 0.0),
    (7, 7.0),
    (8, 1.0),
    (9, 3.0),
    (10, 1.0),
    (11, 3.0),
    (12, 0.0),
];

pub fn bhakoot_points(distance: u8) -> f64 {
    BHAKOOT_POINTS
        .iter()
        .find(|(d, _)| *d == distance)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

lazy_static::lazy_static! {
    static ref VASHYA_PAIRS: HashMap<(Vashya, Vashya), f64> = {
        use Vashya::*;
        [
            ((Quadruped, Quadruped), 2.0),
            ((Quadruped, Human), 1.0),
            ((Human, Human), 2.0),
            ((Human, Water), 1.0),
            ((Human, Insect), 0.0),
            ((Water, Water), 2.0),
            ((Water, Human), 1.0),
            ((Insect, Insect), 2.0),
            ((Insect, Human), 0.0),
        ]
        .into_iter()
        .collect()
    };

    static ref YONI_PAIRS: HashMap<(Yoni, Yoni), f64> = {
        use Yoni::*;
        let same = [
            Horse, Elephant, Goat, Serpent, Dog, Cat, Rat, Cow, Buffalo, Tiger, Deer, Monkey,
            Mongoose, Lion,
        ]
        .into_iter()
        .map(|y| ((y, y), 4.0));
        let listed = [
            ((Horse, Elephant), 3.0),
            ((Goat, Cow), 3.0),
            ((Serpent, Mongoose), 0.0),
            ((Dog, Deer), 2.0),
            ((Cat, Rat), 0.0),
            ((Tiger, Deer), 0.0),
            ((Buffalo, Tiger), 3.0),
            ((Monkey, Lion), 2.0),
        ];
        same.chain(listed).collect()
    };

    static ref PLANET_FRIENDS: HashMap<Body, Vec<Body>> = {
        use Body::*;
        [
            (Sun, vec![Moon, Mars, Jupiter]),
            (Moon, vec![Sun, Mercury]),
            (Mars, vec![Sun, Moon, Jupiter]),
            (Mercury, vec![Sun, Venus]),
            (Jupiter, vec![Sun, Moon, Mars]),
            (Venus, vec![Mercury, Saturn]),
            (Saturn, vec![Mercury, Venus]),
        ]
        .into_iter()
        .collect()
    };
}

/// Vashya points, trying the reverse pairing when the forward one scores
/// nothing. Unlisted pairs score 0.
pub fn vashya_points(a: Vashya, b: Vashya) -> f64 {
    VASHYA_PAIRS
        .get(&(a, b))
        .copied()
        .filter(|points| *points > 0.0)
        .or_else(|| VASHYA_PAIRS.get(&(b, a)).copied())
        .unwrap_or(0.0)
}

/// Yoni points from the listed pairs in either order. A pair that scores
/// nothing both ways falls back to 4 for the same animal and 2 otherwise,
/// so the listed enemy pairs end up at 2.
pub fn yoni_points(a: Yoni, b: Yoni) -> f64 {
    let listed = |pair: (Yoni, Yoni)| {
        YONI_PAIRS
            .get(&pair)
            .copied()
            .filter(|points| *points > 0.0)
    };
    listed((a, b))
        .or_else(|| listed((b, a)))
        .unwrap_or(if a == b { 4.0 } else { 2.0 })
}

pub fn is_friend(of: Body, other: Body) -> bool {
    PLANET_FRIENDS
        .get(&of)
        .map_or(false, |friends| friends.contains(&other))
}

const TARA_NAMES: [&str; 9] = [
    "Janma", "Sampat", "Vipat", "Kshema", "Pratyak", "Sadhaka", "Vadha", "Mitra", "Atimitra",
];

/// Tara name for a 1-based nakshatra count, repeating every nine.
pub fn tara_name(distance: u8) -> &'static str {
    if distance == 0 {
        return "Unknown";
    }
    TARA_NAMES[usize::from(distance - 1) % TARA_NAMES.len()]
}
