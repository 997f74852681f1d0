//! Major aspects between chart bodies.
//!
//! For each unordered pair the shorter arc `sep ∈ [0, 180]` is tested
//! against the aspect list in priority order; the first kind whose
//! `|sep − angle| ≤ orb` is assigned and testing stops for that pair.

use std::fmt;

use natal_ephem::Body;
use natal_frames::angular_separation;
use serde::Serialize;

use crate::planet::PlanetPosition;

/// The five major (Ptolemaic) aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Aspect kinds in matching priority order.
pub const ALL_ASPECTS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }

    /// Exact angle in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    /// Allowed deviation from the exact angle, degrees.
    pub const fn orb(self) -> f64 {
        match self {
            Self::Conjunction => 10.0,
            Self::Sextile => 6.0,
            Self::Square => 8.0,
            Self::Trine => 8.0,
            Self::Opposition => 10.0,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Conjunction => "☌",
            Self::Sextile => "⚹",
            Self::Square => "□",
            Self::Trine => "△",
            Self::Opposition => "☍",
        }
    }

    /// Hex line colour for chart drawings.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Conjunction => "#e74c3c",
            Self::Sextile => "#27ae60",
            Self::Square => "#8e44ad",
            Self::Trine => "#2980b9",
            Self::Opposition => "#c0392b",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect between two distinct bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub planet_a: Body,
    pub planet_b: Body,
    pub kind: AspectKind,
    /// Shorter arc between the two longitudes, [0, 180].
    pub separation: f64,
    /// Absolute deviation from the exact aspect angle.
    pub orb: f64,
}

/// Aspect kind and separation for two longitudes, if any kind matches.
pub fn aspect_between(lon_a: f64, lon_b: f64) -> Option<(AspectKind, f64)> {
    let sep = angular_separation(lon_a, lon_b);
    ALL_ASPECTS
        .iter()
        .copied()
        .find(|kind| (sep - kind.angle()).abs() <= kind.orb())
        .map(|kind| (kind, sep))
}

/// All aspects among `planets`, pairs in input order (i < j).
pub fn detect_aspects(planets: &[PlanetPosition]) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for (i, a) in planets.iter().enumerate() {
        for b in &planets[i + 1..] {
            if a.body == b.body {
                continue;
            }
            if let Some((kind, separation)) = aspect_between(a.longitude, b.longitude) {
                aspects.push(Aspect {
                    planet_a: a.body,
                    planet_b: b.body,
                    kind,
                    separation,
                    orb: (separation - kind.angle()).abs(),
                });
            }
        }
    }
    aspects
}
