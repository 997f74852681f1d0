//! Bodies tracked by the chart, with display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EphemerisError;

/// Bodies whose longitudes appear in a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All bodies in chart order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    pub const ALL: [Body; 10] = ALL_BODIES;

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Astronomical glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sun => "☉",
            Self::Moon => "☽",
            Self::Mercury => "☿",
            Self::Venus => "♀",
            Self::Mars => "♂",
            Self::Jupiter => "♃",
            Self::Saturn => "♄",
            Self::Uranus => "♅",
            Self::Neptune => "♆",
            Self::Pluto => "♇",
        }
    }

    /// Hex display colour. Presentation only.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Sun => "#f39c12",
            Self::Moon => "#95a5a6",
            Self::Mercury => "#16a085",
            Self::Venus => "#e91e63",
            Self::Mars => "#c0392b",
            Self::Jupiter => "#d35400",
            Self::Saturn => "#7f8c8d",
            Self::Uranus => "#1abc9c",
            Self::Neptune => "#2980b9",
            Self::Pluto => "#6c3483",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EphemerisError;

    /// Case-insensitive English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EphemerisError::UnsupportedBody(s.to_string()))
    }
}
