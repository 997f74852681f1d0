//! Tropical zodiac signs and sign/degree formatting.
//!
//! The ecliptic is divided into 12 signs of 30° starting at 0° Aries.
//! Intervals are half-open: `[30k, 30k + 30)`, so 30.0 is 0° Taurus.

use std::fmt;

use natal_frames::normalize_deg;
use serde::{Deserialize, Serialize};

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Elements in their fixed ranking order.
pub const ALL_ELEMENTS: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Air => "air",
            Self::Water => "water",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Three-letter abbreviation used in chart legends.
    pub const fn abbr(self) -> &'static str {
        match self {
            Self::Aries => "Ari",
            Self::Taurus => "Tau",
            Self::Gemini => "Gem",
            Self::Cancer => "Can",
            Self::Leo => "Leo",
            Self::Virgo => "Vir",
            Self::Libra => "Lib",
            Self::Scorpio => "Sco",
            Self::Sagittarius => "Sag",
            Self::Capricorn => "Cap",
            Self::Aquarius => "Aqu",
            Self::Pisces => "Pis",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Aries => "♈",
            Self::Taurus => "♉",
            Self::Gemini => "♊",
            Self::Cancer => "♋",
            Self::Leo => "♌",
            Self::Virgo => "♍",
            Self::Libra => "♎",
            Self::Scorpio => "♏",
            Self::Sagittarius => "♐",
            Self::Capricorn => "♑",
            Self::Aquarius => "♒",
            Self::Pisces => "♓",
        }
    }

    /// Fire, earth, air, water repeating from Aries.
    pub const fn element(self) -> Element {
        ALL_ELEMENTS[self.index() as usize % 4]
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign containing an ecliptic longitude. Non-finite input yields Aries.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let lon = finite_lon(longitude_deg);
        // min(11) guards against a rounding edge at 360.
        let idx = ((lon / 30.0).floor() as usize).min(11);
        ALL_SIGNS[idx]
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A longitude expressed as sign plus degree and arc-minute within it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    pub sign_index: u8,
    /// Decimal degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Whole degrees within the sign, 0..=29.
    pub degree: u8,
    /// Whole arc-minutes, 0..=59.
    pub arc_minute: u8,
}

impl fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {} {:02}′",
            self.degree,
            self.sign.abbr(),
            self.arc_minute
        )
    }
}

/// Normalized longitude, with NaN and infinities read as 0°.
fn finite_lon(longitude_deg: f64) -> f64 {
    if longitude_deg.is_finite() {
        normalize_deg(longitude_deg)
    } else {
        0.0
    }
}

/// Sign, degree and arc-minute for a longitude.
///
/// These helpers do not report bad input: a NaN or infinite longitude comes
/// back as 0° Aries. Validate first where that matters (the CLI rejects
/// non-finite values, and chart longitudes are always finite).
pub fn zodiac_position(longitude_deg: f64) -> ZodiacPosition {
    let sign = ZodiacSign::from_longitude(longitude_deg);
    let degree_in_sign = get_sign_degree(longitude_deg);
    let degree = (degree_in_sign.floor() as u8).min(29);
    let arc_minute = ((degree_in_sign.fract() * 60.0).floor() as u8).min(59);
    ZodiacPosition {
        sign,
        sign_index: sign.index(),
        degree_in_sign,
        degree,
        arc_minute,
    }
}

/// Sign containing a longitude.
pub fn get_zodiac_sign(longitude_deg: f64) -> ZodiacSign {
    ZodiacSign::from_longitude(longitude_deg)
}

/// Degrees within the sign, [0, 30). Non-finite input yields 0.
pub fn get_sign_degree(longitude_deg: f64) -> f64 {
    let lon = finite_lon(longitude_deg);
    let sign = ZodiacSign::from_longitude(lon);
    lon - sign.index() as f64 * 30.0
}

/// Display string such as `"15° Ari 24′"`; `"0° Ari 00′"` for non-finite input.
pub fn format_zodiac_position(longitude_deg: f64) -> String {
    zodiac_position(longitude_deg).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn elements_cycle() {
        assert_eq!(ZodiacSign::Aries.element(), Element::Fire);
        assert_eq!(ZodiacSign::Taurus.element(), Element::Earth);
        assert_eq!(ZodiacSign::Gemini.element(), Element::Air);
        assert_eq!(ZodiacSign::Cancer.element(), Element::Water);
        assert_eq!(ZodiacSign::Sagittarius.element(), Element::Fire);
        assert_eq!(ZodiacSign::Pisces.element(), Element::Water);
    }

    #[test]
    fn each_element_has_three_signs() {
        for el in ALL_ELEMENTS {
            assert_eq!(ALL_SIGNS.iter().filter(|s| s.element() == el).count(), 3);
        }
    }

    #[test]
    fn boundary_30_is_next_sign() {
        let p = zodiac_position(30.0);
        assert_eq!(p.sign, ZodiacSign::Taurus);
        assert_eq!(p.degree, 0);
        assert_eq!(p.arc_minute, 0);
    }

    #[test]
    fn just_below_30_is_last_degree() {
        let p = zodiac_position(29.999_999);
        assert_eq!(p.sign, ZodiacSign::Aries);
        assert_eq!(p.degree, 29);
        assert_eq!(p.arc_minute, 59);
    }

    #[test]
    fn format_example() {
        assert_eq!(format_zodiac_position(15.4), "15° Ari 24′");
        assert_eq!(format_zodiac_position(45.125), "15° Tau 07′");
    }

    #[test]
    fn negative_and_large_longitudes_wrap() {
        assert_eq!(get_zodiac_sign(-10.0), ZodiacSign::Pisces);
        assert_eq!(get_zodiac_sign(365.0), ZodiacSign::Aries);
        assert!((get_sign_degree(-10.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn pisces_end() {
        let p = zodiac_position(359.99);
        assert_eq!(p.sign, ZodiacSign::Pisces);
        assert_eq!(p.degree, 29);
        assert_eq!(format_zodiac_position(359.99), "29° Pis 59′");
    }

    #[test]
    fn non_finite_reads_as_aries_zero() {
        for lon in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let p = zodiac_position(lon);
            assert_eq!(p.sign, ZodiacSign::Aries);
            assert_eq!(p.degree_in_sign, 0.0);
            assert_eq!(get_sign_degree(lon), 0.0);
            assert_eq!(format_zodiac_position(lon), "0° Ari 00′");
        }
    }

    #[test]
    fn sign_degree_in_range() {
        for k in 0..720 {
            let lon = k as f64 * 0.5;
            let d = get_sign_degree(lon);
            assert!((0.0..30.0).contains(&d), "lon {lon}: {d}");
        }
    }
}
