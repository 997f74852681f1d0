//! Career fields and the career scoring pass.

use std::fmt;

use natal_chart::{ANGULAR_HOUSES, Body, ChartResult, Element, get_zodiac_sign};
use serde::Serialize;

use crate::locale::Locale;

/// Number of top-ranked fields kept in a career analysis.
pub const MAX_CAREER_FIELDS: usize = 5;

/// Bonus for each field of the MC's element.
const MC_ELEMENT_POINTS: u32 = 3;
/// Bonus for each field of a body placed in the 10th house.
const TENTH_HOUSE_POINTS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerField {
    Leadership,
    Business,
    Sports,
    Entertainment,
    Entrepreneurship,
    Engineering,
    Finance,
    Management,
    RealEstate,
    Agriculture,
    Technology,
    Education,
    Media,
    Marketing,
    Diplomacy,
    Healthcare,
    Psychology,
    Arts,
    Caregiving,
    Research,
    Programming,
    Analysis,
    Writing,
    Translation,
    Law,
    Administration,
    Military,
    Mechanics,
    Consulting,
    Religion,
    Publishing,
    Fashion,
    Design,
    Politics,
    Culinary,
    Retail,
}

pub const ALL_CAREER_FIELDS: [CareerField; 36] = [
    CareerField::Leadership,
    CareerField::Business,
    CareerField::Sports,
    CareerField::Entertainment,
    CareerField::Entrepreneurship,
    CareerField::Engineering,
    CareerField::Finance,
    CareerField::Management,
    CareerField::RealEstate,
    CareerField::Agriculture,
    CareerField::Technology,
    CareerField::Education,
    CareerField::Media,
    CareerField::Marketing,
    CareerField::Diplomacy,
    CareerField::Healthcare,
    CareerField::Psychology,
    CareerField::Arts,
    CareerField::Caregiving,
    CareerField::Research,
    CareerField::Programming,
    CareerField::Analysis,
    CareerField::Writing,
    CareerField::Translation,
    CareerField::Law,
    CareerField::Administration,
    CareerField::Military,
    CareerField::Mechanics,
    CareerField::Consulting,
    CareerField::Religion,
    CareerField::Publishing,
    CareerField::Fashion,
    CareerField::Design,
    CareerField::Politics,
    CareerField::Culinary,
    CareerField::Retail,
];

impl CareerField {
    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.english(),
            Locale::Vietnamese => self.vietnamese(),
        }
    }

    const fn english(self) -> &'static str {
        match self {
            Self::Leadership => "leadership",
            Self::Business => "business",
            Self::Sports => "sports",
            Self::Entertainment => "entertainment",
            Self::Entrepreneurship => "entrepreneurship",
            Self::Engineering => "engineering",
            Self::Finance => "finance",
            Self::Management => "management",
            Self::RealEstate => "real estate",
            Self::Agriculture => "agriculture",
            Self::Technology => "technology",
            Self::Education => "education",
            Self::Media => "media",
            Self::Marketing => "marketing",
            Self::Diplomacy => "diplomacy",
            Self::Healthcare => "healthcare",
            Self::Psychology => "psychology",
            Self::Arts => "arts",
            Self::Caregiving => "caregiving",
            Self::Research => "research",
            Self::Programming => "programming",
            Self::Analysis => "analysis",
            Self::Writing => "writing",
            Self::Translation => "translation",
            Self::Law => "law",
            Self::Administration => "administration",
            Self::Military => "military",
            Self::Mechanics => "mechanics",
            Self::Consulting => "consulting",
            Self::Religion => "religion",
            Self::Publishing => "publishing",
            Self::Fashion => "fashion",
            Self::Design => "design",
            Self::Politics => "politics",
            Self::Culinary => "culinary arts",
            Self::Retail => "retail",
        }
    }

    const fn vietnamese(self) -> &'static str {
        match self {
            Self::Leadership => "lãnh đạo",
            Self::Business => "kinh doanh",
            Self::Sports => "thể thao",
            Self::Entertainment => "giải trí",
            Self::Entrepreneurship => "khởi nghiệp",
            Self::Engineering => "kỹ thuật",
            Self::Finance => "tài chính",
            Self::Management => "quản lý",
            Self::RealEstate => "bất động sản",
            Self::Agriculture => "nông nghiệp",
            Self::Technology => "công nghệ",
            Self::Education => "giáo dục",
            Self::Media => "truyền thông",
            Self::Marketing => "marketing",
            Self::Diplomacy => "ngoại giao",
            Self::Healthcare => "y tế",
            Self::Psychology => "tâm lý",
            Self::Arts => "nghệ thuật",
            Self::Caregiving => "chăm sóc",
            Self::Research => "nghiên cứu",
            Self::Programming => "lập trình",
            Self::Analysis => "phân tích",
            Self::Writing => "viết",
            Self::Translation => "dịch thuật",
            Self::Law => "luật",
            Self::Administration => "hành chính",
            Self::Military => "quân sự",
            Self::Mechanics => "cơ khí",
            Self::Consulting => "tư vấn",
            Self::Religion => "tôn giáo",
            Self::Publishing => "xuất bản",
            Self::Fashion => "thời trang",
            Self::Design => "thiết kế",
            Self::Politics => "chính trị",
            Self::Culinary => "ẩm thực",
            Self::Retail => "bán lẻ",
        }
    }
}

impl fmt::Display for CareerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english())
    }
}

const FIRE_FIELDS: [CareerField; 5] = [
    CareerField::Leadership,
    CareerField::Business,
    CareerField::Sports,
    CareerField::Entertainment,
    CareerField::Entrepreneurship,
];
const EARTH_FIELDS: [CareerField; 5] = [
    CareerField::Engineering,
    CareerField::Finance,
    CareerField::Management,
    CareerField::RealEstate,
    CareerField::Agriculture,
];
const AIR_FIELDS: [CareerField; 5] = [
    CareerField::Technology,
    CareerField::Education,
    CareerField::Media,
    CareerField::Marketing,
    CareerField::Diplomacy,
];
const WATER_FIELDS: [CareerField; 5] = [
    CareerField::Healthcare,
    CareerField::Psychology,
    CareerField::Arts,
    CareerField::Caregiving,
    CareerField::Research,
];

const MERCURY_FIELDS: &[CareerField] = &[
    CareerField::Programming,
    CareerField::Analysis,
    CareerField::Writing,
    CareerField::Translation,
];
const SATURN_FIELDS: &[CareerField] = &[
    CareerField::Management,
    CareerField::Engineering,
    CareerField::Law,
    CareerField::Administration,
];
const MARS_FIELDS: &[CareerField] = &[
    CareerField::Engineering,
    CareerField::Sports,
    CareerField::Military,
    CareerField::Mechanics,
];
const JUPITER_FIELDS: &[CareerField] = &[
    CareerField::Education,
    CareerField::Consulting,
    CareerField::Religion,
    CareerField::Publishing,
];
const VENUS_FIELDS: &[CareerField] = &[
    CareerField::Arts,
    CareerField::Fashion,
    CareerField::Design,
    CareerField::Diplomacy,
];
const SUN_FIELDS: &[CareerField] = &[
    CareerField::Leadership,
    CareerField::Entertainment,
    CareerField::Politics,
];
const MOON_FIELDS: &[CareerField] = &[
    CareerField::Caregiving,
    CareerField::Culinary,
    CareerField::Retail,
];

/// Fields associated with the MC's sign element.
pub const fn fields_for_element(element: Element) -> &'static [CareerField; 5] {
    match element {
        Element::Fire => &FIRE_FIELDS,
        Element::Earth => &EARTH_FIELDS,
        Element::Air => &AIR_FIELDS,
        Element::Water => &WATER_FIELDS,
    }
}

/// Career emphasis of a body: its fields and its angular-house weight.
/// Uranus, Neptune and Pluto carry none.
pub const fn fields_for_body(body: Body) -> Option<(&'static [CareerField], u32)> {
    match body {
        Body::Mercury => Some((MERCURY_FIELDS, 2)),
        Body::Saturn => Some((SATURN_FIELDS, 2)),
        Body::Mars => Some((MARS_FIELDS, 2)),
        Body::Jupiter => Some((JUPITER_FIELDS, 2)),
        Body::Venus => Some((VENUS_FIELDS, 1)),
        Body::Sun => Some((SUN_FIELDS, 1)),
        Body::Moon => Some((MOON_FIELDS, 1)),
        Body::Uranus | Body::Neptune | Body::Pluto => None,
    }
}

/// Field scores in first-seen order.
#[derive(Debug, Default)]
struct Tally(Vec<(CareerField, u32)>);

impl Tally {
    fn add(&mut self, fields: &[CareerField], points: u32) {
        for &field in fields {
            match self.0.iter_mut().find(|(f, _)| *f == field) {
                Some((_, score)) => *score += points,
                None => self.0.push((field, points)),
            }
        }
    }
}

/// Score career fields and return the MC element plus the top
/// [`MAX_CAREER_FIELDS`] fields, highest first, ties in first-seen order.
pub fn score_careers(chart: &ChartResult) -> (Element, Vec<(CareerField, u32)>) {
    let mc_element = get_zodiac_sign(chart.mc).element();
    let mut tally = Tally::default();
    tally.add(fields_for_element(mc_element), MC_ELEMENT_POINTS);

    let houses = chart.planet_houses();
    for &(body, house) in &houses {
        if house == 10 {
            if let Some((fields, _)) = fields_for_body(body) {
                tally.add(fields, TENTH_HOUSE_POINTS);
            }
        }
    }
    for &(body, house) in &houses {
        if ANGULAR_HOUSES.contains(&house) {
            if let Some((fields, weight)) = fields_for_body(body) {
                tally.add(fields, weight);
            }
        }
    }

    let mut ranked = tally.0;
    // Stable: equal scores keep first-seen order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(MAX_CAREER_FIELDS);
    (mc_element, ranked)
}
