//! Element trait tables and scoring weights.

use natal_chart::{Body, Element};

use crate::locale::Locale;

/// Weight of the Ascendant's sign element.
pub const ASCENDANT_WEIGHT: u32 = 2;

/// Weight of a body's sign element in the personality score.
pub const fn body_weight(body: Body) -> u32 {
    match body {
        Body::Sun => 3,
        Body::Moon => 2,
        _ => 1,
    }
}

/// Localized description of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementProfile {
    pub label: &'static str,
    /// Ordered; the first two feed the trait list and summaries.
    pub traits: [&'static str; 4],
    pub description: &'static str,
}

const EN_FIRE: ElementProfile = ElementProfile {
    label: "Fire",
    traits: ["proactive", "enthusiastic", "confident", "dynamic"],
    description: "strong energy and a spirit of leadership",
};
const EN_EARTH: ElementProfile = ElementProfile {
    label: "Earth",
    traits: ["practical", "stable", "patient", "reliable"],
    description: "steadiness and practical thinking",
};
const EN_AIR: ElementProfile = ElementProfile {
    label: "Air",
    traits: ["thoughtful", "communicative", "flexible", "creative"],
    description: "communication skills and logical thinking",
};
const EN_WATER: ElementProfile = ElementProfile {
    label: "Water",
    traits: ["emotional", "intuitive", "empathetic", "perceptive"],
    description: "deep intuition and understanding",
};

const VI_FIRE: ElementProfile = ElementProfile {
    label: "Hỏa",
    traits: ["chủ động", "nhiệt huyết", "tự tin", "năng động"],
    description: "năng lượng mạnh mẽ và tinh thần lãnh đạo",
};
const VI_EARTH: ElementProfile = ElementProfile {
    label: "Thổ",
    traits: ["thực tế", "ổn định", "kiên nhẫn", "đáng tin cậy"],
    description: "sự vững chãi và tư duy thực tiễn",
};
const VI_AIR: ElementProfile = ElementProfile {
    label: "Khí",
    traits: ["tư duy", "giao tiếp", "linh hoạt", "sáng tạo"],
    description: "khả năng giao tiếp và tư duy logic",
};
const VI_WATER: ElementProfile = ElementProfile {
    label: "Thủy",
    traits: ["cảm xúc", "trực giác", "đồng cảm", "nhạy bén"],
    description: "trực giác sâu sắc và sự thấu hiểu",
};

/// Profile of `element` in `locale`.
pub const fn element_profile(element: Element, locale: Locale) -> &'static ElementProfile {
    match (locale, element) {
        (Locale::English, Element::Fire) => &EN_FIRE,
        (Locale::English, Element::Earth) => &EN_EARTH,
        (Locale::English, Element::Air) => &EN_AIR,
        (Locale::English, Element::Water) => &EN_WATER,
        (Locale::Vietnamese, Element::Fire) => &VI_FIRE,
        (Locale::Vietnamese, Element::Earth) => &VI_EARTH,
        (Locale::Vietnamese, Element::Air) => &VI_AIR,
        (Locale::Vietnamese, Element::Water) => &VI_WATER,
    }
}
