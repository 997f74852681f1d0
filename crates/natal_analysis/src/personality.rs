//! Element scoring pass.

use natal_chart::{ALL_ELEMENTS, ChartResult, Element, get_zodiac_sign};
use serde::Serialize;

use crate::element::{ASCENDANT_WEIGHT, body_weight};

/// Accumulated weight per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElementScores {
    pub fire: u32,
    pub earth: u32,
    pub air: u32,
    pub water: u32,
}

impl ElementScores {
    pub const fn get(&self, element: Element) -> u32 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    fn add(&mut self, element: Element, points: u32) {
        let slot = match element {
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Air => &mut self.air,
            Element::Water => &mut self.water,
        };
        *slot += points;
    }

    /// Elements by descending score; ties keep fire, earth, air, water order.
    pub fn ranked(&self) -> [Element; 4] {
        let mut order = ALL_ELEMENTS;
        order.sort_by(|a, b| self.get(*b).cmp(&self.get(*a)));
        order
    }

    pub fn total(&self) -> u32 {
        self.fire + self.earth + self.air + self.water
    }
}

/// Score the Ascendant's element and every placed body's element.
pub fn score_elements(chart: &ChartResult) -> ElementScores {
    let mut scores = ElementScores::default();
    scores.add(get_zodiac_sign(chart.asc).element(), ASCENDANT_WEIGHT);
    for p in &chart.planets {
        scores.add(get_zodiac_sign(p.longitude).element(), body_weight(p.body));
    }
    scores
}
