//! Chart assembly: birth input → immutable chart record.

use natal_ephem::{ALL_BODIES, Body, EphemerisError, EphemerisProvider, SimplifiedEphemeris};
use natal_frames::ObliquityModel;
use natal_time::{gmst_deg, local_sidereal_time_deg};
use serde::Serialize;
use tracing::debug;

use crate::angles::{Angles, angles_from_lst};
use crate::aspects::{Aspect, detect_aspects};
use crate::error::{ChartError, HouseSystemError};
use crate::input::BirthInput;
use crate::placidus::{house_of_longitude, placidus_cusps};
use crate::planet::PlanetPosition;

/// Which bodies to place and how ε is obtained.
///
/// The body list is only settable through [`ChartConfig::with_bodies`], so it
/// never holds a body twice.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    bodies: Vec<Body>,
    pub obliquity: ObliquityModel,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bodies: ALL_BODIES.to_vec(),
            obliquity: ObliquityModel::Fixed,
        }
    }
}

impl ChartConfig {
    /// Config for a body list, duplicates dropped (first occurrence kept).
    pub fn with_bodies(bodies: impl IntoIterator<Item = Body>) -> Self {
        let mut unique: Vec<Body> = Vec::new();
        for b in bodies {
            if !unique.contains(&b) {
                unique.push(b);
            }
        }
        Self {
            bodies: unique,
            ..Self::default()
        }
    }

    pub fn with_obliquity(mut self, model: ObliquityModel) -> Self {
        self.obliquity = model;
        self
    }

    /// Bodies to place, in output order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}

/// A computed natal chart. All longitudes in degrees [0, 360).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub julian_day: f64,
    pub gmst: f64,
    pub lst: f64,
    pub obliquity: f64,
    pub asc: f64,
    pub mc: f64,
    /// Cusps of houses 1..=12; `houses[0] == asc`, `houses[9] == mc`.
    pub houses: [f64; 12],
    pub planets: Vec<PlanetPosition>,
    pub aspects: Vec<Aspect>,
    pub input: BirthInput,
}

impl ChartResult {
    pub fn angles(&self) -> Angles {
        Angles {
            asc: self.asc,
            mc: self.mc,
        }
    }

    pub fn planet(&self, body: Body) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.body == body)
    }

    /// House (1–12) containing a longitude.
    pub fn house_of(&self, longitude_deg: f64) -> u8 {
        house_of_longitude(longitude_deg, &self.houses)
    }

    /// House of each placed body, in chart order.
    pub fn planet_houses(&self) -> Vec<(Body, u8)> {
        self.planets
            .iter()
            .map(|p| (p.body, self.house_of(p.longitude)))
            .collect()
    }
}

/// Orchestrates time conversion, angles, houses, ephemeris and aspects.
#[derive(Debug, Clone)]
pub struct ChartAssembler<P = SimplifiedEphemeris> {
    provider: P,
    config: ChartConfig,
}

impl Default for ChartAssembler<SimplifiedEphemeris> {
    fn default() -> Self {
        Self::new(SimplifiedEphemeris, ChartConfig::default())
    }
}

impl<P: EphemerisProvider> ChartAssembler<P> {
    pub fn new(provider: P, config: ChartConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Validate `input` and compute its chart.
    pub fn compute(&self, input: &BirthInput) -> Result<ChartResult, ChartError> {
        input.validate()?;

        if let Some(&body) = self
            .config
            .bodies
            .iter()
            .find(|&&b| !self.provider.supports(b))
        {
            return Err(EphemerisError::UnsupportedBody(body.to_string()).into());
        }

        let julian_day = input.civil_time().julian_day()?;
        let gmst = gmst_deg(julian_day);
        let lst = local_sidereal_time_deg(gmst, input.longitude);
        let obliquity = self.config.obliquity.obliquity_deg(julian_day);
        for (quantity, v) in [("sidereal time", lst), ("obliquity", obliquity)] {
            if !v.is_finite() {
                return Err(HouseSystemError::NonFinite { quantity }.into());
            }
        }
        debug!(julian_day, gmst, lst, obliquity, "chart time");

        let angles = angles_from_lst(lst, input.latitude, obliquity)?;
        let houses = placidus_cusps(&angles, lst, input.latitude, obliquity)?;
        debug!(asc = angles.asc, mc = angles.mc, "chart angles");

        let planets: Vec<PlanetPosition> = self
            .provider
            .longitudes(&self.config.bodies, julian_day)?
            .into_iter()
            .map(|(body, lon)| PlanetPosition::new(body, lon))
            .collect();
        let aspects = detect_aspects(&planets);
        debug!(
            provider = self.provider.name(),
            planets = planets.len(),
            aspects = aspects.len(),
            "chart bodies"
        );

        Ok(ChartResult {
            julian_day,
            gmst,
            lst,
            obliquity,
            asc: angles.asc,
            mc: angles.mc,
            houses,
            planets,
            aspects,
            input: input.clone(),
        })
    }
}

/// Compute a chart with the default bodies, fixed ε and the simplified
/// ephemeris.
pub fn compute_chart(input: &BirthInput) -> Result<ChartResult, ChartError> {
    ChartAssembler::default().compute(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use natal_time::TimeError;

    fn j2000() -> BirthInput {
        BirthInput::new(2000, 1, 1, 12, 0, 0.0, 0.0, 0.0)
    }

    #[test]
    fn j2000_equator_chart() {
        let c = compute_chart(&j2000()).unwrap();
        assert!((c.julian_day - 2_451_545.0).abs() < 1e-9);
        assert!((c.lst - 280.460_618).abs() < 1e-5);
        assert!((c.mc - 279.614).abs() < 1e-2);
        assert!((c.asc - 11.378).abs() < 1e-2);
        assert_eq!(c.planets.len(), 10);
        assert_eq!(c.houses[0], c.asc);
        assert_eq!(c.houses[9], c.mc);
    }

    #[test]
    fn default_config_has_all_bodies() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.bodies(), &ALL_BODIES[..]);
        assert_eq!(cfg.obliquity, ObliquityModel::Fixed);
    }

    #[test]
    fn with_bodies_dedups() {
        let cfg = ChartConfig::with_bodies([Body::Sun, Body::Moon, Body::Sun]);
        assert_eq!(cfg.bodies(), &[Body::Sun, Body::Moon][..]);
    }

    #[test]
    fn repeated_body_placed_once() {
        let asm = ChartAssembler::new(
            SimplifiedEphemeris,
            ChartConfig::with_bodies([Body::Sun, Body::Moon, Body::Sun]),
        );
        let c = asm.compute(&j2000()).unwrap();
        let bodies: Vec<Body> = c.planets.iter().map(|p| p.body).collect();
        assert_eq!(bodies, vec![Body::Sun, Body::Moon]);
        assert!(c.aspects.iter().all(|a| a.planet_a != a.planet_b));
    }

    #[test]
    fn subset_of_bodies() {
        let asm = ChartAssembler::new(
            SimplifiedEphemeris,
            ChartConfig::with_bodies([Body::Moon, Body::Sun]),
        );
        let c = asm.compute(&j2000()).unwrap();
        let bodies: Vec<Body> = c.planets.iter().map(|p| p.body).collect();
        assert_eq!(bodies, vec![Body::Moon, Body::Sun]);
        assert!(c.planet(Body::Mars).is_none());
    }

    #[test]
    fn validation_before_computation() {
        let mut input = j2000();
        input.month = 2;
        input.day = 30;
        let err = compute_chart(&input).unwrap_err();
        assert_eq!(
            err,
            ChartError::Validation(ValidationError::Time(TimeError::InvalidDay {
                year: 2000,
                month: 2,
                day: 30
            }))
        );
    }

    #[test]
    fn polar_latitude_is_house_system_error() {
        let mut input = j2000();
        input.latitude = 78.2;
        assert!(matches!(
            compute_chart(&input),
            Err(ChartError::HouseSystem(HouseSystemError::BeyondPolarCircle { .. }))
        ));
        input.latitude = -90.0;
        assert!(matches!(
            compute_chart(&input),
            Err(ChartError::HouseSystem(HouseSystemError::PolarSingularity { .. }))
        ));
    }

    #[test]
    fn mean_obliquity_changes_epsilon() {
        let asm = ChartAssembler::new(
            SimplifiedEphemeris,
            ChartConfig::default().with_obliquity(ObliquityModel::Mean),
        );
        let input = BirthInput::new(1950, 6, 1, 0, 0, 0.0, 10.0, 10.0);
        let mean = asm.compute(&input).unwrap();
        let fixed = compute_chart(&input).unwrap();
        assert!(mean.obliquity > fixed.obliquity);
        assert!((mean.obliquity - fixed.obliquity) < 0.01);
    }

    #[test]
    fn planet_houses_cover_all_planets() {
        let c = compute_chart(&BirthInput::new(1988, 3, 14, 6, 45, 7.0, 21.03, 105.85)).unwrap();
        let hs = c.planet_houses();
        assert_eq!(hs.len(), c.planets.len());
        assert!(hs.iter().all(|(_, h)| (1..=12).contains(h)));
    }
}
