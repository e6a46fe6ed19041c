//! Random initial conditions
//!
//! Scene generation is kept apart from the simulator: given a config and a
//! random source it returns a list of bodies, nothing more. Seeding the
//! source makes a scene reproducible.

use crate::body::{Body, Color};
use crate::error::SimError;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use std::ops::Range;

/// Parameters for a randomly generated scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub count: usize,
    /// Speed of every body; only the direction is random
    pub speed: f64,
    pub mass_range: Range<f64>,
    pub radius_range: Range<f64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            count: 13,
            speed: 0.3,
            mass_range: 0.5..1.0,
            radius_range: 0.025..0.075,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(SimError::config(format!(
                "speed {} must be non-negative",
                self.speed
            )));
        }
        check_range("mass", &self.mass_range)?;
        check_range("radius", &self.radius_range)?;
        if self.radius_range.end >= 0.5 {
            return Err(SimError::config(format!(
                "radius upper bound {} must be below 0.5",
                self.radius_range.end
            )));
        }
        Ok(())
    }
}

fn check_range(what: &str, range: &Range<f64>) -> Result<(), SimError> {
    let valid = range.start.is_finite()
        && range.end.is_finite()
        && range.start > 0.0
        && range.start < range.end;
    if valid {
        Ok(())
    } else {
        Err(SimError::config(format!(
            "{} range {:?} must be a non-empty positive interval",
            what, range
        )))
    }
}

/// Deterministic random source for reproducible scenes
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate `config.count` bodies scattered over the arena
pub fn generate<R: Rng>(config: &SceneConfig, rng: &mut R) -> Result<Vec<Body>, SimError> {
    config.validate()?;

    (0..config.count)
        .map(|_| {
            let pos = DVec2::new(rng.gen::<f64>(), rng.gen::<f64>());
            let angle = rng.gen_range(-PI..PI);
            let vel = DVec2::from_angle(angle) * config.speed;
            let mass = rng.gen_range(config.mass_range.clone());
            let radius = rng.gen_range(config.radius_range.clone());
            let color = color_for_mass(mass, &config.mass_range);
            Body::new(pos, vel, mass, radius, color)
        })
        .collect()
}

/// Grey shade for a mass: the lightest body is 200, heavier ones get darker
pub fn color_for_mass(mass: f64, mass_range: &Range<f64>) -> Color {
    let span = mass_range.end - mass_range.start;
    let t = if span > 0.0 {
        (mass - mass_range.start) / span
    } else {
        0.0
    };
    let level = (200.0 - (t * 200.0).trunc()).clamp(0.0, 255.0) as u8;
    [level; 3]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lightest_and_heaviest() {
        let range = 0.5..1.0;
        assert_eq!(color_for_mass(0.5, &range), [200, 200, 200]);
        assert_eq!(color_for_mass(1.0, &range), [0, 0, 0]);
        assert_eq!(color_for_mass(0.75, &range), [100, 100, 100]);
    }

    #[test]
    fn test_color_clamps_out_of_range_mass() {
        let range = 0.5..1.0;
        assert_eq!(color_for_mass(2.0, &range), [0, 0, 0]);
        assert_eq!(color_for_mass(0.1, &range), [255, 255, 255]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = SceneConfig::default();
        config.radius_range = 0.1..0.6;
        assert!(generate(&config, &mut seeded_rng(1)).is_err());

        let mut config = SceneConfig::default();
        config.mass_range = 1.0..0.5;
        assert!(generate(&config, &mut seeded_rng(1)).is_err());

        let mut config = SceneConfig::default();
        config.speed = f64::NAN;
        assert!(generate(&config, &mut seeded_rng(1)).is_err());
    }
}
