//! Tests for random scene generation

use ballsim_core::tests::test_helpers::approx_eq;
use ballsim_core::{color_for_mass, generate, seeded_rng, SceneConfig, Simulator};

#[test]
fn test_same_seed_same_scene() {
    let config = SceneConfig::default();
    let a = generate(&config, &mut seeded_rng(42)).expect("generation failed");
    let b = generate(&config, &mut seeded_rng(42)).expect("generation failed");
    assert_eq!(a, b, "a seeded scene should be reproducible");
}

#[test]
fn test_different_seeds_differ() {
    let config = SceneConfig::default();
    let a = generate(&config, &mut seeded_rng(1)).expect("generation failed");
    let b = generate(&config, &mut seeded_rng(2)).expect("generation failed");
    assert_ne!(a, b);
}

#[test]
fn test_generated_bodies_respect_config() {
    let config = SceneConfig {
        count: 200,
        ..SceneConfig::default()
    };
    let bodies = generate(&config, &mut seeded_rng(7)).expect("generation failed");

    assert_eq!(bodies.len(), 200);
    for b in &bodies {
        assert!((0.0..=1.0).contains(&b.x()) && (0.0..=1.0).contains(&b.y()));
        assert!(approx_eq(b.vel.length(), config.speed, 1e-12), "speed {}", b.vel.length());
        assert!(config.mass_range.contains(&b.mass));
        assert!(config.radius_range.contains(&b.radius));
        assert_eq!(b.color, color_for_mass(b.mass, &config.mass_range));
    }
}

#[test]
fn test_heavier_is_darker() {
    let config = SceneConfig::default();
    let mut bodies = generate(&config, &mut seeded_rng(3)).expect("generation failed");
    bodies.sort_by(|a, b| a.mass.total_cmp(&b.mass));
    for pair in bodies.windows(2) {
        assert!(pair[0].color[0] >= pair[1].color[0]);
    }
}

#[test]
fn test_empty_scene() {
    let config = SceneConfig {
        count: 0,
        ..SceneConfig::default()
    };
    let bodies = generate(&config, &mut seeded_rng(0)).expect("generation failed");
    assert!(bodies.is_empty());
    assert!(Simulator::new(bodies).is_empty());
}
