//! Fixed-step simulation of bodies colliding inside the unit arena
//!
//! One step runs three phases in order: integrate positions, bounce off the
//! walls, then resolve every overlapping pair. Pairs are scanned as
//! `(i, j)` with `i < j` in insertion order and each one is corrected on the
//! spot, so in a cluster of three or more touching bodies a later pair sees
//! positions already moved by an earlier one. This is a single pass and is
//! not iterated to convergence.

use crate::body::Body;
use crate::error::SimError;
use crate::integrator::{integrate, resolve_walls};
use glam::DVec2;

/// Counters describing what happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub wall_bounces: usize,
    pub collisions: usize,
    pub skipped_corrections: usize,
    pub skipped_impulses: usize,
}

impl std::ops::AddAssign for StepReport {
    fn add_assign(&mut self, other: Self) {
        self.wall_bounces += other.wall_bounces;
        self.collisions += other.collisions;
        self.skipped_corrections += other.skipped_corrections;
        self.skipped_impulses += other.skipped_impulses;
    }
}

/// Result of rewinding an overlapping pair to the moment of contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correction {
    /// Both bodies were moved back by `alpha` times their velocity
    Applied { alpha: f64 },
    /// Identical velocities, there is no earlier moment of contact to find,
    /// positions are untouched
    NoRelativeMotion,
    /// Floating point drift left no real root, positions are untouched
    NoRealRoot,
}

/// Outcome of a full pair collision (correction then impulse)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionOutcome {
    pub correction: Correction,
    pub impulse_applied: bool,
}

/// Owns the bodies and advances them in fixed steps
#[derive(Debug, Clone)]
pub struct Simulator {
    bodies: Vec<Body>,
}

impl Simulator {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance the simulation by `dt`
    pub fn step(&mut self, dt: f64) -> Result<StepReport, SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }

        integrate(&mut self.bodies, dt);
        let wall_bounces = resolve_walls(&mut self.bodies);
        let mut report = resolve_overlaps(&mut self.bodies);
        report.wall_bounces = wall_bounces;

        log::trace!(
            "step dt={} bounces={} collisions={}",
            dt,
            report.wall_bounces,
            report.collisions
        );

        Ok(report)
    }

    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

/// Resolve every overlapping pair in ascending `(i, j)` order
pub fn resolve_overlaps(bodies: &mut [Body]) -> StepReport {
    let mut report = StepReport::default();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, b) = pair_mut(bodies, i, j);
            if !a.overlaps(b) {
                continue;
            }

            let outcome = ball_collision(a, b);
            report.collisions += 1;
            if !matches!(outcome.correction, Correction::Applied { .. }) {
                report.skipped_corrections += 1;
            }
            if !outcome.impulse_applied {
                report.skipped_impulses += 1;
            }
        }
    }

    report
}

/// Separate an overlapping pair and exchange momentum along the line of centers
pub fn ball_collision(a: &mut Body, b: &mut Body) -> CollisionOutcome {
    let correction = fix_overlap(a, b);
    let impulse_applied = apply_impulse(a, b);
    CollisionOutcome {
        correction,
        impulse_applied,
    }
}

/// Upper bound on nudges past the analytic contact time
const MAX_NUDGES: usize = 64;

/// Rewind both bodies along their straight-line paths until they just touch.
///
/// Solves `|r12 - alpha * v12|^2 = (ra + rb)^2` for the positive root. The
/// root is the larger one, so separation grows with `alpha` past it; `alpha`
/// is nudged forward until rounding no longer leaves the pair overlapping.
pub fn fix_overlap(a: &mut Body, b: &mut Body) -> Correction {
    let r12 = a.pos - b.pos;
    let v12 = a.vel - b.vel;
    let reach = a.radius + b.radius;

    let qa = v12.dot(v12);
    if qa == 0.0 {
        log::debug!("no relative motion, skipping correction");
        return Correction::NoRelativeMotion;
    }
    let qb = -2.0 * v12.dot(r12);
    let qc = r12.dot(r12) - reach * reach;

    let discriminant = qb * qb - 4.0 * qa * qc;
    if discriminant < 0.0 {
        log::debug!(
            "no real contact time (discriminant {}), skipping correction",
            discriminant
        );
        return Correction::NoRealRoot;
    }

    let mut alpha = (-qb + discriminant.sqrt()) / (2.0 * qa);
    if !alpha.is_finite() {
        log::debug!("contact time {} not finite, skipping correction", alpha);
        return Correction::NoRealRoot;
    }

    let (start_a, start_b) = (a.pos, b.pos);
    let mut nudge = alpha.abs().max(1.0) * f64::EPSILON;
    for _ in 0..MAX_NUDGES {
        a.pos = start_a - a.vel * alpha;
        b.pos = start_b - b.vel * alpha;
        if !a.overlaps(b) {
            break;
        }
        alpha += nudge;
        nudge *= 2.0;
    }

    Correction::Applied { alpha }
}

/// Elastic impulse along the line of centers. Returns false when the
/// centers coincide and no collision normal exists.
pub fn apply_impulse(a: &mut Body, b: &mut Body) -> bool {
    let r12 = a.pos - b.pos;
    let dist_sq = r12.length_squared();
    if !(dist_sq.is_finite() && dist_sq > 0.0) {
        log::debug!("coincident centers, skipping impulse");
        return false;
    }

    let total_mass = a.mass + b.mass;
    let delta = r12 * (2.0 / total_mass * (a.vel - b.vel).dot(r12) / dist_sq);

    a.vel -= delta * b.mass;
    b.vel += delta * a.mass;

    true
}

fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
