use crate::body::{Body, Color};
use crate::error::SimError;
use crate::scene::{generate, seeded_rng, SceneConfig};
use crate::simulator::Simulator;
use glam::DVec2;

/// Snapshot of one ball, for printing or inspection
#[derive(Debug, Clone, PartialEq)]
pub struct BallState {
    pub index: usize,
    pub pos: DVec2,
    pub vel: DVec2,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
}

/// Conserved quantities measured at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub momentum: DVec2,
    pub kinetic_energy: f64,
}

impl Totals {
    pub fn measure(simulator: &Simulator) -> Self {
        Self {
            momentum: simulator.total_momentum(),
            kinetic_energy: simulator.total_kinetic_energy(),
        }
    }
}

/// Final result of a headless run
#[derive(Debug)]
pub struct SimulationResult {
    pub balls: Vec<BallState>,
    pub steps: usize,
    pub collisions: usize,
    pub wall_bounces: usize,
    pub before: Totals,
    pub after: Totals,
}

/// A simulation that can be stepped incrementally (used by the viewer)
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub simulator: Simulator,
    pub dt: f64,
    pub current_step: usize,
    pub max_steps: Option<usize>,
}

/// Build a context from a randomly generated scene
pub fn build_simulation_context(
    config: &SceneConfig,
    seed: u64,
    dt: f64,
    max_steps: Option<usize>,
) -> Result<SimulationContext, SimError> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimError::InvalidTimeStep(dt));
    }
    let bodies = generate(config, &mut seeded_rng(seed))?;
    log::info!("generated {} balls (seed {})", bodies.len(), seed);

    Ok(SimulationContext {
        simulator: Simulator::new(bodies),
        dt,
        current_step: 0,
        max_steps,
    })
}

/// Advance by one step. Returns true once `max_steps` has been reached.
pub fn step_simulation(ctx: &mut SimulationContext) -> Result<bool, SimError> {
    if is_finished(ctx) {
        return Ok(true);
    }
    ctx.simulator.step(ctx.dt)?;
    ctx.current_step += 1;
    Ok(is_finished(ctx))
}

fn is_finished(ctx: &SimulationContext) -> bool {
    ctx.max_steps.is_some_and(|max| ctx.current_step >= max)
}

pub fn get_ball_states(ctx: &SimulationContext) -> Vec<BallState> {
    ball_states(ctx.simulator.bodies())
}

fn ball_states(bodies: &[Body]) -> Vec<BallState> {
    bodies
        .iter()
        .enumerate()
        .map(|(index, b)| BallState {
            index,
            pos: b.pos,
            vel: b.vel,
            mass: b.mass,
            radius: b.radius,
            color: b.color,
        })
        .collect()
}

/// Generate a scene and run it for `steps` steps without a display
pub fn run_headless(
    config: &SceneConfig,
    seed: u64,
    dt: f64,
    steps: usize,
) -> Result<SimulationResult, SimError> {
    let mut ctx = build_simulation_context(config, seed, dt, Some(steps))?;
    let before = Totals::measure(&ctx.simulator);

    let mut collisions = 0;
    let mut wall_bounces = 0;
    while !is_finished(&ctx) {
        let report = ctx.simulator.step(ctx.dt)?;
        ctx.current_step += 1;
        collisions += report.collisions;
        wall_bounces += report.wall_bounces;
    }

    Ok(SimulationResult {
        balls: get_ball_states(&ctx),
        steps: ctx.current_step,
        collisions,
        wall_bounces,
        before,
        after: Totals::measure(&ctx.simulator),
    })
}
