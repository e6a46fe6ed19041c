pub mod body;
pub mod driver;
pub mod error;
pub mod integrator;
pub mod render;
pub mod runtime;
pub mod scene;
pub mod simulator;

pub use body::{Body, Color};
pub use driver::{Driver, ManualClock, SystemClock, TickReport, TimeSource, DEFAULT_DT};
pub use error::SimError;
pub use render::{drawables, paint, Drawable, FrameRecorder, RenderSink, ScreenTransform};
pub use runtime::{
    build_simulation_context, get_ball_states, run_headless, step_simulation, BallState,
    SimulationContext, SimulationResult, Totals,
};
pub use scene::{color_for_mass, generate, seeded_rng, SceneConfig};
pub use simulator::{
    apply_impulse, ball_collision, fix_overlap, resolve_overlaps, CollisionOutcome, Correction,
    Simulator, StepReport,
};
