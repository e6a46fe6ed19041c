mod viewer;

use ballsim_core::{run_headless, SceneConfig, DEFAULT_DT};
use clap::{Args, Parser, Subcommand};
use viewer::ViewerApp;

#[derive(Parser)]
#[command(name = "ballsim")]
#[command(about = "Elastic collisions of balls in a box", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation without a window and print the final state
    Run {
        #[command(flatten)]
        scene: SceneArgs,

        /// Number of physics steps to run
        #[arg(long, default_value_t = 1200)]
        steps: usize,
    },
    /// Open a window and watch the simulation
    View {
        #[command(flatten)]
        scene: SceneArgs,

        /// Window edge length in pixels
        #[arg(long, default_value_t = 600.0)]
        size: f32,
    },
}

#[derive(Args, Clone)]
struct SceneArgs {
    /// Number of balls
    #[arg(long, default_value_t = 13)]
    balls: usize,

    /// Seed for the random scene
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Physics time step
    #[arg(long, default_value_t = DEFAULT_DT)]
    dt: f64,

    /// Speed every ball starts with
    #[arg(long, default_value_t = 0.3)]
    speed: f64,
}

impl SceneArgs {
    fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            count: self.balls,
            speed: self.speed,
            ..SceneConfig::default()
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { scene, steps } => run(&scene, steps),
        Commands::View { scene, size } => view(scene, size),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(scene: &SceneArgs, steps: usize) -> Result<(), Box<dyn std::error::Error>> {
    let result = run_headless(&scene.scene_config(), scene.seed, scene.dt, steps)?;

    for ball in &result.balls {
        println!(
            "ball {:>3}: pos = ({:.6}, {:.6}) vel = ({:.6}, {:.6}) mass = {:.3} radius = {:.3}",
            ball.index, ball.pos.x, ball.pos.y, ball.vel.x, ball.vel.y, ball.mass, ball.radius
        );
    }
    println!(
        "steps = {} collisions = {} wall_bounces = {}",
        result.steps, result.collisions, result.wall_bounces
    );
    println!(
        "kinetic_energy = {:.12} -> {:.12}",
        result.before.kinetic_energy, result.after.kinetic_energy
    );

    Ok(())
}

fn view(scene: SceneArgs, size: f32) -> Result<(), Box<dyn std::error::Error>> {
    let config = scene.scene_config();
    // Fail before opening a window if the scene is invalid
    config.validate()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ballsim")
            .with_inner_size([size, size + 40.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ballsim",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(config, scene.seed, scene.dt, cc)))),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
