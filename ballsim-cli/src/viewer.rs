//! Interactive viewer for the ball simulation
//!
//! Wall-clock time is measured once per frame and handed to the fixed-step
//! driver through a scripted clock, which lets pause and the speed slider
//! scale time without the driver knowing about either.

use ballsim_core::{
    build_simulation_context, Drawable, Driver, ManualClock, RenderSink, SceneConfig,
    ScreenTransform, SystemClock, TimeSource,
};
use eframe::egui;

/// Paints drawables straight into an egui canvas
struct PainterSink<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    screen: ScreenTransform,
}

impl RenderSink for PainterSink<'_> {
    fn begin_frame(&mut self) {
        let rect = egui::Rect::from_min_size(
            self.origin,
            egui::vec2(self.screen.width as f32, self.screen.height as f32),
        );
        self.painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
    }

    fn draw(&mut self, drawable: &Drawable) {
        let p = self.screen.to_screen(drawable.center);
        let center = self.origin + egui::vec2(p.x as f32, p.y as f32);
        let radius = self.screen.scale_radius(drawable.radius) as f32;
        let [r, g, b] = drawable.color;
        let color = egui::Color32::from_rgb(r, g, b);

        self.painter.circle_filled(center, radius, color);
        self.painter
            .circle_stroke(center, radius, egui::Stroke::new(1.0, color));
    }
}

/// Hand scaled wall time to the driver's clock. Nothing drains the queue
/// without a running driver, so time is only queued while one is.
fn queue_elapsed(clock: &mut ManualClock, scaled: f64, running: bool) {
    if running {
        clock.push(scaled);
    }
}

pub struct ViewerApp {
    config: SceneConfig,
    seed: u64,
    dt: f64,
    driver: Option<Driver>,
    last_error: Option<String>,
    wall_clock: SystemClock,
    sim_clock: ManualClock,
    playing: bool,
    speed_multiplier: f64,
    step_count: usize,
}

impl ViewerApp {
    pub fn new(config: SceneConfig, seed: u64, dt: f64, _cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            config,
            seed,
            dt,
            driver: None,
            last_error: None,
            wall_clock: SystemClock::new(),
            sim_clock: ManualClock::default(),
            playing: true,
            speed_multiplier: 1.0,
            step_count: 0,
        };

        app.reset();
        app
    }

    fn reset(&mut self) {
        let built = build_simulation_context(&self.config, self.seed, self.dt, None)
            .and_then(|ctx| Driver::new(ctx.simulator, ctx.dt));

        match built {
            Ok(driver) => {
                self.driver = Some(driver);
                self.last_error = None;
            }
            Err(e) => {
                log::error!("failed to build scene: {}", e);
                self.driver = None;
                self.last_error = Some(e.to_string());
                self.playing = false;
            }
        }
        self.step_count = 0;
    }

    fn single_step(&mut self) {
        if let Some(driver) = self.driver.as_mut() {
            match driver.simulator.step(self.dt) {
                Ok(_) => self.step_count += 1,
                Err(e) => self.last_error = Some(e.to_string()),
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                self.playing = !self.playing;
            }

            if ui.button("⏮ Reset").clicked() {
                self.reset();
            }

            if ui.button("⏭ Step").clicked() {
                self.playing = false;
                self.single_step();
            }

            ui.separator();

            ui.label("Speed:");
            ui.add(egui::Slider::new(&mut self.speed_multiplier, 0.1..=4.0));

            ui.separator();

            ui.label(format!("Step: {}", self.step_count));
            if let Some(driver) = &self.driver {
                ui.label(format!(
                    "Energy: {:.6}",
                    driver.simulator.total_kinetic_energy()
                ));
            }
        });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));

        // Always drain the wall clock so a pause does not bank time
        let elapsed = self.wall_clock.elapsed_seconds();
        queue_elapsed(
            &mut self.sim_clock,
            elapsed * self.speed_multiplier,
            self.playing && self.driver.is_some(),
        );

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let side = rect.width().min(rect.height());
            let origin = rect.center() - egui::vec2(side, side) * 0.5;

            if let Some(driver) = self.driver.as_mut() {
                let mut sink = PainterSink {
                    painter: ui.painter(),
                    origin,
                    screen: ScreenTransform::new(side as f64, side as f64),
                };
                match driver.tick(&mut self.sim_clock, &mut sink) {
                    Ok(report) => self.step_count += report.steps,
                    Err(e) => {
                        self.last_error = Some(e.to_string());
                        self.playing = false;
                    }
                }
            }

            if let Some(error) = &self.last_error {
                ui.vertical_centered(|ui| {
                    ui.add_space(rect.height() * 0.4);
                    ui.label(
                        egui::RichText::new(format!("Error: {}", error))
                            .color(egui::Color32::RED)
                            .size(16.0),
                    );
                });
            }
        });

        if self.playing {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_time_queued_without_driver() {
        let mut clock = ManualClock::default();
        for _ in 0..100 {
            queue_elapsed(&mut clock, 1.0 / 60.0, false);
        }
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_running_driver_gets_time() {
        let mut clock = ManualClock::default();
        queue_elapsed(&mut clock, 0.5, true);
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.elapsed_seconds(), 0.5);
        assert_eq!(clock.pending(), 0);
    }
}
