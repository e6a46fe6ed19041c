//! Presentation side of the simulation
//!
//! Renderers only ever see [`Drawable`] records. The mapping from arena
//! coordinates to pixels lives here and has no effect on the physics.

use crate::body::{Body, Color};
use glam::DVec2;

/// What a renderer needs to paint one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    pub center: DVec2,
    pub radius: f64,
    pub color: Color,
}

impl From<&Body> for Drawable {
    fn from(body: &Body) -> Self {
        Self {
            center: body.pos,
            radius: body.radius,
            color: body.color,
        }
    }
}

pub fn drawables(bodies: &[Body]) -> Vec<Drawable> {
    bodies.iter().map(Drawable::from).collect()
}

/// Receives one frame worth of drawables
pub trait RenderSink {
    fn begin_frame(&mut self) {}
    fn draw(&mut self, drawable: &Drawable);
    fn end_frame(&mut self) {}
}

/// Paint every body into the sink as one frame
pub fn paint<S: RenderSink + ?Sized>(bodies: &[Body], sink: &mut S) {
    sink.begin_frame();
    for body in bodies {
        sink.draw(&Drawable::from(body));
    }
    sink.end_frame();
}

/// Maps the unit arena onto a surface of `width` x `height` pixels.
/// Arena y points up, surface y points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    pub width: f64,
    pub height: f64,
}

impl ScreenTransform {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn to_screen(&self, point: DVec2) -> DVec2 {
        DVec2::new(point.x * self.width, (1.0 - point.y) * self.height)
    }

    pub fn scale_radius(&self, radius: f64) -> f64 {
        radius * self.width
    }
}

/// Sink that keeps every frame in memory
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub frames: Vec<Vec<Drawable>>,
    current: Vec<Drawable>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&[Drawable]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl RenderSink for FrameRecorder {
    fn begin_frame(&mut self) {
        self.current.clear();
    }

    fn draw(&mut self, drawable: &Drawable) {
        self.current.push(*drawable);
    }

    fn end_frame(&mut self) {
        self.frames.push(std::mem::take(&mut self.current));
    }
}
