use crate::error::SimError;
use glam::DVec2;

/// RGB display color, carried for the renderer only
pub type Color = [u8; 3];

/// A circular rigid body in the unit arena
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
}

impl Body {
    /// Create a body, rejecting values that would poison the simulation with NaNs
    pub fn new(
        pos: DVec2,
        vel: DVec2,
        mass: f64,
        radius: f64,
        color: Color,
    ) -> Result<Self, SimError> {
        if !pos.is_finite() {
            return Err(SimError::body(format!("position {} is not finite", pos)));
        }
        if !vel.is_finite() {
            return Err(SimError::body(format!("velocity {} is not finite", vel)));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::body(format!("mass {} must be positive", mass)));
        }
        if !(radius.is_finite() && radius > 0.0 && radius < 0.5) {
            return Err(SimError::body(format!(
                "radius {} must be in (0, 0.5)",
                radius
            )));
        }

        Ok(Self {
            pos,
            vel,
            mass,
            radius,
            color,
        })
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    /// True if the two circles intersect. Touching circles do not overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        let reach = self.radius + other.radius;
        self.pos.distance_squared(other.pos) < reach * reach
    }

    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }
}
