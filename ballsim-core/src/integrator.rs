use crate::body::Body;

/// Advance positions by dt using explicit Euler (x += v*dt).
/// No forces act on the bodies, velocities only change on collision.
pub fn integrate(bodies: &mut [Body], dt: f64) {
    for body in bodies.iter_mut() {
        body.pos += body.vel * dt;
    }
}

/// Reflect bodies off the arena walls, returning the number of bounces.
///
/// Each axis is handled on its own so a body can bounce off two walls in
/// the same step.
pub fn resolve_walls(bodies: &mut [Body]) -> usize {
    let mut bounces = 0;

    for body in bodies.iter_mut() {
        let r = body.radius;

        if body.pos.x - r < 0.0 {
            body.pos.x = r;
            body.vel.x = -body.vel.x;
            bounces += 1;
        } else if body.pos.x + r > 1.0 {
            body.pos.x = 1.0 - r;
            body.vel.x = -body.vel.x;
            bounces += 1;
        }

        if body.pos.y - r < 0.0 {
            body.pos.y = r;
            body.vel.y = -body.vel.y;
            bounces += 1;
        } else if body.pos.y + r > 1.0 {
            body.pos.y = 1.0 - r;
            body.vel.y = -body.vel.y;
            bounces += 1;
        }
    }

    bounces
}
