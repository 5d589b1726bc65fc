use crate::sim::body::Body;
use crate::sim::units::{Float, Vector, G};

/// Pairs closer than this (m) exert no force on each other.
pub(crate) const MIN_SEPARATION: Float = 1.;

/// Gravitational force on `a` due to `b`, pointing from `a` towards `b`.
pub(crate) fn pairwise_force(a: &Body, b: &Body) -> Vector {
    let dx = b.position.x - a.position.x;
    let dy = b.position.y - a.position.y;
    let d_squared = dx * dx + dy * dy;
    if d_squared < MIN_SEPARATION * MIN_SEPARATION {
        log::debug!(
            "{} and {} coincide, skipping their interaction",
            a.name,
            b.name
        );
        return Vector::zeros();
    }

    let f = G * a.mass() * b.mass() / d_squared;
    // atan2 keeps the sign of both components
    let theta = dy.atan2(dx);
    Vector::new(f * theta.cos(), f * theta.sin())
}

/// Net force on `bodies[index]` from every other body.
pub(crate) fn net_force(index: usize, bodies: &[Body]) -> Vector {
    let body = &bodies[index];
    bodies
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .fold(Vector::zeros(), |total, (_, other)| {
            total + pairwise_force(body, other)
        })
}

/// Net force on every body, all evaluated against the same positions.
///
/// Must be called before any body of the tick is moved.
pub(crate) fn net_forces(bodies: &[Body]) -> Vec<Vector> {
    (0..bodies.len()).map(|i| net_force(i, bodies)).collect()
}
