use crate::sim::body::Body;
use crate::sim::trail::Trail;
use crate::sim::units::{Float, Vector};

/// Advances `body` by one semi-implicit Euler step.
///
/// The velocity is kicked first and the position drifts with the new velocity.
/// This is first order, so energy slowly drifts over long runs.
pub(crate) fn step(body: &mut Body, net_force: &Vector, dt: Float, trail: Option<&mut Trail>) {
    let acceleration = net_force / body.mass();
    body.velocity += acceleration * dt;
    body.position += body.velocity * dt;

    if let Some(trail) = trail {
        trail.record(&body.position);
    }
}
