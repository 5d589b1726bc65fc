use std::fmt;

use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::sim::units::{Float, Vector};

/// A point mass taking part in the gravitational interaction.
///
/// Only carries the physical state. How a body looks on screen lives in
/// [`Appearance`], and where it has been lives in its trail, so the force
/// model and the integrator never see presentation data.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Body {
    pub(crate) name: String,
    mass: Float,
    pub(crate) velocity: Vector,
    pub(crate) position: Vector,
}

impl Body {
    pub(crate) fn new(
        name: impl Into<String>,
        mass: Float,
        velocity: Vector,
        position: Vector,
    ) -> Result<Body> {
        let name = name.into();
        if !(mass.is_finite() && mass > 0.) {
            return Err(SimError::InvalidMass { name, mass });
        }
        Ok(Body {
            name,
            mass,
            velocity,
            position,
        })
    }

    pub(crate) fn mass(&self) -> Float {
        self.mass
    }

    pub(crate) fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(
            f,
            "    Position = x: {:e} m, y: {:e} m",
            self.position.x, self.position.y
        )?;
        write!(
            f,
            "    Velocity = x: {:e} m/s, y: {:e} m/s",
            self.velocity.x, self.velocity.y
        )
    }
}

/// Presentation attributes, passed through to the renderer untouched.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub(crate) struct Appearance {
    pub(crate) color: [u8; 3],
    pub(crate) diameter: Float,
}

impl Appearance {
    pub(crate) fn radius(&self) -> Float {
        self.diameter / 2.
    }

    pub(crate) fn trail_width(&self) -> Float {
        self.diameter / 4.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mass_is_rejected() {
        let result = Body::new("Ghost", 0., Vector::zeros(), Vector::zeros());
        println!("{:?}", result);
        assert!(matches!(result, Err(SimError::InvalidMass { .. })));
    }

    #[test]
    fn negative_and_nan_masses_are_rejected() {
        for mass in [-1., -1.99e30, Float::NAN, Float::INFINITY] {
            let result = Body::new("Ghost", mass, Vector::zeros(), Vector::zeros());
            println!("mass = {}: {:?}", mass, result);
            assert!(result.is_err());
        }
    }

    #[test]
    fn positive_mass_is_accepted() {
        let body = Body::new("Earth", 5.97e24, Vector::new(0., 29.8e3), Vector::new(1.5e11, 0.))
            .unwrap();
        assert_eq!(body.mass(), 5.97e24);
        assert_eq!(body.position, Vector::new(1.5e11, 0.));
        assert_eq!(body.velocity, Vector::new(0., 29.8e3));
    }

    #[test]
    fn momentum_scales_velocity_by_mass() {
        let body = Body::new("Probe", 2., Vector::new(3., -4.), Vector::zeros()).unwrap();
        assert_eq!(body.momentum(), Vector::new(6., -8.));
    }

    #[test]
    fn radius_and_trail_width_follow_diameter() {
        let appearance = Appearance {
            color: [252, 207, 3],
            diameter: 40.,
        };
        assert_eq!(appearance.radius(), 20.);
        assert_eq!(appearance.trail_width(), 10.);
    }
}
