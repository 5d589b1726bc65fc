//! Initial configurations the simulation can start from.
//!
//! The four presets are built in. Further scenarios can be loaded from a
//! YAML file of the form:
//!
//! ```yaml
//! name: "Binary with planet"
//! bodies:
//!   - name: "Sun A"
//!     mass: 1.99e30          # kg
//!     position: [-1.5e11, 0.0] # m
//!     velocity: [0.0, -1.0e4]  # m/s
//!     appearance:
//!       color: [252, 207, 3]
//!       diameter: 40.0         # px
//! ```

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::sim::body::{Appearance, Body};
use crate::sim::units::{Float, Vector, AU, KM_PER_S};

const SUN_MASS: Float = 1.99e30;
const EARTH_MASS: Float = 5.97e24;

const SUN_LOOK: Appearance = Appearance {
    color: [252, 207, 3],
    diameter: 40.,
};
const EARTH_LOOK: Appearance = Appearance {
    color: [27, 164, 209],
    diameter: 16.,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Preset {
    /// The sun and the four inner planets
    SolarSystem,
    /// Two suns passing each other on parallel paths 2 AU apart
    TwoSuns,
    /// Earth orbiting a sun at rest
    EarthSun,
    /// Earth orbiting a sun that drifts across the screen
    EarthMovingSun,
}

impl Preset {
    pub(crate) const ALL: [Preset; 4] = [
        Preset::SolarSystem,
        Preset::TwoSuns,
        Preset::EarthSun,
        Preset::EarthMovingSun,
    ];

    /// Maps a menu number (starting at 1) to its preset.
    pub(crate) fn from_menu_number(number: u32) -> Option<Preset> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub(crate) fn title(&self) -> &'static str {
        match self {
            Preset::SolarSystem => "Solar system",
            Preset::TwoSuns => "Two suns",
            Preset::EarthSun => "Earth and sun",
            Preset::EarthMovingSun => "Earth and moving sun",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct BodyTemplate {
    pub(crate) name: String,
    pub(crate) mass: Float,
    pub(crate) position: [Float; 2],
    pub(crate) velocity: [Float; 2],
    pub(crate) appearance: Appearance,
}

impl BodyTemplate {
    fn new(
        name: &str,
        mass: Float,
        position: [Float; 2],
        velocity: [Float; 2],
        appearance: Appearance,
    ) -> BodyTemplate {
        BodyTemplate {
            name: name.to_owned(),
            mass,
            position,
            velocity,
            appearance,
        }
    }

    pub(crate) fn instantiate(&self) -> Result<Body> {
        Body::new(
            self.name.clone(),
            self.mass,
            Vector::from(self.velocity),
            Vector::from(self.position),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct Scenario {
    pub(crate) name: String,
    pub(crate) bodies: Vec<BodyTemplate>,
}

impl Scenario {
    pub(crate) fn preset(preset: Preset) -> Scenario {
        let bodies = match preset {
            Preset::SolarSystem => vec![
                BodyTemplate::new("Sun", SUN_MASS, [0., 0.], [0., 0.], SUN_LOOK),
                BodyTemplate::new(
                    "Mercury",
                    3.29e23,
                    [0.39 * AU, 0.],
                    [0., 47.4 * KM_PER_S],
                    Appearance {
                        color: [213, 210, 209],
                        diameter: 6.,
                    },
                ),
                BodyTemplate::new(
                    "Venus",
                    4.87e24,
                    [0.72 * AU, 0.],
                    [0., 34.8 * KM_PER_S],
                    Appearance {
                        color: [139, 125, 130],
                        diameter: 15.,
                    },
                ),
                BodyTemplate::new(
                    "Earth",
                    EARTH_MASS,
                    [AU, 0.],
                    [0., 29.8 * KM_PER_S],
                    EARTH_LOOK,
                ),
                BodyTemplate::new(
                    "Mars",
                    6.39e23,
                    [1.52 * AU, 0.],
                    [0., 24.1 * KM_PER_S],
                    Appearance {
                        color: [156, 46, 53],
                        diameter: 10.,
                    },
                ),
            ],
            Preset::TwoSuns => vec![
                BodyTemplate::new("Sun", SUN_MASS, [-AU, -AU], [0., 7.5 * KM_PER_S], SUN_LOOK),
                BodyTemplate::new("Sun", SUN_MASS, [AU, AU], [0., -7.5 * KM_PER_S], SUN_LOOK),
            ],
            Preset::EarthSun => vec![
                BodyTemplate::new("Sun", SUN_MASS, [0., 0.], [0., 0.], SUN_LOOK),
                BodyTemplate::new(
                    "Earth",
                    EARTH_MASS,
                    [AU, 0.],
                    [0., 29.8 * KM_PER_S],
                    EARTH_LOOK,
                ),
            ],
            Preset::EarthMovingSun => vec![
                BodyTemplate::new("Sun", SUN_MASS, [-AU, 0.], [5. * KM_PER_S, 0.], SUN_LOOK),
                BodyTemplate::new(
                    "Earth",
                    EARTH_MASS,
                    [0., 0.],
                    [0., 29.8 * KM_PER_S],
                    EARTH_LOOK,
                ),
            ],
        };
        Scenario {
            name: preset.title().to_owned(),
            bodies,
        }
    }

    pub(crate) fn from_yaml_file(path: &Path) -> Result<Scenario> {
        let yaml = fs::read_to_string(path)?;
        let scenario = Self::from_yaml_str(&yaml)?;
        log::info!("Loaded scenario '{}' from {}", scenario.name, path.display());
        Ok(scenario)
    }

    pub(crate) fn from_yaml_str(yaml: &str) -> Result<Scenario> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Builds the live bodies, refusing the whole scenario if any body is invalid.
    pub(crate) fn instantiate(&self) -> Result<Vec<Body>> {
        if self.bodies.is_empty() {
            return Err(SimError::EmptyScenario(self.name.clone()));
        }
        self.bodies.iter().map(BodyTemplate::instantiate).collect()
    }

    pub(crate) fn appearances(&self) -> Vec<Appearance> {
        self.bodies.iter().map(|b| b.appearance).collect()
    }
}
