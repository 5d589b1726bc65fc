use crate::{
    error::Result,
    sim::{
        body::{Appearance, Body},
        force::net_forces,
        integrator,
        scenario::Scenario,
        time_step::TimeStepController,
        trail::{Trail, Viewport},
        units::{Float, Vector, DAY},
    },
};

/// Discrete commands delivered by the input side, at most a few per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Command {
    Quit,
    ToggleRun,
    NudgeTimeStep(Float),
    SetResonantTarget(Float),
}

#[derive(Clone, Debug)]
pub(crate) struct BodyView {
    pub(crate) display_position: Vector,
    pub(crate) appearance: Appearance,
    pub(crate) trail: Vec<Vector>,
}

/// Read-only picture of the simulation after a tick, all the renderer ever sees.
#[derive(Clone, Debug)]
pub(crate) struct Snapshot {
    pub(crate) bodies: Vec<BodyView>,
    pub(crate) draw_trail: bool,
    pub(crate) running: bool,
    pub(crate) time_step: Float,
    pub(crate) ramp_target: Option<Float>,
    pub(crate) elapsed: Float,
}

#[derive(Clone, Debug)]
pub(crate) struct Simulation {
    name: String,
    bodies: Vec<Body>,
    appearances: Vec<Appearance>,
    trails: Vec<Trail>,
    viewport: Viewport,
    draw_trail: bool,
    time_step: Float,
    running: bool,
    controller: TimeStepController,
    elapsed: Float,
    ticks: u64,
}

impl Simulation {
    /// Builds a paused simulation stepping one day per tick.
    pub(crate) fn new(scenario: &Scenario, viewport: Viewport, draw_trail: bool) -> Result<Simulation> {
        let bodies = scenario.instantiate()?;
        let trails = bodies
            .iter()
            .map(|body| {
                let mut trail = Trail::new(viewport);
                trail.record(&body.position);
                trail
            })
            .collect();
        log::info!(
            "Created '{}' with {} bodies, trail {}",
            scenario.name,
            bodies.len(),
            if draw_trail { "on" } else { "off" }
        );
        Ok(Simulation {
            name: scenario.name.clone(),
            bodies,
            appearances: scenario.appearances(),
            trails,
            viewport,
            draw_trail,
            time_step: DAY,
            running: false,
            controller: TimeStepController::default(),
            elapsed: 0.,
            ticks: 0,
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn time_step(&self) -> Float {
        self.time_step
    }

    pub(crate) fn elapsed(&self) -> Float {
        self.elapsed
    }

    pub(crate) fn ticks(&self) -> u64 {
        self.ticks
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub(crate) fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => {}
            Command::ToggleRun => {
                self.running = !self.running;
                log::info!("{}", if self.running { "Running" } else { "Paused" });
            }
            Command::NudgeTimeStep(delta) => {
                self.controller.nudge(&mut self.time_step, delta);
                log::info!("Time step is now {} s", self.time_step);
            }
            Command::SetResonantTarget(target) => {
                self.controller.set_target(target);
                log::info!("Ramping time step from {} s to {} s", self.time_step, target);
            }
        }
    }

    /// One tick: ramp the time step, then move every body if running.
    ///
    /// All forces come from the positions at the start of the tick.
    pub(crate) fn tick(&mut self) {
        self.controller.advance(&mut self.time_step);
        if !self.running {
            return;
        }

        let forces = net_forces(&self.bodies);
        for ((body, force), trail) in self
            .bodies
            .iter_mut()
            .zip(forces.iter())
            .zip(self.trails.iter_mut())
        {
            let trail = if self.draw_trail { Some(trail) } else { None };
            integrator::step(body, force, self.time_step, trail);
        }
        self.elapsed += self.time_step;
        self.ticks += 1;
    }

    pub(crate) fn total_momentum(&self) -> Vector {
        self.bodies
            .iter()
            .fold(Vector::zeros(), |sum, body| sum + body.momentum())
    }

    pub(crate) fn center_of_mass(&self) -> Vector {
        let total_mass: Float = self.bodies.iter().map(Body::mass).sum();
        let weighted = self
            .bodies
            .iter()
            .fold(Vector::zeros(), |sum, body| sum + body.position * body.mass());
        weighted / total_mass
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        let bodies = self
            .bodies
            .iter()
            .zip(self.appearances.iter())
            .zip(self.trails.iter())
            .map(|((body, appearance), trail)| BodyView {
                display_position: self.viewport.to_display(&body.position),
                appearance: *appearance,
                trail: trail.points().copied().collect(),
            })
            .collect();
        Snapshot {
            bodies,
            draw_trail: self.draw_trail,
            running: self.running,
            time_step: self.time_step,
            ramp_target: self.controller.target(),
            elapsed: self.elapsed,
        }
    }

    /// Name, position and velocity of each body, one block per body.
    pub(crate) fn report(&self) -> String {
        self.bodies
            .iter()
            .map(|body| body.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
