use crate::sim::{system::Simulation, units::DAY};

/// Runs `ticks` ticks without a window, logging conservation diagnostics.
pub(crate) fn run(simulation: &mut Simulation, ticks: u64, report_every: u64) {
    simulation.set_running(true);
    log::info!(
        "Running '{}' ({} bodies) headless for {} ticks of {} s",
        simulation.name(),
        simulation.bodies().len(),
        ticks,
        simulation.time_step()
    );

    let initial_momentum = simulation.total_momentum();
    for tick in 1..=ticks {
        simulation.tick();
        if report_every > 0 && tick % report_every == 0 {
            let momentum = simulation.total_momentum();
            log::info!(
                "tick {}, day {:.1}: momentum drift ({:e}, {:e}) kg m/s, center of mass ({:e}, {:e}) m",
                simulation.ticks(),
                simulation.elapsed() / DAY,
                momentum.x - initial_momentum.x,
                momentum.y - initial_momentum.y,
                simulation.center_of_mass().x,
                simulation.center_of_mass().y,
            );
        }
    }
}
