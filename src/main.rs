use anyhow::{Context, Result};
use clap::Parser;

use config::Args;
use sim::system::Simulation;

mod config;
mod error;
mod gui;
mod headless;
mod sim;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,orbital_modeller=info"),
    )
    .init();

    let args = Args::parse();
    let Some(startup) = config::resolve(&args).context("failed to set up the scenario")? else {
        return Ok(());
    };
    let mut simulation = Simulation::new(&startup.scenario, args.viewport(), startup.draw_trail)
        .with_context(|| format!("cannot build scenario '{}'", startup.scenario.name))?;

    if args.headless {
        headless::run(&mut simulation, args.ticks, args.report_every);
        println!("{}", simulation.report());
        return Ok(());
    }

    gui::run(simulation, args.window_size)
        .map_err(|error| anyhow::anyhow!("window closed with an error: {}", error))?;
    Ok(())
}
