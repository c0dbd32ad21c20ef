//! # Simulation Runs
//!
//! The two commands behind `sphere_sim`. Both run headless and report through
//! `tracing`; nothing is written to disk.

use anyhow::Result;
use sphere_physics::profile::{measure_step, populate};
use sphere_physics::{PhaseTimings, StepReport, World};
use std::sync::mpsc;
use std::time::Duration;

use crate::cli::{ProfileArgs, SimulateArgs};
use crate::watcher;

/// Run a world for `args.steps` steps, logging progress every
/// `args.log_every` steps.
///
/// With `--watch`, edits to the config file rebuild the world in place. An
/// edit that fails to load is logged and the current world keeps running.
///
/// # Errors
///
/// Returns configuration, watcher and stepping errors.
pub fn simulate(args: &SimulateArgs) -> Result<StepReport> {
    let mut world = World::new(args.world_config()?)?;

    let (tx, rx) = mpsc::channel();
    let _config_watcher = match (&args.config, args.watch) {
        (Some(path), true) => Some(watcher::watch_config(path, tx)?),
        _ => None,
    };

    let initial_momentum = world.total_momentum();
    let initial_energy = world.total_kinetic_energy();
    let mut total = StepReport::default();

    tracing::info!(
        "Starting simulation loop for {} steps with dt = {}...",
        args.steps,
        args.dt
    );
    for step in 1..=args.steps {
        if let Ok(path) = rx.try_recv() {
            match args.world_config() {
                Ok(config) => {
                    tracing::info!("Config {} changed; rebuilding world.", path.display());
                    world = World::new(config)?;
                }
                Err(e) => tracing::warn!("Ignoring config change: {e:#}"),
            }
        }

        let report = world.step(args.dt)?;
        total += report;

        if args.log_every > 0 && step % args.log_every == 0 {
            tracing::info!(
                step,
                candidates = report.candidates,
                confirmed = report.confirmed,
                momentum = ?world.total_momentum().to_array(),
                kinetic_energy = world.total_kinetic_energy(),
                "progress"
            );
        }
    }

    tracing::info!(
        steps = args.steps,
        candidates = total.candidates,
        confirmed = total.confirmed,
        momentum_change = (world.total_momentum() - initial_momentum).length(),
        energy_change = world.total_kinetic_energy() - initial_energy,
        "Simulation loop finished."
    );
    Ok(total)
}

/// One row of a profiling sweep.
#[derive(Copy, Clone, Debug)]
pub struct ProfileRow {
    pub count: usize,
    pub method: sphere_physics::BroadPhaseMethod,
    pub timings: PhaseTimings,
}

/// Measure one step for every requested method and population size.
///
/// Each method sees the same populations: the generator is reseeded per row.
///
/// # Errors
///
/// Returns the first measurement error, e.g. for the grid method.
pub fn profile(args: &ProfileArgs) -> Result<Vec<ProfileRow>> {
    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    let mut rows = Vec::with_capacity(args.methods.len() * args.counts.len());

    for &method in &args.methods {
        for &count in &args.counts {
            let mut rng = fastrand::Rng::with_seed(seed ^ count as u64);
            let mut bodies = populate(count, args.radius, args.speed, args.mass, args.world_size, &mut rng);
            let timings = measure_step(&mut bodies, args.world_size, method)?;
            tracing::info!(
                %method,
                count,
                broad_ms = millis(timings.broad),
                narrow_ms = millis(timings.narrow),
                resolve_ms = millis(timings.resolve),
                total_ms = millis(timings.total()),
                candidates = timings.candidates,
                confirmed = timings.confirmed,
                "Completed test"
            );
            rows.push(ProfileRow { count, method, timings });
        }
    }
    Ok(rows)
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
