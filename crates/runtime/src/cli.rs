//! Command-line arguments for `sphere_sim`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sphere_physics::profile::DEFAULT_COUNTS;
use sphere_physics::{BroadPhaseMethod, WorldConfig};

#[derive(Parser, Debug)]
#[command(name = "sphere_sim", version, about = "Headless sphere collision simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a randomly populated world for a fixed number of steps.
    Simulate(SimulateArgs),
    /// Time each collision stage for a range of population sizes.
    Profile(ProfileArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// JSON world configuration; missing fields use defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the number of spheres.
    #[arg(long)]
    pub spheres: Option<usize>,
    #[arg(long, default_value_t = 600)]
    pub steps: usize,
    #[arg(long, default_value_t = 0.016)]
    pub dt: f32,
    /// Broad-phase method: sweep_and_prune, brute_force or grid.
    #[arg(long)]
    pub method: Option<BroadPhaseMethod>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log a progress line every K steps (0 disables).
    #[arg(long, default_value_t = 100)]
    pub log_every: usize,
    /// Rebuild the world whenever the config file changes.
    #[arg(long, requires = "config")]
    pub watch: bool,
}

impl SimulateArgs {
    /// Load the config file (if any) and apply command-line overrides.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or the result is invalid.
    pub fn world_config(&self) -> Result<WorldConfig> {
        let mut config = match &self.config {
            Some(path) => WorldConfig::from_json_file(path)
                .with_context(|| format!("loading world config from {}", path.display()))?,
            None => WorldConfig::default(),
        };
        if let Some(spheres) = self.spheres {
            config.num_spheres = spheres;
        }
        if let Some(method) = self.method {
            config.method = method;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Population sizes to measure.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_COUNTS)]
    pub counts: Vec<usize>,
    /// Methods to compare.
    #[arg(
        long = "method",
        value_delimiter = ',',
        default_values_t = [BroadPhaseMethod::SweepAndPrune, BroadPhaseMethod::BruteForce]
    )]
    pub methods: Vec<BroadPhaseMethod>,
    #[arg(long, default_value_t = 1.0)]
    pub radius: f32,
    /// Maximum absolute velocity component.
    #[arg(long, default_value_t = 0.5)]
    pub speed: f32,
    #[arg(long, default_value_t = 1.0)]
    pub mass: f32,
    #[arg(long, default_value_t = 20.0)]
    pub world_size: f32,
    #[arg(long)]
    pub seed: Option<u64>,
}
