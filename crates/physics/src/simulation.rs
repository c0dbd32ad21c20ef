//! # Simulation World
//!
//! [`World`] owns the body buffer and drives the collision pipeline once per
//! step: reflect and broad phase, narrow phase, response, then integration.
//! The candidate buffer is reused between steps so a running world does not
//! allocate once it has warmed up.

use crate::body::Body;
use crate::collision::{detect_broad_phase, detect_narrow_phase, resolve_collisions, BroadPhaseMethod, CandidatePair};
use crate::config::{Range, WorldConfig};
use crate::error::PhysicsError;
use crate::integrator::integrate_positions;
use crate::types::Vec3;

/// Pair counts produced by one or more steps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Pairs emitted by the broad phase.
    pub candidates: usize,
    /// Pairs that survived the narrow phase and were resolved.
    pub confirmed: usize,
}

impl std::ops::AddAssign for StepReport {
    fn add_assign(&mut self, rhs: Self) {
        self.candidates += rhs.candidates;
        self.confirmed += rhs.confirmed;
    }
}

pub struct World {
    bodies: Vec<Body>,
    pairs: Vec<CandidatePair>,
    world_size: f32,
    method: BroadPhaseMethod,
    config: Option<WorldConfig>,
    rng: fastrand::Rng,
}

impl World {
    /// Create a world populated at random from `config`.
    ///
    /// Centers are drawn from the full `[-world_size, world_size]` cube, so a
    /// body may start straddling a wall; the first step pulls it inside.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: WorldConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let bodies = spawn(&config, &mut rng);
        tracing::info!(
            bodies = bodies.len(),
            world_size = config.world_size,
            method = %config.method,
            seed = ?config.seed,
            "created world"
        );

        Ok(Self {
            bodies,
            pairs: Vec::new(),
            world_size: config.world_size,
            method: config.method,
            config: Some(config),
            rng,
        })
    }

    /// Create a world from an explicit set of bodies.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] for a non-positive world size
    /// and [`PhysicsError::InvalidBody`] for the first body that fails
    /// [`Body::validate`].
    pub fn from_bodies(bodies: Vec<Body>, world_size: f32, method: BroadPhaseMethod) -> Result<Self, PhysicsError> {
        if !(world_size.is_finite() && world_size > 0.0) {
            return Err(PhysicsError::InvalidConfig("world_size must be positive".to_owned()));
        }
        for body in &bodies {
            body.validate()?;
        }
        tracing::info!(bodies = bodies.len(), world_size, %method, "created world from bodies");

        Ok(Self {
            bodies,
            pairs: Vec::new(),
            world_size,
            method,
            config: None,
            rng: fastrand::Rng::with_seed(0),
        })
    }

    /// Advance the world by `dt`.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnsupportedMethod`] if the world is set to the
    /// grid method. The bodies are left exactly as they were.
    pub fn step(&mut self, dt: f32) -> Result<StepReport, PhysicsError> {
        detect_broad_phase(&mut self.bodies, self.world_size, self.method, &mut self.pairs)?;
        let candidates = self.pairs.len();
        detect_narrow_phase(&self.bodies, &mut self.pairs);
        resolve_collisions(&mut self.bodies, &self.pairs);
        integrate_positions(&mut self.bodies, dt);

        Ok(StepReport {
            candidates,
            confirmed: self.pairs.len(),
        })
    }

    /// Run `steps` steps of `dt`, returning the summed report.
    ///
    /// # Errors
    ///
    /// Stops at the first failing step and returns its error.
    pub fn run(&mut self, dt: f32, steps: usize) -> Result<StepReport, PhysicsError> {
        let mut total = StepReport::default();
        for _ in 0..steps {
            total += self.step(dt)?;
        }
        Ok(total)
    }

    /// Re-populate from the configuration this world was created with.
    ///
    /// A seeded world replays the same population on every reset. Worlds built
    /// with [`World::from_bodies`] have nothing to regenerate from.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::EmptyWorld`] for a world without a configuration.
    pub fn reset(&mut self) -> Result<(), PhysicsError> {
        let config = self.config.as_ref().ok_or(PhysicsError::EmptyWorld)?;
        if let Some(seed) = config.seed {
            self.rng = fastrand::Rng::with_seed(seed);
        }
        self.bodies = spawn(config, &mut self.rng);
        self.world_size = config.world_size;
        self.pairs.clear();
        tracing::info!(bodies = self.bodies.len(), "reset world");
        Ok(())
    }

    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    #[must_use]
    pub fn world_size(&self) -> f32 {
        self.world_size
    }

    #[must_use]
    pub fn method(&self) -> BroadPhaseMethod {
        self.method
    }

    pub fn set_method(&mut self, method: BroadPhaseMethod) {
        self.method = method;
    }

    /// Confirmed pairs from the most recent step.
    #[must_use]
    pub fn pairs(&self) -> &[CandidatePair] {
        &self.pairs
    }

    #[must_use]
    pub fn total_momentum(&self) -> Vec3 {
        self.bodies.iter().fold(Vec3::ZERO, |acc, b| acc + b.momentum())
    }

    #[must_use]
    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

fn spawn(config: &WorldConfig, rng: &mut fastrand::Rng) -> Vec<Body> {
    let position = Range::new(-config.world_size, config.world_size);
    let sample_vec = |range: &Range, rng: &mut fastrand::Rng| Vec3::new(range.sample(rng), range.sample(rng), range.sample(rng));

    (0..config.num_spheres)
        .zip(0_u32..)
        .map(|(_, id)| {
            let center = sample_vec(&position, rng);
            let radius = config.radius.sample(rng);
            let velocity = sample_vec(&config.velocity, rng);
            let mass = config.mass.sample(rng);
            Body::new(id, center, radius, velocity, mass)
        })
        .collect()
}
