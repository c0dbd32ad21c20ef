#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Sphere Physics
//!
//! Collision detection and response for a population of moving spheres
//! inside a cubic world centered at the origin.
//!
//! Every step runs the same pipeline over a contiguous buffer of [`Body`]
//! values:
//!
//! -   **Reflection:** bodies crossing a wall are clamped back inside and the
//!     offending velocity component is negated ([`boundary`]).
//! -   **Broad phase:** sweep-and-prune on each axis, intersected, produces
//!     candidate pairs. A brute-force method is available for reference.
//! -   **Narrow phase:** a GJK query specialised for spheres confirms which
//!     candidates actually touch.
//! -   **Response:** confirmed pairs exchange velocity with the 1-D elastic
//!     collision formulas applied per component.
//!
//! [`World`] wraps the pipeline with a random population and position
//! integration; the stage functions in [`collision`] can also be driven
//! directly.
//!
//! ```rust,ignore
//! use sphere_physics::{World, WorldConfig};
//!
//! let mut world = World::new(WorldConfig { seed: Some(7), ..WorldConfig::default() })?;
//! let report = world.run(0.016, 600)?;
//! println!("{} collisions", report.confirmed);
//! ```

pub mod body;
pub mod boundary;
pub mod collision;
pub mod config;
pub mod error;
pub mod integrator;
pub mod profile;
pub mod simulation;
pub mod types;

pub use body::{as_bytes, Body};
pub use boundary::reflect_at_boundary;
pub use collision::{
    brute_force, detect_broad_phase, detect_narrow_phase, gjk_intersect, gjk_query, resolve_collisions,
    resolve_pair, sweep_and_prune, BroadPhaseMethod, CandidatePair, GjkOutcome, ParseMethodError,
};
pub use config::{Range, WorldConfig};
pub use error::PhysicsError;
pub use profile::PhaseTimings;
pub use simulation::{StepReport, World};
pub use types::{Axis, Vec3};
