#![deny(clippy::all, clippy::pedantic)]
//! # Sphere Simulation Runtime
//!
//! Command-line front end for [`sphere_physics`]. The `simulate` command runs
//! a world headlessly and logs pair counts and momentum as it goes; the
//! `profile` command times each collision stage across population sizes.
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` to see per-step
//! broad and narrow phase counts from the engine itself.

pub mod app;
pub mod cli;
pub mod watcher;
