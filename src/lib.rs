//! Simulation core of a vertical arcade shoot-'em-up.
//!
//! `compute` drives a `GameState` one frame at a time; the renderer reads
//! `snapshot` views of it and never feeds anything back.

pub mod abilities;
pub mod boss;
pub mod collision;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod hostile;
pub mod input;
pub mod minion;
pub mod progression;
pub mod projectile;
pub mod snapshot;
pub mod spawner;
pub mod stage;
pub mod state;
