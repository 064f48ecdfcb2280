//! Wings no Yaiba - a terminal obstacle-avoidance minigame.
//!
//! This crate exposes the game engine, settings and persistence for the
//! `yaiba` binary and for tests.

pub mod config;
pub mod minigame;
pub mod navigation;
pub mod utils;

pub use config::Settings;
pub use minigame::{YaibaDifficulty, YaibaGame, YaibaInput, YaibaPhase, YaibaSession};
pub use navigation::{Destination, Navigator};
