//! Shared type definitions for the Life simulation.
//!
//! These types form the vocabulary shared between the simulation core and
//! any host that renders it. They flow downstream to `TypeScript` via
//! `ts-rs` so a dashboard can consume the exact same shapes.
//!
//! # Modules
//!
//! - [`enums`] -- Run state and theme selection
//! - [`structs`] -- Colors and the status snapshot handed to renderers

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{RunState, ThemeId};
pub use structs::{Rgb, SimulationStatus};

