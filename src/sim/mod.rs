//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (60 Hz)
//! - Seeded RNG only
//! - Stable iteration order (grid order)
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{swarm_speed, GamePhase, GameState};
pub use tick::{tick, TickInput};
