//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step order, bounded timestep
//! - Seeded RNG only; hazard animation runs on accumulated simulation time
//! - No rendering or platform dependencies
//!
//! The [`Session`] owns every piece of mutable state; [`step`] advances it
//! once per tick.

pub mod hazards;
pub mod physics;
pub mod state;
pub mod tick;

pub use hazards::{beam_center, blink_armed};
pub use state::{Beam, Player, Session};
pub use tick::{StepInput, step};
