//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Bounded, order-preserving entity stores
//! - No rendering or platform dependencies
//!
//! The host drives [`tick`] once per fixed period and reads
//! [`GameState::snapshot`] between ticks.

pub mod collision;
pub mod geometry;
pub mod input;
pub mod level;
pub mod state;
pub mod store;
pub mod tick;

pub use collision::CollisionOutcome;
pub use geometry::{circles_overlap, normalize_angle, wrap_padded, wrap_point};
pub use input::{PrimaryAction, TickInput, primary_action};
pub use state::{Asteroid, GameState, LevelPhase, Ship, Shot, Snapshot};
pub use store::{CapacityExceeded, EntityStore};
pub use tick::tick;
