//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per call, rates are per tick)
//! - Seeded RNG only
//! - Stable iteration order (platforms in array order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod geometry;
pub mod level;
pub mod particles;
pub mod physics;
pub mod state;
pub mod tick;

pub use clock::FixedStep;
pub use collision::{resolve_collisions, resolve_platforms};
pub use geometry::{Contact, Rect, overlaps, resolve_penetration};
pub use level::{GamePhase, PLAYER_START};
pub use particles::{Particle, ParticleColor, ParticleField};
pub use state::{AnimState, Cloud, Coin, Facing, GameEvent, GameState, Goal, Platform, Player};
pub use tick::{TickInput, tick};
