//! A tick-driven arcade simulation on a small fixed grid.
//!
//! The ship dodges and shoots descending asteroids and enemies, collects
//! power-ups, and levels up as its score grows. Everything here is pure
//! in-memory state; rendering and input live in the binary.

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod events;
pub mod progression;
pub mod spawn;

pub use compute::GameModel;
pub use config::GameConfig;
pub use entities::{Direction, EntityKind, Graphic, Position, Ship, SpaceObject};
pub use error::{ConfigError, GameError};
pub use events::GameEvent;
