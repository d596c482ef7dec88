//! Notifications the engine raises for a logging collaborator.
//!
//! Events are queued on the model in the order they happen and mirrored to
//! the `log` facade at `info` level.

use std::fmt;

use crate::entities::{EntityKind, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ShipMoved(Position),
    BulletFired(Position),
    PowerUpCollected(EntityKind),
    HitByAsteroid { damage: u32 },
    HitByEnemy { damage: u32 },
    LevelUp { level: u32, spawn_rate: u32 },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::ShipMoved(p) => write!(f, "Ship moved to ({}, {})", p.x, p.y),
            GameEvent::BulletFired(_) => write!(f, "Bullet fired!"),
            GameEvent::PowerUpCollected(kind) => {
                write!(f, "Power-up collected: {}", kind.graphic().text)
            }
            GameEvent::HitByAsteroid { damage } => {
                write!(f, "Hit by asteroid! Health reduced by {}.", damage)
            }
            GameEvent::HitByEnemy { damage } => {
                write!(f, "Hit by enemy! Health reduced by {}.", damage)
            }
            GameEvent::LevelUp { level, spawn_rate } => write!(
                f,
                "Level Up! Welcome to Level {}. Spawn rate increased to {}%.",
                level, spawn_rate
            ),
        }
    }
}

/// Most events kept between drains. Older ones are dropped first.
pub const MAX_PENDING_EVENTS: usize = 256;

/// Ordered sink for events raised during one command or tick.
///
/// Holds at most [`MAX_PENDING_EVENTS`]; once full, every push drops the
/// oldest pending event. Every event still reaches the `log` facade.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pending: Vec<GameEvent>,
}

impl EventLog {
    pub fn push(&mut self, event: GameEvent) {
        log::info!("{}", event);
        if self.pending.len() == MAX_PENDING_EVENTS {
            let dropped = self.pending.remove(0);
            log::debug!("Event queue full, dropped: {}", dropped);
        }
        self.pending.push(event);
    }

    pub fn pending(&self) -> &[GameEvent] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }
}
