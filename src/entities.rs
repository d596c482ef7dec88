//! All simulation objects: the ship, descending hazards, bullets and power-ups.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::GameError;

// ── Grid primitives ───────────────────────────────────────────────────────────

/// A grid cell. Row 0 is the top of the play field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

// ── Kinds & graphics ──────────────────────────────────────────────────────────

/// The closed set of entity kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ship,
    Asteroid,
    Enemy,
    Bullet,
    HealthPowerUp,
    ShieldPowerUp,
}

/// How a renderer should draw an entity: a terminal glyph and an image asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Graphic {
    pub text: &'static str,
    pub image: &'static str,
}

impl EntityKind {
    pub fn graphic(self) -> Graphic {
        let (text, image) = match self {
            EntityKind::Ship => ("🚀", "assets/ship.png"),
            EntityKind::Asteroid => ("🌑", "assets/asteroid.png"),
            EntityKind::Enemy => ("👾", "assets/enemy.png"),
            EntityKind::Bullet => ("🔺", "assets/bullet.png"),
            EntityKind::HealthPowerUp => ("❤️", "assets/health.png"),
            EntityKind::ShieldPowerUp => ("💠", "assets/shield.png"),
        };
        Graphic { text, image }
    }

    pub fn is_power_up(self) -> bool {
        matches!(self, EntityKind::HealthPowerUp | EntityKind::ShieldPowerUp)
    }
}

// ── Ship ──────────────────────────────────────────────────────────────────────

/// The player-controlled ship. Health bottoms out at zero and has no
/// ceiling; score only ever grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ship {
    position: Position,
    health: u32,
    score: u32,
}

impl Ship {
    pub fn new(position: Position, health: u32) -> Self {
        Ship {
            position,
            health,
            score: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Ship::new(config.ship_start, config.ship_start_health)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The ship holds its position between commands.
    pub fn advance(&mut self, _tick: u64) {}

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount);
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Move one cell, keeping both coordinates inside `[0, bound)`.
    ///
    /// A rejected move leaves the ship where it was.
    pub fn move_in(&mut self, direction: Direction, bound: i32) -> Result<(), GameError> {
        let Position { x, y } = self.position;
        let candidate = match direction {
            Direction::Up => Position::new(x, y - 1),
            Direction::Down => Position::new(x, y + 1),
            Direction::Left => Position::new(x - 1, y),
            Direction::Right => Position::new(x + 1, y),
        };

        let in_bounds = (0..bound).contains(&candidate.x) && (0..bound).contains(&candidate.y);
        if !in_bounds {
            return Err(GameError::BoundaryExceeded { direction });
        }
        self.position = candidate;
        Ok(())
    }

    pub fn render(&self) -> Graphic {
        EntityKind::Ship.graphic()
    }
}

// ── Everything else ───────────────────────────────────────────────────────────

/// A non-ship entity. Asteroids and enemies descend, bullets climb,
/// power-ups stay put until collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpaceObject {
    Asteroid(Position),
    Enemy(Position),
    Bullet(Position),
    HealthPowerUp(Position),
    ShieldPowerUp(Position),
}

impl SpaceObject {
    pub fn kind(&self) -> EntityKind {
        match self {
            SpaceObject::Asteroid(_) => EntityKind::Asteroid,
            SpaceObject::Enemy(_) => EntityKind::Enemy,
            SpaceObject::Bullet(_) => EntityKind::Bullet,
            SpaceObject::HealthPowerUp(_) => EntityKind::HealthPowerUp,
            SpaceObject::ShieldPowerUp(_) => EntityKind::ShieldPowerUp,
        }
    }

    pub fn position(&self) -> Position {
        match *self {
            SpaceObject::Asteroid(p)
            | SpaceObject::Enemy(p)
            | SpaceObject::Bullet(p)
            | SpaceObject::HealthPowerUp(p)
            | SpaceObject::ShieldPowerUp(p) => p,
        }
    }

    fn position_mut(&mut self) -> &mut Position {
        match self {
            SpaceObject::Asteroid(p)
            | SpaceObject::Enemy(p)
            | SpaceObject::Bullet(p)
            | SpaceObject::HealthPowerUp(p)
            | SpaceObject::ShieldPowerUp(p) => p,
        }
    }

    /// Apply this object's own movement rule for `tick`.
    pub fn advance(&mut self, tick: u64, descent_interval: u64) {
        match self {
            SpaceObject::Asteroid(_) | SpaceObject::Enemy(_) => {
                if descent_interval > 0 && tick % descent_interval == 0 {
                    self.position_mut().y += 1;
                }
            }
            SpaceObject::Bullet(_) => self.position_mut().y -= 1,
            SpaceObject::HealthPowerUp(_) | SpaceObject::ShieldPowerUp(_) => {}
        }
    }

    /// Grant a power-up's effect to `ship`. Hazards and bullets have none.
    pub fn apply_effect(&self, ship: &mut Ship, config: &GameConfig) {
        match self {
            SpaceObject::HealthPowerUp(_) => ship.heal(config.health_restore),
            SpaceObject::ShieldPowerUp(_) => ship.add_score(config.shield_score),
            SpaceObject::Asteroid(_) | SpaceObject::Enemy(_) | SpaceObject::Bullet(_) => {}
        }
    }

    pub fn render(&self) -> Graphic {
        self.kind().graphic()
    }
}
