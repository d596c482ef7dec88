//! Probabilistic spawning along the top row.
//!
//! Draw order is fixed so a seeded generator replays the same game:
//! asteroid roll (then its column), enemy roll (then its column), power-up
//! roll (then its column, then the health/shield coin flip).

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Position, Ship, SpaceObject};

/// Roll a percentage in `[0, 100)` and compare it against `chance`.
fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> bool {
    let draw: i32 = rng.gen_range(0..100);
    f64::from(draw) < chance
}

/// Pick a spawn column, or `None` when the ship sits on that column of
/// the top row.
fn spawn_cell<R: Rng + ?Sized>(rng: &mut R, ship: &Ship, config: &GameConfig) -> Option<Position> {
    if config.width <= 0 {
        return None;
    }
    let x = rng.gen_range(0..config.width);
    if ship.x() == x && ship.y() == 0 {
        log::debug!("Spawn suppressed on column {} (ship in the way)", x);
        return None;
    }
    Some(Position::new(x, 0))
}

/// Run the three spawn rolls for one tick and return whatever spawned.
pub fn spawn_objects<R: Rng + ?Sized>(
    rng: &mut R,
    ship: &Ship,
    spawn_rate: u32,
    config: &GameConfig,
) -> Vec<SpaceObject> {
    let mut spawned = Vec::new();
    let rate = f64::from(spawn_rate);

    if roll(rng, rate) {
        if let Some(cell) = spawn_cell(rng, ship, config) {
            spawned.push(SpaceObject::Asteroid(cell));
        }
    }

    if roll(rng, rate * config.enemy_spawn_multiplier) {
        if let Some(cell) = spawn_cell(rng, ship, config) {
            spawned.push(SpaceObject::Enemy(cell));
        }
    }

    if roll(rng, rate * config.power_up_spawn_multiplier) {
        if let Some(cell) = spawn_cell(rng, ship, config) {
            let power_up = if rng.gen_bool(0.5) {
                SpaceObject::ShieldPowerUp(cell)
            } else {
                SpaceObject::HealthPowerUp(cell)
            };
            spawned.push(power_up);
        }
    }

    for object in &spawned {
        log::debug!("Spawned {:?}", object);
    }
    spawned
}
