//! Same-cell collision resolution.
//!
//! Resolution is two-phase: every pass only marks indices, and the caller
//! removes the marked objects in one batch afterwards.

use std::collections::BTreeSet;

use crate::config::GameConfig;
use crate::entities::{Ship, SpaceObject};
use crate::events::{EventLog, GameEvent};

/// Apply ship collisions and bullet/enemy hits, returning the indices of
/// every object that must be removed.
pub fn resolve_collisions(
    ship: &mut Ship,
    objects: &[SpaceObject],
    config: &GameConfig,
    events: &mut EventLog,
) -> BTreeSet<usize> {
    let mut to_remove = ship_collisions(ship, objects, config, events);
    to_remove.extend(bullet_enemy_collisions(objects));
    to_remove
}

/// Every object on the ship's cell is processed; several hazards can land
/// on the ship in the same tick.
pub fn ship_collisions(
    ship: &mut Ship,
    objects: &[SpaceObject],
    config: &GameConfig,
    events: &mut EventLog,
) -> BTreeSet<usize> {
    let mut to_remove = BTreeSet::new();

    for (i, object) in objects.iter().enumerate() {
        if object.position() != ship.position() {
            continue;
        }
        match object {
            SpaceObject::HealthPowerUp(_) | SpaceObject::ShieldPowerUp(_) => {
                object.apply_effect(ship, config);
                events.push(GameEvent::PowerUpCollected(object.kind()));
                to_remove.insert(i);
            }
            SpaceObject::Asteroid(_) => {
                ship.take_damage(config.asteroid_damage);
                events.push(GameEvent::HitByAsteroid {
                    damage: config.asteroid_damage,
                });
                to_remove.insert(i);
            }
            SpaceObject::Enemy(_) => {
                ship.take_damage(config.enemy_damage);
                events.push(GameEvent::HitByEnemy {
                    damage: config.enemy_damage,
                });
                to_remove.insert(i);
            }
            // Bullets leave from the ship's own cell.
            SpaceObject::Bullet(_) => {}
        }
    }

    to_remove
}

/// A bullet and an enemy on the same cell destroy each other. Asteroids
/// shrug bullets off.
pub fn bullet_enemy_collisions(objects: &[SpaceObject]) -> BTreeSet<usize> {
    let mut to_remove = BTreeSet::new();

    for (i, a) in objects.iter().enumerate() {
        for (j, b) in objects.iter().enumerate() {
            if i == j || a.position() != b.position() {
                continue;
            }
            if let (SpaceObject::Bullet(_), SpaceObject::Enemy(_)) = (a, b) {
                to_remove.insert(i);
                to_remove.insert(j);
            }
        }
    }

    to_remove
}
