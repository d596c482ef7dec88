//! The simulation loop.
//!
//! `GameModel` owns the ship, every other live object, the level state and
//! the spawn RNG. Callers render whatever state it exposes, feed it
//! commands between ticks, and call [`GameModel::tick`] once per frame.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision;
use crate::config::GameConfig;
use crate::entities::{Direction, EntityKind, Position, Ship, SpaceObject};
use crate::error::GameError;
use crate::events::{EventLog, GameEvent};
use crate::progression::Progression;
use crate::spawn;

#[derive(Clone, Debug)]
pub struct GameModel {
    config: GameConfig,
    ship: Ship,
    objects: Vec<SpaceObject>,
    progression: Progression,
    rng: StdRng,
    events: EventLog,
}

// ── Constructors ─────────────────────────────────────────────────────────────

impl GameModel {
    /// A fresh game with an entropy-seeded spawn generator.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// A fresh game whose spawns replay identically for the same seed.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        GameModel {
            ship: Ship::from_config(&config),
            objects: Vec::new(),
            progression: Progression::new(&config),
            rng,
            events: EventLog::default(),
            config,
        }
    }

    /// Reseed the spawn generator. Only tests need this.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl Default for GameModel {
    fn default() -> Self {
        GameModel::new(GameConfig::default())
    }
}

// ── Queries ──────────────────────────────────────────────────────────────────

impl GameModel {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    /// Live non-ship objects in insertion order.
    pub fn objects(&self) -> &[SpaceObject] {
        &self.objects
    }

    /// The whole entity collection, ship first.
    pub fn entities(&self) -> impl Iterator<Item = (EntityKind, Position)> + '_ {
        std::iter::once((EntityKind::Ship, self.ship.position()))
            .chain(self.objects.iter().map(|o| (o.kind(), o.position())))
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn spawn_rate(&self) -> u32 {
        self.progression.spawn_rate
    }

    /// Notifications raised since the last drain, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }
}

// ── Commands ─────────────────────────────────────────────────────────────────

impl GameModel {
    pub fn add_object(&mut self, object: SpaceObject) {
        self.objects.push(object);
    }

    pub fn move_ship(&mut self, direction: Direction) -> Result<(), GameError> {
        self.ship.move_in(direction, self.config.move_bound)?;
        self.events.push(GameEvent::ShipMoved(self.ship.position()));
        Ok(())
    }

    /// Launch a bullet from the ship's current cell.
    pub fn fire_bullet(&mut self) {
        let origin = self.ship.position();
        self.objects.push(SpaceObject::Bullet(origin));
        self.events.push(GameEvent::BulletFired(origin));
    }
}

// ── Per-tick pipeline ────────────────────────────────────────────────────────

impl GameModel {
    /// Run one full simulation step.
    ///
    /// Events raised here queue up until [`GameModel::drain_events`] is
    /// called. Callers that never drain keep only the newest
    /// [`MAX_PENDING_EVENTS`](crate::events::MAX_PENDING_EVENTS).
    pub fn tick(&mut self, tick: u64) {
        self.update_game(tick);
        self.check_collisions();
        self.spawn_objects();
        self.level_up();
    }

    /// Advance every entity, then cull whatever has left the field.
    ///
    /// Objects on row `height` are still on the field; only rows past it
    /// (or above row 0) are culled.
    pub fn update_game(&mut self, tick: u64) {
        self.ship.advance(tick);
        for object in &mut self.objects {
            object.advance(tick, self.config.descent_interval);
        }

        let height = self.config.height;
        let before = self.objects.len();
        self.objects.retain(|o| (0..=height).contains(&o.position().y));
        let culled = before - self.objects.len();
        if culled > 0 {
            log::debug!("Tick {}: culled {} object(s)", tick, culled);
        }
    }

    pub fn check_collisions(&mut self) {
        let to_remove = collision::resolve_collisions(
            &mut self.ship,
            &self.objects,
            &self.config,
            &mut self.events,
        );
        if to_remove.is_empty() {
            return;
        }

        let mut index = 0;
        self.objects.retain(|_| {
            let keep = !to_remove.contains(&index);
            index += 1;
            keep
        });
    }

    pub fn spawn_objects(&mut self) {
        let spawned = spawn::spawn_objects(
            &mut self.rng,
            &self.ship,
            self.progression.spawn_rate,
            &self.config,
        );
        self.objects.extend(spawned);
    }

    pub fn level_up(&mut self) {
        if let Some(event) = self.progression.check(self.ship.score(), &self.config) {
            self.events.push(event);
        }
    }
}
