use space_game::compute::GameModel;
use space_game::config::GameConfig;
use space_game::entities::*;
use space_game::error::GameError;
use space_game::events::{EventLog, GameEvent, MAX_PENDING_EVENTS};

/// Default constants with spawning switched off, so only scripted objects
/// are on the field.
fn quiet_config() -> GameConfig {
    GameConfig {
        start_spawn_rate: 0,
        ..GameConfig::default()
    }
}

fn quiet_model() -> GameModel {
    GameModel::with_seed(quiet_config(), 7)
}

fn at(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn steer(m: &mut GameModel, moves: &[Direction]) {
    for &direction in moves {
        m.move_ship(direction).unwrap();
    }
}

// ── Fresh game ────────────────────────────────────────────────────────────────

#[test]
fn fresh_game_state() {
    let m = GameModel::with_seed(GameConfig::default(), 1);
    assert_eq!(m.ship().position(), at(5, 10));
    assert_eq!(m.ship().health(), 100);
    assert_eq!(m.ship().score(), 0);
    assert_eq!(m.level(), 1);
    assert_eq!(m.spawn_rate(), 2);
    assert!(m.objects().is_empty());
    assert!(m.events().is_empty());
}

#[test]
fn entities_list_ship_first() {
    let mut m = quiet_model();
    m.add_object(SpaceObject::Enemy(at(1, 1)));
    m.add_object(SpaceObject::Bullet(at(2, 2)));
    let entities: Vec<_> = m.entities().collect();
    assert_eq!(
        entities,
        vec![
            (EntityKind::Ship, at(5, 10)),
            (EntityKind::Enemy, at(1, 1)),
            (EntityKind::Bullet, at(2, 2)),
        ]
    );
}

// ── Commands ──────────────────────────────────────────────────────────────────

#[test]
fn fire_bullet_from_ship_cell() {
    let mut m = quiet_model();
    m.move_ship(Direction::Left).unwrap();
    m.fire_bullet();
    assert_eq!(m.objects(), &[SpaceObject::Bullet(at(4, 10))]);
    assert_eq!(m.events().last(), Some(&GameEvent::BulletFired(at(4, 10))));
}

#[test]
fn move_logs_new_position() {
    let mut m = quiet_model();
    m.move_ship(Direction::Down).unwrap();
    assert_eq!(m.drain_events(), vec![GameEvent::ShipMoved(at(5, 11))]);
    assert!(m.events().is_empty());
}

#[test]
fn rejected_move_logs_nothing() {
    let mut m = quiet_model();
    for _ in 0..10 {
        m.move_ship(Direction::Up).unwrap();
    }
    m.drain_events();
    assert_eq!(
        m.move_ship(Direction::Up),
        Err(GameError::BoundaryExceeded { direction: Direction::Up })
    );
    assert_eq!(m.ship().position(), at(5, 0));
    assert!(m.events().is_empty());
}

// ── update_game — advance & cull ──────────────────────────────────────────────

#[test]
fn objects_follow_their_own_rules() {
    let mut m = quiet_model();
    m.add_object(SpaceObject::Asteroid(at(1, 0)));
    m.add_object(SpaceObject::Enemy(at(2, 0)));
    m.add_object(SpaceObject::Bullet(at(3, 15)));
    m.add_object(SpaceObject::HealthPowerUp(at(4, 4)));
    for tick in 1..=10 {
        m.update_game(tick);
    }
    assert_eq!(
        m.objects(),
        &[
            SpaceObject::Asteroid(at(1, 1)),
            SpaceObject::Enemy(at(2, 1)),
            SpaceObject::Bullet(at(3, 5)),
            SpaceObject::HealthPowerUp(at(4, 4)),
        ]
    );
}

#[test]
fn row_at_height_is_kept_and_past_it_culled() {
    let mut m = quiet_model();
    m.add_object(SpaceObject::Asteroid(at(0, 19)));
    m.tick(10);
    assert_eq!(m.objects(), &[SpaceObject::Asteroid(at(0, 20))]);
    m.tick(20);
    assert!(m.objects().is_empty());
}

#[test]
fn bullet_leaving_top_is_culled() {
    let mut m = quiet_model();
    m.add_object(SpaceObject::Bullet(at(3, 1)));
    m.tick(1);
    assert_eq!(m.objects(), &[SpaceObject::Bullet(at(3, 0))]);
    m.tick(2);
    assert!(m.objects().is_empty());
}

// ── check_collisions ──────────────────────────────────────────────────────────

#[test]
fn collision_removes_only_marked_objects() {
    let mut m = quiet_model();
    m.add_object(SpaceObject::Asteroid(at(5, 10)));
    m.add_object(SpaceObject::Enemy(at(1, 1)));
    m.add_object(SpaceObject::Bullet(at(1, 1)));
    m.add_object(SpaceObject::ShieldPowerUp(at(9, 9)));
    m.check_collisions();
    assert_eq!(m.ship().health(), 90);
    assert_eq!(m.objects(), &[SpaceObject::ShieldPowerUp(at(9, 9))]);
}

#[test]
fn bullet_fired_into_adjacent_enemy() {
    let mut m = quiet_model();
    m.add_object(SpaceObject::Enemy(at(5, 9)));
    m.fire_bullet();
    m.tick(1); // bullet climbs onto the enemy's cell
    assert!(m.objects().is_empty());
    assert_eq!(m.ship().health(), 100);
}

// ── level_up ──────────────────────────────────────────────────────────────────

#[test]
fn level_up_at_exact_threshold() {
    let mut m = GameModel::with_seed(GameConfig::default(), 3);
    m.ship_mut().add_score(100);
    m.tick(1);
    assert_eq!(m.level(), 2);
    assert_eq!(m.spawn_rate(), 7);
    assert!(m
        .events()
        .contains(&GameEvent::LevelUp { level: 2, spawn_rate: 7 }));
}

#[test]
fn no_level_up_below_threshold() {
    let mut m = GameModel::with_seed(GameConfig::default(), 3);
    m.ship_mut().add_score(99);
    m.tick(1);
    assert_eq!(m.level(), 1);
    assert_eq!(m.spawn_rate(), 2);
}

#[test]
fn one_level_per_tick_even_past_several_thresholds() {
    let mut m = quiet_model();
    m.ship_mut().add_score(350);
    m.level_up();
    assert_eq!(m.level(), 2);
    m.level_up();
    m.level_up();
    assert_eq!(m.level(), 4);
    m.level_up();
    assert_eq!(m.level(), 4);
    assert_eq!(m.spawn_rate(), 15);
}

#[test]
fn level_up_message() {
    let event = GameEvent::LevelUp { level: 2, spawn_rate: 7 };
    assert_eq!(
        event.to_string(),
        "Level Up! Welcome to Level 2. Spawn rate increased to 7%."
    );
}

// ── Event ordering ────────────────────────────────────────────────────────────

#[test]
fn events_keep_command_and_tick_order() {
    let mut m = quiet_model();
    m.add_object(SpaceObject::ShieldPowerUp(at(5, 10)));
    m.add_object(SpaceObject::Asteroid(at(5, 10)));
    m.ship_mut().add_score(50);
    m.fire_bullet();
    m.tick(1);
    assert_eq!(
        m.drain_events(),
        vec![
            GameEvent::BulletFired(at(5, 10)),
            GameEvent::PowerUpCollected(EntityKind::ShieldPowerUp),
            GameEvent::HitByAsteroid { damage: 10 },
            GameEvent::LevelUp { level: 2, spawn_rate: 5 },
        ]
    );
}

#[test]
fn undrained_events_keep_only_the_newest() {
    let mut log = EventLog::default();
    for x in 0..300 {
        log.push(GameEvent::ShipMoved(at(x, 0)));
    }
    assert_eq!(log.pending().len(), MAX_PENDING_EVENTS);
    assert_eq!(log.pending()[0], GameEvent::ShipMoved(at(44, 0)));
    assert_eq!(log.pending().last(), Some(&GameEvent::ShipMoved(at(299, 0))));
    assert_eq!(log.drain().len(), MAX_PENDING_EVENTS);
    assert!(log.pending().is_empty());
}

#[test]
fn long_undrained_game_stays_capped() {
    let mut m = quiet_model();
    for tick in 1..=400 {
        m.fire_bullet();
        m.tick(tick);
    }
    assert_eq!(m.events().len(), MAX_PENDING_EVENTS);
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn same_seed_same_game() {
    let run = |mut m: GameModel| {
        for tick in 1..=2000 {
            if tick % 7 == 0 {
                m.fire_bullet();
            }
            m.tick(tick);
        }
        (m.objects().to_vec(), m.ship().clone(), m.level(), m.spawn_rate())
    };
    let a = run(GameModel::with_seed(GameConfig::default(), 42));
    let b = run(GameModel::with_seed(GameConfig::default(), 42));
    assert_eq!(a, b);
}

#[test]
fn set_seed_matches_seeded_constructor() {
    let mut a = GameModel::with_seed(GameConfig::default(), 5);
    let mut b = GameModel::new(GameConfig::default());
    b.set_seed(5);
    for tick in 1..=300 {
        a.tick(tick);
        b.tick(tick);
    }
    assert_eq!(a.objects(), b.objects());
}

// ── End to end ────────────────────────────────────────────────────────────────

#[test]
fn scripted_twenty_tick_game() {
    let mut m = quiet_model();
    m.add_object(SpaceObject::Asteroid(at(5, 8)));
    m.add_object(SpaceObject::Enemy(at(5, 2)));
    m.add_object(SpaceObject::HealthPowerUp(at(4, 10)));
    m.add_object(SpaceObject::ShieldPowerUp(at(6, 10)));
    m.add_object(SpaceObject::Asteroid(at(0, 19)));
    m.add_object(SpaceObject::Enemy(at(9, 5)));

    for tick in 1..=20 {
        match tick {
            1 => m.fire_bullet(),
            9 => m.move_ship(Direction::Left).unwrap(),
            11 => {
                m.move_ship(Direction::Right).unwrap();
                m.move_ship(Direction::Right).unwrap();
            }
            12 => m.move_ship(Direction::Left).unwrap(),
            _ => {}
        }
        m.tick(tick);
    }

    // Bullet met the enemy at (5, 2) on tick 8, the health power-up was
    // picked up on tick 9, the shield on tick 11, the asteroid reached the
    // ship on tick 20, and the corner asteroid was culled the same tick.
    assert_eq!(m.ship().position(), at(5, 10));
    assert_eq!(m.ship().health(), 110);
    assert_eq!(m.ship().score(), 50);
    assert_eq!(m.level(), 1);
    assert_eq!(m.spawn_rate(), 0);
    assert_eq!(m.objects(), &[SpaceObject::Enemy(at(9, 7))]);
    assert_eq!(
        m.drain_events(),
        vec![
            GameEvent::BulletFired(at(5, 10)),
            GameEvent::ShipMoved(at(4, 10)),
            GameEvent::PowerUpCollected(EntityKind::HealthPowerUp),
            GameEvent::ShipMoved(at(5, 10)),
            GameEvent::ShipMoved(at(6, 10)),
            GameEvent::PowerUpCollected(EntityKind::ShieldPowerUp),
            GameEvent::ShipMoved(at(5, 10)),
            GameEvent::HitByAsteroid { damage: 10 },
        ]
    );
}

#[test]
fn seeded_stock_game_twenty_ticks() {
    use Direction::*;

    let mut m = GameModel::with_seed(GameConfig::default(), 2481);
    for tick in 1..=20 {
        if matches!(tick, 1 | 5 | 10 | 15 | 18) {
            m.fire_bullet();
        }
        match tick {
            2 | 3 => steer(&mut m, &[Left]),
            4 | 6 => steer(&mut m, &[Up, Up]),
            8 | 12 => steer(&mut m, &[Up, Up, Up]),
            14 => steer(&mut m, &[Right]),
            17 => steer(&mut m, &[Down]),
            _ => {}
        }
        m.tick(tick);
    }

    // Spawns: enemy (4, 0) on tick 1, asteroid (3, 0) on tick 3, asteroid
    // (9, 0) and enemy (1, 0) on tick 11, health power-up (9, 0) on tick 18.
    // The first enemy dropped to (4, 1) on tick 10 and the ship stepped
    // onto it on tick 17. Every bullet left the top unopposed.
    assert_eq!(m.ship().position(), at(4, 1));
    assert_eq!(m.ship().health(), 80);
    assert_eq!(m.ship().score(), 0);
    assert_eq!(m.level(), 1);
    assert_eq!(m.spawn_rate(), 2);
    assert_eq!(
        m.objects(),
        &[
            SpaceObject::Asteroid(at(3, 2)),
            SpaceObject::Asteroid(at(9, 1)),
            SpaceObject::Enemy(at(1, 1)),
            SpaceObject::HealthPowerUp(at(9, 0)),
        ]
    );
    let hits: Vec<_> = m
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::HitByAsteroid { .. } | GameEvent::HitByEnemy { .. }))
        .collect();
    assert_eq!(hits, vec![GameEvent::HitByEnemy { damage: 20 }]);
}
