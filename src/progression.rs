//! Level and difficulty progression.

use crate::config::GameConfig;
use crate::events::GameEvent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progression {
    pub level: u32,
    /// Percentage chance per tick of an asteroid spawn.
    pub spawn_rate: u32,
}

impl Progression {
    pub fn new(config: &GameConfig) -> Self {
        Progression {
            level: config.start_level,
            spawn_rate: config.start_spawn_rate,
        }
    }

    /// Level up at most once when `score` has reached the current level's
    /// threshold. A score several thresholds ahead catches up one level per
    /// call.
    pub fn check(&mut self, score: u32, config: &GameConfig) -> Option<GameEvent> {
        let threshold = u64::from(self.level) * u64::from(config.score_threshold);
        if u64::from(score) < threshold {
            return None;
        }
        self.spawn_rate = self.spawn_rate.saturating_add(config.spawn_rate_increase);
        self.level = self.level.saturating_add(1);
        Some(GameEvent::LevelUp {
            level: self.level,
            spawn_rate: self.spawn_rate,
        })
    }
}
