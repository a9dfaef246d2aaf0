//! Session state: the aggregate that owns every live entity
//!
//! The session exclusively owns the player, the formations and the boss;
//! each actor exclusively owns its projectile collection. The monotonic
//! session clock is derived from the tick counter, so all cooldown
//! decisions within a frame see the same time.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boss::Boss;
use super::enemy::Formation;
use super::player::Player;
use super::rect::Rect;
use crate::config::{ConfigError, GameConfig};
use crate::ticks_to_ms;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// The player was destroyed; terminal until restart
    GameOver,
    /// The boss was destroyed; terminal until restart
    GameClear,
}

fn skipped_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete session state
#[derive(Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Session seed, for log correlation
    pub seed: u64,
    #[serde(skip, default = "skipped_rng")]
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation tick counter; the session clock derives from it
    pub time_ticks: u64,
    pub player: Player,
    pub formations: Vec<Formation>,
    pub boss: Option<Boss>,
    pub last_spawn_ms: u64,
    /// Defeated-enemy counter; reaching the threshold summons the boss
    pub kills: u32,
    /// Latched when the boss arrives; normal spawning never resumes
    pub boss_spawned: bool,
}

impl GameState {
    /// Build a fresh session. Fails fast on a configuration the
    /// simulation cannot run with.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config, seed))
    }

    fn from_valid(config: GameConfig, seed: u64) -> Self {
        let player = Player::new(&config);
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            time_ticks: 0,
            player,
            formations: Vec::new(),
            boss: None,
            last_spawn_ms: 0,
            kills: 0,
            boss_spawned: false,
        }
    }

    /// Milliseconds on the session clock, sampled once per tick
    pub fn now_ms(&self) -> u64 {
        ticks_to_ms(self.time_ticks)
    }

    /// The viewport rectangle every culling check runs against
    pub fn view(&self) -> Rect {
        Rect::new(0.0, 0.0, self.config.view.width, self.config.view.height)
    }

    /// Rebuild the session from scratch, reseeding from the session RNG
    pub fn restart(&mut self) {
        let seed = self.rng.random();
        *self = Self::from_valid(self.config.clone(), seed);
        log::info!("session restarted (seed {seed})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let mut config = GameConfig::default();
        config.view.width = 0.0;
        assert!(GameState::new(config, 1).is_err());
    }

    #[test]
    fn session_clock_runs_at_60hz() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        assert_eq!(state.now_ms(), 0);
        state.time_ticks = 60;
        assert_eq!(state.now_ms(), 1000);
        state.time_ticks = 90;
        assert_eq!(state.now_ms(), 1500);
    }

    #[test]
    fn restart_rebuilds_every_entity() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        state.kills = 12;
        state.phase = GamePhase::GameOver;
        state.time_ticks = 5000;
        state.player.invincible = true;

        state.restart();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.kills, 0);
        assert_eq!(state.time_ticks, 0);
        assert!(!state.player.invincible);
        assert!(state.formations.is_empty());
        assert!(state.boss.is_none());
        assert_ne!(state.seed, 1);
    }
}
