//! Astro Strike entry point
//!
//! Native shell: initializes logging, loads config overrides, then drives
//! a headless demo session with a scripted autopilot. A windowed build
//! hooks a real input backend and renderer up to the same `tick` /
//! `build_scene` pair this shell uses.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use astro_strike::render::build_scene;
use astro_strike::sim::{GamePhase, GameState, TickInput, tick};
use astro_strike::{ConfigError, GameConfig};

/// Demo length cap: two minutes of sim time
const MAX_DEMO_TICKS: u64 = 2 * 60 * 60;

fn main() {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    log::info!("Astro Strike demo starting (seed {seed})");

    for _ in 0..MAX_DEMO_TICKS {
        let input = autopilot(&state);
        tick(&mut state, &input);
        if state.phase != GamePhase::Playing {
            break;
        }
    }

    let scene = build_scene(&state);
    log::info!(
        "demo finished after {} ticks: {:?}, {} kills, {} shapes in the final frame",
        state.time_ticks,
        state.phase,
        state.kills,
        scene.shapes.len()
    );
}

/// Config overrides come from the file named by `ASTRO_STRIKE_CONFIG`
fn load_config() -> Result<GameConfig, ConfigError> {
    match std::env::var_os("ASTRO_STRIKE_CONFIG") {
        Some(path) => GameConfig::load_from(path.as_ref()),
        None => Ok(GameConfig::default()),
    }
}

/// Scripted demo pilot: hold fire, dodge the nearest incoming shot, drift
/// back to the center lane when nothing threatens
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput {
        fire: true,
        ..TickInput::default()
    };

    let player = state.player.center();
    let threat = nearest_threat(state, player);

    match threat {
        // dodge perpendicular to the incoming shot
        Some(threat_y) => {
            if threat_y >= player.y {
                input.up = true;
            } else {
                input.down = true;
            }
        }
        // re-center so spawns stay reachable
        None => {
            let target_y = state.config.view.height / 2.0;
            if player.y > target_y + 8.0 {
                input.up = true;
            } else if player.y < target_y - 8.0 {
                input.down = true;
            }
        }
    }

    input
}

/// Vertical position of the closest hostile shot inside the dodge window
fn nearest_threat(state: &GameState, player: Vec2) -> Option<f32> {
    const DODGE_WINDOW: f32 = 250.0;

    let mut nearest: Option<(f32, f32)> = None;
    let mut consider = |pos: Vec2| {
        let dx = pos.x - player.x;
        if (0.0..DODGE_WINDOW).contains(&dx) && (pos.y - player.y).abs() < 120.0 {
            if nearest.is_none_or(|(best_dx, _)| dx < best_dx) {
                nearest = Some((dx, pos.y));
            }
        }
    };

    for formation in &state.formations {
        for enemy in &formation.enemies {
            for shot in &enemy.bullets {
                consider(shot.pos);
            }
        }
    }
    if let Some(boss) = &state.boss {
        for shot in &boss.bullets {
            consider(shot.pos);
        }
        for bit in &boss.bits {
            for shot in &bit.bullets {
                consider(shot.pos);
            }
        }
    }

    nearest.map(|(_, y)| y)
}
