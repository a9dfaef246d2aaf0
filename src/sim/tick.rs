//! Fixed timestep simulation tick
//!
//! One call advances the whole session by one logical frame: input is
//! applied to the player, spawn timers run, every actor advances its own
//! motion and attack sub-state, and the combat resolver scans the result.
//! Terminal phases short-circuit at the top of the tick.

use glam::Vec2;
use rand::Rng;

use super::combat;
use super::enemy::{EnemyKind, Formation};
use super::boss::Boss;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick.
///
/// Movement and fire are level-triggered: held keys, applied every tick
/// they are down. The rest are edge-triggered one-shots, set only on the
/// tick the key went down. `quit` is surfaced for the shell; the sim
/// never acts on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub toggle_invincible: bool,
    pub restart: bool,
    pub quit: bool,
}

/// Advance the session by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::GameOver | GamePhase::GameClear => {
            if input.restart {
                state.restart();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;
    let now_ms = state.now_ms();
    let view = state.view();

    state.player.apply_input(input, now_ms, &state.config);

    // formation cadence, suppressed for good once the boss has arrived
    if !state.boss_spawned && now_ms - state.last_spawn_ms > state.config.spawn.interval_ms {
        spawn_formation(state, now_ms);
    }

    let player_center = state.player.center();
    for formation in &mut state.formations {
        formation.update(player_center, now_ms, &view);
    }
    state.formations.retain(Formation::is_alive);

    // boss trigger: clears the field and ends normal spawning
    if !state.boss_spawned && state.kills >= state.config.spawn.boss_threshold {
        state.boss = Some(Boss::new(&state.config));
        state.boss_spawned = true;
        state.formations.clear();
        log::info!("boss inbound at {} kills", state.kills);
    }

    if let Some(boss) = &mut state.boss {
        boss.update(now_ms, &view, &mut state.rng, &state.config.boss);
    }

    combat::resolve(state);
    state.formations.retain(Formation::is_alive);
}

fn spawn_formation(state: &mut GameState, now_ms: u64) {
    let spawn = state.config.spawn;
    let view = state.config.view;

    let y = state
        .rng
        .random_range(spawn.edge_margin..view.height - spawn.edge_margin);
    let kind = if state.rng.random_bool(spawn.line_weight) {
        EnemyKind::Rusher
    } else {
        EnemyKind::Weaver
    };

    state.formations.push(Formation::new(
        Vec2::new(view.width, y),
        kind,
        spawn.line_count,
        spawn.line_spacing,
    ));
    state.last_spawn_ms = now_ms;
    log::debug!("spawned {kind:?} formation at y={y:.0}");
}
