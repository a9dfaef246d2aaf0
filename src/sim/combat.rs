//! Pairwise collision resolution
//!
//! Runs once per tick after all motion updates, only while playing. Hit
//! outcomes are collected over immutable scans first and applied after the
//! full scan completes, so no collection is mutated while another rule is
//! still reading it and the result does not depend on rule-evaluation
//! order within a tick.
//!
//! Precedence: a lethal player hit ends the tick before any bullet
//! scoring; surviving player bullets then resolve against enemies, the
//! boss body, and finally the armored bits.

use super::state::{GamePhase, GameState};

pub(crate) fn resolve(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    if !state.player.invincible && player_hit(state) {
        state.phase = GamePhase::GameOver;
        log::info!("player destroyed after {} kills", state.kills);
        return;
    }

    resolve_player_bullets(state);
}

/// Any hostile body or projectile overlapping the player
fn player_hit(state: &GameState) -> bool {
    let player = state.player.rect();
    let now_ms = state.now_ms();

    for formation in &state.formations {
        for enemy in &formation.enemies {
            if player.intersects(&enemy.rect()) {
                return true;
            }
            if enemy.bullets.iter().any(|b| player.intersects(&b.rect())) {
                return true;
            }
        }
    }

    if let Some(boss) = &state.boss {
        let config = &state.config.boss;
        if player.intersects(&boss.rect()) {
            return true;
        }
        if boss.bullets.iter().any(|b| player.intersects(&b.rect())) {
            return true;
        }
        if boss
            .lasers
            .iter()
            .any(|l| player.intersects(&l.collision_rect(boss.center(), now_ms)))
        {
            return true;
        }
        for bit in &boss.bits {
            if player.intersects(&bit.rect(boss.pos, boss.size, config)) {
                return true;
            }
            if bit.bullets.iter().any(|b| player.intersects(&b.rect())) {
                return true;
            }
        }
    }

    false
}

/// Player bullets against enemies, then the boss body, then the bits
fn resolve_player_bullets(state: &mut GameState) {
    let GameState {
        player,
        formations,
        boss,
        phase,
        kills,
        config,
        ..
    } = state;

    let mut consumed = vec![false; player.bullets.len()];

    // mark pass: each bullet is spent on the first enemy it overlaps, and
    // an enemy absorbs no more pending hits than it has health left
    let mut pending: Vec<Vec<u32>> = formations
        .iter()
        .map(|f| vec![0; f.enemies.len()])
        .collect();
    for (bi, bullet) in player.bullets.iter().enumerate() {
        let bullet_rect = bullet.rect();
        'search: for (fi, formation) in formations.iter().enumerate() {
            for (ei, enemy) in formation.enemies.iter().enumerate() {
                if pending[fi][ei] >= enemy.health {
                    continue;
                }
                if bullet_rect.intersects(&enemy.rect()) {
                    consumed[bi] = true;
                    pending[fi][ei] += 1;
                    break 'search;
                }
            }
        }
    }

    // apply pass: damage, deaths, and the defeated counter
    let mut downed = 0u32;
    for (fi, formation) in formations.iter_mut().enumerate() {
        for (ei, enemy) in formation.enemies.iter_mut().enumerate() {
            enemy.health = enemy.health.saturating_sub(pending[fi][ei]);
        }
        formation.enemies.retain(|e| {
            if e.health == 0 {
                downed += 1;
                false
            } else {
                true
            }
        });
    }
    if downed > 0 {
        *kills += downed;
        log::debug!("{downed} enemies down ({} total)", *kills);
    }

    // boss body and bits see only the bullets that survived the enemy pass
    if let Some(boss) = boss {
        let mut damage = 0u32;
        for (bi, bullet) in player.bullets.iter().enumerate() {
            if consumed[bi] {
                continue;
            }
            let bullet_rect = bullet.rect();
            if bullet_rect.intersects(&boss.rect()) {
                consumed[bi] = true;
                damage += 1;
                continue;
            }
            // armored bits absorb the shot with no effect
            if boss
                .bits
                .iter()
                .any(|bit| bullet_rect.intersects(&bit.rect(boss.pos, boss.size, &config.boss)))
            {
                consumed[bi] = true;
            }
        }
        if damage > 0 {
            boss.health = boss.health.saturating_sub(damage);
            log::debug!("boss hit x{damage}, health {}/{}", boss.health, boss.max_health);
            if boss.health == 0 {
                *phase = GamePhase::GameClear;
                log::info!("boss destroyed; mission complete");
            }
        }
    }

    let mut index = 0;
    player.bullets.retain(|_| {
        let spent = consumed[index];
        index += 1;
        !spent
    });
}
