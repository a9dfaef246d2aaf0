//! Enemy variants and the formations that carry them
//!
//! Two kinds, selected once at spawn time: rushers fly straight and lob
//! homing shots at the player; weavers drift left on an accumulated
//! vertical oscillation and dump full radial volleys. Per-kind tuning
//! lives in a stats table rather than branches scattered through update
//! and collision code.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::AimedBullet;
use super::rect::Rect;

/// Radius of the square body on every enemy shot
const SHOT_RADIUS: f32 = 3.0;
/// Shots in one weaver radial volley (45 degree spacing)
const WEAVER_VOLLEY: u32 = 8;
/// Oscillation tuning for the weaver path. The vertical offset is
/// accumulated tick-by-tick, so the path is order dependent and cannot be
/// resampled from a closed form.
const WEAVE_FREQUENCY: f32 = 0.02;
const WEAVE_STEP: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Straight mover with an aimed shot
    Rusher,
    /// Oscillating mover with a radial volley
    Weaver,
}

/// Fixed per-kind tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub width: f32,
    pub height: f32,
    /// Leftward speed in pixels per tick
    pub speed: f32,
    pub health: u32,
    pub fire_cooldown_ms: u64,
    pub shot_speed: f32,
}

impl EnemyKind {
    pub fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Rusher => EnemyStats {
                width: 25.0,
                height: 20.0,
                speed: 2.0,
                health: 1,
                fire_cooldown_ms: 2000,
                shot_speed: 3.0,
            },
            EnemyKind::Weaver => EnemyStats {
                width: 30.0,
                height: 30.0,
                speed: 1.5,
                health: 2,
                fire_cooldown_ms: 1500,
                shot_speed: 4.0,
            },
        }
    }
}

/// One hostile craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub health: u32,
    /// Layout index within the spawning formation
    pub slot: usize,
    pub bullets: Vec<AimedBullet>,
    pub ticks_alive: u64,
    pub last_shot_ms: u64,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Vec2, slot: usize) -> Self {
        Self {
            kind,
            pos,
            health: kind.stats().health,
            slot,
            bullets: Vec::new(),
            ticks_alive: 0,
            last_shot_ms: 0,
        }
    }

    pub fn size(&self) -> Vec2 {
        let stats = self.kind.stats();
        Vec2::new(stats.width, stats.height)
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size(),
        }
    }

    /// Advance one tick: motion, fire cooldown, owned-shot culling.
    /// Returns false once the body is fully past the left edge.
    pub fn advance(&mut self, player_center: Vec2, now_ms: u64, view: &Rect) -> bool {
        let stats = self.kind.stats();
        self.ticks_alive += 1;

        self.pos.x -= stats.speed;
        if self.kind == EnemyKind::Weaver {
            self.pos.y += (self.ticks_alive as f32 * WEAVE_FREQUENCY).sin() * WEAVE_STEP;
        }

        if now_ms.saturating_sub(self.last_shot_ms) > stats.fire_cooldown_ms {
            self.fire(player_center, &stats);
            self.last_shot_ms = now_ms;
        }

        self.bullets.retain_mut(|b| b.advance(view));

        self.pos.x > -stats.width
    }

    fn fire(&mut self, player_center: Vec2, stats: &EnemyStats) {
        let muzzle = Vec2::new(self.pos.x, self.pos.y + stats.height / 2.0);
        match self.kind {
            EnemyKind::Rusher => {
                // direction captured at fire time; the shot is never re-aimed
                if let Some(shot) =
                    AimedBullet::aimed(muzzle, player_center, stats.shot_speed, SHOT_RADIUS)
                {
                    self.bullets.push(shot);
                }
            }
            EnemyKind::Weaver => {
                self.bullets.extend(AimedBullet::radial(
                    muzzle,
                    stats.shot_speed,
                    SHOT_RADIUS,
                    WEAVER_VOLLEY,
                ));
            }
        }
    }
}

/// An ordered group of enemies spawned together and tracked as one unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    pub enemies: Vec<Enemy>,
}

impl Formation {
    /// Rusher formations are a rigid line laid out once at creation (the
    /// line never re-forms); weavers always spawn alone.
    pub fn new(origin: Vec2, kind: EnemyKind, count: usize, spacing: f32) -> Self {
        let enemies = match kind {
            EnemyKind::Rusher => (0..count)
                .map(|i| Enemy::new(kind, origin + Vec2::new(i as f32 * spacing, 0.0), i))
                .collect(),
            EnemyKind::Weaver => vec![Enemy::new(kind, origin, 0)],
        };
        Self { enemies }
    }

    /// Forward the tick to every member, dropping the ones that left
    pub fn update(&mut self, player_center: Vec2, now_ms: u64, view: &Rect) {
        self.enemies
            .retain_mut(|e| e.advance(player_center, now_ms, view));
    }

    /// Liveness = non-empty membership
    pub fn is_alive(&self) -> bool {
        !self.enemies.is_empty()
    }
}
