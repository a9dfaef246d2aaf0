//! Scene building
//!
//! Converts sim state into flat shape and HUD descriptors for an external
//! renderer. Timing-derived visual state (telegraph blink, invincibility
//! tint) is resolved here; nothing is rasterized.

use glam::Vec2;

use crate::sim::{Boss, EnemyKind, GamePhase, GameState, Player, Rect};

pub type Color = [f32; 4];

/// Palette shared with the shell's renderer
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER: Color = [0.0, 0.39, 0.78, 1.0];
    pub const PLAYER_INVINCIBLE: Color = [0.39, 0.59, 1.0, 1.0];
    pub const PLAYER_BULLET: Color = [1.0, 1.0, 0.0, 1.0];
    pub const RUSHER: Color = [1.0, 0.0, 0.0, 1.0];
    pub const WEAVER: Color = [1.0, 0.65, 0.0, 1.0];
    pub const ENEMY_SHOT: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BOSS_HULL: Color = [0.27, 0.27, 0.27, 1.0];
    pub const BOSS_BRIDGE: Color = [0.55, 0.55, 0.55, 1.0];
    pub const BOSS_SHOT: Color = [0.0, 1.0, 0.78, 1.0];
    pub const BIT_BODY: Color = [0.78, 0.0, 0.78, 1.0];
    pub const BIT_CORE: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BIT_TETHER: Color = [0.39, 0.0, 0.39, 1.0];
    pub const LASER: Color = [1.0, 0.0, 0.0, 1.0];
    pub const LASER_CORE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const WARNING: Color = [0.39, 0.2, 0.2, 1.0];
}

/// A flat drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Triangle { points: [Vec2; 3], color: Color },
    Quad { rect: Rect, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Ellipse { center: Vec2, radii: Vec2, color: Color },
    Polygon { points: Vec<Vec2>, color: Color },
    Segment { start: Vec2, end: Vec2, width: f32, color: Color },
}

/// Boss health readout for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossStatus {
    pub health: u32,
    pub max_health: u32,
}

/// Everything the shell's overlay needs beyond the shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub kills: u32,
    pub invincible: bool,
    pub boss: Option<BossStatus>,
    pub phase: GamePhase,
}

/// One frame's worth of draw data
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub hud: Hud,
}

/// Walk the session and emit the current frame
pub fn build_scene(state: &GameState) -> Scene {
    let mut shapes = Vec::new();
    let now_ms = state.now_ms();

    push_player(&mut shapes, &state.player);

    for formation in &state.formations {
        for enemy in &formation.enemies {
            push_enemy(&mut shapes, enemy);
        }
    }

    if let Some(boss) = &state.boss {
        push_boss(&mut shapes, boss, &state.config.boss, now_ms);
    }

    Scene {
        shapes,
        hud: Hud {
            kills: state.kills,
            invincible: state.player.invincible,
            boss: state.boss.as_ref().map(|b| BossStatus {
                health: b.health,
                max_health: b.max_health,
            }),
            phase: state.phase,
        },
    }
}

fn push_player(shapes: &mut Vec<Shape>, player: &Player) {
    let p = player.pos;
    let s = player.size;
    shapes.push(Shape::Triangle {
        points: [
            Vec2::new(p.x + s.x, p.y + s.y / 2.0),
            p,
            Vec2::new(p.x, p.y + s.y),
        ],
        color: if player.invincible {
            colors::PLAYER_INVINCIBLE
        } else {
            colors::PLAYER
        },
    });

    for bullet in &player.bullets {
        shapes.push(Shape::Quad {
            rect: bullet.rect(),
            color: colors::PLAYER_BULLET,
        });
    }
}

fn push_enemy(shapes: &mut Vec<Shape>, enemy: &crate::sim::Enemy) {
    let rect = enemy.rect();
    match enemy.kind {
        EnemyKind::Rusher => {
            // left-pointing dart
            let p = rect.pos;
            let s = rect.size;
            shapes.push(Shape::Triangle {
                points: [
                    Vec2::new(p.x, p.y + s.y / 2.0),
                    Vec2::new(p.x + s.x, p.y),
                    Vec2::new(p.x + s.x, p.y + s.y),
                ],
                color: colors::RUSHER,
            });
        }
        EnemyKind::Weaver => {
            shapes.push(Shape::Polygon {
                points: regular_polygon(rect.center(), rect.size.x / 2.0, 6),
                color: colors::WEAVER,
            });
        }
    }

    for shot in &enemy.bullets {
        shapes.push(Shape::Circle {
            center: shot.pos,
            radius: shot.radius,
            color: colors::ENEMY_SHOT,
        });
    }
}

fn push_boss(
    shapes: &mut Vec<Shape>,
    boss: &Boss,
    config: &crate::config::BossConfig,
    now_ms: u64,
) {
    let center = boss.center();

    shapes.push(Shape::Ellipse {
        center,
        radii: boss.size / 2.0 - Vec2::splat(10.0),
        color: colors::BOSS_HULL,
    });
    shapes.push(Shape::Ellipse {
        center,
        radii: Vec2::new(30.0, 20.0),
        color: colors::BOSS_BRIDGE,
    });

    for shot in &boss.bullets {
        shapes.push(Shape::Circle {
            center: shot.pos,
            radius: shot.radius,
            color: colors::BOSS_SHOT,
        });
    }

    // telegraphs are drawn only on the bright half of their blink cycle
    for warning in &boss.warnings {
        if warning.blink_on(now_ms) {
            shapes.push(Shape::Segment {
                start: warning.origin,
                end: warning.endpoint(),
                width: 4.0,
                color: colors::WARNING,
            });
        }
    }

    for laser in &boss.lasers {
        let (start, end) = laser.segment(center, now_ms);
        shapes.push(Shape::Segment {
            start,
            end,
            width: laser.width,
            color: colors::LASER,
        });
        shapes.push(Shape::Segment {
            start,
            end,
            width: 8.0,
            color: colors::LASER_CORE,
        });
    }

    for bit in &boss.bits {
        let rect = bit.rect(boss.pos, boss.size, config);
        let bit_center = rect.center();
        shapes.push(Shape::Segment {
            start: bit_center,
            end: center,
            width: 2.0,
            color: colors::BIT_TETHER,
        });
        shapes.push(Shape::Polygon {
            points: regular_polygon(bit_center, 12.0, 8),
            color: colors::BIT_BODY,
        });
        shapes.push(Shape::Circle {
            center: bit_center,
            radius: 5.0,
            color: colors::BIT_CORE,
        });

        for shot in &bit.bullets {
            shapes.push(Shape::Circle {
                center: shot.pos,
                radius: shot.radius,
                color: colors::BOSS_SHOT,
            });
        }
    }
}

fn regular_polygon(center: Vec2, radius: f32, sides: u32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let theta = (i as f32 / sides as f32) * std::f32::consts::TAU;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}
