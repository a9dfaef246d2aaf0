//! Projectile motion and off-screen culling
//!
//! Two motion rules: player bullets fly rightward at constant scalar speed
//! and die past the right edge; everything hostile carries an explicit
//! velocity vector and dies once it leaves the viewport on any edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::dir_from_deg;

/// A straight player bullet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Rightward speed in pixels per tick
    pub speed: f32,
    pub size: Vec2,
}

impl Bullet {
    pub fn new(pos: Vec2, speed: f32, size: Vec2) -> Self {
        Self { pos, speed, size }
    }

    /// Advance one tick; false once the bullet crosses the right edge
    pub fn advance(&mut self, view_width: f32) -> bool {
        self.pos.x += self.speed;
        self.pos.x < view_width
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A bullet with an explicit velocity vector (homing shots, radial
/// volleys, bit spreads). The collision body is a square centered on the
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimedBullet {
    pub pos: Vec2,
    /// Displacement applied each tick
    pub vel: Vec2,
    pub radius: f32,
}

impl AimedBullet {
    /// Shot aimed at a target: the unit direction toward the target at
    /// fire time, scaled by `speed`. Never re-aimed afterwards. Returns
    /// `None` when origin and target coincide.
    pub fn aimed(origin: Vec2, target: Vec2, speed: f32, radius: f32) -> Option<Self> {
        let offset = target - origin;
        if offset.length_squared() <= f32::EPSILON {
            return None;
        }
        Some(Self {
            pos: origin,
            vel: offset.normalize() * speed,
            radius,
        })
    }

    /// Shot launched at a fixed angle in degrees
    pub fn from_angle_deg(origin: Vec2, deg: f32, speed: f32, radius: f32) -> Self {
        Self {
            pos: origin,
            vel: dir_from_deg(deg) * speed,
            radius,
        }
    }

    /// Full radial ring of `count` shots at even angular spacing
    pub fn radial(origin: Vec2, speed: f32, radius: f32, count: u32) -> Vec<Self> {
        (0..count)
            .map(|i| {
                let deg = i as f32 * 360.0 / count as f32;
                Self::from_angle_deg(origin, deg, speed, radius)
            })
            .collect()
    }

    /// Advance one tick; false once the position leaves the viewport
    pub fn advance(&mut self, view: &Rect) -> bool {
        self.pos += self.vel;
        view.contains(self.pos)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.radius * 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn view() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 1024.0)
    }

    #[test]
    fn bullet_dies_only_past_the_right_edge() {
        let size = Vec2::new(8.0, 4.0);
        let mut b = Bullet::new(Vec2::new(1270.0, 500.0), 8.0, size);
        assert!(b.advance(1280.0));
        assert!(!b.advance(1280.0));

        // leftward edges never cull a player bullet
        let mut b = Bullet::new(Vec2::new(-50.0, -50.0), 8.0, size);
        assert!(b.advance(1280.0));
    }

    #[test]
    fn aimed_shot_has_unit_direction_times_speed() {
        let shot = AimedBullet::aimed(Vec2::ZERO, Vec2::new(3.0, 4.0), 10.0, 3.0)
            .expect("distinct points");
        assert!((shot.vel - Vec2::new(6.0, 8.0)).length() < 1e-4);
        assert!(AimedBullet::aimed(Vec2::ONE, Vec2::ONE, 10.0, 3.0).is_none());
    }

    #[test]
    fn radial_ring_spacing() {
        let ring = AimedBullet::radial(Vec2::ZERO, 4.0, 3.0, 8);
        assert_eq!(ring.len(), 8);
        // 45 degree spacing: every shot speed 4, the third one straight down
        for shot in &ring {
            assert!((shot.vel.length() - 4.0).abs() < 1e-4);
        }
        assert!((ring[2].vel - Vec2::new(0.0, 4.0)).length() < 1e-4);
    }

    #[test]
    fn aimed_shot_culled_on_every_edge() {
        for (pos, vel) in [
            (Vec2::new(2.0, 500.0), Vec2::new(-4.0, 0.0)),
            (Vec2::new(1278.0, 500.0), Vec2::new(4.0, 0.0)),
            (Vec2::new(500.0, 2.0), Vec2::new(0.0, -4.0)),
            (Vec2::new(500.0, 1022.0), Vec2::new(0.0, 4.0)),
        ] {
            let mut shot = AimedBullet {
                pos,
                vel,
                radius: 3.0,
            };
            assert!(!shot.advance(&view()));
        }
    }

    proptest! {
        #[test]
        fn liveness_matches_viewport_membership(
            x in -200.0f32..1500.0,
            y in -200.0f32..1300.0,
            dx in -6.0f32..6.0,
            dy in -6.0f32..6.0,
        ) {
            let mut shot = AimedBullet {
                pos: Vec2::new(x, y),
                vel: Vec2::new(dx, dy),
                radius: 3.0,
            };
            let alive = shot.advance(&view());
            prop_assert_eq!(alive, view().contains(shot.pos));
        }
    }
}
