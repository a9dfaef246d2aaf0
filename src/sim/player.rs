//! Player craft: clamped movement, fire cooldown, invincibility toggle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::Bullet;
use super::rect::Rect;
use super::tick::TickInput;
use crate::config::GameConfig;

/// The player-controlled craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Pure toggle, flipped by an edge-triggered key; no timer
    pub invincible: bool,
    pub bullets: Vec<Bullet>,
    pub last_shot_ms: u64,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.player.start_x, config.view.height / 2.0),
            size: Vec2::new(config.player.width, config.player.height),
            speed: config.player.speed,
            invincible: false,
            bullets: Vec::new(),
            last_shot_ms: 0,
        }
    }

    /// Apply this tick's input, then advance and cull owned bullets.
    ///
    /// Horizontal movement is capped at a third of the viewport width.
    pub fn apply_input(&mut self, input: &TickInput, now_ms: u64, config: &GameConfig) {
        let view = &config.view;
        if input.up && self.pos.y > 0.0 {
            self.pos.y -= self.speed;
        }
        if input.down && self.pos.y < view.height - self.size.y {
            self.pos.y += self.speed;
        }
        if input.left && self.pos.x > 0.0 {
            self.pos.x -= self.speed;
        }
        if input.right && self.pos.x < view.width / 3.0 {
            self.pos.x += self.speed;
        }

        if input.toggle_invincible {
            self.invincible = !self.invincible;
            log::debug!("invincibility {}", if self.invincible { "on" } else { "off" });
        }

        if input.fire && now_ms.saturating_sub(self.last_shot_ms) > config.player.fire_cooldown_ms {
            let muzzle = Vec2::new(self.pos.x + self.size.x, self.pos.y + self.size.y / 2.0);
            self.bullets.push(Bullet::new(
                muzzle,
                config.player.bullet_speed,
                Vec2::new(config.player.bullet_width, config.player.bullet_height),
            ));
            self.last_shot_ms = now_ms;
        }

        let width = view.width;
        self.bullets.retain_mut(|b| b.advance(width));
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_held() -> TickInput {
        TickInput {
            fire: true,
            ..TickInput::default()
        }
    }

    #[test]
    fn movement_respects_the_right_ceiling() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.pos.x = config.view.width / 3.0 + 1.0;

        let input = TickInput {
            right: true,
            ..TickInput::default()
        };
        player.apply_input(&input, 0, &config);
        // past the ceiling: the rightward key is ignored
        assert_eq!(player.pos.x, config.view.width / 3.0 + 1.0);

        let input = TickInput {
            left: true,
            ..TickInput::default()
        };
        player.apply_input(&input, 0, &config);
        assert_eq!(player.pos.x, config.view.width / 3.0 + 1.0 - config.player.speed);
    }

    #[test]
    fn fire_cooldown_gates_successive_shots() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);

        player.apply_input(&fire_held(), 300, &config);
        assert_eq!(player.bullets.len(), 1);

        // still inside the 200 ms window
        player.apply_input(&fire_held(), 450, &config);
        assert_eq!(player.bullets.len(), 1);

        player.apply_input(&fire_held(), 501, &config);
        assert_eq!(player.bullets.len(), 2);
    }

    #[test]
    fn invincibility_is_a_toggle_not_a_hold() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);

        let toggle = TickInput {
            toggle_invincible: true,
            ..TickInput::default()
        };
        player.apply_input(&toggle, 0, &config);
        assert!(player.invincible);

        // no event this tick: the toggle holds its state
        player.apply_input(&TickInput::default(), 16, &config);
        assert!(player.invincible);

        player.apply_input(&toggle, 33, &config);
        assert!(!player.invincible);
    }
}
