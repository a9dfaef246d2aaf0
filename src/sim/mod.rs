//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one logical frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod boss;
mod combat;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;

pub use boss::{BitStation, Boss, BossBit, Laser, LaserWarning};
pub use enemy::{Enemy, EnemyKind, EnemyStats, Formation};
pub use player::Player;
pub use projectile::{AimedBullet, Bullet};
pub use rect::Rect;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
