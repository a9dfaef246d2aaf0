//! Astro Strike - a side-scrolling spaceship shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `render`: Scene building (shape descriptors for an external renderer)
//! - `platform`: Input collection and fixed-step frame pacing
//! - `config`: Data-driven tuning with fail-fast validation

pub mod config;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::{ConfigError, GameConfig};

use glam::Vec2;

/// Timing constants shared by the sim and the frame loop
pub mod consts {
    /// Fixed simulation tick rate (one tick = one logical frame)
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum substeps per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Milliseconds on the session clock after `ticks` simulation steps.
///
/// Every cooldown compares against this clock; it is sampled once at the
/// top of each tick so all decisions within a frame see the same time.
#[inline]
pub fn ticks_to_ms(ticks: u64) -> u64 {
    ticks * 1000 / consts::TICK_HZ as u64
}

/// Unit direction vector for an angle in degrees (screen space, +y down)
#[inline]
pub fn dir_from_deg(deg: f32) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}
