//! Platform adapters between a windowing backend and the sim
//!
//! The simulation consumes one `TickInput` per tick. These helpers sit on
//! the shell side of that boundary: `InputCollector` turns raw key
//! transitions into per-tick inputs (debouncing the edge-triggered keys),
//! and `FixedStep` converts wall-clock frame deltas into a bounded number
//! of 60 Hz steps.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::TickInput;

/// Logical keys the shooter cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
    ToggleInvincible,
    Restart,
    Quit,
}

/// Accumulates raw key transitions between ticks.
///
/// Movement and fire are level-triggered and survive across drains;
/// toggle/restart/quit are latched on key-down and cleared when drained,
/// so each key press reaches the sim exactly once.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    fire: bool,
    toggle_invincible: bool,
    restart: bool,
    quit: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.up = true,
            Key::Down => self.down = true,
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Fire => self.fire = true,
            Key::ToggleInvincible => self.toggle_invincible = true,
            Key::Restart => self.restart = true,
            Key::Quit => self.quit = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.up = false,
            Key::Down => self.down = false,
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Fire => self.fire = false,
            // one-shots are cleared by drain, not by release
            Key::ToggleInvincible | Key::Restart | Key::Quit => {}
        }
    }

    /// Produce this tick's input and clear the one-shot flags
    pub fn drain(&mut self) -> TickInput {
        let input = TickInput {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
            fire: self.fire,
            toggle_invincible: self.toggle_invincible,
            restart: self.restart,
            quit: self.quit,
        };
        self.toggle_invincible = false;
        self.restart = false;
        self.quit = false;
        input
    }
}

/// Fixed timestep accumulator, bounded to avoid the spiral of death
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a wall-clock frame delta in seconds; returns how many sim
    /// ticks to run for this frame
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.min(0.25);
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_keys_survive_drains() {
        let mut collector = InputCollector::new();
        collector.key_down(Key::Fire);
        collector.key_down(Key::Up);

        assert!(collector.drain().fire);
        let second = collector.drain();
        assert!(second.fire && second.up);

        collector.key_up(Key::Fire);
        assert!(!collector.drain().fire);
    }

    #[test]
    fn one_shots_fire_exactly_once_per_press() {
        let mut collector = InputCollector::new();
        collector.key_down(Key::ToggleInvincible);
        collector.key_down(Key::Restart);

        let first = collector.drain();
        assert!(first.toggle_invincible && first.restart);

        let second = collector.drain();
        assert!(!second.toggle_invincible && !second.restart);

        // release does not re-latch
        collector.key_up(Key::ToggleInvincible);
        assert!(!collector.drain().toggle_invincible);
    }

    #[test]
    fn fixed_step_emits_whole_ticks() {
        let mut pacer = FixedStep::new();
        assert_eq!(pacer.advance(SIM_DT * 0.5), 0);
        assert_eq!(pacer.advance(SIM_DT * 0.5), 1);
        assert_eq!(pacer.advance(SIM_DT * 3.0), 3);
    }

    #[test]
    fn fixed_step_is_bounded_per_frame() {
        let mut pacer = FixedStep::new();
        // a multi-second stall never unleashes more than MAX_SUBSTEPS
        assert_eq!(pacer.advance(5.0), MAX_SUBSTEPS);
    }
}
