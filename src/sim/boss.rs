//! Boss battleship: figure-eight drift and three concurrent attack systems
//!
//! The three attacks (radial volley, rotating laser volley, bit spreads)
//! run on independent cooldown trackers polled every tick against the
//! shared session clock; none blocks the others. All cooldown epochs start
//! at zero, so the first volley and the first laser telegraph fire on the
//! boss's first update.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::projectile::AimedBullet;
use super::rect::Rect;
use crate::config::{BossConfig, GameConfig};
use crate::dir_from_deg;

/// Relative beam angles of one laser volley (up / center / down), degrees
const LASER_VOLLEY_ANGLES: [f32; 3] = [-30.0, 0.0, 30.0];
/// Narrow leftward fan fired by each bit, degrees
const BIT_SPREAD_ANGLES: [f32; 3] = [170.0, 180.0, 190.0];
/// Shots in one radial volley (45 degree spacing)
const VOLLEY_COUNT: u32 = 8;
/// Telegraph blink half-period, ms
const WARNING_BLINK_MS: u64 = 200;
/// Bit body extent
const BIT_SIZE: Vec2 = Vec2::new(35.0, 25.0);
/// Standoff of side bits from the boss's left flank
const BIT_SIDE_GAP: f32 = 100.0;
/// Standoff of top/bottom bits from the boss body
const BIT_AXIS_GAP: f32 = 150.0;

/// Where a bit rides relative to the boss body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BitStation {
    /// Ahead of the boss, offset vertically from its centerline
    Side { offset_y: f32 },
    Top,
    Bottom,
}

/// A satellite turret. Armored: player bullets are absorbed without
/// effect, but the bit body and its shots still kill the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossBit {
    pub station: BitStation,
    /// Phase-offsets the float oscillation so the bits drift out of sync
    pub index: usize,
    pub bullets: Vec<AimedBullet>,
    pub float_t: f32,
    pub last_shot_ms: u64,
}

impl BossBit {
    fn new(station: BitStation, index: usize) -> Self {
        Self {
            station,
            index,
            bullets: Vec::new(),
            float_t: 0.0,
            last_shot_ms: 0,
        }
    }

    /// Current position, derived each tick from the boss body plus a
    /// sinusoidal float offset. Side bits float vertically, top/bottom
    /// bits horizontally.
    pub fn position(&self, boss_pos: Vec2, boss_size: Vec2, config: &BossConfig) -> Vec2 {
        let float_offset = (self.float_t + self.index as f32).sin() * config.bit_float_amp;
        match self.station {
            BitStation::Side { offset_y } => Vec2::new(
                boss_pos.x - BIT_SIDE_GAP,
                boss_pos.y + boss_size.y / 2.0 + offset_y + float_offset,
            ),
            BitStation::Top => Vec2::new(
                boss_pos.x + boss_size.x / 2.0 + float_offset,
                boss_pos.y - BIT_AXIS_GAP,
            ),
            BitStation::Bottom => Vec2::new(
                boss_pos.x + boss_size.x / 2.0 + float_offset,
                boss_pos.y + boss_size.y + BIT_AXIS_GAP,
            ),
        }
    }

    pub fn rect(&self, boss_pos: Vec2, boss_size: Vec2, config: &BossConfig) -> Rect {
        Rect {
            pos: self.position(boss_pos, boss_size, config),
            size: BIT_SIZE,
        }
    }

    fn update(
        &mut self,
        boss_pos: Vec2,
        boss_size: Vec2,
        now_ms: u64,
        view: &Rect,
        config: &BossConfig,
    ) {
        self.float_t += config.bit_float_step;

        if now_ms.saturating_sub(self.last_shot_ms) > config.bit_cooldown_ms {
            let muzzle = self.position(boss_pos, boss_size, config);
            for &deg in &BIT_SPREAD_ANGLES {
                self.bullets.push(AimedBullet::from_angle_deg(
                    muzzle,
                    deg,
                    config.bit_shot_speed,
                    config.volley_bullet_radius,
                ));
            }
            self.last_shot_ms = now_ms;
        }

        self.bullets.retain_mut(|b| b.advance(view));
    }
}

/// Telegraph for an imminent laser: purely temporal/visual, converts into
/// a beam when it expires
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserWarning {
    pub origin: Vec2,
    pub angle_deg: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl LaserWarning {
    pub fn expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Blink phase; the telegraph is drawn only while this is true
    pub fn blink_on(&self, now_ms: u64) -> bool {
        (now_ms.saturating_sub(self.start_ms) / WARNING_BLINK_MS) % 2 == 0
    }

    /// End of the telegraph line at the left screen edge
    pub fn endpoint(&self) -> Vec2 {
        Vec2::new(
            0.0,
            self.origin.y + self.origin.x * self.angle_deg.to_radians().tan(),
        )
    }
}

/// A rotating beam anchored to the boss's live center.
///
/// The anchor is recomputed from the boss every tick while the initial
/// angle stays fixed from spawn time, so the beam swings as the boss
/// drifts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Laser {
    pub initial_angle_deg: f32,
    pub start_ms: u64,
    /// +1 clockwise, -1 counter-clockwise; shared by the whole volley
    pub direction: f32,
    pub width: f32,
    pub duration_ms: u64,
    pub travel_ms: u64,
    pub rotation_deg_per_s: f32,
    pub max_length: f32,
}

impl Laser {
    fn new(angle_deg: f32, start_ms: u64, direction: f32, config: &BossConfig) -> Self {
        Self {
            initial_angle_deg: angle_deg,
            start_ms,
            direction,
            width: config.beam_width,
            duration_ms: config.laser_duration_ms,
            travel_ms: config.laser_travel_ms,
            rotation_deg_per_s: config.laser_rotation_deg_per_s,
            max_length: config.laser_length,
        }
    }

    pub fn alive(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) < self.duration_ms
    }

    /// Current angle: initial + elapsed seconds x rotation rate x direction
    pub fn angle_at(&self, now_ms: u64) -> f32 {
        let elapsed_s = now_ms.saturating_sub(self.start_ms) as f32 / 1000.0;
        self.initial_angle_deg + elapsed_s * self.rotation_deg_per_s * self.direction
    }

    /// Beam reach grows linearly over the travel window, then holds
    pub fn length_at(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms) as f32;
        (elapsed / self.travel_ms as f32).min(1.0) * self.max_length
    }

    /// Current segment, pointing leftward from the live anchor
    pub fn segment(&self, anchor: Vec2, now_ms: u64) -> (Vec2, Vec2) {
        let dir = dir_from_deg(self.angle_at(now_ms));
        (anchor, anchor - dir * self.length_at(now_ms))
    }

    /// Collision body: the segment's bounding rect, inflated vertically by
    /// half the beam width on each side
    pub fn collision_rect(&self, anchor: Vec2, now_ms: u64) -> Rect {
        let (a, b) = self.segment(anchor, now_ms);
        let min = a.min(b);
        let max = a.max(b);
        Rect::new(
            min.x,
            min.y - self.width / 2.0,
            max.x - min.x,
            max.y - min.y + self.width,
        )
    }
}

/// The battleship itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    pub size: Vec2,
    pub health: u32,
    pub max_health: u32,
    pub bullets: Vec<AimedBullet>,
    pub warnings: Vec<LaserWarning>,
    pub lasers: Vec<Laser>,
    pub bits: Vec<BossBit>,
    base_x: f32,
    center_y: f32,
    sway_t: f32,
    last_volley_ms: u64,
    last_laser_ms: u64,
    /// Rotation direction rolled once per laser volley
    volley_direction: f32,
}

impl Boss {
    pub fn new(config: &GameConfig) -> Self {
        let base_x = config.view.width - config.boss.right_margin;
        let center_y = config.view.height / 2.0;
        Self {
            pos: Vec2::new(base_x, center_y),
            size: Vec2::new(config.boss.width, config.boss.height),
            health: config.boss.health,
            max_health: config.boss.health,
            bullets: Vec::new(),
            warnings: Vec::new(),
            lasers: Vec::new(),
            bits: vec![
                BossBit::new(BitStation::Side { offset_y: -180.0 }, 0),
                BossBit::new(BitStation::Side { offset_y: 180.0 }, 1),
                BossBit::new(BitStation::Top, 2),
                BossBit::new(BitStation::Bottom, 3),
            ],
            base_x,
            center_y,
            sway_t: 0.0,
            last_volley_ms: 0,
            last_laser_ms: 0,
            volley_direction: 1.0,
        }
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

    /// Advance one tick: drift, the three attack cooldowns, and every
    /// owned collection
    pub fn update(&mut self, now_ms: u64, view: &Rect, rng: &mut Pcg32, config: &BossConfig) {
        // slow figure-eight drift
        self.sway_t += config.sway_step;
        self.pos.y = self.center_y + self.sway_t.sin() * config.sway_amp_y;
        self.pos.x = self.base_x + (self.sway_t * 0.5).cos() * config.sway_amp_x;

        if now_ms.saturating_sub(self.last_volley_ms) > config.volley_cooldown_ms {
            let muzzle = Vec2::new(self.pos.x, self.pos.y + self.size.y / 2.0);
            self.bullets.extend(AimedBullet::radial(
                muzzle,
                config.volley_speed,
                config.volley_bullet_radius,
                VOLLEY_COUNT,
            ));
            self.last_volley_ms = now_ms;
        }

        if now_ms.saturating_sub(self.last_laser_ms) > config.laser_cooldown_ms {
            // one rotation direction per volley, shared by all three beams
            self.volley_direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            let center = self.center();
            for &angle_deg in &LASER_VOLLEY_ANGLES {
                self.warnings.push(LaserWarning {
                    origin: center,
                    angle_deg,
                    start_ms: now_ms,
                    duration_ms: config.laser_warning_ms,
                });
            }
            self.last_laser_ms = now_ms;
        }

        self.bullets.retain_mut(|b| b.advance(view));

        // expired telegraphs convert into live beams
        let mut due = Vec::new();
        self.warnings.retain(|w| {
            if w.expired(now_ms) {
                due.push(w.angle_deg);
                false
            } else {
                true
            }
        });
        for angle_deg in due {
            self.lasers
                .push(Laser::new(angle_deg, now_ms, self.volley_direction, config));
        }

        self.lasers.retain(|l| l.alive(now_ms));

        let (anchor_pos, anchor_size) = (self.pos, self.size);
        for bit in &mut self.bits {
            bit.update(anchor_pos, anchor_size, now_ms, view, config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn view() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 1024.0)
    }

    #[test]
    fn laser_angle_follows_the_rotation_formula() {
        let cfg = config().boss;
        let cw = Laser::new(0.0, 1000, 1.0, &cfg);
        // one second in: 7.5 degrees clockwise
        assert!((cw.angle_at(2000) - 7.5).abs() < 1e-4);

        let ccw = Laser::new(-30.0, 1000, -1.0, &cfg);
        assert!((ccw.angle_at(3000) - (-45.0)).abs() < 1e-4);
    }

    #[test]
    fn laser_length_grows_then_holds() {
        let cfg = config().boss;
        let laser = Laser::new(0.0, 0, 1.0, &cfg);
        assert!((laser.length_at(250) - 750.0).abs() < 1e-3);
        assert!((laser.length_at(500) - 1500.0).abs() < 1e-3);
        assert!((laser.length_at(1900) - 1500.0).abs() < 1e-3);
        assert!(laser.alive(1999));
        assert!(!laser.alive(2000));
    }

    #[test]
    fn laser_anchor_is_live_while_initial_angle_is_fixed() {
        let cfg = config().boss;
        let laser = Laser::new(0.0, 0, 1.0, &cfg);
        let (a1, b1) = laser.segment(Vec2::new(1000.0, 500.0), 600);
        let (a2, b2) = laser.segment(Vec2::new(1000.0, 560.0), 600);
        // same elapsed time, moved anchor: the whole segment translates
        assert_eq!(a1.y + 60.0, a2.y);
        assert!((b2.y - b1.y - 60.0).abs() < 1e-3);
    }

    #[test]
    fn warning_blinks_at_200ms_intervals_and_expires() {
        let warning = LaserWarning {
            origin: Vec2::new(1000.0, 500.0),
            angle_deg: 0.0,
            start_ms: 0,
            duration_ms: 1000,
        };
        assert!(warning.blink_on(0));
        assert!(warning.blink_on(199));
        assert!(!warning.blink_on(200));
        assert!(warning.blink_on(400));
        assert!(!warning.expired(999));
        assert!(warning.expired(1000));
    }

    #[test]
    fn first_update_opens_with_volley_and_telegraphs() {
        let cfg = config();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut boss = Boss::new(&cfg);
        // boss arrives mid-session: the clock is well past both cooldowns
        boss.update(90_000, &view(), &mut rng, &cfg.boss);

        assert_eq!(boss.bullets.len(), VOLLEY_COUNT as usize);
        assert_eq!(boss.warnings.len(), 3);
        assert!(boss.lasers.is_empty());
    }

    #[test]
    fn telegraphs_convert_to_beams_sharing_one_direction() {
        let cfg = config();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut boss = Boss::new(&cfg);
        boss.update(90_000, &view(), &mut rng, &cfg.boss);

        // one warning duration later the telegraphs become beams
        boss.update(90_000 + cfg.boss.laser_warning_ms, &view(), &mut rng, &cfg.boss);
        assert!(boss.warnings.is_empty());
        assert_eq!(boss.lasers.len(), 3);

        let dir = boss.lasers[0].direction;
        assert!(dir == 1.0 || dir == -1.0);
        assert!(boss.lasers.iter().all(|l| l.direction == dir));

        let mut angles: Vec<f32> = boss.lasers.iter().map(|l| l.initial_angle_deg).collect();
        angles.sort_by(f32::total_cmp);
        assert_eq!(angles, vec![-30.0, 0.0, 30.0]);
    }

    #[test]
    fn bits_fire_leftward_spreads_on_their_own_cooldown() {
        let cfg = config();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut boss = Boss::new(&cfg);
        boss.update(90_000, &view(), &mut rng, &cfg.boss);

        for bit in &boss.bits {
            assert_eq!(bit.bullets.len(), BIT_SPREAD_ANGLES.len());
            for shot in &bit.bullets {
                assert!(shot.vel.x < 0.0);
            }
        }
    }

    #[test]
    fn bit_positions_track_the_boss_body() {
        let cfg = config();
        let boss = Boss::new(&cfg);
        let side = boss.bits[0].position(boss.pos, boss.size, &cfg.boss);
        assert!((side.x - (boss.pos.x - BIT_SIDE_GAP)).abs() < 1e-4);

        let top = boss.bits[2].position(boss.pos, boss.size, &cfg.boss);
        assert!((top.y - (boss.pos.y - BIT_AXIS_GAP)).abs() < 1e-4);

        let bottom = boss.bits[3].position(boss.pos, boss.size, &cfg.boss);
        assert!((bottom.y - (boss.pos.y + boss.size.y + BIT_AXIS_GAP)).abs() < 1e-4);
    }

    #[test]
    fn drift_path_follows_the_figure_eight() {
        let cfg = config();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut boss = Boss::new(&cfg);
        let base_x = boss.pos.x;
        let center_y = boss.pos.y;

        let mut t = 0.0_f32;
        for tick in 1..=100u64 {
            boss.update(tick * 16, &view(), &mut rng, &cfg.boss);
            t += cfg.boss.sway_step;
        }
        assert!((boss.pos.y - (center_y + t.sin() * cfg.boss.sway_amp_y)).abs() < 1e-2);
        assert!((boss.pos.x - (base_x + (t * 0.5).cos() * cfg.boss.sway_amp_x)).abs() < 1e-2);
    }
}
