//! Simulation state and entity types
//!
//! All mutable game state lives in [`GameState`], owned exclusively by the
//! tick loop while a tick runs. Entities carry their own per-tick update
//! rules; lifecycle (spawn, expiry, removal) belongs to the loop, the
//! collision resolver and the level director.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::geometry::{circles_overlap, normalize_angle, wrap_padded, wrap_point};
use super::store::EntityStore;
use crate::consts::*;
use crate::tuning::ShipTuning;

/// The player's ship.
///
/// Exactly one ship exists per session. It is replaced, not mutated in
/// place, at every level setup; acceleration, decay, turn rate and fire
/// cooldown are constants for its lifetime within the level.
#[derive(Debug, Clone, Serialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in radians, kept normalized to [0, 2π)
    pub angle: f32,
    pub vel: Vec2,
    /// Thrust added to velocity per tick while accelerating
    pub acceleration: f32,
    /// Multiplicative velocity damping per tick (0..1)
    pub velocity_decay: f32,
    /// Turn rate in radians per tick
    pub rotational_speed: f32,
    pub radius: f32,
    /// False while waiting to enter play or while the game is paused.
    /// Collisions and controls are suppressed, but kinematics still run
    /// whenever the game is unpaused.
    pub active: bool,
    /// Fire cooldown for this level, in ticks
    pub shot_delay: u32,
    /// Ticks remaining before the next shot is allowed
    pub shot_delay_left: u32,
}

impl Ship {
    /// A freshly parameterized ship at `pos` facing `angle`.
    ///
    /// Ships spawn inactive; the host's activate gesture puts them in play.
    pub fn new(pos: Vec2, angle: f32, tuning: &ShipTuning) -> Self {
        Self {
            pos,
            angle: normalize_angle(angle),
            vel: Vec2::ZERO,
            acceleration: tuning.acceleration,
            velocity_decay: tuning.velocity_decay,
            rotational_speed: tuning.turn_rate,
            radius: SHIP_RADIUS,
            active: false,
            shot_delay: tuning.shot_cooldown,
            shot_delay_left: 0,
        }
    }

    /// Advance one tick of ship kinematics.
    ///
    /// The turn/thrust flags are this tick's control intents, already masked
    /// by the caller while the ship is inactive.
    pub fn advance(
        &mut self,
        turn_left: bool,
        turn_right: bool,
        thrust: bool,
        width: f32,
        height: f32,
    ) {
        self.shot_delay_left = self.shot_delay_left.saturating_sub(1);
        if turn_left {
            self.angle -= self.rotational_speed;
        }
        if turn_right {
            self.angle += self.rotational_speed;
        }
        self.angle = normalize_angle(self.angle);
        if thrust {
            self.vel += self.acceleration * Vec2::from_angle(self.angle);
        }
        self.pos += self.vel;
        self.vel *= self.velocity_decay;
        self.pos = wrap_point(self.pos, width, height);
    }

    /// Ready to fire?
    #[inline]
    pub fn can_fire(&self) -> bool {
        self.shot_delay_left == 0
    }

    /// Emit a shot if the cooldown allows it, resetting the cooldown.
    pub fn try_fire(&mut self) -> Option<Shot> {
        if !self.can_fire() {
            return None;
        }
        self.shot_delay_left = self.shot_delay;
        Some(Shot::new(self.pos, self.angle, self.vel))
    }
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize)]
pub struct Shot {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks until automatic expiry; strictly decreases every tick
    pub life_left: u32,
}

impl Shot {
    /// A shot leaving the ship: the ship's velocity plus the muzzle speed
    /// along the ship's heading.
    pub fn new(pos: Vec2, angle: f32, ship_vel: Vec2) -> Self {
        Self {
            pos,
            vel: ship_vel + SHOT_SPEED * Vec2::from_angle(angle),
            life_left: SHOT_LIFE_TICKS,
        }
    }

    /// Advance one tick: burn a tick of life, translate, point-wrap.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.life_left = self.life_left.saturating_sub(1);
        self.pos += self.vel;
        self.pos = wrap_point(self.pos, width, height);
    }

    /// Expired shots are removed by the owning loop after the move step,
    /// independent of any collision that tick.
    #[inline]
    pub fn expired(&self) -> bool {
        self.life_left == 0
    }
}

/// A drifting rock.
#[derive(Debug, Clone, Serialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Destructive hits remaining; at 1, the next hit removes it outright
    pub hits_left: u32,
    /// Fragments produced per destructive hit while hits remain
    pub split_count: u32,
}

impl Asteroid {
    /// A new asteroid at `pos` with a random heading and a speed sampled
    /// uniformly from `[min_speed, max_speed]`.
    pub fn new(
        rng: &mut impl Rng,
        pos: Vec2,
        radius: f32,
        min_speed: f32,
        max_speed: f32,
        hits_left: u32,
        split_count: u32,
    ) -> Self {
        let speed = rng.random_range(min_speed..=max_speed);
        let dir = rng.random_range(0.0..std::f32::consts::TAU);
        Self {
            pos,
            vel: speed * Vec2::from_angle(dir),
            radius,
            hits_left,
            split_count,
        }
    }

    /// One fragment of this asteroid after a destructive hit.
    ///
    /// Dividing the radius by √split_count keeps the summed cross-section of
    /// the fragments equal to the parent's. Each fragment has one less hit
    /// left; velocity is re-rolled like any fresh asteroid.
    pub fn split_fragment(&self, rng: &mut impl Rng) -> Asteroid {
        Asteroid::new(
            rng,
            self.pos,
            self.radius / (self.split_count as f32).sqrt(),
            ASTEROID_MIN_SPEED,
            ASTEROID_MAX_SPEED,
            self.hits_left - 1,
            self.split_count,
        )
    }

    /// Advance one tick: translate, then radius-padded wrap so the rock
    /// travels fully off an edge before re-entering on the opposite side.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.pos += self.vel;
        self.pos = wrap_padded(self.pos, self.radius, width, height);
    }

    /// Contact test against the ship. An inactive ship collides with
    /// nothing.
    pub fn hits_ship(&self, ship: &Ship) -> bool {
        ship.active && circles_overlap(self.pos, self.radius, ship.pos, ship.radius)
    }

    /// Contact test against a shot, modeled as a zero-radius circle.
    pub fn hits_shot(&self, shot: &Shot) -> bool {
        circles_overlap(self.pos, self.radius, shot.pos, 0.0)
    }
}

/// Level progression phase, derived from the asteroid store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LevelPhase {
    /// No asteroids alive; the next tick performs level setup
    AwaitingLevelSetup,
    /// A level's asteroid field is live
    LevelInProgress,
}

/// Complete simulation state.
///
/// Owned exclusively by the tick loop while a tick runs; the host reads a
/// [`Snapshot`] between ticks.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; all spawn and split sampling draws from this stream
    pub rng: Pcg32,
    /// Field dimensions
    pub width: f32,
    pub height: f32,
    /// Current level number; 0 until the first setup tick runs
    pub level: u32,
    pub paused: bool,
    /// Simulation tick counter (does not advance while paused)
    pub time_ticks: u64,
    pub ship: Ship,
    pub shots: EntityStore<Shot>,
    pub asteroids: EntityStore<Asteroid>,
}

impl GameState {
    /// A new session on the default field.
    ///
    /// Starts at level 0 with an empty asteroid field, so the first tick
    /// performs level-1 setup.
    pub fn new(seed: u64) -> Self {
        Self::with_field(seed, FIELD_WIDTH, FIELD_HEIGHT)
    }

    /// A new session on a custom field size.
    pub fn with_field(seed: u64, width: f32, height: f32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            width,
            height,
            level: 0,
            paused: false,
            time_ticks: 0,
            // placeholder; the first level setup replaces it
            ship: Ship::new(
                Vec2::new(width / 2.0, height / 2.0),
                0.0,
                &ShipTuning::for_level(1),
            ),
            shots: EntityStore::with_capacity(0),
            asteroids: EntityStore::with_capacity(0),
        }
    }

    /// Current phase of the level state machine.
    pub fn phase(&self) -> LevelPhase {
        if self.asteroids.is_empty() {
            LevelPhase::AwaitingLevelSetup
        } else {
            LevelPhase::LevelInProgress
        }
    }

    /// Read-only view for the rendering collaborator.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ship: self.ship.clone(),
            shots: self.shots.as_slice().to_vec(),
            asteroids: self.asteroids.as_slice().to_vec(),
            level: self.level,
            paused: self.paused,
        }
    }
}

/// Read-only view of the state at the end of a tick, handed to the renderer
/// between ticks. Shots and asteroids keep their store order.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub ship: Ship,
    pub shots: Vec<Shot>,
    pub asteroids: Vec<Asteroid>,
    pub level: u32,
    pub paused: bool,
}
