//! Level progression
//!
//! The director watches the asteroid store: when it drains to zero, the next
//! tick builds the next level. A ship hit rewinds the level counter by one
//! and drains the store, so the same level is rebuilt with a fresh ship.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, GameState, Ship};
use crate::consts::*;
use crate::tuning::ShipTuning;

/// Shot-store capacity for a given fire cooldown: the most shots that can
/// be alive at once when one shot leaves per cooldown window, plus one slot
/// for the tick where the oldest shot expires as a new one is fired.
pub fn shot_capacity(cooldown: u32) -> usize {
    (SHOT_LIFE_TICKS as usize).div_ceil(cooldown as usize) + 1
}

/// Asteroid-store capacity for a level: the seeded count at full
/// fragmentation depth, plus one spare slot for the split-append ordering.
pub fn asteroid_capacity(level: u32) -> usize {
    2 * level as usize * (ASTEROID_SPLIT as usize).pow(ASTEROID_HITS - 1) + 1
}

/// Build the next level.
///
/// Bumps the level counter, replaces the ship with a freshly tiered one,
/// rebinds both stores to this level's capacities, unpauses, and seeds
/// `2 * level` asteroids at uniformly random positions.
pub fn setup_next_level(state: &mut GameState) {
    state.level += 1;
    let tuning = ShipTuning::for_level(state.level);
    let center = Vec2::new(state.width / 2.0, state.height / 2.0);
    // the new ship spawns inactive; the host's activate gesture enters play
    state.ship = Ship::new(center, 0.0, &tuning);
    state.shots.rebind(shot_capacity(tuning.shot_cooldown));
    state.asteroids.rebind(asteroid_capacity(state.level));
    state.paused = false;

    let count = 2 * state.level as usize;
    for _ in 0..count {
        let pos = Vec2::new(
            state.rng.random_range(0.0..state.width),
            state.rng.random_range(0.0..state.height),
        );
        let asteroid = Asteroid::new(
            &mut state.rng,
            pos,
            ASTEROID_BASE_RADIUS,
            ASTEROID_MIN_SPEED,
            ASTEROID_MAX_SPEED,
            ASTEROID_HITS,
            ASTEROID_SPLIT,
        );
        state
            .asteroids
            .push(asteroid)
            .expect("seed count fits level capacity");
    }

    log::info!(
        "level {} started: {} asteroids, shot cooldown {}",
        state.level,
        count,
        tuning.shot_cooldown
    );
}

/// Handle a ship hit: rewind the level counter and drain the asteroid
/// field. The next tick's empty-store check rebuilds the same level.
pub fn restart_level(state: &mut GameState) {
    state.level = state.level.saturating_sub(1);
    state.asteroids.clear();
    log::debug!("ship hit, restarting level {}", state.level + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::LevelPhase;

    #[test]
    fn test_shot_capacity_formula() {
        // 40-tick life over the tier cooldowns
        assert_eq!(shot_capacity(12), 5);
        assert_eq!(shot_capacity(10), 5);
        assert_eq!(shot_capacity(9), 6);
        assert_eq!(shot_capacity(7), 7);
        assert_eq!(shot_capacity(5), 9);
    }

    #[test]
    fn test_asteroid_capacity_formula() {
        // seeded count times split^(hits-1), plus the spare slot
        assert_eq!(asteroid_capacity(1), 9);
        assert_eq!(asteroid_capacity(2), 17);
        assert_eq!(asteroid_capacity(3), 25);
    }

    #[test]
    fn test_setup_seeds_twice_level_asteroids() {
        let mut state = GameState::new(3);
        setup_next_level(&mut state);
        assert_eq!(state.level, 1);
        assert_eq!(state.asteroids.len(), 2);
        assert_eq!(state.asteroids.capacity(), 9);
        assert_eq!(state.phase(), LevelPhase::LevelInProgress);

        state.asteroids.clear();
        setup_next_level(&mut state);
        assert_eq!(state.level, 2);
        assert_eq!(state.asteroids.len(), 4);
    }

    #[test]
    fn test_setup_replaces_ship_and_clears_shots() {
        let mut state = GameState::new(3);
        setup_next_level(&mut state);
        state.ship.active = true;
        let shot = state.ship.try_fire().unwrap();
        state.shots.push(shot).unwrap();
        state.paused = true;
        state.asteroids.clear();

        setup_next_level(&mut state);
        assert!(!state.ship.active);
        assert_eq!(state.ship.pos, Vec2::new(250.0, 250.0));
        assert_eq!(state.ship.vel, Vec2::ZERO);
        assert!(state.shots.is_empty());
        assert!(!state.paused);
    }

    #[test]
    fn test_setup_applies_level_tuning() {
        let mut state = GameState::new(3);
        for _ in 0..6 {
            state.asteroids.clear();
            setup_next_level(&mut state);
        }
        assert_eq!(state.level, 6);
        let tier = ShipTuning::for_level(6);
        assert_eq!(state.ship.shot_delay, tier.shot_cooldown);
        assert_eq!(state.ship.rotational_speed, tier.turn_rate);
        assert_eq!(state.shots.capacity(), shot_capacity(tier.shot_cooldown));
    }

    #[test]
    fn test_seeded_positions_are_on_field() {
        let mut state = GameState::new(99);
        for _ in 0..4 {
            state.asteroids.clear();
            setup_next_level(&mut state);
            for asteroid in state.asteroids.iter() {
                assert!((0.0..500.0).contains(&asteroid.pos.x));
                assert!((0.0..500.0).contains(&asteroid.pos.y));
            }
        }
    }

    #[test]
    fn test_restart_rewinds_level_and_drains_field() {
        let mut state = GameState::new(3);
        setup_next_level(&mut state);
        state.asteroids.clear();
        setup_next_level(&mut state);
        assert_eq!(state.level, 2);

        restart_level(&mut state);
        assert_eq!(state.level, 1);
        assert!(state.asteroids.is_empty());
        assert_eq!(state.phase(), LevelPhase::AwaitingLevelSetup);
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = GameState::new(1234);
        let mut b = GameState::new(1234);
        setup_next_level(&mut a);
        setup_next_level(&mut b);
        for (x, y) in a.asteroids.iter().zip(b.asteroids.iter()) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
        }
    }
}
