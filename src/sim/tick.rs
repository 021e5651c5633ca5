//! Fixed timestep simulation tick
//!
//! One call advances the whole simulation by one step. The host owns the
//! real-time cadence and calls [`tick`] once per fixed period with the
//! latest sampled input bundle; rendering reads a snapshot between ticks.

use super::collision::{self, CollisionOutcome};
use super::input::{PrimaryAction, TickInput, primary_action};
use super::level;
use super::state::GameState;

/// Advance the simulation by one fixed step.
///
/// Never blocks. Deterministic given the input bundle and the state's
/// seeded RNG.
pub fn tick(state: &mut GameState, input: &TickInput) {
    // The overloaded pause/activate gesture lands before anything moves.
    if input.primary {
        match primary_action(state.ship.active, state.paused) {
            PrimaryAction::ActivateShip => state.ship.active = true,
            PrimaryAction::Pause => {
                state.paused = true;
                state.ship.active = false;
            }
            PrimaryAction::Unpause => {
                state.paused = false;
                state.ship.active = true;
            }
        }
    }

    // Level setup triggers whenever the asteroid field is empty. The check
    // runs even while paused; setup unpauses.
    if state.asteroids.is_empty() {
        level::setup_next_level(state);
    }

    if state.paused {
        return;
    }

    state.time_ticks += 1;

    // Ship kinematics run whenever the game is unpaused; control intents
    // only land while the ship is active.
    let controls_live = state.ship.active;
    let (width, height) = (state.width, state.height);
    state.ship.advance(
        controls_live && input.turn_left,
        controls_live && input.turn_right,
        controls_live && input.thrust,
        width,
        height,
    );

    // Move shots; expiry is checked right after each move, independent of
    // any collision later this tick. Removal compacts, so the index only
    // advances past survivors.
    let mut i = 0;
    while i < state.shots.len() {
        state.shots[i].advance(width, height);
        if state.shots[i].expired() {
            state.shots.remove_at(i);
        } else {
            i += 1;
        }
    }

    for asteroid in state.asteroids.iter_mut() {
        asteroid.advance(width, height);
    }

    if collision::resolve(state) == CollisionOutcome::ShipHit {
        level::restart_level(state);
    }

    // The fire attempt comes last: a shot spawned this tick first moves on
    // the next one. A ship hit above does not suppress it; the replacement
    // ship arrives with next tick's setup anyway.
    if input.fire && state.ship.active {
        if let Some(shot) = state.ship.try_fire() {
            state
                .shots
                .push(shot)
                .expect("shot store sized for lifetime over cooldown");
        }
    }
}
