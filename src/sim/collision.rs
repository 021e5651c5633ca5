//! Per-tick collision resolution
//!
//! Runs once per tick after every entity has moved. The ship pass comes
//! first and short-circuits the whole resolver: a ship hit restarts the
//! level, which invalidates the rest of the tick's asteroid state.

use super::state::{Asteroid, GameState};

/// Outcome of one tick's collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// No ship contact this tick; shots may still have destroyed asteroids
    Clear,
    /// An asteroid reached the active ship; the level must restart
    ShipHit,
}

/// Resolve ship-vs-asteroid and shot-vs-asteroid contacts for this tick.
///
/// Index discipline for the shot pass: removal compacts the store, so the
/// outer index only advances past surviving asteroids, and each asteroid
/// takes at most one hit (the inner scan breaks after a contact). Fragments
/// are queued and appended after the scan, so they are never re-scanned
/// within the same tick.
pub fn resolve(state: &mut GameState) -> CollisionOutcome {
    // Ship pass, in store order. An inactive ship collides with nothing.
    for asteroid in state.asteroids.iter() {
        if asteroid.hits_ship(&state.ship) {
            return CollisionOutcome::ShipHit;
        }
    }

    let mut fragments: Vec<Asteroid> = Vec::new();
    let mut i = 0;
    while i < state.asteroids.len() {
        let mut struck = false;
        for j in 0..state.shots.len() {
            if state.asteroids[i].hits_shot(&state.shots[j]) {
                state.shots.remove_at(j);
                if state.asteroids[i].hits_left > 1 {
                    for _ in 0..state.asteroids[i].split_count {
                        let fragment = state.asteroids[i].split_fragment(&mut state.rng);
                        fragments.push(fragment);
                    }
                }
                state.asteroids.remove_at(i);
                // one hit per shot and per asteroid; the entry shifted into
                // slot i is examined on the next pass of the outer loop
                struck = true;
                break;
            }
        }
        if !struck {
            i += 1;
        }
    }

    for fragment in fragments {
        state
            .asteroids
            .push(fragment)
            .expect("asteroid store sized for full fragmentation depth");
    }

    CollisionOutcome::Clear
}
