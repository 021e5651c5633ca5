//! Astro Rocks entry point
//!
//! Headless host shell: drives the simulation at its fixed 25 ms cadence
//! with a scripted demo pilot, then dumps the final snapshot as JSON.
//! A renderer and a real input device plug in at the same seams.

use std::time::{Duration, Instant};

use astro_rocks::consts::TICK_PERIOD_MS;
use astro_rocks::sim::{GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(400);

    log::info!("starting run: seed={seed} ticks={ticks}");

    let mut state = GameState::new(seed);
    let mut input = TickInput::default();

    let period = Duration::from_millis(TICK_PERIOD_MS);
    let mut next_tick = Instant::now();

    for n in 0..ticks {
        // Scripted demo pilot: enter play once level 1 exists, then circle
        // and fire in bursts.
        input.primary = n == 1;
        input.turn_right = n % 200 < 60;
        input.thrust = n % 100 < 25;
        input.fire = true;

        tick(&mut state, &input);
        input.clear_events();

        // Fixed-period cadence: sleep out the remainder of the period, and
        // start immediately when a tick overruns (no catch-up).
        next_tick += period;
        let now = Instant::now();
        if next_tick > now {
            std::thread::sleep(next_tick - now);
        } else {
            next_tick = now;
        }
    }

    let snapshot = state.snapshot();
    log::info!(
        "finished at level {} after {} ticks",
        snapshot.level,
        state.time_ticks
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
