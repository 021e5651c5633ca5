//! Tick input intents
//!
//! The host's input collaborator produces intents asynchronously; the loop
//! samples one bundle at tick start so a mid-tick key transition cannot tear
//! the frame.

/// Control intents for a single tick.
///
/// The held flags reflect the latest known key state. `primary` is a
/// one-shot event: the host sets it on the press transition and clears it
/// once a tick has consumed it (see [`TickInput::clear_events`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
    /// The overloaded pause/activate gesture
    pub primary: bool,
}

impl TickInput {
    /// Clear one-shot events after a tick has consumed them.
    pub fn clear_events(&mut self) {
        self.primary = false;
    }
}

/// What the primary gesture does, decided from the session state it lands
/// in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Ship is waiting to enter play and the game is running: wake the ship
    ActivateShip,
    /// Game is running with a live ship: pause, graying the ship out
    Pause,
    /// Game is paused: resume and reactivate the ship
    Unpause,
}

/// Tri-state decision for the overloaded pause/activate gesture.
///
/// Activation only applies while unpaused; in every other state the gesture
/// toggles pause, and ship activity follows the inverse of the new pause
/// state.
pub fn primary_action(ship_active: bool, paused: bool) -> PrimaryAction {
    if !ship_active && !paused {
        PrimaryAction::ActivateShip
    } else if paused {
        PrimaryAction::Unpause
    } else {
        PrimaryAction::Pause
    }
}
