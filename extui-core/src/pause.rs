//! Standard prompts for the advanced pause procedure
//!
//! Displays without their own filament-change screens show each step of
//! the procedure as a confirmation prompt.

use crate::events::{PauseMessage, PauseMode};

/// Prompt text for a pause step
///
/// Returns `None` when the display should keep what it shows: for
/// [`PauseMode::Same`] and for plain status updates.
pub fn pause_prompt(message: PauseMessage, mode: PauseMode) -> Option<&'static str> {
    if mode == PauseMode::Same {
        return None;
    }

    match message {
        PauseMessage::Parking => Some("Parking..."),
        PauseMessage::Changing => Some("Wait for filament change to start"),
        PauseMessage::Waiting => Some("Press button to resume print"),
        PauseMessage::Unload => Some("Wait for filament unload"),
        PauseMessage::Insert => Some("Insert filament and press button"),
        PauseMessage::Load => Some("Wait for filament load"),
        PauseMessage::Purge => Some("Wait for filament purge"),
        PauseMessage::Option => Some("Purge more or continue?"),
        PauseMessage::Resume => Some("Wait for print to resume..."),
        PauseMessage::Heat => Some("Press button to heat nozzle"),
        PauseMessage::Heating => Some("Nozzle heating, please wait..."),
        PauseMessage::Status => None,
    }
}
