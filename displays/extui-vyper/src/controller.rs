//! DGUS controller interface
//!
//! The controller owns the panel: rendering, touch handling and the serial
//! link. The adapter only needs the operations below and access to the
//! settings block.

use crate::lcd_info::LcdInfo;

/// Media change reported to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MediaEvent {
    Inserted,
    Removed,
    Error,
}

/// Print timer change reported to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerEvent {
    Started,
    Paused,
    Stopped,
}

/// Operations exposed by the DGUS touchscreen controller
///
/// Implementations contain their own failures (a malformed message, a
/// dropped frame); none of these operations report errors back.
pub trait DgusController {
    /// Bring up the panel, before the first idle tick
    fn startup(&mut self);

    /// Service the panel from the firmware idle loop
    ///
    /// Called at high frequency and must return quickly.
    fn idle_loop(&mut self);

    /// Show a fatal error
    fn printer_killed(&mut self, error: &str, component: &str);

    /// Report a media change
    fn media_event(&mut self, event: MediaEvent);

    /// Report a print timer change
    fn timer_event(&mut self, event: TimerEvent);

    /// Homing started
    fn homing_start(&mut self);

    /// Homing finished
    fn homing_complete(&mut self);

    /// Ask the operator to acknowledge a message
    fn confirmation_request(&mut self, message: &str);

    /// Show a status line
    fn status_change(&mut self, message: &str);

    /// Filament ran out
    fn filament_runout(&mut self);

    /// Re-evaluate power-loss recovery state
    fn power_loss(&mut self);

    /// Resume the job interrupted by power loss
    fn power_loss_recovery(&mut self);

    /// Rebuild derived state from the settings block
    fn param_init(&mut self);

    /// Live settings block
    fn lcd_info(&self) -> &LcdInfo;

    /// Live settings block, mutable
    fn lcd_info_mut(&mut self) -> &mut LcdInfo;
}
