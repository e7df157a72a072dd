//! Extensible UI handler trait

use crate::events::{Celsius, Event};
use crate::storage::SettingsBuffer;

/// A display implementation plugged into the firmware's UI surface
///
/// Every method is total: a display that has no use for an event ignores
/// it instead of reporting an error. Handlers run on the firmware's control
/// thread and must return quickly, `Event::Idle` in particular.
pub trait ExtUi {
    /// Handle a lifecycle event
    fn on_event(&mut self, event: Event<'_>);

    /// Write this display's persistent settings into `buffer`
    ///
    /// Called while the firmware saves its settings (M500). Only the prefix
    /// occupied by the display's settings block is written.
    fn store_settings(&self, buffer: &mut SettingsBuffer);

    /// Read this display's persistent settings from `buffer`
    ///
    /// Called while the firmware loads its settings, before
    /// [`Event::PostprocessSettings`].
    fn load_settings(&mut self, buffer: &SettingsBuffer);

    /// Bed temperature to preheat to before leveling
    ///
    /// `None` when leveling or preheating is not part of this build.
    fn leveling_bed_temp(&self) -> Option<Celsius> {
        None
    }
}
