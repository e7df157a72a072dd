//! Settings persistence bridge
//!
//! Moves the [`LcdInfo`] block between the firmware's settings buffer and
//! the controller. A load also refreshes the shadow copy, which later tells
//! whether the operator changed anything since.

use extui_core::storage::{PersistentBlock, SettingsBuffer};
use extui_core::traits::Beeper;

use crate::controller::DgusController;
use crate::lcd_info::{LcdInfo, DEFAULT_PAGE_INDEX};

#[cfg(feature = "defmt")]
use defmt::debug;

impl<C: DgusController, B: Beeper> crate::VyperUi<C, B> {
    /// Encode the live settings block into the start of `buffer`
    pub fn store_settings(&self, buffer: &mut SettingsBuffer) {
        let info = self.controller.lcd_info();
        info.store_into(buffer);
        debug!("Stored display settings: {:?}", info);
    }

    /// Replace the live settings block and the shadow with `buffer`'s contents
    pub fn load_settings(&mut self, buffer: &SettingsBuffer) {
        let info = LcdInfo::load_from(buffer);
        *self.controller.lcd_info_mut() = info;
        self.shadow = info;
        debug!("Loaded display settings: {:?}", info);
    }

    /// Rebuild controller state after a load or reset
    pub fn postprocess_settings(&mut self) {
        self.controller.param_init();
        self.controller.power_loss();
    }

    /// Reset the settings block to factory defaults
    ///
    /// Audio defaults to on only when the build has a speaker.
    pub fn factory_reset(&mut self) {
        let audio_on = self.capabilities().speaker;
        let info = self.controller.lcd_info_mut();
        info.page_index = DEFAULT_PAGE_INDEX;
        info.audio_on = audio_on;
    }

    /// Settings block as it was at the last load
    pub fn shadow(&self) -> &LcdInfo {
        &self.shadow
    }

    /// Check if the live block differs from the last load
    pub fn settings_changed(&self) -> bool {
        *self.controller.lcd_info() != self.shadow
    }
}
