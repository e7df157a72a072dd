//! Settings save/load cycle
//!
//! Drives an [`ExtUi`] through the same sequence the firmware's settings
//! subsystem uses, around a sealed image of the display region:
//!
//! - save: `store_settings`, seal, `SettingsStored(true)`
//! - load: validate, `load_settings`, `PostprocessSettings`, `SettingsLoaded(true)`
//! - load of an invalid image: reset, `SettingsLoaded(false)`
//! - reset: `FactoryReset`, `PostprocessSettings`

use crate::events::Event;
use crate::storage::{SettingsBuffer, EEPROM_DATA_SIZE};
use crate::traits::ExtUi;

/// Magic number identifying a display settings image
pub const IMAGE_MAGIC: u32 = 0x45585549; // "EXUI"

/// Current image format version
pub const IMAGE_VERSION: u8 = 1;

/// Reasons an image is rejected on load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    /// Magic number does not match
    BadMagic,
    /// Written by an incompatible format version
    VersionMismatch,
    /// CRC check failed
    CrcMismatch,
}

/// Result of a load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadOutcome {
    /// Image was valid and handed to the display
    Loaded,
    /// Image was rejected; the display was reset to defaults
    Defaulted(ImageError),
}

/// Sealed copy of the display region of the settings image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsImage {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// Display region
    pub data: SettingsBuffer,
    /// CRC32 over magic, version and data
    pub crc: u32,
}

impl Default for SettingsImage {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsImage {
    /// Create a zeroed, unsealed image
    pub const fn new() -> Self {
        Self {
            magic: IMAGE_MAGIC,
            version: IMAGE_VERSION,
            data: [0; EEPROM_DATA_SIZE],
            crc: 0,
        }
    }

    /// Calculate the CRC32 of the image (excluding the crc field itself)
    pub fn calculate_crc(&self) -> u32 {
        let mut crc: u32 = 0xFFFFFFFF;
        crc = crc32_update(crc, &self.magic.to_le_bytes());
        crc = crc32_update(crc, &[self.version]);
        crc = crc32_update(crc, &self.data);
        !crc
    }

    /// Update the CRC field
    pub fn seal(&mut self) {
        self.crc = self.calculate_crc();
    }

    /// Check magic, version and CRC
    pub fn validate(&self) -> Result<(), ImageError> {
        if self.magic != IMAGE_MAGIC {
            return Err(ImageError::BadMagic);
        }
        if self.version != IMAGE_VERSION {
            return Err(ImageError::VersionMismatch);
        }
        if self.crc != self.calculate_crc() {
            return Err(ImageError::CrcMismatch);
        }
        Ok(())
    }
}

/// Save the display's settings into a fresh sealed image
pub fn save<U: ExtUi + ?Sized>(ui: &mut U) -> SettingsImage {
    let mut image = SettingsImage::new();
    ui.store_settings(&mut image.data);
    image.seal();
    ui.on_event(Event::SettingsStored(true));
    image
}

/// Load the display's settings from an image
///
/// An invalid image resets the display to defaults instead.
pub fn load<U: ExtUi + ?Sized>(ui: &mut U, image: &SettingsImage) -> LoadOutcome {
    match image.validate() {
        Ok(()) => {
            ui.load_settings(&image.data);
            ui.on_event(Event::PostprocessSettings);
            ui.on_event(Event::SettingsLoaded(true));
            LoadOutcome::Loaded
        }
        Err(e) => {
            reset(ui);
            ui.on_event(Event::SettingsLoaded(false));
            LoadOutcome::Defaulted(e)
        }
    }
}

/// Reset the display's settings to defaults
pub fn reset<U: ExtUi + ?Sized>(ui: &mut U) {
    ui.on_event(Event::FactoryReset);
    ui.on_event(Event::PostprocessSettings);
}

/// CRC32 update (IEEE 802.3 polynomial, reflected)
fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    const POLY: u32 = 0xEDB88320;
    let mut crc = crc;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}
