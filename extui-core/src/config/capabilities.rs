//! Optional firmware features a UI may react to
//!
//! Resolved once at startup from the build profile. A handler for an
//! optional event only acts when the matching capability is present.

use crate::events::Celsius;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Set of optional features present in this build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capabilities {
    /// A speaker or beeper is fitted
    pub speaker: bool,
    /// Advanced pause (filament change) procedure
    pub advanced_pause: bool,
    /// Power-loss recovery
    pub power_loss_recovery: bool,
    /// Bed leveling
    pub leveling: bool,
    /// Bed temperature to preheat to before leveling
    pub leveling_bed_temp: Option<Celsius>,
}

impl Capabilities {
    /// No optional features
    pub const NONE: Self = Self {
        speaker: false,
        advanced_pause: false,
        power_loss_recovery: false,
        leveling: false,
        leveling_bed_temp: None,
    };

    /// Preheat target before leveling, if leveling is present
    pub fn preheat_before_leveling(&self) -> Option<Celsius> {
        if self.leveling {
            self.leveling_bed_temp
        } else {
            None
        }
    }
}
