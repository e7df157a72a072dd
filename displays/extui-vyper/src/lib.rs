//! Extensible UI adapter for the Anycubic Vyper DGUS touchscreen
//!
//! This crate provides:
//! - `DgusController`, the operations the panel controller exposes
//! - `LcdInfo`, the panel settings block persisted with firmware settings
//! - `VyperUi`, the `ExtUi` implementation that dispatches firmware events
//!   to the controller and bridges the settings block to storage
//! - `SharedUi`, a mutex wrapper for sharing a UI between tasks
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐  Event   ┌──────────────┐  calls   ┌─────────────────┐
//! │  firmware core   │ ───────▶ │   VyperUi    │ ───────▶ │ DgusController  │
//! └──────────────────┘          └──────────────┘          └─────────────────┘
//!          │  settings buffer          ▲ │ LcdInfo + shadow
//!          └───────────────────────────┘ ▼
//! ```
//!
//! Optional firmware features are described by the embedded `vyper.toml`
//! profile, resolved once with [`VyperUi::from_profile`].

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod log;

pub mod adapter;
pub mod controller;
pub mod lcd_info;
pub mod settings;
pub mod shared;

#[cfg(test)]
mod mock;

// Re-export key types
pub use adapter::VyperUi;
pub use controller::{DgusController, MediaEvent, TimerEvent};
pub use lcd_info::{Language, LcdInfo, DEFAULT_PAGE_INDEX};
pub use shared::SharedUi;

/// Build profile of the Vyper firmware
pub const PROFILE: &str = include_str!("../vyper.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use extui_core::config::parse_profile;

    #[test]
    fn test_embedded_profile_parses() {
        let caps = parse_profile(PROFILE).unwrap();
        assert!(!caps.speaker);
        assert!(caps.power_loss_recovery);
        assert!(caps.advanced_pause);
    }

    #[test]
    fn test_embedded_profile_matches_toml() {
        let caps = parse_profile(PROFILE).unwrap();
        let value: toml::Value = toml::from_str(PROFILE).unwrap();
        let features = &value["features"];

        let flag = |key: &str| features.get(key).and_then(|v| v.as_bool()).unwrap_or(false);
        assert_eq!(flag("speaker"), caps.speaker);
        assert_eq!(flag("advanced_pause"), caps.advanced_pause);
        assert_eq!(flag("power_loss_recovery"), caps.power_loss_recovery);
        assert_eq!(flag("leveling"), caps.leveling);

        let bed_temp = value
            .get("leveling")
            .and_then(|t| t.get("bed_temp"))
            .and_then(|v| v.as_integer())
            .map(|t| t as i16);
        assert_eq!(bed_temp, caps.leveling_bed_temp);
    }
}
