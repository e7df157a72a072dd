//! Display-agnostic extensible UI contract for printer firmware
//!
//! The firmware core raises lifecycle events without knowing which display
//! is attached. This crate defines what every display implementation
//! receives:
//!
//! - The closed set of lifecycle events ([`Event`])
//! - The handler trait a display implements ([`ExtUi`]) and the audio
//!   output it may drive ([`Beeper`])
//! - The persisted-data contract for display settings
//! - The settings save/load cycle around a sealed image
//! - The capability set replacing build-time feature flags
//! - Standard prompts for the advanced pause procedure

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod events;
pub mod pause;
pub mod settings;
pub mod storage;
pub mod traits;

pub use config::Capabilities;
pub use events::Event;
pub use storage::{PersistentBlock, SettingsBuffer, EEPROM_DATA_SIZE};
pub use traits::{Beeper, ExtUi, NoBeeper};
