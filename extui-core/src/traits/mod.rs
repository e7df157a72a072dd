//! Interfaces between the firmware core and a display implementation
//!
//! The firmware drives an [`ExtUi`] and never touches display hardware
//! directly. Audio output is behind [`Beeper`].

pub mod beeper;
pub mod ext_ui;

pub use beeper::{Beeper, NoBeeper};
pub use ext_ui::ExtUi;
