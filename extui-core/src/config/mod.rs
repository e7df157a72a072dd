//! Build configuration
//!
//! Optional firmware features are described by a small TOML profile and
//! resolved into a [`Capabilities`] set once at startup.

pub mod capabilities;
pub mod profile;

pub use capabilities::Capabilities;
pub use profile::{parse_profile, ProfileError};
