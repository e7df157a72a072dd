//! Persistent display settings
//!
//! The DGUS panel keeps a small settings block that survives power cycles
//! by riding along in the firmware's settings image.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────┬──────────┬───────┐
//! │ PAGE INDEX   │ LANGUAGE │ AUDIO │
//! │ 2B (LE)      │ 1B       │ 1B    │
//! └──────────────┴──────────┴───────┘
//! ```

use extui_core::storage::{PersistentBlock, EEPROM_DATA_SIZE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page shown after a factory reset
pub const DEFAULT_PAGE_INDEX: u16 = 121;

/// UI language of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    #[default]
    English,
    Chinese,
}

// Wire format values
const LANGUAGE_ENGLISH: u8 = 0x00;
const LANGUAGE_CHINESE: u8 = 0x01;

impl Language {
    /// Parse from the stored byte, falling back to English
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            LANGUAGE_CHINESE => Language::Chinese,
            _ => Language::English,
        }
    }

    /// Convert to the stored byte
    pub fn to_byte(self) -> u8 {
        match self {
            Language::English => LANGUAGE_ENGLISH,
            Language::Chinese => LANGUAGE_CHINESE,
        }
    }
}

/// Display settings block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LcdInfo {
    /// Current UI page
    pub page_index: u16,
    /// UI language
    pub language: Language,
    /// Touch and alert sounds enabled
    pub audio_on: bool,
}

impl PersistentBlock for LcdInfo {
    const ENCODED_LEN: usize = 4;

    fn encode(&self, out: &mut [u8]) {
        out[..2].copy_from_slice(&self.page_index.to_le_bytes());
        out[2] = self.language.to_byte();
        out[3] = self.audio_on as u8;
    }

    fn decode(bytes: &[u8]) -> Self {
        Self {
            page_index: u16::from_le_bytes([bytes[0], bytes[1]]),
            language: Language::from_byte(bytes[2]),
            audio_on: bytes[3] != 0,
        }
    }
}

const _: () = assert!(LcdInfo::ENCODED_LEN <= EEPROM_DATA_SIZE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let info = LcdInfo {
            page_index: DEFAULT_PAGE_INDEX,
            language: Language::Chinese,
            audio_on: true,
        };
        let mut out = [0u8; LcdInfo::ENCODED_LEN];
        info.encode(&mut out);

        assert_eq!(out, [121, 0, 0x01, 0x01]);
    }

    #[test]
    fn test_decode_is_total() {
        let info = LcdInfo::decode(&[0xFF, 0xFF, 0x7F, 0x02]);

        assert_eq!(info.page_index, 0xFFFF);
        assert_eq!(info.language, Language::English);
        assert!(info.audio_on);
    }

    #[test]
    fn test_language_bytes() {
        for language in [Language::English, Language::Chinese] {
            assert_eq!(Language::from_byte(language.to_byte()), language);
        }
        assert_eq!(Language::from_byte(0xAA), Language::English);
    }
}
