//! Persisted-data contract for display settings
//!
//! The firmware reserves a fixed region of its settings image for the
//! display. A display keeps its settings in a plain-data block that is
//! encoded into the start of that region.

/// Bytes of the firmware settings image reserved for the display
pub const EEPROM_DATA_SIZE: usize = 48;

/// Display region of the firmware settings image
pub type SettingsBuffer = [u8; EEPROM_DATA_SIZE];

/// Fixed-size settings block with a stable byte layout
///
/// Implementors must check `ENCODED_LEN` against the reserved region at
/// compile time:
///
/// ```
/// use extui_core::storage::{PersistentBlock, EEPROM_DATA_SIZE};
///
/// struct Volume(u8);
///
/// impl PersistentBlock for Volume {
///     const ENCODED_LEN: usize = 1;
///
///     fn encode(&self, out: &mut [u8]) {
///         out[0] = self.0;
///     }
///
///     fn decode(bytes: &[u8]) -> Self {
///         Volume(bytes[0])
///     }
/// }
///
/// const _: () = assert!(Volume::ENCODED_LEN <= EEPROM_DATA_SIZE);
/// ```
pub trait PersistentBlock: Sized {
    /// Number of bytes written by [`encode`](Self::encode)
    const ENCODED_LEN: usize;

    /// Encode into `out`, which is at least `ENCODED_LEN` bytes
    fn encode(&self, out: &mut [u8]);

    /// Decode from `bytes`, which is at least `ENCODED_LEN` bytes
    ///
    /// Decoding never fails. Out-of-range values map to a default.
    fn decode(bytes: &[u8]) -> Self;

    /// Encode into the start of a settings buffer
    fn store_into(&self, buffer: &mut SettingsBuffer) {
        self.encode(&mut buffer[..Self::ENCODED_LEN]);
    }

    /// Decode from the start of a settings buffer
    fn load_from(buffer: &SettingsBuffer) -> Self {
        Self::decode(&buffer[..Self::ENCODED_LEN])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair(u8, u16);

    impl PersistentBlock for Pair {
        const ENCODED_LEN: usize = 3;

        fn encode(&self, out: &mut [u8]) {
            out[0] = self.0;
            out[1..3].copy_from_slice(&self.1.to_le_bytes());
        }

        fn decode(bytes: &[u8]) -> Self {
            Pair(bytes[0], u16::from_le_bytes([bytes[1], bytes[2]]))
        }
    }

    const _: () = assert!(Pair::ENCODED_LEN <= EEPROM_DATA_SIZE);

    #[test]
    fn test_store_writes_prefix_only() {
        let mut buffer = [0xAAu8; EEPROM_DATA_SIZE];
        Pair(7, 0x0102).store_into(&mut buffer);

        assert_eq!(&buffer[..3], &[7, 0x02, 0x01]);
        assert!(buffer[3..].iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_load_reads_prefix() {
        let mut buffer = [0xFFu8; EEPROM_DATA_SIZE];
        buffer[..3].copy_from_slice(&[9, 0x34, 0x12]);

        assert_eq!(Pair::load_from(&buffer), Pair(9, 0x1234));
    }
}
