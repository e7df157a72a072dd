//! Beeper output trait

/// Piezo or speaker output able to play a single tone
pub trait Beeper {
    /// Start a tone
    ///
    /// - `frequency_hz`: Tone frequency, 0 means silence
    /// - `duration_ms`: Tone length, 0 lets the driver pick its default
    fn tone(&mut self, frequency_hz: u16, duration_ms: u16);
}

/// Beeper for builds without audio hardware
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBeeper;

impl Beeper for NoBeeper {
    fn tone(&mut self, _frequency_hz: u16, _duration_ms: u16) {}
}
