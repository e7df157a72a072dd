//! Recording test doubles

use heapless::{String, Vec};

use extui_core::traits::Beeper;

use crate::controller::{DgusController, MediaEvent, TimerEvent};
use crate::lcd_info::LcdInfo;

/// Maximum message length kept by the recorder
pub const MSG_LEN: usize = 64;

/// A recorded controller call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Startup,
    IdleLoop,
    PrinterKilled(String<MSG_LEN>, String<MSG_LEN>),
    Media(MediaEvent),
    Timer(TimerEvent),
    HomingStart,
    HomingComplete,
    Confirmation(String<MSG_LEN>),
    Status(String<MSG_LEN>),
    FilamentRunout,
    PowerLoss,
    PowerLossRecovery,
    ParamInit,
}

/// Copy a message, panicking if it does not fit
fn text(message: &str) -> String<MSG_LEN> {
    let mut s = String::new();
    s.push_str(message)
        .unwrap_or_else(|()| panic!("message longer than {} bytes: {:?}", MSG_LEN, message));
    s
}

impl Call {
    pub fn killed(error: &str, component: &str) -> Self {
        Call::PrinterKilled(text(error), text(component))
    }

    pub fn confirm(message: &str) -> Self {
        Call::Confirmation(text(message))
    }

    pub fn status(message: &str) -> Self {
        Call::Status(text(message))
    }
}

/// Controller that records every call
#[derive(Debug, Default)]
pub struct MockController {
    pub lcd_info: LcdInfo,
    pub calls: Vec<Call, 32>,
}

impl MockController {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, call: Call) {
        self.calls
            .push(call)
            .unwrap_or_else(|call| panic!("call log full, dropped {:?}", call));
    }
}

impl DgusController for MockController {
    fn startup(&mut self) {
        self.record(Call::Startup);
    }

    fn idle_loop(&mut self) {
        self.record(Call::IdleLoop);
    }

    fn printer_killed(&mut self, error: &str, component: &str) {
        self.record(Call::killed(error, component));
    }

    fn media_event(&mut self, event: MediaEvent) {
        self.record(Call::Media(event));
    }

    fn timer_event(&mut self, event: TimerEvent) {
        self.record(Call::Timer(event));
    }

    fn homing_start(&mut self) {
        self.record(Call::HomingStart);
    }

    fn homing_complete(&mut self) {
        self.record(Call::HomingComplete);
    }

    fn confirmation_request(&mut self, message: &str) {
        self.record(Call::confirm(message));
    }

    fn status_change(&mut self, message: &str) {
        self.record(Call::status(message));
    }

    fn filament_runout(&mut self) {
        self.record(Call::FilamentRunout);
    }

    fn power_loss(&mut self) {
        self.record(Call::PowerLoss);
    }

    fn power_loss_recovery(&mut self) {
        self.record(Call::PowerLossRecovery);
    }

    fn param_init(&mut self) {
        self.record(Call::ParamInit);
    }

    fn lcd_info(&self) -> &LcdInfo {
        &self.lcd_info
    }

    fn lcd_info_mut(&mut self) -> &mut LcdInfo {
        &mut self.lcd_info
    }
}

/// Beeper that records every tone
#[derive(Debug, Default)]
pub struct MockBeeper {
    pub tones: Vec<(u16, u16), 8>,
}

impl MockBeeper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Beeper for MockBeeper {
    fn tone(&mut self, frequency_hz: u16, duration_ms: u16) {
        self.tones
            .push((frequency_hz, duration_ms))
            .unwrap_or_else(|tone| panic!("tone log full, dropped {:?}", tone));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_A: [u8; MSG_LEN + 16] = [b'A'; MSG_LEN + 16];
    const LONG_B: [u8; MSG_LEN + 16] = [b'B'; MSG_LEN + 16];

    fn ascii(bytes: &[u8]) -> &str {
        core::str::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_distinct_messages_record_distinctly() {
        let a = ascii(&LONG_A[..MSG_LEN]);
        let b = ascii(&LONG_B[..MSG_LEN]);
        assert_ne!(Call::status(a), Call::status(b));
    }

    #[test]
    #[should_panic(expected = "message longer than")]
    fn test_oversized_message_panics() {
        let mut controller = MockController::new();
        controller.status_change(ascii(&LONG_A));
    }

    #[test]
    #[should_panic(expected = "call log full")]
    fn test_call_log_overflow_panics() {
        let mut controller = MockController::new();
        for _ in 0..=32 {
            controller.idle_loop();
        }
    }
}
