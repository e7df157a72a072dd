//! Event dispatch for the Vyper touchscreen
//!
//! Translates each firmware event into at most one controller call. Events
//! the panel has no use for are matched explicitly and dropped, so adding an
//! event kind to the firmware surface is a compile error here until it is
//! handled.

use extui_core::config::{parse_profile, Capabilities, ProfileError};
use extui_core::events::{Celsius, Event, PauseMessage, PauseMode};
use extui_core::pause::pause_prompt;
use extui_core::storage::SettingsBuffer;
use extui_core::traits::{Beeper, ExtUi};

use crate::controller::{DgusController, MediaEvent, TimerEvent};
use crate::lcd_info::LcdInfo;
use crate::PROFILE;

#[cfg(feature = "defmt")]
use defmt::{debug, info, warn};

/// Extensible UI implementation for the Anycubic Vyper DGUS panel
pub struct VyperUi<C, B> {
    /// Panel controller
    pub(crate) controller: C,
    /// Audio output
    beeper: B,
    /// Optional features of this build
    capabilities: Capabilities,
    /// Settings block as it was at the last load
    pub(crate) shadow: LcdInfo,
    /// Last step reported by the advanced pause procedure
    pause_status: Option<PauseMessage>,
}

impl<C: DgusController, B: Beeper> VyperUi<C, B> {
    /// Create an adapter around a controller
    pub fn new(controller: C, beeper: B, capabilities: Capabilities) -> Self {
        let shadow = *controller.lcd_info();
        Self {
            controller,
            beeper,
            capabilities,
            shadow,
            pause_status: None,
        }
    }

    /// Create an adapter using the embedded Vyper build profile
    pub fn from_profile(controller: C, beeper: B) -> Result<Self, ProfileError> {
        let capabilities = parse_profile(PROFILE)?;
        info!("Vyper profile: {:?}", capabilities);
        Ok(Self::new(controller, beeper, capabilities))
    }

    /// Panel controller
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Panel controller, mutable
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// Optional features of this build
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Last step reported by the advanced pause procedure
    pub fn pause_status(&self) -> Option<PauseMessage> {
        self.pause_status
    }

    fn pause_mode(&mut self, message: PauseMessage, mode: PauseMode) {
        if mode == PauseMode::Same {
            return;
        }
        self.pause_status = Some(message);
        if let Some(prompt) = pause_prompt(message, mode) {
            self.controller.confirmation_request(prompt);
        }
    }

    fn unsupported(&self, event: &Event<'_>) {
        debug!("{} ignored: not in this build", event.name());
    }
}

impl<C: DgusController, B: Beeper> ExtUi for VyperUi<C, B> {
    fn on_event(&mut self, event: Event<'_>) {
        match event {
            Event::Idle => self.controller.idle_loop(),
            Event::Startup => {
                info!("DGUS startup");
                self.controller.startup();
            }
            Event::PrinterKilled { error, component } => {
                warn!("Printer killed: {} ({})", error, component);
                self.controller.printer_killed(error, component);
            }

            Event::MediaMounted => self.controller.media_event(MediaEvent::Inserted),
            Event::MediaRemoved => self.controller.media_event(MediaEvent::Removed),
            Event::MediaError => self.controller.media_event(MediaEvent::Error),

            // Thermal faults reach the operator through the firmware's own
            // alert path, not this panel.
            Event::HeatingError(_) | Event::MinTempError(_) | Event::MaxTempError(_) => {}

            Event::PlayTone {
                frequency_hz,
                duration_ms,
            } => {
                if self.capabilities.speaker {
                    self.beeper.tone(frequency_hz, duration_ms);
                } else {
                    self.unsupported(&event);
                }
            }

            Event::PrintTimerStarted => self.controller.timer_event(TimerEvent::Started),
            Event::PrintTimerPaused => self.controller.timer_event(TimerEvent::Paused),
            Event::PrintTimerStopped => self.controller.timer_event(TimerEvent::Stopped),
            Event::PrintDone => {}

            // Single extruder panel
            Event::FilamentRunout(_) => self.controller.filament_runout(),

            // The panel has no slot for an icon or button title
            Event::UserConfirmRequired(request) => {
                self.controller.confirmation_request(request.message)
            }
            Event::PauseMode { message, mode, .. } => {
                if self.capabilities.advanced_pause {
                    self.pause_mode(message, mode);
                } else {
                    self.unsupported(&event);
                }
            }
            Event::StatusChanged(message) => self.controller.status_change(message),

            Event::HomingStart => self.controller.homing_start(),
            Event::HomingDone => self.controller.homing_complete(),

            Event::FactoryReset => self.factory_reset(),
            Event::PostprocessSettings => self.postprocess_settings(),
            Event::SettingsStored(success) => {
                debug!("Settings stored: {}", success);
            }
            Event::SettingsLoaded(success) => {
                debug!("Settings loaded: {}", success);
            }

            Event::SetPowerLoss(_) => {
                if self.capabilities.power_loss_recovery {
                    self.controller.power_loss();
                } else {
                    self.unsupported(&event);
                }
            }
            // The controller watches for power loss itself
            Event::PowerLoss => {}
            Event::PowerLossResume => {
                if self.capabilities.power_loss_recovery {
                    info!("Resuming after power loss");
                    self.controller.power_loss_recovery();
                } else {
                    self.unsupported(&event);
                }
            }

            Event::LevelingStart
            | Event::LevelingDone
            | Event::MeshUpdate { .. }
            | Event::MeshProbe { .. }
            | Event::SetMinExtrusionTemp(_)
            | Event::PidTuning(_)
            | Event::PidTuningStarted { .. }
            | Event::MpcTuning(_)
            | Event::FirmwareFlash
            | Event::SteppersDisabled
            | Event::SteppersEnabled
            | Event::AxisDisabled(_)
            | Event::AxisEnabled(_) => {}
        }
    }

    fn store_settings(&self, buffer: &mut SettingsBuffer) {
        VyperUi::store_settings(self, buffer);
    }

    fn load_settings(&mut self, buffer: &SettingsBuffer) {
        VyperUi::load_settings(self, buffer);
    }

    fn leveling_bed_temp(&self) -> Option<Celsius> {
        self.capabilities.preheat_before_leveling()
    }
}
