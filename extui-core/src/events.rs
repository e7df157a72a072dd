//! Lifecycle events raised by the firmware core
//!
//! The firmware knows nothing about the attached display. It raises one of
//! these events and the active [`ExtUi`](crate::traits::ExtUi) implementation
//! decides what, if anything, the display does about it.

/// Temperature in whole degrees Celsius
pub type Celsius = i16;

/// Zero-based extruder index
pub type ExtruderIndex = u8;

/// Heater that raised a fault or is being tuned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeaterId {
    /// Hotend heater for the given extruder
    Hotend(ExtruderIndex),
    /// Heated bed
    Bed,
    /// Heated chamber
    Chamber,
    /// Laser or cooler loop
    Cooler,
}

/// Machine axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
    E,
}

/// Outcome reported by PID autotuning (M303)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PidResult {
    /// Hotend tuning started
    Started,
    /// Bed tuning started
    BedStarted,
    /// Chamber tuning started
    ChamberStarted,
    /// Heater id not tunable
    BadHeaterId,
    /// Target overshoot aborted tuning
    TempTooHigh,
    /// Oscillation never settled
    TuningTimeout,
    /// Tuning finished, new gains applied
    Done,
}

/// Outcome reported by MPC autotuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MpcResult {
    Started,
    BadHeaterId,
    TempTooHigh,
    TuningTimeout,
    Interrupted,
    Done,
}

/// Special condition reported for a mesh point during probing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeshProbeState {
    /// G29 started
    Start,
    /// G29 finished
    Finish,
    /// Probing of a single point started
    PointStart,
    /// Probing of a single point finished
    PointFinish,
}

/// Step reached by the advanced pause (filament change) procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PauseMessage {
    Parking,
    Changing,
    Waiting,
    Unload,
    Insert,
    Load,
    Purge,
    Option,
    Resume,
    Heat,
    Heating,
    Status,
}

/// Which pause procedure is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PauseMode {
    /// Keep whatever mode the UI already shows
    Same,
    /// Print paused for a filament change
    PausePrint,
    /// Standalone filament load
    LoadFilament,
    /// Standalone filament unload
    UnloadFilament,
}

/// Request for the operator to acknowledge something
///
/// Richer displays can show an icon and a translated button title. Both are
/// optional so a plain message and a decorated one share a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Confirmation<'a> {
    /// Text shown to the operator
    pub message: &'a str,
    /// Icon identifier, if the caller supplied one
    pub icon: Option<u16>,
    /// Button title, if the caller supplied one
    pub button: Option<&'a str>,
}

impl<'a> Confirmation<'a> {
    /// Plain message without decoration
    pub const fn new(message: &'a str) -> Self {
        Self {
            message,
            icon: None,
            button: None,
        }
    }

    /// Attach an icon identifier
    pub const fn with_icon(mut self, icon: u16) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Attach a button title
    pub const fn with_button(mut self, button: &'a str) -> Self {
        self.button = Some(button);
        self
    }
}

/// Events raised by the firmware core
///
/// The set is closed: a UI implementation must handle every variant, even if
/// only to ignore it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event<'a> {
    // Lifecycle
    /// Firmware finished initialization, before the first idle tick
    Startup,
    /// Idle tick from the main loop
    Idle,
    /// Printer halted after a fatal error
    PrinterKilled {
        error: &'a str,
        component: &'a str,
    },

    // Media
    MediaMounted,
    MediaRemoved,
    MediaError,

    // Thermal faults
    HeatingError(HeaterId),
    MinTempError(HeaterId),
    MaxTempError(HeaterId),

    /// Sound a tone on the beeper
    PlayTone {
        frequency_hz: u16,
        duration_ms: u16,
    },

    // Print job
    PrintTimerStarted,
    PrintTimerPaused,
    PrintTimerStopped,
    PrintDone,
    FilamentRunout(ExtruderIndex),

    // Operator interaction
    UserConfirmRequired(Confirmation<'a>),
    /// Advanced pause procedure reached a new step
    PauseMode {
        message: PauseMessage,
        mode: PauseMode,
        extruder: ExtruderIndex,
    },
    StatusChanged(&'a str),

    // Homing
    HomingStart,
    HomingDone,

    // Settings lifecycle
    /// Settings are being reset to defaults
    FactoryReset,
    /// Settings were loaded or reset; derived state must be rebuilt
    PostprocessSettings,
    /// The whole persisted image was written
    SettingsStored(bool),
    /// The whole persisted image was read
    SettingsLoaded(bool),

    // Bed leveling
    LevelingStart,
    LevelingDone,
    MeshUpdate {
        x: i8,
        y: i8,
        z: f32,
    },
    MeshProbe {
        x: i8,
        y: i8,
        state: MeshProbeState,
    },

    /// Minimum extrusion temperature changed
    SetMinExtrusionTemp(Celsius),

    // Power-loss recovery
    /// Power-loss recovery was enabled or disabled
    SetPowerLoss(bool),
    /// Power loss detected
    PowerLoss,
    /// Resuming a job interrupted by power loss
    PowerLossResume,

    // Temperature tuning
    PidTuning(PidResult),
    PidTuningStarted {
        cycles: u8,
        heater: HeaterId,
        target: Celsius,
    },
    MpcTuning(MpcResult),

    /// Firmware update requested (M997)
    FirmwareFlash,

    // Stepper power
    SteppersDisabled,
    SteppersEnabled,
    AxisDisabled(Axis),
    AxisEnabled(Axis),
}

impl Event<'_> {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Event::Startup => "startup",
            Event::Idle => "idle",
            Event::PrinterKilled { .. } => "printer-killed",
            Event::MediaMounted => "media-mounted",
            Event::MediaRemoved => "media-removed",
            Event::MediaError => "media-error",
            Event::HeatingError(_) => "heating-error",
            Event::MinTempError(_) => "min-temp-error",
            Event::MaxTempError(_) => "max-temp-error",
            Event::PlayTone { .. } => "play-tone",
            Event::PrintTimerStarted => "print-timer-started",
            Event::PrintTimerPaused => "print-timer-paused",
            Event::PrintTimerStopped => "print-timer-stopped",
            Event::PrintDone => "print-done",
            Event::FilamentRunout(_) => "filament-runout",
            Event::UserConfirmRequired(_) => "user-confirm-required",
            Event::PauseMode { .. } => "pause-mode",
            Event::StatusChanged(_) => "status-changed",
            Event::HomingStart => "homing-start",
            Event::HomingDone => "homing-done",
            Event::FactoryReset => "factory-reset",
            Event::PostprocessSettings => "postprocess-settings",
            Event::SettingsStored(_) => "settings-stored",
            Event::SettingsLoaded(_) => "settings-loaded",
            Event::LevelingStart => "leveling-start",
            Event::LevelingDone => "leveling-done",
            Event::MeshUpdate { .. } => "mesh-update",
            Event::MeshProbe { .. } => "mesh-probe",
            Event::SetMinExtrusionTemp(_) => "set-min-extrusion-temp",
            Event::SetPowerLoss(_) => "set-power-loss",
            Event::PowerLoss => "power-loss",
            Event::PowerLossResume => "power-loss-resume",
            Event::PidTuning(_) => "pid-tuning",
            Event::PidTuningStarted { .. } => "pid-tuning-started",
            Event::MpcTuning(_) => "mpc-tuning",
            Event::FirmwareFlash => "firmware-flash",
            Event::SteppersDisabled => "steppers-disabled",
            Event::SteppersEnabled => "steppers-enabled",
            Event::AxisDisabled(_) => "axis-disabled",
            Event::AxisEnabled(_) => "axis-enabled",
        }
    }
}

/// One instance of every event kind
///
/// Handy for exhaustiveness checks in UI implementations. Payloads are
/// arbitrary but valid.
pub const ALL_EVENTS: [Event<'static>; 40] = [
    Event::Startup,
    Event::Idle,
    Event::PrinterKilled {
        error: "Thermal Runaway",
        component: "E1",
    },
    Event::MediaMounted,
    Event::MediaRemoved,
    Event::MediaError,
    Event::HeatingError(HeaterId::Hotend(0)),
    Event::MinTempError(HeaterId::Bed),
    Event::MaxTempError(HeaterId::Chamber),
    Event::PlayTone {
        frequency_hz: 2000,
        duration_ms: 100,
    },
    Event::PrintTimerStarted,
    Event::PrintTimerPaused,
    Event::PrintTimerStopped,
    Event::PrintDone,
    Event::FilamentRunout(0),
    Event::UserConfirmRequired(Confirmation::new("Continue?")),
    Event::PauseMode {
        message: PauseMessage::Insert,
        mode: PauseMode::PausePrint,
        extruder: 0,
    },
    Event::StatusChanged("Printing..."),
    Event::HomingStart,
    Event::HomingDone,
    Event::FactoryReset,
    Event::PostprocessSettings,
    Event::SettingsStored(true),
    Event::SettingsLoaded(true),
    Event::LevelingStart,
    Event::LevelingDone,
    Event::MeshUpdate {
        x: 1,
        y: 2,
        z: 0.05,
    },
    Event::MeshProbe {
        x: 1,
        y: 2,
        state: MeshProbeState::PointStart,
    },
    Event::SetMinExtrusionTemp(170),
    Event::SetPowerLoss(true),
    Event::PowerLoss,
    Event::PowerLossResume,
    Event::PidTuning(PidResult::Done),
    Event::PidTuningStarted {
        cycles: 5,
        heater: HeaterId::Hotend(0),
        target: 210,
    },
    Event::MpcTuning(MpcResult::Done),
    Event::FirmwareFlash,
    Event::SteppersDisabled,
    Event::SteppersEnabled,
    Event::AxisDisabled(Axis::E),
    Event::AxisEnabled(Axis::Z),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        for (i, a) in ALL_EVENTS.iter().enumerate() {
            for b in &ALL_EVENTS[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_confirmation_builder() {
        let plain = Confirmation::new("Load filament");
        let decorated = Confirmation::new("Load filament")
            .with_icon(3)
            .with_button("Continue");

        assert_eq!(plain.message, decorated.message);
        assert_eq!(decorated.icon, Some(3));
        assert_eq!(decorated.button, Some("Continue"));
        assert_eq!(plain.icon, None);
        assert_eq!(plain.button, None);
    }
}
