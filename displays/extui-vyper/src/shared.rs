//! Shared access to a UI
//!
//! The firmware normally drives the UI from its single control loop. When
//! another task or interrupt also needs it, wrap it in a [`SharedUi`] so
//! each handler, and each settings transfer in particular, runs with
//! exclusive access to the settings block.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use extui_core::events::Event;
use extui_core::storage::SettingsBuffer;
use extui_core::traits::ExtUi;

/// A UI behind a blocking mutex
pub struct SharedUi<R: RawMutex, U> {
    inner: Mutex<R, RefCell<U>>,
}

impl<R: RawMutex, U> SharedUi<R, U> {
    /// Wrap a UI
    pub const fn new(ui: U) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(ui)),
        }
    }

    /// Run `f` with exclusive access to the UI
    pub fn with<T>(&self, f: impl FnOnce(&mut U) -> T) -> T {
        self.inner.lock(|cell| {
            let mut ui = cell.borrow_mut();
            f(&mut *ui)
        })
    }
}

impl<R: RawMutex, U: ExtUi> SharedUi<R, U> {
    /// Forward an event
    pub fn on_event(&self, event: Event<'_>) {
        self.with(|ui| ui.on_event(event));
    }

    /// Store settings with exclusive access
    pub fn store_settings(&self, buffer: &mut SettingsBuffer) {
        self.with(|ui| ui.store_settings(buffer));
    }

    /// Load settings with exclusive access
    pub fn load_settings(&self, buffer: &SettingsBuffer) {
        self.with(|ui| ui.load_settings(buffer));
    }
}
