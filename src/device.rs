//! Device control boundary.
//!
//! The HTTP layer never touches fan hardware or GPIO directly; it calls
//! through [`DeviceControl`], which serializes its own state changes. The
//! `cause` tag on every mutation identifies the triggering subsystem
//! ("http" here) for downstream auditing.

use std::sync::Mutex;

use anyhow::bail;

/// Display labels for the fan speed ordinals.
pub const FAN_SPEED_LABELS: [&str; 4] = ["Sleep", "Low", "Medium", "High"];

/// Maps a fan speed ordinal to its display label.
pub fn fan_speed_label(speed: u8) -> &'static str {
    FAN_SPEED_LABELS.get(speed as usize).copied().unwrap_or("?")
}

/// Snapshot of the purifier's user-visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceState {
    pub power: bool,
    pub speed: u8,
    pub timer_left: u32,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            power: false,
            speed: 1,
            timer_left: 0,
        }
    }
}

/// Operations the control surface may invoke on the appliance.
pub trait DeviceControl: Send + Sync {
    fn set_fan_speed(&self, speed: u8, cause: &str) -> anyhow::Result<()>;
    fn set_power(&self, on: bool, cause: &str) -> anyhow::Result<()>;
    fn set_timer(&self, minutes: u32, cause: &str) -> anyhow::Result<()>;
    fn state(&self) -> DeviceState;

    /// Reboots the appliance. The shipped implementation terminates the
    /// process and never returns normally.
    fn restart(&self);
}

/// In-memory device backing. Stands in for the hardware driver layer,
/// which lives outside this crate.
#[derive(Default)]
pub struct LocalDevice {
    state: Mutex<DeviceState>,
}

impl DeviceControl for LocalDevice {
    fn set_fan_speed(&self, speed: u8, cause: &str) -> anyhow::Result<()> {
        if speed as usize >= FAN_SPEED_LABELS.len() {
            bail!("fan speed {} out of range", speed);
        }
        let mut state = self.state.lock().unwrap();
        state.speed = speed;
        tracing::info!("Fan speed set to {} (cause: {})", speed, cause);
        Ok(())
    }

    fn set_power(&self, on: bool, cause: &str) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.power = on;
        tracing::info!("Power set to {} (cause: {})", on, cause);
        Ok(())
    }

    fn set_timer(&self, minutes: u32, cause: &str) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.timer_left = minutes;
        tracing::info!("Timer set to {} minutes (cause: {})", minutes, cause);
        Ok(())
    }

    fn state(&self) -> DeviceState {
        *self.state.lock().unwrap()
    }

    fn restart(&self) {
        tracing::warn!("Device restart requested");
        std::process::exit(0);
    }
}
