//! LED and buzzer alert outputs for the gas alarm.

use embedded_hal::digital::{OutputPin, PinState};
use log::{debug, error};

use crate::error::Error;

/// How [`AlertController::set_alert`] translates the requested alarm state
/// into output levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertMode {
    /// Outputs follow the requested state, exactly like
    /// [`Steady`](AlertMode::Steady). Callers that want the outputs parked
    /// low pass `on = false`.
    #[default]
    Off,
    /// Outputs follow the requested state: high while the alarm is raised.
    Steady,
    /// Each [`set_alert`](AlertController::set_alert) call inverts the
    /// outputs, regardless of the requested state. The caller's polling rate
    /// sets the flash rate.
    Flashing,
}

/// Drives the alarm's indicator LED and buzzer from a single on/off signal,
/// shaped by the current [`AlertMode`].
///
/// Both pins are owned by the controller and always driven to the same level.
/// The last-driven level is tracked in the controller rather than read back
/// from the indicator pin, so `Flashing` does not depend on the HAL's
/// read-after-write consistency.
pub struct AlertController<LED, BUZ> {
    led: LED,
    buzzer: BUZ,
    mode: AlertMode,
    level: PinState,
}

impl<LED, BUZ, E> AlertController<LED, BUZ>
where
    LED: OutputPin<Error = E>,
    BUZ: OutputPin<Error = E>,
    E: core::fmt::Debug,
{
    /// Take ownership of the two already-configured output pins.
    ///
    /// Starts in [`AlertMode::Off`] and assumes both lines are currently low;
    /// nothing is driven until the first [`set_alert`](Self::set_alert).
    pub fn new(led: LED, buzzer: BUZ) -> Self {
        Self {
            led,
            buzzer,
            mode: AlertMode::Off,
            level: PinState::Low,
        }
    }

    /// Current alert mode.
    pub fn mode(&self) -> AlertMode {
        self.mode
    }

    /// Switch the alert mode without touching the outputs.
    ///
    /// Takes effect on the next [`set_alert`](Self::set_alert) call; any mode
    /// may follow any other.
    pub fn set_mode(&mut self, mode: AlertMode) {
        debug!("alert mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    /// Apply the alarm signal to both outputs according to the current mode.
    ///
    /// In `Off` and `Steady` the outputs are driven to the level of `on`
    /// (high when `true`). In `Flashing` the value of `on` is ignored and the
    /// outputs are inverted from the previously driven level, so calling this
    /// periodically blinks LED and buzzer in step.
    pub fn set_alert(&mut self, on: bool) -> Result<(), Error<E>> {
        let level = match self.mode {
            AlertMode::Off | AlertMode::Steady => PinState::from(on),
            AlertMode::Flashing => !self.level,
        };
        self.drive(level)
    }

    /// Release the underlying pins.
    pub fn release(self) -> (LED, BUZ) {
        (self.led, self.buzzer)
    }

    /// Write `level` to both outputs, recording it only once both writes
    /// succeed so a failed drive is retried at the same target level.
    fn drive(&mut self, level: PinState) -> Result<(), Error<E>> {
        self.led.set_state(level).map_err(|e| {
            error!("LED pin write failed: {:?}", e);
            Error::Pin(e)
        })?;
        self.buzzer.set_state(level).map_err(|e| {
            error!("buzzer pin write failed: {:?}", e);
            Error::Pin(e)
        })?;
        self.level = level;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    fn controller_with(
        led: &[Transaction],
        buzzer: &[Transaction],
    ) -> AlertController<PinMock, PinMock> {
        AlertController::new(PinMock::new(led), PinMock::new(buzzer))
    }

    fn finish(controller: AlertController<PinMock, PinMock>) {
        let (mut led, mut buzzer) = controller.release();
        led.done();
        buzzer.done();
    }

    #[test]
    fn test_construction_is_silent_and_starts_off() {
        let controller = controller_with(&[], &[]);
        assert_eq!(controller.mode(), AlertMode::Off);
        finish(controller);
    }

    #[test]
    fn test_off_and_steady_drive_requested_level() {
        for mode in [AlertMode::Off, AlertMode::Steady] {
            let expectations = [Transaction::set(State::High), Transaction::set(State::Low)];
            let mut controller = controller_with(&expectations, &expectations);
            controller.set_mode(mode);
            controller.set_alert(true).unwrap();
            controller.set_alert(false).unwrap();
            finish(controller);
        }
    }

    #[test]
    fn test_flashing_toggles_and_ignores_argument() {
        let expectations = [
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ];
        let mut controller = controller_with(&expectations, &expectations);
        controller.set_mode(AlertMode::Flashing);
        controller.set_alert(true).unwrap();
        // Argument is ignored; only the previous level matters.
        controller.set_alert(true).unwrap();
        controller.set_alert(false).unwrap();
        finish(controller);
    }

    #[test]
    fn test_two_flashing_calls_restore_original_level() {
        let expectations = [Transaction::set(State::High), Transaction::set(State::Low)];
        let mut controller = controller_with(&expectations, &expectations);
        controller.set_mode(AlertMode::Flashing);
        controller.set_alert(false).unwrap();
        controller.set_alert(false).unwrap();
        finish(controller);
    }

    #[test]
    fn test_flashing_inverts_level_driven_by_steady() {
        let expectations = [Transaction::set(State::High), Transaction::set(State::Low)];
        let mut controller = controller_with(&expectations, &expectations);
        controller.set_mode(AlertMode::Steady);
        controller.set_alert(true).unwrap();
        controller.set_mode(AlertMode::Flashing);
        controller.set_alert(true).unwrap();
        finish(controller);
    }

    #[test]
    fn test_set_mode_alone_never_touches_pins() {
        let mut controller = controller_with(&[], &[]);
        for mode in [
            AlertMode::Flashing,
            AlertMode::Off,
            AlertMode::Steady,
            AlertMode::Off,
        ] {
            controller.set_mode(mode);
            assert_eq!(controller.mode(), mode);
        }
        finish(controller);
    }
}
