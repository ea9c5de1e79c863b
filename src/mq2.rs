//! MQ-2 gas sensor driver, digital alarm line only.

use embedded_hal::digital::InputPin;
use log::error;

use crate::error::Error;

/// Reads the digital alarm output of an MQ-2 combustible-gas breakout.
///
/// The breakout compares its analogue channel against the on-board threshold
/// potentiometer and exposes the result on a single digital line; this driver
/// samples that line and nothing else. Threshold tuning and analogue
/// calibration happen on the board.
pub struct Mq2Sensor<P> {
    pin: P,
}

impl<P: InputPin> Mq2Sensor<P> {
    /// Take ownership of the already-configured alarm input line.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Sample the alarm line.
    ///
    /// Returns `true` while the gas concentration is above the board's
    /// threshold (line driven high). Pure query; the driver keeps no state
    /// beyond the pin binding.
    pub fn read(&mut self) -> Result<bool, Error<P::Error>> {
        self.pin.is_high().map_err(|e| {
            error!("MQ2 alarm line read failed: {:?}", e);
            Error::Pin(e)
        })
    }

    /// Release the underlying pin.
    pub fn release(self) -> P {
        self.pin
    }
}
