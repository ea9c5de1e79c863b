//! Hardware-independent driver core for an MQ-2 gas-detection alarm.
//!
//! Two small drivers make up the crate: [`Mq2Sensor`] samples the digital
//! alarm line of an MQ-2 combustible-gas breakout, and [`AlertController`]
//! drives an indicator LED and a buzzer in one of three [`AlertMode`]s. Both
//! are generic over the `embedded-hal` 1.0 digital traits, so they compile
//! for any target with a conforming HAL and run against mock pins on the
//! host.
//!
//! The polling loop that reads the sensor and feeds the controller lives in
//! the firmware, not here; the drivers are synchronous and assume a single
//! caller.

#![no_std]

pub mod alert;
pub mod error;
pub mod mq2;

pub use alert::{AlertController, AlertMode};
pub use error::Error;
pub use mq2::Mq2Sensor;
