//! Error types shared by the alarm drivers.

/// Failure surfaced by a driver, wrapping the HAL's digital pin error.
///
/// Every operation in this crate touches at most the pins it owns, so pin
/// access is the only failure source. HALs with infallible GPIO instantiate
/// `E` as [`core::convert::Infallible`] and the error path disappears.
#[derive(Debug, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A digital pin read or write was rejected by the HAL.
    #[error("digital pin access failed")]
    Pin(E),
}
