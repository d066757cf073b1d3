//! Error types for the alphanumeric display driver.

use core::fmt;

/// Errors returned by display operations.
///
/// Bus failures are passed through untouched; the driver does not retry.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// Underlying transport error.
    Bus(E),
}

// Allow ergonomic `?` propagation from raw transport errors.
impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Bus(error)
    }
}

impl<E> Error<E> {
    /// Unwrap the transport error.
    pub fn into_inner(self) -> E {
        match self {
            Error::Bus(e) => e,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "I2C error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Bus(e) => defmt::write!(f, "I2C error: {}", e),
        }
    }
}

/// Errors raised while building a [`ChainConfig`](crate::ChainConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// More addresses than [`MAX_SEGMENTS`](crate::MAX_SEGMENTS).
    TooManySegments,
    /// Address does not fit in 7 bits.
    InvalidAddress(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::TooManySegments => write!(
                f,
                "Too many display segments (max {})",
                crate::registers::MAX_SEGMENTS
            ),
            ConfigError::InvalidAddress(a) => write!(f, "Invalid 7-bit I2C address: {:#04x}", a),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigError::TooManySegments => defmt::write!(f, "Too many display segments"),
            ConfigError::InvalidAddress(a) => defmt::write!(f, "Invalid I2C address: {=u8:#x}", a),
        }
    }
}
