//! Blocking driver for the SparkFun Qwiic Alphanumeric Display.
//!
//! This crate drives the HT16K33-based 14-segment display boards over I2C
//! using the `embedded-hal` 1.0 blocking traits. Several boards at different
//! addresses can be chained and treated as one wide display.
//!
//! # Architecture
//!
//! - **[`transport`]** — the [`BusTransport`] capability (command, register
//!   and probe primitives) and [`I2cTransport`], its implementation over any
//!   `embedded_hal::i2c::I2c`.
//! - **[`DisplayController`]** — encodes the setup commands and broadcasts
//!   them across the chain.
//! - **[`registers`]** — command bytes, addresses and [`BlinkRate`].
//!
//! # Quick start
//!
//! ```no_run
//! use alphanumeric_display::{BlinkRate, DisplayController, I2cTransport};
//!
//! # fn example<I: embedded_hal::i2c::I2c, D: embedded_hal::delay::DelayNs>(i2c: I, delay: D) {
//! // Single display at the default address 0x70
//! let mut display = DisplayController::new(I2cTransport::new(i2c), delay);
//!
//! if display.begin().unwrap() {
//!     display.set_blink_rate(BlinkRate::OneHz).unwrap();
//! }
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on public types
//!   and debug logging of bus traffic.

#![no_std]

pub use config::ChainConfig;
pub use display::DisplayController;
pub use error::{ConfigError, Error};
pub use registers::{
    BlinkRate, AVAILABLE_ADDRESSES, DEFAULT_ADDRESS, DEVICE_NAME, MAX_BRIGHTNESS, MAX_SEGMENTS,
};
pub use transport::{BusTransport, I2cTransport};

mod config;
mod display;
mod error;
pub mod registers;
pub mod transport;
