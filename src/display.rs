//! High-level interface for a chain of Qwiic Alphanumeric Displays.
//!
//! [`DisplayController`] encodes the three setup commands (system, display,
//! dimming) and broadcasts them to every segment so a chain behaves as one
//! wide display.

use embedded_hal::delay::DelayNs;

use crate::config::ChainConfig;
use crate::error::Error;
use crate::registers::{
    display_setup, dimming, system_clock_on, BlinkRate, CLOCK_SETTLE_MS, MAX_BRIGHTNESS,
};
use crate::transport::BusTransport;

/// Driver for one or more chained alphanumeric displays.
///
/// Device settings are write-only; nothing is cached here. After
/// [`begin`](Self::begin) every segment has its clock running, brightness
/// at 15 and blinking off.
///
/// # Example
///
/// ```no_run
/// use alphanumeric_display::{ChainConfig, DisplayController, I2cTransport};
///
/// # fn example<I: embedded_hal::i2c::I2c, D: embedded_hal::delay::DelayNs>(i2c: I, delay: D) {
/// let config = ChainConfig::from_addresses(&[0x70, 0x71]).unwrap();
/// let mut display = DisplayController::with_config(I2cTransport::new(i2c), delay, config);
///
/// if display.begin().unwrap() {
///     display.set_brightness(8).unwrap();
/// }
/// # }
/// ```
pub struct DisplayController<T, D> {
    transport: T,
    delay: D,
    chain: ChainConfig,
}

impl<T, D> DisplayController<T, D>
where
    T: BusTransport,
    D: DelayNs,
{
    /// Create a driver for a single display at the default address.
    pub fn new(transport: T, delay: D) -> Self {
        Self::with_config(transport, delay, ChainConfig::default())
    }

    /// Create a driver for the chain described by `config`.
    ///
    /// No bus traffic is generated.
    pub fn with_config(transport: T, delay: D, config: ChainConfig) -> Self {
        Self {
            transport,
            delay,
            chain: config,
        }
    }

    /// Segment addresses, first character first.
    pub fn addresses(&self) -> &[u8] {
        self.chain.addresses()
    }

    /// Number of chained segments.
    pub fn segment_count(&self) -> usize {
        self.chain.len()
    }

    /// Borrow the transport, e.g. to talk to other devices on the bus.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the driver and return the transport and delay.
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    // -----------------------------------------------------------------------
    // Connection and initialisation
    // -----------------------------------------------------------------------

    /// Check that every segment acknowledges a probe.
    ///
    /// All segments are probed even after one fails.
    pub fn is_connected(&mut self) -> bool {
        let mut connected = true;

        for i in 0..self.chain.len() {
            let address = self.chain.addresses()[i];
            if !self.transport.is_device_connected(address) {
                #[cfg(feature = "defmt")]
                defmt::warn!("Display segment {=u8:#x} not responding", address);
                connected = false;
            }
        }

        connected
    }

    /// Initialise every segment.
    ///
    /// Returns `Ok(false)` without writing anything if a segment is missing.
    /// Otherwise starts the clock, sets full brightness and disables
    /// blinking on each segment, then re-checks the chain.
    ///
    /// # Errors
    /// [`Error::Bus`] if a write fails. Segments before the failing one
    /// keep whatever was already written.
    pub fn begin(&mut self) -> Result<bool, Error<T::Error>> {
        if !self.is_connected() {
            return Ok(false);
        }

        self.enable_system_clock()?;
        self.set_brightness(MAX_BRIGHTNESS as i32)?;
        self.set_blink_rate(BlinkRate::NoBlink)?;

        #[cfg(feature = "defmt")]
        defmt::info!("Initialised {} display segment(s)", self.chain.len());

        Ok(self.is_connected())
    }

    // -----------------------------------------------------------------------
    // System clock
    // -----------------------------------------------------------------------

    /// Start the oscillator on every segment.
    pub fn enable_system_clock(&mut self) -> Result<(), Error<T::Error>> {
        for i in 0..self.chain.len() {
            let address = self.chain.addresses()[i];
            self.enable_single_system_clock(address)?;
        }
        Ok(())
    }

    /// Start the oscillator on one display and wait for it to settle.
    pub fn enable_single_system_clock(&mut self, address: u8) -> Result<(), Error<T::Error>> {
        self.transport.write_command(address, system_clock_on())?;
        self.delay.delay_ms(CLOCK_SETTLE_MS);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Brightness and blink
    // -----------------------------------------------------------------------

    /// Set the PWM duty cycle on every segment.
    ///
    /// `duty` is clamped to 0–15.
    pub fn set_brightness(&mut self, duty: i32) -> Result<(), Error<T::Error>> {
        for i in 0..self.chain.len() {
            let address = self.chain.addresses()[i];
            self.set_single_brightness(address, duty)?;
        }
        Ok(())
    }

    /// Set the PWM duty cycle on one display. `duty` is clamped to 0–15.
    pub fn set_single_brightness(&mut self, address: u8, duty: i32) -> Result<(), Error<T::Error>> {
        let command = dimming(duty);
        #[cfg(feature = "defmt")]
        defmt::debug!("{=u8:#x}: dimming {=u8:#x}", address, command);
        self.transport.write_command(address, command)?;
        Ok(())
    }

    /// Set the blink rate on every segment.
    pub fn set_blink_rate(&mut self, rate: BlinkRate) -> Result<(), Error<T::Error>> {
        for i in 0..self.chain.len() {
            let address = self.chain.addresses()[i];
            self.set_single_blink_rate(address, rate)?;
        }
        Ok(())
    }

    /// Set the blink rate on one display.
    pub fn set_single_blink_rate(
        &mut self,
        address: u8,
        rate: BlinkRate,
    ) -> Result<(), Error<T::Error>> {
        let command = display_setup(rate);
        #[cfg(feature = "defmt")]
        defmt::debug!("{=u8:#x}: blink {}", address, rate);
        self.transport.write_command(address, command)?;
        Ok(())
    }
}
