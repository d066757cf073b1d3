//! Bus transport capability and its `embedded-hal` I2C implementation.
//!
//! [`DisplayController`](crate::DisplayController) talks to the hardware
//! only through [`BusTransport`], so any register-addressed bus (or a test
//! fake) can stand in for a real I2C peripheral.

use embedded_hal::i2c::I2c;

/// Register-level bus operations keyed by device address.
///
/// Implementations perform one blocking transaction per call and report
/// bus failures through [`BusTransport::Error`].
pub trait BusTransport {
    /// Bus-level error type.
    type Error;

    /// Write a single command byte with no register prefix.
    fn write_command(&mut self, address: u8, command: u8) -> Result<(), Self::Error>;

    /// Write one byte to `register`.
    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Write a 16-bit word to `register`, low byte first.
    fn write_word(&mut self, address: u8, register: u8, value: u16) -> Result<(), Self::Error>;

    /// Read one byte from `register`.
    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error>;

    /// Read a 16-bit word from `register`, low byte first.
    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error>;

    /// Probe `address`; `true` if the device acknowledges.
    fn is_device_connected(&mut self, address: u8) -> bool;
}

/// [`BusTransport`] over a blocking `embedded-hal` I2C peripheral.
///
/// Word transfers use SMBus byte order (little-endian).
pub struct I2cTransport<I2C> {
    i2c: I2C,
}

impl<I2C> I2cTransport<I2C>
where
    I2C: I2c,
{
    /// Wrap an I2C peripheral.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral, or a shared-bus device handle
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give the I2C peripheral back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Borrow the I2C peripheral.
    pub fn i2c(&mut self) -> &mut I2C {
        &mut self.i2c
    }
}

impl<I2C> BusTransport for I2cTransport<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_command(&mut self, address: u8, command: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[command])
    }

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[register, value])
    }

    fn write_word(&mut self, address: u8, register: u8, value: u16) -> Result<(), Self::Error> {
        let [lo, hi] = value.to_le_bytes();
        self.i2c.write(address, &[register, lo, hi])
    }

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(address, &[register], &mut buf)?;
        Ok(buf[0])
    }

    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(address, &[register], &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    fn is_device_connected(&mut self, address: u8) -> bool {
        // Empty write: only the address byte goes out, so ACK/NACK is the answer.
        match self.i2c.write(address, &[]) {
            Ok(()) => true,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("No ACK from {=u8:#x}", address);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn write_command_sends_bare_byte() {
        let expectations = [I2cTransaction::write(0x70, std::vec![0x21])];
        let mut transport = I2cTransport::new(I2cMock::new(&expectations));

        transport.write_command(0x70, 0x21).unwrap();

        transport.release().done();
    }

    #[test]
    fn write_byte_prefixes_register() {
        let expectations = [I2cTransaction::write(0x71, std::vec![0x04, 0xAB])];
        let mut transport = I2cTransport::new(I2cMock::new(&expectations));

        transport.write_byte(0x71, 0x04, 0xAB).unwrap();

        transport.release().done();
    }

    #[test]
    fn words_are_little_endian() {
        let expectations = [
            I2cTransaction::write(0x70, std::vec![0x10, 0x34, 0x12]),
            I2cTransaction::write_read(0x70, std::vec![0x10], std::vec![0xCD, 0xAB]),
        ];
        let mut transport = I2cTransport::new(I2cMock::new(&expectations));

        transport.write_word(0x70, 0x10, 0x1234).unwrap();
        assert_eq!(transport.read_word(0x70, 0x10).unwrap(), 0xABCD);

        transport.release().done();
    }

    #[test]
    fn read_byte_uses_write_read() {
        let expectations = [I2cTransaction::write_read(0x72, std::vec![0x00], std::vec![0x5A])];
        let mut transport = I2cTransport::new(I2cMock::new(&expectations));

        assert_eq!(transport.read_byte(0x72, 0x00).unwrap(), 0x5A);

        transport.release().done();
    }

    #[test]
    fn probe_maps_nack_to_false() {
        let expectations = [
            I2cTransaction::write(0x70, std::vec![]),
            I2cTransaction::write(0x71, std::vec![])
                .with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
        ];
        let mut transport = I2cTransport::new(I2cMock::new(&expectations));

        assert!(transport.is_device_connected(0x70));
        assert!(!transport.is_device_connected(0x71));

        transport.release().done();
    }

    #[test]
    fn bus_errors_are_returned_unchanged() {
        let expectations = [I2cTransaction::write(0x70, std::vec![0xEF])
            .with_error(ErrorKind::ArbitrationLoss)];
        let mut transport = I2cTransport::new(I2cMock::new(&expectations));

        assert_eq!(
            transport.write_command(0x70, 0xEF),
            Err(ErrorKind::ArbitrationLoss)
        );

        transport.release().done();
    }
}
