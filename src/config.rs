//! Segment chain configuration.
//!
//! A chain is an ordered list of display addresses, first character to last
//! (left to right for Latin scripts). Every operation on a
//! [`DisplayController`](crate::DisplayController) is broadcast to each
//! address in this order.

use heapless::Vec;

use crate::error::ConfigError;
use crate::registers::{DEFAULT_ADDRESS, MAX_SEGMENTS};

/// Ordered, non-empty list of segment addresses.
///
/// [`ChainConfig::default()`] is a single display at [`DEFAULT_ADDRESS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    addresses: Vec<u8, MAX_SEGMENTS>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        let mut addresses = Vec::new();
        // Capacity is at least one; this cannot fail.
        let _ = addresses.push(DEFAULT_ADDRESS);
        Self { addresses }
    }
}

impl ChainConfig {
    /// A single display at `address`.
    ///
    /// # Errors
    /// [`ConfigError::InvalidAddress`] if `address` does not fit in 7 bits.
    pub fn single(address: u8) -> Result<Self, ConfigError> {
        Self::from_addresses(&[address])
    }

    /// A chain of displays, first segment first.
    ///
    /// An empty slice yields the default single-display chain.
    ///
    /// # Errors
    /// * [`ConfigError::TooManySegments`] if more than [`MAX_SEGMENTS`]
    ///   addresses are given
    /// * [`ConfigError::InvalidAddress`] if any address exceeds `0x7F`
    pub fn from_addresses(addresses: &[u8]) -> Result<Self, ConfigError> {
        if addresses.is_empty() {
            return Ok(Self::default());
        }
        if addresses.len() > MAX_SEGMENTS {
            return Err(ConfigError::TooManySegments);
        }

        let mut list = Vec::new();
        for &address in addresses {
            if address > 0x7F {
                return Err(ConfigError::InvalidAddress(address));
            }
            list.push(address).map_err(|_| ConfigError::TooManySegments)?;
        }

        Ok(Self { addresses: list })
    }

    /// Segment addresses in chain order.
    pub fn addresses(&self) -> &[u8] {
        &self.addresses
    }

    /// Number of chained segments.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Always `false`; a chain holds at least one segment.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_single_default_address() {
        let config = ChainConfig::default();
        assert_eq!(config.addresses(), &[0x70]);
        assert_eq!(config.len(), 1);
        assert!(!config.is_empty());
    }

    #[test]
    fn empty_slice_falls_back_to_default() {
        let config = ChainConfig::from_addresses(&[]).unwrap();
        assert_eq!(config, ChainConfig::default());
    }

    #[test]
    fn single_address() {
        let config = ChainConfig::single(0x72).unwrap();
        assert_eq!(config.addresses(), &[0x72]);
    }

    #[test]
    fn order_is_preserved() {
        let config = ChainConfig::from_addresses(&[0x73, 0x70, 0x71]).unwrap();
        assert_eq!(config.addresses(), &[0x73, 0x70, 0x71]);
    }

    #[test]
    fn rejects_too_many_segments() {
        let addresses = [0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78];
        assert_eq!(
            ChainConfig::from_addresses(&addresses),
            Err(ConfigError::TooManySegments)
        );
        assert!(ChainConfig::from_addresses(&addresses[..MAX_SEGMENTS]).is_ok());
    }

    #[test]
    fn rejects_eight_bit_address() {
        assert_eq!(
            ChainConfig::from_addresses(&[0x70, 0xE0]),
            Err(ConfigError::InvalidAddress(0xE0))
        );
        assert_eq!(ChainConfig::single(0x80), Err(ConfigError::InvalidAddress(0x80)));
    }
}
