//! Command bytes and address constants for the Qwiic Alphanumeric Display.
//!
//! The HT16K33 controller on the board accepts single-byte commands: the
//! upper nibble selects the command and the lower bits carry its payload.
//!
//! | Command        | Bit pattern                   |
//! |----------------|-------------------------------|
//! | System setup   | `0b0010_0000 \| enable`       |
//! | Display setup  | `0b1000_0000 \| (rate << 1)`  |
//! | Dimming setup  | `0b1110_0000 \| duty`         |

// ---------------------------------------------------------------------------
// Device identification
// ---------------------------------------------------------------------------

/// Human-readable device name.
pub const DEVICE_NAME: &str = "SparkFun Qwiic Alphanumeric Display";

/// Default I2C address of a single display (no address jumpers closed).
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Addresses selectable with the board's jumpers. The first is the default.
pub const AVAILABLE_ADDRESSES: [u8; 4] = [0x70, 0x71, 0x72, 0x73];

/// Maximum number of chained segments (the HT16K33 address range 0x70–0x77).
pub const MAX_SEGMENTS: usize = 8;

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// System setup command. Bit 0 turns the internal oscillator on.
pub const CMD_SYSTEM_SETUP: u8 = 0b0010_0000;

/// Display setup command. Bits 2:1 select the blink rate, bit 0 is left clear.
pub const CMD_DISPLAY_SETUP: u8 = 0b1000_0000;

/// Dimming setup command. Bits 3:0 hold the PWM duty cycle.
pub const CMD_DIMMING_SETUP: u8 = 0b1110_0000;

/// Oscillator enable flag for [`CMD_SYSTEM_SETUP`].
pub const OSCILLATOR_ON: u8 = 0b1;

/// Brightest duty cycle the dimming command accepts.
pub const MAX_BRIGHTNESS: u8 = 15;

// ---------------------------------------------------------------------------
// Protocol timing
// ---------------------------------------------------------------------------

/// Time the oscillator needs after being enabled before it accepts further
/// commands.
pub const CLOCK_SETTLE_MS: u32 = 10;

// ---------------------------------------------------------------------------
// Blink rate
// ---------------------------------------------------------------------------

/// Hardware blink rate, encoded in bits 2:1 of the display setup command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BlinkRate {
    /// Steady display.
    #[default]
    NoBlink = 0b00,
    /// Blink at 2 Hz.
    TwoHz = 0b01,
    /// Blink at 1 Hz.
    OneHz = 0b10,
    /// Blink at 0.5 Hz.
    HalfHz = 0b11,
}

impl BlinkRate {
    /// Raw two-bit field value.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Build a rate from a raw field value.
    ///
    /// Values above `0b11` saturate to [`BlinkRate::HalfHz`] rather than
    /// failing.
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            0b00 => BlinkRate::NoBlink,
            0b01 => BlinkRate::TwoHz,
            0b10 => BlinkRate::OneHz,
            _ => BlinkRate::HalfHz,
        }
    }
}

// ---------------------------------------------------------------------------
// Command encoders
// ---------------------------------------------------------------------------

/// Command byte that starts the internal oscillator.
pub const fn system_clock_on() -> u8 {
    CMD_SYSTEM_SETUP | OSCILLATOR_ON
}

/// Clamp a requested duty cycle into the 0–15 range the controller accepts.
pub fn clamp_duty(duty: i32) -> u8 {
    duty.clamp(0, MAX_BRIGHTNESS as i32) as u8
}

/// Command byte for a brightness level. Out-of-range duty saturates.
pub fn dimming(duty: i32) -> u8 {
    CMD_DIMMING_SETUP | clamp_duty(duty)
}

/// Command byte for a blink rate.
pub const fn display_setup(rate: BlinkRate) -> u8 {
    CMD_DISPLAY_SETUP | (rate.bits() << 1)
}
