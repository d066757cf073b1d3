//! Chained display demo
//!
//! Initialises two Qwiic Alphanumeric Displays daisy-chained on I2C0 of a
//! Raspberry Pi Pico 2, then cycles brightness and blink rate across the
//! whole chain.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                              |
//! |-----------|------------|------------------------------------|
//! | I2C0 SDA  | GP20       |                                    |
//! | I2C0 SCL  | GP21       |                                    |
//! | Segment 1 | —          | Address 0x70 (no jumpers)          |
//! | Segment 2 | —          | Address 0x71 (A0 jumper closed)    |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use alphanumeric_display::{BlinkRate, ChainConfig, DisplayController, I2cTransport, MAX_BRIGHTNESS};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- I2C bus (GP20 = SDA, GP21 = SCL), blocking mode ---
    let i2c = I2c::new_blocking(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        i2c::Config::default(),
    );

    // --- Two segments, left to right ---
    let config = unwrap!(ChainConfig::from_addresses(&[0x70, 0x71]));
    let mut display = DisplayController::with_config(I2cTransport::new(i2c), Delay, config);

    match display.begin() {
        Ok(true) => info!("{} segment(s) ready", display.segment_count()),
        Ok(false) => {
            error!("Not every display segment answered; check wiring and jumpers");
            return;
        }
        Err(e) => {
            error!("Display init failed: {}", e);
            return;
        }
    }

    let rates = [
        BlinkRate::NoBlink,
        BlinkRate::TwoHz,
        BlinkRate::OneHz,
        BlinkRate::HalfHz,
    ];

    // Main loop: fade down through every duty cycle, then step the blink rate.
    let mut rate_index = 0;
    loop {
        for duty in (0..=MAX_BRIGHTNESS as i32).rev() {
            if let Err(e) = display.set_brightness(duty) {
                error!("Brightness write failed: {}", e);
            }
            Timer::after(Duration::from_millis(100)).await;
        }

        rate_index = (rate_index + 1) % rates.len();
        let rate = rates[rate_index];
        info!("Blink rate: {}", rate);
        if let Err(e) = display.set_blink_rate(rate) {
            error!("Blink write failed: {}", e);
        }
        if let Err(e) = display.set_brightness(MAX_BRIGHTNESS as i32) {
            error!("Brightness write failed: {}", e);
        }
        Timer::after(Duration::from_millis(4000)).await;
    }
}
