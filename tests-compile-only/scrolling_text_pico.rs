//! Compile-only verification that RP2040 GPIO outputs and the embassy delay satisfy
//! the panel bounds, for both the default 8×8 size and a smaller custom panel.
//!
//! Run via: `cargo build --bin scrolling_text_pico --target thumbv6m-none-eabi`

#![cfg(not(feature = "host"))]
#![no_std]
#![no_main]
#![allow(dead_code, reason = "Compile-time verification only")]

use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Delay, Duration};
use panic_probe as _;
use scroll_matrix::{
    Result,
    bitmap::Bitmap,
    font::{CharacterOrientation, FONT_8X8, Font},
    panel::{DEFAULT_REFRESH_RATE_HZ, MatrixPanel},
    scroll::{ScrollConfig, ScrollingText},
};

/// A 4×4 font with just a hollow square, used for every character.
const SQUARE_GLYPHS: [[u8; 4]; 1] = [[0b1111, 0b1001, 0b1001, 0b1111]];
const SQUARE_FONT: Font<4> = Font::new(&SQUARE_GLYPHS, 0);

/// Default 8×8 display on RP2040 outputs.
type Display8x8 = ScrollingText<Output<'static>, Output<'static>, Delay>;

fn default_size(rows: [Output<'static>; 8], columns: [Output<'static>; 8]) -> Result<Display8x8> {
    ScrollingText::new(rows, columns, Delay, FONT_8X8, ScrollConfig::new())
}

fn custom_size(rows: [Output<'static>; 4], columns: [Output<'static>; 4]) -> Result<()> {
    let config = ScrollConfig::new().with_character_orientation(CharacterOrientation::Right);
    let mut scrolling_text = ScrollingText::new(rows, columns, Delay, SQUARE_FONT, config)?;
    scrolling_text.display_char('#', Duration::from_millis(50))?;
    let (rows, columns, delay) = scrolling_text.release();

    let mut panel = MatrixPanel::new(rows, columns, delay, DEFAULT_REFRESH_RATE_HZ)?;
    panel.render(&Bitmap::filled(true), Duration::from_millis(10))?;
    panel.clear()
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());
    let rows = [
        Output::new(p.PIN_0, Level::Low),
        Output::new(p.PIN_1, Level::Low),
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
    ];
    let columns = [
        Output::new(p.PIN_4, Level::High),
        Output::new(p.PIN_5, Level::High),
        Output::new(p.PIN_6, Level::High),
        Output::new(p.PIN_7, Level::High),
    ];
    if let Err(err) = custom_size(rows, columns) {
        defmt::error!("custom_size: {}", err);
    }
    loop {
        cortex_m::asm::wfi();
    }
}
