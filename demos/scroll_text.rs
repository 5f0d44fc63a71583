#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Delay;
use scroll_matrix::{
    Result,
    font::{CharacterOrientation, FONT_8X8},
    scroll::{ScrollConfig, ScrollDirection, ScrollingText},
};
use {defmt_rtt as _, panic_probe as _};

// News-ticker style: right to left, upright characters.
const CONFIG: ScrollConfig = ScrollConfig::new()
    .with_scroll_direction(ScrollDirection::RightToLeft)
    .with_character_orientation(CharacterOrientation::Top);

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().unwrap_err();
    panic!("{err}");
}

fn inner_main() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // Anodes: a row lights while its line is high.
    let rows = [
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
    ];
    // Cathodes: a column lights while its line is low.
    let columns = [
        Output::new(p.PIN_10, Level::High),
        Output::new(p.PIN_11, Level::High),
        Output::new(p.PIN_12, Level::High),
        Output::new(p.PIN_13, Level::High),
        Output::new(p.PIN_14, Level::High),
        Output::new(p.PIN_15, Level::High),
        Output::new(p.PIN_16, Level::High),
        Output::new(p.PIN_17, Level::High),
    ];

    let mut scrolling_text = ScrollingText::new(rows, columns, Delay, FONT_8X8, CONFIG)?;
    defmt::info!("scroll_text: panel ready");

    let mut speed: u8 = 60;
    loop {
        scrolling_text.display_text("HELLO, PICO! ", speed)?;
        // Each pass gets a little faster, then starts over.
        speed = if speed >= 100 { 60 } else { speed + 10 };
    }
}
