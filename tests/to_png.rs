#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for PNG and APNG previews.

use scroll_matrix::bitmap::Bitmap;
use scroll_matrix::font::FONT_8X8;
use scroll_matrix::scroll::{ScrollConfig, Scroller};
use scroll_matrix::to_png::{LIT_LED_COLOR, UNLIT_LED_COLOR, write_bitmap_png, write_bitmaps_apng};
use std::error::Error;
use std::fs::File;
use std::path::Path;

fn decode_first_frame(path: &Path) -> Result<(png::OutputInfo, Vec<u8>), Box<dyn Error>> {
    let decoder = png::Decoder::new(File::open(path)?);
    let mut reader = decoder.read_info()?;
    let mut buffer = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buffer)?;
    buffer.truncate(info.buffer_size());
    Ok((info, buffer))
}

fn rgb_at(pixels: &[u8], width: u32, x: u32, y: u32) -> [u8; 3] {
    let start = ((y * width + x) * 3) as usize;
    [pixels[start], pixels[start + 1], pixels[start + 2]]
}

#[test]
fn bitmap_png_draws_lit_and_unlit_leds() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let output_path = temp_dir.path().join("corner.png");
    let corner = Bitmap::<8>::from_fn(|x, y| (x, y) == (0, 0));

    write_bitmap_png(&corner, &output_path, 200)?;

    let (info, pixels) = decode_first_frame(&output_path)?;
    // 22-pixel cells plus an 11-pixel border on each side.
    assert_eq!((info.width, info.height), (198, 198));
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(rgb_at(&pixels, info.width, 21, 21), LIT_LED_COLOR);
    assert_eq!(rgb_at(&pixels, info.width, 43, 21), UNLIT_LED_COLOR);
    assert_eq!(rgb_at(&pixels, info.width, 0, 0), [0, 0, 0]);
    Ok(())
}

#[test]
fn bitmap_png_creates_missing_parent_directories() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let output_path = temp_dir.path().join("nested").join("deeper").join("blank.png");

    write_bitmap_png(&Bitmap::<8>::new(), &output_path, 64)?;

    assert!(output_path.exists());
    Ok(())
}

#[test]
fn scrolled_text_becomes_a_looping_apng() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let output_path = temp_dir.path().join("hi.png");
    let frames: Vec<Bitmap<8>> = Scroller::new(FONT_8X8, ScrollConfig::new())
        .text_frames("HI")
        .collect();

    write_bitmaps_apng(&frames, &output_path, 120, 100)?;

    let decoder = png::Decoder::new(File::open(&output_path)?);
    let reader = decoder.read_info()?;
    let animation = reader
        .info()
        .animation_control
        .expect("APNG must carry an animation control chunk");
    assert_eq!(animation.num_frames, 16);
    assert_eq!(animation.num_plays, 0);
    Ok(())
}

#[test]
fn apng_of_no_frames_is_rejected() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let output_path = temp_dir.path().join("empty.png");

    let result = write_bitmaps_apng::<8>(&[], &output_path, 120, 100);

    assert!(result.is_err());
    assert!(!output_path.exists());
    Ok(())
}
