#![cfg(feature = "host")]
//! PNG and APNG previews of panel bitmaps, for documentation and visual checks.

use crate::bitmap::Bitmap;
use png::{BitDepth, ColorType, Encoder};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Color of a lit LED (a red matrix).
pub const LIT_LED_COLOR: [u8; 3] = [255, 40, 24];
/// Color of an unlit LED, faint so the grid stays visible.
pub const UNLIT_LED_COLOR: [u8; 3] = [48, 12, 8];

/// Render a `Bitmap` into a PNG file sized to the requested maximum dimension.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoded.
pub fn write_bitmap_png<const N: usize>(
    bitmap: &Bitmap<N>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> Result<(), Box<dyn Error>> {
    let output_path = output_path.as_ref();
    let cell_size = select_cell_size(u32::try_from(N)?, target_max_dimension);
    let (side, pixels) = panel_pixels(bitmap, cell_size)?;
    create_parent_dir(output_path)?;

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), side, side);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    println!("wrote PNG to {}", output_path.display());
    Ok(())
}

/// Render a sequence of bitmaps into a looping APNG file, one frame per bitmap.
///
/// # Errors
///
/// Returns an error if `bitmaps` is empty, if `frame_delay_ms` does not fit the
/// APNG delay field, or if the file cannot be created or encoded.
pub fn write_bitmaps_apng<const N: usize>(
    bitmaps: &[Bitmap<N>],
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
    frame_delay_ms: u32,
) -> Result<(), Box<dyn Error>> {
    if bitmaps.is_empty() {
        return Err("bitmaps must not be empty".into());
    }
    let output_path = output_path.as_ref();
    let cell_size = select_cell_size(u32::try_from(N)?, target_max_dimension);
    let frame_count = u32::try_from(bitmaps.len())?;
    let delay_num = u16::try_from(frame_delay_ms)?;
    let delay_den = 1000u16;

    let mut side = 0;
    let mut frames = Vec::with_capacity(bitmaps.len());
    for bitmap in bitmaps {
        let (frame_side, frame_pixels) = panel_pixels(bitmap, cell_size)?;
        side = frame_side;
        frames.push(frame_pixels);
    }
    create_parent_dir(output_path)?;

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), side, side);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_animated(frame_count, 0)?;
    let mut writer = encoder.write_header()?;
    for frame_pixels in frames {
        writer.set_frame_delay(delay_num, delay_den)?;
        writer.write_image_data(&frame_pixels)?;
    }
    writer.finish()?;
    println!("wrote APNG to {}", output_path.display());
    Ok(())
}

/// Largest cell size whose output still fits in `target_max_dimension`, at least 4.
fn select_cell_size(panel_side: u32, target_max_dimension: u32) -> u32 {
    let mut cell_size = target_max_dimension.max(4);
    while cell_size > 4 && panel_side * cell_size + cell_size / 2 * 2 > target_max_dimension {
        cell_size -= 1;
    }
    cell_size
}

fn create_parent_dir(output_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Draw each pixel as a round LED on a black background with a half-cell border.
fn panel_pixels<const N: usize>(
    bitmap: &Bitmap<N>,
    cell_size: u32,
) -> Result<(u32, Vec<u8>), Box<dyn Error>> {
    let border = cell_size / 2;
    let side = u32::try_from(N)? * cell_size + border * 2;
    let led_radius = i64::from(cell_size / 2 - (cell_size / 8).max(1));
    let radius_sq = led_radius * led_radius;
    let center = i64::from(cell_size - 1) / 2;
    let row_stride = usize::try_from(side)? * 3;
    let mut bytes = vec![0u8; row_stride * usize::try_from(side)?];

    for (y_index, row) in bitmap.iter().enumerate() {
        for (x_index, &lit) in row.iter().enumerate() {
            let color = if lit { LIT_LED_COLOR } else { UNLIT_LED_COLOR };
            let cell_x = border + u32::try_from(x_index)? * cell_size;
            let cell_y = border + u32::try_from(y_index)? * cell_size;
            for local_y in 0..cell_size {
                let delta_y = i64::from(local_y) - center;
                for local_x in 0..cell_size {
                    let delta_x = i64::from(local_x) - center;
                    if delta_x * delta_x + delta_y * delta_y > radius_sq {
                        continue;
                    }
                    let x = usize::try_from(cell_x + local_x)?;
                    let y = usize::try_from(cell_y + local_y)?;
                    let start = y * row_stride + x * 3;
                    if let Some(pixel) = bytes.get_mut(start..start + 3) {
                        pixel.copy_from_slice(&color);
                    }
                }
            }
        }
    }

    Ok((side, bytes))
}
