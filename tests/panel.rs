#![allow(missing_docs)]
//! Host-level tests for the multiplexed renderer and scroll timing.

mod common;

use common::{FailingPin, mock_hardware, row_only};
use embassy_time::Duration;
use embedded_hal::digital::ErrorKind;
use scroll_matrix::Error;
use scroll_matrix::bitmap::Bitmap;
use scroll_matrix::panel::{DEFAULT_REFRESH_RATE_HZ, FrameTiming, MatrixPanel};
use scroll_matrix::scroll::{MAXIMAL_DURATION_FOR_ONE_CHARACTER, ScrollSpeed};

const TIMING_8X8: FrameTiming = FrameTiming::new(DEFAULT_REFRESH_RATE_HZ, 8);

#[test]
fn frame_timing_targets_the_refresh_rate() {
    assert_eq!(TIMING_8X8.frame_wait(), Duration::from_micros(2_083));
    assert_eq!(TIMING_8X8.minimal_step_duration(), Duration::from_micros(16_664));

    let timing = FrameTiming::new(100, 4);
    assert_eq!(timing.frame_wait(), Duration::from_micros(2_500));
    assert_eq!(timing.minimal_step_duration(), Duration::from_micros(10_000));
}

#[test]
fn frame_timing_never_waits_zero() {
    let timing = FrameTiming::new(2_000_000, 8);
    assert_eq!(timing.frame_wait(), Duration::from_micros(1));
    let timing = FrameTiming::new(0, 8);
    assert_eq!(timing.frame_wait(), Duration::from_micros(125_000));
}

#[test]
fn new_switches_every_led_off() -> scroll_matrix::Result<()> {
    let (rows, columns, delay, lines) = mock_hardware::<4>();
    assert_eq!(lines.borrow().lit(), Bitmap::filled(true));

    let panel = MatrixPanel::new(rows, columns, delay, DEFAULT_REFRESH_RATE_HZ)?;
    assert!(lines.borrow().is_cleared());
    assert_eq!(lines.borrow().writes, 8);

    let (_, _, delay) = panel.release();
    assert!(delay.frames.is_empty());
    Ok(())
}

#[test]
fn one_sweep_lights_each_row_in_turn() -> scroll_matrix::Result<()> {
    let (rows, columns, delay, _lines) = mock_hardware::<8>();
    let mut panel = MatrixPanel::new(rows, columns, delay, DEFAULT_REFRESH_RATE_HZ)?;
    let diagonal = Bitmap::<8>::from_fn(|x, y| x == y);

    panel.render(&diagonal, TIMING_8X8.minimal_step_duration())?;

    let (_, _, delay) = panel.release();
    assert_eq!(delay.frames.len(), 8);
    for (row_index, frame) in delay.frames.iter().enumerate() {
        assert_eq!(*frame, row_only(&diagonal, row_index), "row {row_index}");
        assert_eq!(frame.lit_count(), 1);
    }
    assert_eq!(delay.waited_ns, 8 * 2_083_000);
    Ok(())
}

#[test]
fn render_repeats_whole_sweeps_until_duration_is_reached() -> scroll_matrix::Result<()> {
    let (rows, columns, delay, _lines) = mock_hardware::<8>();
    let mut panel = MatrixPanel::new(rows, columns, delay, DEFAULT_REFRESH_RATE_HZ)?;
    let bitmap = Bitmap::<8>::filled(true);

    // One microsecond past a sweep needs a second full sweep.
    let duration = TIMING_8X8.minimal_step_duration() + Duration::from_micros(1);
    panel.render(&bitmap, duration)?;

    let (_, _, delay) = panel.release();
    assert_eq!(delay.frames.len(), 16);
    for (frame_index, frame) in delay.frames.iter().enumerate() {
        assert_eq!(*frame, row_only(&bitmap, frame_index % 8));
    }
    Ok(())
}

#[test]
fn render_counts_elapsed_time_from_zero() -> scroll_matrix::Result<()> {
    let (rows, columns, delay, _lines) = mock_hardware::<8>();
    let mut panel = MatrixPanel::new(rows, columns, delay, DEFAULT_REFRESH_RATE_HZ)?;

    // 60 sweeps reach 999_840 us, one short of a second, so a 61st follows.
    panel.render(&Bitmap::<8>::filled(true), MAXIMAL_DURATION_FOR_ONE_CHARACTER)?;

    let (_, _, delay) = panel.release();
    assert_eq!(delay.frames.len(), 61 * 8);
    assert_eq!(delay.waited_ns, 61 * 8 * 2_083_000);
    Ok(())
}

#[test]
fn render_of_zero_duration_shows_nothing() -> scroll_matrix::Result<()> {
    let (rows, columns, delay, lines) = mock_hardware::<8>();
    let mut panel = MatrixPanel::new(rows, columns, delay, DEFAULT_REFRESH_RATE_HZ)?;
    let writes_after_new = lines.borrow().writes;

    panel.render(&Bitmap::filled(true), Duration::from_ticks(0))?;

    assert_eq!(lines.borrow().writes, writes_after_new);
    let (_, _, delay) = panel.release();
    assert!(delay.frames.is_empty());
    Ok(())
}

#[test]
fn blank_rows_still_take_a_frame() -> scroll_matrix::Result<()> {
    let (rows, columns, delay, _lines) = mock_hardware::<3>();
    let mut panel = MatrixPanel::new(rows, columns, delay, DEFAULT_REFRESH_RATE_HZ)?;
    let middle_dot = Bitmap::<3>::from_fn(|x, y| (x, y) == (1, 1));

    panel.render(&middle_dot, Duration::from_micros(1))?;

    let (_, _, delay) = panel.release();
    assert_eq!(
        delay.frames,
        [Bitmap::new(), middle_dot, Bitmap::new()],
        "one sweep, only the middle row lit"
    );
    Ok(())
}

#[test]
fn clear_after_render_switches_the_last_row_off() -> scroll_matrix::Result<()> {
    let (rows, columns, delay, lines) = mock_hardware::<4>();
    let mut panel = MatrixPanel::new(rows, columns, delay, DEFAULT_REFRESH_RATE_HZ)?;
    let bottom_row = Bitmap::<4>::from_fn(|_, y| y == 3);

    panel.render(&bottom_row, Duration::from_micros(1))?;
    assert_eq!(lines.borrow().lit(), bottom_row);

    panel.clear()?;
    assert!(lines.borrow().is_cleared());
    Ok(())
}

#[test]
fn pin_errors_are_reported() {
    let (_, _, delay, _lines) = mock_hardware::<2>();
    let result = MatrixPanel::new([FailingPin, FailingPin], [FailingPin, FailingPin], delay, 60);
    assert_eq!(result.err(), Some(Error::Pin(ErrorKind::Other)));
}

#[test]
fn speed_one_is_the_maximal_duration() {
    assert_eq!(
        ScrollSpeed::new(1).step_duration(TIMING_8X8),
        MAXIMAL_DURATION_FOR_ONE_CHARACTER
    );
    assert_eq!(MAXIMAL_DURATION_FOR_ONE_CHARACTER, Duration::from_millis(1_000));
}

#[test]
fn speed_one_hundred_is_the_minimal_duration() {
    assert_eq!(
        ScrollSpeed::new(100).step_duration(TIMING_8X8),
        TIMING_8X8.minimal_step_duration()
    );
}

#[test]
fn intermediate_speeds_interpolate_linearly_and_inversely() {
    assert_eq!(
        ScrollSpeed::new(50).step_duration(TIMING_8X8),
        Duration::from_micros(513_299)
    );
    assert_eq!(
        ScrollSpeed::DEFAULT.step_duration(TIMING_8X8),
        Duration::from_micros(115_991)
    );

    let durations: Vec<Duration> = (1..=100)
        .map(|speed| ScrollSpeed::new(speed).step_duration(TIMING_8X8))
        .collect();
    assert!(durations.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn speed_is_clamped_into_range() {
    assert_eq!(ScrollSpeed::new(0), ScrollSpeed::MIN);
    assert_eq!(ScrollSpeed::new(101), ScrollSpeed::MAX);
    assert_eq!(ScrollSpeed::from(255).get(), 100);
    assert_eq!(ScrollSpeed::default(), ScrollSpeed::new(90));
}

#[test]
fn slow_refresh_caps_the_minimal_duration_at_the_maximum() {
    // 1 Hz over 8 rows needs 1 s per sweep, more than the slowest step.
    let timing = FrameTiming::new(1, 8);
    assert_eq!(
        ScrollSpeed::MAX.step_duration(timing),
        MAXIMAL_DURATION_FOR_ONE_CHARACTER
    );
}
