//! A device abstraction for row/column multiplexed LED dot-matrix panels.
//!
//! See [`MatrixPanel`] for the wiring convention and [`FrameTiming`] for how the
//! refresh rate turns into per-row delays.

use embassy_time::Duration;
use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{Error, Result, bitmap::Bitmap};

/// Default full-panel refresh rate, fast enough that the eye sees no flicker.
pub const DEFAULT_REFRESH_RATE_HZ: u32 = 60;

/// Per-row timing derived once from the refresh rate and the panel size.
///
/// One frame lights a single row, so refreshing all `N` rows `refresh_rate_hz`
/// times a second needs a frame every `1 s / (refresh_rate_hz × N)`.
///
/// ```rust
/// use embassy_time::Duration;
/// use scroll_matrix::panel::FrameTiming;
///
/// let timing = FrameTiming::new(60, 8);
/// assert_eq!(timing.frame_wait(), Duration::from_micros(2_083));
/// assert_eq!(timing.minimal_step_duration(), Duration::from_micros(16_664));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameTiming {
    frame_wait: Duration,
    minimal_step_duration: Duration,
}

impl FrameTiming {
    /// Derive timing for a panel with `row_count` rows refreshed at `refresh_rate_hz`.
    ///
    /// A zero refresh rate is treated as 1 Hz and the frame wait never drops below
    /// one microsecond.
    #[must_use]
    pub const fn new(refresh_rate_hz: u32, row_count: usize) -> Self {
        let refresh_rate_hz = if refresh_rate_hz == 0 { 1 } else { refresh_rate_hz };
        let row_count = if row_count == 0 { 1 } else { row_count as u64 };
        let frames_per_second = refresh_rate_hz as u64 * row_count;
        let mut frame_wait_us = 1_000_000 / frames_per_second;
        if frame_wait_us == 0 {
            frame_wait_us = 1;
        }
        Self {
            frame_wait: Duration::from_micros(frame_wait_us),
            minimal_step_duration: Duration::from_micros(frame_wait_us * row_count),
        }
    }

    /// How long each row stays lit.
    #[must_use]
    pub const fn frame_wait(&self) -> Duration {
        self.frame_wait
    }

    /// Time for one sweep over every row; the shortest useful display duration.
    #[must_use]
    pub const fn minimal_step_duration(&self) -> Duration {
        self.minimal_step_duration
    }
}

/// A square LED matrix whose rows and columns are wired straight to GPIO lines.
///
/// The panel is lit one row at a time. An LED is on only while its row line is
/// **high** and its column line is **low**; [`clear`](Self::clear) drives every
/// row low and every column high. Cycling the rows quickly enough makes the whole
/// bitmap appear steady.
///
/// Rows and columns are given as arrays of exactly `N` pins, so mismatched pin
/// counts do not compile. Timing comes from an injected blocking
/// [`DelayNs`]; on the Pico use `embassy_time::Delay`.
///
/// # Example
///
/// ```rust,ignore
/// # #![no_std]
/// # #![no_main]
/// # use panic_probe as _;
/// use embassy_rp::gpio::{Level, Output};
/// use embassy_time::{Delay, Duration};
/// use scroll_matrix::{Result, bitmap::Bitmap, panel::MatrixPanel};
///
/// fn example(p: embassy_rp::Peripherals) -> Result<()> {
///     let rows = [
///         Output::new(p.PIN_2, Level::Low),
///         Output::new(p.PIN_3, Level::Low),
///         Output::new(p.PIN_4, Level::Low),
///         Output::new(p.PIN_5, Level::Low),
///         Output::new(p.PIN_6, Level::Low),
///         Output::new(p.PIN_7, Level::Low),
///         Output::new(p.PIN_8, Level::Low),
///         Output::new(p.PIN_9, Level::Low),
///     ];
///     let columns = [
///         Output::new(p.PIN_10, Level::High),
///         Output::new(p.PIN_11, Level::High),
///         Output::new(p.PIN_12, Level::High),
///         Output::new(p.PIN_13, Level::High),
///         Output::new(p.PIN_14, Level::High),
///         Output::new(p.PIN_15, Level::High),
///         Output::new(p.PIN_16, Level::High),
///         Output::new(p.PIN_17, Level::High),
///     ];
///     let mut panel = MatrixPanel::new(rows, columns, Delay, 60)?;
///
///     // Show a diagonal for half a second.
///     let diagonal = Bitmap::<8>::from_fn(|x, y| x == y);
///     panel.render(&diagonal, Duration::from_millis(500))?;
///     panel.clear()
/// }
/// ```
pub struct MatrixPanel<R, C, D, const N: usize> {
    rows: [R; N],
    columns: [C; N],
    delay: D,
    timing: FrameTiming,
}

impl<R, C, D, const N: usize> MatrixPanel<R, C, D, N>
where
    R: OutputPin,
    C: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the row and column lines and switch every LED off.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`] if a line cannot be driven.
    pub fn new(rows: [R; N], columns: [C; N], delay: D, refresh_rate_hz: u32) -> Result<Self> {
        let timing = FrameTiming::new(refresh_rate_hz, N);
        #[cfg(feature = "defmt")]
        defmt::info!(
            "MatrixPanel::new: {}x{} panel, frame wait {} us",
            N,
            N,
            timing.frame_wait().as_micros()
        );
        let mut panel = Self {
            rows,
            columns,
            delay,
            timing,
        };
        panel.clear()?;
        Ok(panel)
    }

    /// Timing this panel was built with.
    #[must_use]
    pub const fn timing(&self) -> FrameTiming {
        self.timing
    }

    /// Switch every LED off: all rows low, all columns high.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`] if a line cannot be driven.
    pub fn clear(&mut self) -> Result<()> {
        for row in &mut self.rows {
            row.set_low().map_err(Error::from_pin)?;
        }
        for column in &mut self.columns {
            column.set_high().map_err(Error::from_pin)?;
        }
        Ok(())
    }

    /// Show `bitmap` for at least `duration` by sweeping its rows.
    ///
    /// Each frame clears the panel, lights one row, then waits one
    /// [`frame_wait`](FrameTiming::frame_wait). Whole sweeps are repeated until the
    /// accumulated frame time reaches `duration`, so the bitmap is always shown for
    /// a whole number of sweeps. A zero `duration` shows nothing. The last row is
    /// left lit; call [`clear`](Self::clear) when done.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`] if a line cannot be driven.
    pub fn render(&mut self, bitmap: &Bitmap<N>, duration: Duration) -> Result<()> {
        let frame_wait = self.timing.frame_wait;
        let frame_wait_us = u32::try_from(frame_wait.as_micros()).unwrap_or(u32::MAX);
        let mut elapsed = Duration::MIN;
        while elapsed < duration {
            for (row_index, row) in bitmap.iter().enumerate() {
                self.show_row(row_index, row)?;
                self.delay.delay_us(frame_wait_us);
                elapsed += frame_wait;
            }
        }
        Ok(())
    }

    fn show_row(&mut self, row_index: usize, row: &[bool; N]) -> Result<()> {
        self.clear()?;
        if !row.contains(&true) {
            return Ok(());
        }
        if let Some(row_line) = self.rows.get_mut(row_index) {
            row_line.set_high().map_err(Error::from_pin)?;
        }
        for (column_line, _) in self.columns.iter_mut().zip(row).filter(|(_, lit)| **lit) {
            column_line.set_low().map_err(Error::from_pin)?;
        }
        Ok(())
    }

    /// Give back the row lines, column lines and delay.
    #[must_use]
    pub fn release(self) -> ([R; N], [C; N], D) {
        (self.rows, self.columns, self.delay)
    }
}
