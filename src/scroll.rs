//! Scrolling text across a multiplexed LED matrix.
//!
//! [`ScrollingText`] is the device: it owns a [`MatrixPanel`] and a [`Scroller`]
//! and shows text one column step at a time. [`Scroller`] is the hardware-free
//! state machine behind it and can be driven on its own to inspect or preview
//! the frames that would be shown.

use core::str::Chars;

use embassy_time::Duration;
use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    Result,
    bitmap::{Bitmap, Rotation},
    font::{CharacterOrientation, Font},
    panel::{DEFAULT_REFRESH_RATE_HZ, FrameTiming, MatrixPanel},
    scroll_buffer::ScrollBuffer,
};

/// Side length of the reference panel.
pub const DISPLAY_SIZE: usize = 8;

/// Step duration at the slowest speed ([`ScrollSpeed::MIN`]).
pub const MAXIMAL_DURATION_FOR_ONE_CHARACTER: Duration = Duration::from_millis(1000);

/// Which way text travels across the panel.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    /// Text enters at the top and leaves at the bottom.
    TopToBottom,
    /// Text enters at the right and leaves at the left, like a news ticker.
    #[default]
    RightToLeft,
    /// Text enters at the bottom and leaves at the top.
    BottomToTop,
    /// Text enters at the left and leaves at the right.
    LeftToRight,
}

impl ScrollDirection {
    /// Rotation applied to each window cut from the scroll buffer.
    ///
    /// The buffer always scrolls right to left; the other directions are that
    /// motion turned by whole quarter turns.
    #[must_use]
    pub const fn rotation(self) -> Rotation {
        match self {
            Self::TopToBottom => Rotation::Ccw,
            Self::RightToLeft => Rotation::None,
            Self::BottomToTop => Rotation::Cw,
            Self::LeftToRight => Rotation::Half,
        }
    }
}

/// User-facing scroll speed, from 1 (slowest) to 100 (fastest).
///
/// Values outside the range are clamped rather than rejected.
///
/// ```rust
/// use scroll_matrix::scroll::ScrollSpeed;
///
/// assert_eq!(ScrollSpeed::new(0), ScrollSpeed::MIN);
/// assert_eq!(ScrollSpeed::new(250), ScrollSpeed::MAX);
/// assert_eq!(ScrollSpeed::default().get(), 90);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollSpeed(u8);

impl ScrollSpeed {
    /// Slowest speed; each step lasts [`MAXIMAL_DURATION_FOR_ONE_CHARACTER`].
    pub const MIN: Self = Self(1);
    /// Fastest speed; each step lasts one full panel sweep.
    pub const MAX: Self = Self(100);
    /// Speed used when none is given.
    pub const DEFAULT: Self = Self(90);

    /// Create a speed, clamping `speed` into `1..=100`.
    #[must_use]
    pub const fn new(speed: u8) -> Self {
        if speed < Self::MIN.0 {
            Self::MIN
        } else if speed > Self::MAX.0 {
            Self::MAX
        } else {
            Self(speed)
        }
    }

    /// The speed as a number in `1..=100`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// How long each one-column step is shown at this speed.
    ///
    /// Maps the speed linearly and inversely onto the range from
    /// [`MAXIMAL_DURATION_FOR_ONE_CHARACTER`] (speed 1) down to
    /// [`FrameTiming::minimal_step_duration`] (speed 100).
    ///
    /// ```rust
    /// use scroll_matrix::panel::FrameTiming;
    /// use scroll_matrix::scroll::{MAXIMAL_DURATION_FOR_ONE_CHARACTER, ScrollSpeed};
    ///
    /// let timing = FrameTiming::new(60, 8);
    /// assert_eq!(
    ///     ScrollSpeed::MIN.step_duration(timing),
    ///     MAXIMAL_DURATION_FOR_ONE_CHARACTER
    /// );
    /// assert_eq!(
    ///     ScrollSpeed::MAX.step_duration(timing),
    ///     timing.minimal_step_duration()
    /// );
    /// ```
    #[must_use]
    pub const fn step_duration(self, timing: FrameTiming) -> Duration {
        let maximal_us = MAXIMAL_DURATION_FOR_ONE_CHARACTER.as_micros();
        let mut minimal_us = timing.minimal_step_duration().as_micros();
        if minimal_us > maximal_us {
            minimal_us = maximal_us;
        }
        let speed_steps = (self.0 - Self::MIN.0) as u64;
        let speed_span = (Self::MAX.0 - Self::MIN.0) as u64;
        Duration::from_micros(maximal_us - speed_steps * (maximal_us - minimal_us) / speed_span)
    }
}

impl Default for ScrollSpeed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for ScrollSpeed {
    fn from(speed: u8) -> Self {
        Self::new(speed)
    }
}

/// Settings fixed when a [`ScrollingText`] or [`Scroller`] is created.
///
/// ```rust
/// use scroll_matrix::font::CharacterOrientation;
/// use scroll_matrix::scroll::{ScrollConfig, ScrollDirection};
///
/// const CONFIG: ScrollConfig = ScrollConfig::new()
///     .with_scroll_direction(ScrollDirection::BottomToTop)
///     .with_character_orientation(CharacterOrientation::Left);
/// assert_eq!(CONFIG.refresh_rate_hz, 60);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollConfig {
    /// Which way text travels.
    pub scroll_direction: ScrollDirection,
    /// How each character is turned on the panel.
    pub character_orientation: CharacterOrientation,
    /// Full-panel refreshes per second.
    pub refresh_rate_hz: u32,
}

impl ScrollConfig {
    /// Right-to-left, upright characters, refreshed at [`DEFAULT_REFRESH_RATE_HZ`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scroll_direction: ScrollDirection::RightToLeft,
            character_orientation: CharacterOrientation::Top,
            refresh_rate_hz: DEFAULT_REFRESH_RATE_HZ,
        }
    }

    /// Set which way text travels.
    #[must_use]
    pub const fn with_scroll_direction(mut self, scroll_direction: ScrollDirection) -> Self {
        self.scroll_direction = scroll_direction;
        self
    }

    /// Set how characters are turned.
    #[must_use]
    pub const fn with_character_orientation(
        mut self,
        character_orientation: CharacterOrientation,
    ) -> Self {
        self.character_orientation = character_orientation;
        self
    }

    /// Set the full-panel refresh rate.
    #[must_use]
    pub const fn with_refresh_rate_hz(mut self, refresh_rate_hz: u32) -> Self {
        self.refresh_rate_hz = refresh_rate_hz;
        self
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Scroller
// ============================================================================

/// The scroll state machine without any hardware attached.
///
/// Holds the [`ScrollBuffer`] and the read cursor. For every character it
/// rasterizes the glyph, writes it into the free buffer slot, then yields `N`
/// windows: each cut at the cursor, turned for the scroll direction, after which
/// the cursor moves one column (wrapping at `2N`).
///
/// ```rust
/// use scroll_matrix::font::FONT_8X8;
/// use scroll_matrix::scroll::{ScrollConfig, Scroller};
///
/// let mut scroller = Scroller::new(FONT_8X8, ScrollConfig::new());
/// let frames: Vec<_> = scroller.text_frames("HI").collect();
/// assert_eq!(frames.len(), 16);
/// // Sixteen steps bring the cursor all the way around the buffer.
/// assert_eq!(scroller.cursor(), 0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Scroller<const N: usize> {
    font: Font<N>,
    config: ScrollConfig,
    buffer: ScrollBuffer<N>,
    cursor: usize,
}

impl<const N: usize> Scroller<N> {
    /// Create a scroller with a blank buffer and the cursor at column 0.
    #[must_use]
    pub const fn new(font: Font<N>, config: ScrollConfig) -> Self {
        Self {
            font,
            config,
            buffer: ScrollBuffer::new(),
            cursor: 0,
        }
    }

    /// Settings this scroller was created with.
    #[must_use]
    pub const fn config(&self) -> ScrollConfig {
        self.config
    }

    /// Font glyphs are rasterized from.
    #[must_use]
    pub const fn font(&self) -> &Font<N> {
        &self.font
    }

    /// Current read offset into the scroll buffer, always in `0..2N`.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The two-glyph buffer windows are cut from.
    #[must_use]
    pub const fn scroll_buffer(&self) -> &ScrollBuffer<N> {
        &self.buffer
    }

    /// Rasterize `character` and write it into the slot not under the cursor.
    pub fn load_char(&mut self, character: char) {
        let code = u32::from(character);
        #[cfg(feature = "defmt")]
        defmt::trace!("Scroller::load_char: code {} at cursor {}", code, self.cursor);
        #[cfg(feature = "defmt")]
        if !self.font.contains(code) {
            defmt::debug!("Scroller::load_char: code {} not in font, using fallback", code);
        }
        let glyph = self
            .font
            .rasterize(code, self.config.character_orientation);
        self.buffer.insert(glyph, self.cursor);
    }

    /// Window at the cursor, turned for the configured scroll direction.
    #[must_use]
    pub fn current_window(&self) -> Bitmap<N> {
        self.buffer
            .window(self.cursor)
            .rotated(self.config.scroll_direction.rotation())
    }

    /// Move the cursor one column, wrapping at `2N`.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % ScrollBuffer::<N>::WIDTH;
    }

    /// Load `character` and return an iterator over its `N` scroll steps.
    ///
    /// The cursor advances as the iterator is consumed; dropping it early leaves
    /// the cursor where it stopped.
    pub fn char_frames(&mut self, character: char) -> CharFrames<'_, N> {
        self.load_char(character);
        CharFrames {
            scroller: self,
            remaining: N,
        }
    }

    /// Iterator over every scroll step of `text`, `N` per character.
    ///
    /// An empty `text` yields nothing and leaves the scroller untouched.
    pub fn text_frames<'a>(&'a mut self, text: &'a str) -> TextFrames<'a, N> {
        TextFrames {
            scroller: self,
            characters: text.chars(),
            remaining: 0,
        }
    }

    fn next_frame(&mut self) -> Bitmap<N> {
        let frame = self.current_window();
        self.advance();
        frame
    }
}

/// Scroll steps of one character; see [`Scroller::char_frames`].
#[derive(Debug)]
pub struct CharFrames<'a, const N: usize> {
    scroller: &'a mut Scroller<N>,
    remaining: usize,
}

impl<const N: usize> Iterator for CharFrames<'_, N> {
    type Item = Bitmap<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.scroller.next_frame())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize> ExactSizeIterator for CharFrames<'_, N> {}

/// Scroll steps of a whole string; see [`Scroller::text_frames`].
#[derive(Debug)]
pub struct TextFrames<'a, const N: usize> {
    scroller: &'a mut Scroller<N>,
    characters: Chars<'a>,
    remaining: usize,
}

impl<const N: usize> Iterator for TextFrames<'_, N> {
    type Item = Bitmap<N>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining == 0 {
            let character = self.characters.next()?;
            self.scroller.load_char(character);
            self.remaining = N;
        }
        self.remaining -= 1;
        Some(self.scroller.next_frame())
    }
}

// ============================================================================
// ScrollingText
// ============================================================================

/// Scrolls text across an `N`×`N` LED matrix wired row/column to GPIO lines.
///
/// Wiring and timing follow [`MatrixPanel`]: an LED is lit while its row line is
/// high and its column line is low. Every call blocks until the text has
/// scrolled through; there is no way to stop it part way.
///
/// # Example
///
/// ```rust,ignore
/// # #![no_std]
/// # #![no_main]
/// # use panic_probe as _;
/// use embassy_rp::gpio::{Level, Output};
/// use embassy_time::Delay;
/// use scroll_matrix::{
///     Result,
///     font::FONT_8X8,
///     scroll::{ScrollConfig, ScrollDirection, ScrollSpeed, ScrollingText},
/// };
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
///     let config = ScrollConfig::new().with_scroll_direction(ScrollDirection::BottomToTop);
///     let mut scrolling_text = ScrollingText::new(rows, columns, Delay, FONT_8X8, config)?;
///
///     scrolling_text.display_text("HELLO RUST", ScrollSpeed::DEFAULT)?;
///     Ok(())
/// }
/// ```
pub struct ScrollingText<R, C, D, const N: usize = DISPLAY_SIZE> {
    panel: MatrixPanel<R, C, D, N>,
    scroller: Scroller<N>,
}

impl<R, C, D, const N: usize> ScrollingText<R, C, D, N>
where
    R: OutputPin,
    C: OutputPin,
    D: DelayNs,
{
    /// Take the row and column lines, switch every LED off and get ready to scroll.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`](crate::Error::Pin) if a line cannot be driven.
    pub fn new(
        rows: [R; N],
        columns: [C; N],
        delay: D,
        font: Font<N>,
        config: ScrollConfig,
    ) -> Result<Self> {
        let panel = MatrixPanel::new(rows, columns, delay, config.refresh_rate_hz)?;
        Ok(Self {
            panel,
            scroller: Scroller::new(font, config),
        })
    }

    /// Scroll `text` through the panel at `speed`.
    ///
    /// `speed` is a [`ScrollSpeed`] or a plain `u8` from 1 to 100 (clamped).
    ///
    /// Each character takes `N` one-column steps, each shown for
    /// [`ScrollSpeed::step_duration`]. Characters missing from the font scroll by
    /// as the fallback glyph. The panel is cleared afterwards; an empty `text`
    /// does nothing at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`](crate::Error::Pin) if a line cannot be driven.
    pub fn display_text(&mut self, text: &str, speed: impl Into<ScrollSpeed>) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let step_duration = self.step_duration(speed.into());
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "ScrollingText::display_text: {} chars, step {} ms",
            text.chars().count(),
            step_duration.as_millis()
        );
        for frame in self.scroller.text_frames(text) {
            self.panel.render(&frame, step_duration)?;
        }
        self.panel.clear()
    }

    /// Scroll a single character through, showing each step for `step_duration`.
    ///
    /// Unlike [`display_text`](Self::display_text), the panel is not cleared
    /// afterwards, so consecutive calls join up seamlessly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`](crate::Error::Pin) if a line cannot be driven.
    pub fn display_char(&mut self, character: char, step_duration: Duration) -> Result<()> {
        for frame in self.scroller.char_frames(character) {
            self.panel.render(&frame, step_duration)?;
        }
        Ok(())
    }

    /// Switch every LED off.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`](crate::Error::Pin) if a line cannot be driven.
    pub fn clear(&mut self) -> Result<()> {
        self.panel.clear()
    }

    /// Step duration `speed` maps to on this panel.
    #[must_use]
    pub fn step_duration(&self, speed: ScrollSpeed) -> Duration {
        speed.step_duration(self.panel.timing())
    }

    /// The scroll state behind this display.
    #[must_use]
    pub const fn scroller(&self) -> &Scroller<N> {
        &self.scroller
    }

    /// Frame timing of the underlying panel.
    #[must_use]
    pub const fn timing(&self) -> FrameTiming {
        self.panel.timing()
    }

    /// Give back the row lines, column lines and delay.
    #[must_use]
    pub fn release(self) -> ([R; N], [C; N], D) {
        self.panel.release()
    }
}
