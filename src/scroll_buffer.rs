//! Two-glyph circular buffer that scrolling windows are cut from.

use crate::bitmap::Bitmap;

/// A circular pixel buffer two glyphs wide (`N` rows × `2N` columns).
///
/// Slot 0 covers columns `0..N`, slot 1 covers columns `N..2N`. While the read
/// cursor sits in one slot, [`insert`](Self::insert) writes the next glyph into
/// the other, so the character scrolling out stays intact while the new one
/// scrolls in. Reads wrap around modulo `2N` and therefore never go out of bounds.
///
/// The cursor itself belongs to the caller (the
/// [`Scroller`](crate::scroll::Scroller)); the buffer only interprets it.
///
/// ```rust
/// use scroll_matrix::{bitmap::Bitmap, scroll_buffer::ScrollBuffer};
///
/// let mut buffer = ScrollBuffer::<2>::new();
/// // Cursor 0 is in slot 0, so the glyph lands in slot 1 (columns 2..4).
/// buffer.insert(Bitmap::filled(true), 0);
/// assert_eq!(buffer.window(0), Bitmap::new());
/// assert_eq!(buffer.window(2), Bitmap::filled(true));
/// // Offset 3 straddles the wrap: column 3 then column 0.
/// assert_eq!(buffer.window(3), Bitmap::from_fn(|x, _| x == 0));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollBuffer<const N: usize> {
    slots: [Bitmap<N>; 2],
}

impl<const N: usize> ScrollBuffer<N> {
    /// Buffer width in columns; always twice the glyph width.
    pub const WIDTH: usize = 2 * N;

    /// Create a blank buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [Bitmap::new(); 2],
        }
    }

    /// Slot a new glyph will be written to while the read cursor is at `cursor`.
    #[must_use]
    pub const fn write_slot(cursor: usize) -> usize {
        if cursor % Self::WIDTH < N { 1 } else { 0 }
    }

    /// Write `glyph` into the slot not under `cursor`.
    pub fn insert(&mut self, glyph: Bitmap<N>, cursor: usize) {
        if let Some(slot) = self.slots.get_mut(Self::write_slot(cursor)) {
            *slot = glyph;
        }
    }

    /// Glyph currently stored in `slot` (0 or 1).
    ///
    /// # Panics
    ///
    /// Panics if `slot > 1`.
    #[must_use]
    pub fn slot(&self, slot: usize) -> &Bitmap<N> {
        assert!(slot < 2, "scroll buffer has two slots");
        &self.slots[slot]
    }

    /// Pixel at buffer column `x` (taken modulo `2N`) and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= N`.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        let column = x % Self::WIDTH;
        self.slots[column / N][(column % N, y)]
    }

    /// The `N`×`N` window whose left edge is column `offset` (modulo `2N`).
    #[must_use]
    pub fn window(&self, offset: usize) -> Bitmap<N> {
        Bitmap::from_fn(|x_index, y_index| self.pixel(offset % Self::WIDTH + x_index, y_index))
    }
}

impl<const N: usize> Default for ScrollBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
