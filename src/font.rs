//! Fixed-width bitmap fonts and the glyph rasterizer.
//!
//! See [`Font`] for how a character code becomes a [`Bitmap`] and
//! [`CharacterOrientation`] for how the glyph is turned on the panel.

mod font_8x8;

use crate::bitmap::{Bitmap, Rotation};

/// Number of character codes covered by [`FONT_8X8`] (codes `0..96`).
pub const NUMBER_OF_CHARACTERS: usize = 96;

/// Code rendered in place of any character outside the font.
pub const UNKNOWN_CHARACTER: u8 = 95;

/// Built-in 8×8 font indexed directly by character code.
///
/// Covers codes `0..NUMBER_OF_CHARACTERS`: blank control characters, then printable
/// ASCII up to `'^'`. Entry [`UNKNOWN_CHARACTER`] is a box glyph used for every
/// unsupported code, lowercase letters included.
pub const FONT_8X8: Font<8> = Font::new(&font_8x8::FONT_8X8_GLYPHS, UNKNOWN_CHARACTER as usize);

/// How characters are turned relative to the panel.
///
/// [`Top`](Self::Top) is the normal upright orientation; [`Right`](Self::Right)
/// means the character is rotated a quarter turn to the right, and so on.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharacterOrientation {
    /// Upright.
    #[default]
    Top,
    /// Turned a quarter to the right.
    Right,
    /// Upside down.
    Bottom,
    /// Turned a quarter to the left.
    Left,
}

impl CharacterOrientation {
    /// Rotation applied to a freshly expanded font entry.
    ///
    /// Font entries are stored column by column, which reads as a character
    /// already turned to the right; `Right` therefore needs no rotation.
    #[must_use]
    pub const fn rotation(self) -> Rotation {
        match self {
            Self::Top => Rotation::Ccw,
            Self::Right => Rotation::None,
            Self::Bottom => Rotation::Cw,
            Self::Left => Rotation::Half,
        }
    }
}

/// A read-only table of `N`-byte glyph patterns indexed by character code.
///
/// Each entry is expanded with [`Bitmap::from_rows`] (byte `k` becomes row `k`,
/// most significant bit first) and then rotated for the requested
/// [`CharacterOrientation`].
///
/// ```rust
/// use scroll_matrix::font::{CharacterOrientation, FONT_8X8, UNKNOWN_CHARACTER};
///
/// let glyph = FONT_8X8.rasterize(u32::from('A'), CharacterOrientation::Top);
/// assert!(glyph.lit_count() > 0);
///
/// // Anything outside the table falls back to the unknown-character glyph.
/// let fallback = FONT_8X8.rasterize(200, CharacterOrientation::Top);
/// assert_eq!(
///     fallback,
///     FONT_8X8.rasterize(u32::from(UNKNOWN_CHARACTER), CharacterOrientation::Top)
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Font<const N: usize> {
    glyphs: &'static [[u8; N]],
    unknown_index: usize,
}

impl<const N: usize> Font<N> {
    /// Create a font from a glyph table and the index of its fallback glyph.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in `const` context) if the table is empty, if
    /// `unknown_index` is out of range, or if `N` does not fit in a byte.
    #[must_use]
    pub const fn new(glyphs: &'static [[u8; N]], unknown_index: usize) -> Self {
        assert!(N > 0 && N <= 8, "glyph rows are single bytes");
        assert!(!glyphs.is_empty(), "font must contain at least one glyph");
        assert!(
            unknown_index < glyphs.len(),
            "unknown glyph index must be inside the font"
        );
        Self {
            glyphs,
            unknown_index,
        }
    }

    /// Number of character codes in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always `false`; a font holds at least its fallback glyph.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Whether `code` has its own entry (otherwise it falls back).
    #[must_use]
    pub fn contains(&self, code: u32) -> bool {
        usize::try_from(code).is_ok_and(|index| index < self.glyphs.len())
    }

    /// Raw table entry for `code`, substituting the fallback glyph when out of range.
    #[must_use]
    pub fn glyph_rows(&self, code: u32) -> [u8; N] {
        let entry = usize::try_from(code)
            .ok()
            .and_then(|index| self.glyphs.get(index))
            .or_else(|| self.glyphs.get(self.unknown_index));
        entry.copied().unwrap_or([0; N])
    }

    /// Rasterize `code` into an `N`×`N` glyph turned to `orientation`.
    #[must_use]
    pub fn rasterize(&self, code: u32, orientation: CharacterOrientation) -> Bitmap<N> {
        Bitmap::from_rows(self.glyph_rows(code)).rotated(orientation.rotation())
    }

    /// Rasterize a `char`, using its Unicode scalar value as the code.
    #[must_use]
    pub fn rasterize_char(&self, character: char, orientation: CharacterOrientation) -> Bitmap<N> {
        self.rasterize(u32::from(character), orientation)
    }
}
