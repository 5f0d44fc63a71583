//! Square on/off pixel grids and the quarter-turn rotations applied to them.
//!
//! See [`Bitmap`] for the grid type and [`Rotation`] for how scroll directions and
//! character orientations are expressed as rotations.

use core::ops::{Deref, DerefMut, Index, IndexMut};

/// An `N`×`N` grid of binary pixels (`true` = LED on).
///
/// Glyphs produced by the font and windows cut out of the
/// [`ScrollBuffer`](crate::scroll_buffer::ScrollBuffer) are both bitmaps.
///
/// Storage is row-major: `bitmap.0[row][column]`. Tuple indexing follows the
/// screen convention used for the panel, `bitmap[(x, y)]`, where `(0, 0)` is the
/// top-left LED.
///
/// ```rust
/// use scroll_matrix::bitmap::Bitmap;
///
/// let mut bitmap = Bitmap::<3>::new();
/// bitmap[(2, 0)] = true; // top-right
/// bitmap.rotate_cw();
/// assert!(bitmap[(2, 2)]); // now bottom-right
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Bitmap<const N: usize>(pub [[bool; N]; N]);

impl<const N: usize> Bitmap<N> {
    /// Width and height in pixels.
    pub const SIZE: usize = N;

    /// Create a blank (all off) bitmap.
    #[must_use]
    pub const fn new() -> Self {
        Self([[false; N]; N])
    }

    /// Create a bitmap with every pixel set to `lit`.
    #[must_use]
    pub const fn filled(lit: bool) -> Self {
        Self([[lit; N]; N])
    }

    /// Expand one byte per row into pixels, most significant bit first.
    ///
    /// Only the low `N` bits of each byte are used: bit `N - 1` lands in column 0 and
    /// bit 0 lands in column `N - 1`.
    ///
    /// ```rust
    /// use scroll_matrix::bitmap::Bitmap;
    ///
    /// let bitmap = Bitmap::<4>::from_rows([0b1000, 0b0100, 0b0010, 0b0001]);
    /// assert_eq!(bitmap, Bitmap::from_fn(|x, y| x == y));
    /// ```
    #[must_use]
    pub const fn from_rows(rows: [u8; N]) -> Self {
        assert!(N > 0 && N <= 8, "row bytes hold at most 8 pixels");
        let mut pixels = [[false; N]; N];
        let mut row_index = 0;
        while row_index < N {
            let bits = rows[row_index];
            let mut column_index = 0;
            while column_index < N {
                pixels[row_index][column_index] = (bits >> (N - 1 - column_index)) & 1 == 1;
                column_index += 1;
            }
            row_index += 1;
        }
        Self(pixels)
    }

    /// Build a bitmap by evaluating `lit(x, y)` for every pixel.
    #[must_use]
    pub fn from_fn(mut lit: impl FnMut(usize, usize) -> bool) -> Self {
        let mut bitmap = Self::new();
        for (y_index, row) in bitmap.0.iter_mut().enumerate() {
            for (x_index, pixel) in row.iter_mut().enumerate() {
                *pixel = lit(x_index, y_index);
            }
        }
        bitmap
    }

    /// Number of lit pixels.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&lit| lit).count()
    }

    /// Rotate 90° clockwise in place.
    ///
    /// Works ring by ring from the outside in, cycling four boundary cells at a time,
    /// so no second grid is needed.
    ///
    /// ```text
    /// Before:   After:
    ///   A B       C A
    ///   C D       D B
    /// ```
    pub fn rotate_cw(&mut self) {
        let grid = &mut self.0;
        for layer in 0..N / 2 {
            let last = N - 1 - layer;
            for offset in layer..last {
                let mirror = N - 1 - offset;
                let top = grid[layer][offset];
                grid[layer][offset] = grid[mirror][layer];
                grid[mirror][layer] = grid[last][mirror];
                grid[last][mirror] = grid[offset][last];
                grid[offset][last] = top;
            }
        }
    }

    /// Apply `rotation` in place as repeated clockwise quarter turns.
    pub fn rotate(&mut self, rotation: Rotation) {
        for _ in 0..rotation.quarter_turns() {
            self.rotate_cw();
        }
    }

    /// Return a copy rotated by `rotation`.
    #[must_use]
    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotate(rotation);
        self
    }
}

impl<const N: usize> Default for Bitmap<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for Bitmap<N> {
    type Target = [[bool; N]; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Bitmap<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Index<(usize, usize)> for Bitmap<N> {
    type Output = bool;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < N, "x_index must be within width");
        assert!(y_index < N, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Bitmap<N> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < N, "x_index must be within width");
        assert!(y_index < N, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

impl<const N: usize> From<[[bool; N]; N]> for Bitmap<N> {
    fn from(pixels: [[bool; N]; N]) -> Self {
        Self(pixels)
    }
}

impl<const N: usize> From<Bitmap<N>> for [[bool; N]; N] {
    fn from(bitmap: Bitmap<N>) -> Self {
        bitmap.0
    }
}

/// A rotation by a whole number of clockwise quarter turns.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// No rotation.
    #[default]
    None,
    /// 90° clockwise.
    Cw,
    /// 180°.
    Half,
    /// 270° clockwise, i.e. 90° counter-clockwise.
    Ccw,
}

impl Rotation {
    /// Number of clockwise quarter turns (0..=3).
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Cw => 1,
            Self::Half => 2,
            Self::Ccw => 3,
        }
    }

    /// Build a rotation from a quarter-turn count, reduced modulo 4.
    #[must_use]
    pub const fn from_quarter_turns(quarter_turns: u8) -> Self {
        match quarter_turns % 4 {
            0 => Self::None,
            1 => Self::Cw,
            2 => Self::Half,
            _ => Self::Ccw,
        }
    }

    /// The rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self.quarter_turns())
    }

    /// This rotation followed by `other`.
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }
}
