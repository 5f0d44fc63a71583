//! Scrolling text on row/column multiplexed LED dot-matrix panels for Pico 1 and 2.
//!
//! The panel's rows and columns are wired straight to GPIO lines. One row is lit
//! at a time and the rows are cycled fast enough that the eye sees a steady image.
//!
//! # Glossary
//!
//! - **N:** side length of the square panel, 8 for the usual 8×8 matrix.
//! - **Glyph:** the N×N [`Bitmap`](bitmap::Bitmap) for one character.
//! - **Scroll buffer:** a circular pixel buffer two glyphs wide; see [`scroll_buffer`].
//! - **Window:** the N×N slice of the scroll buffer currently on the panel.
//! - **Frame:** one row's slot in a multiplexing sweep; see [`panel`].
//!
//! # Example
//!
//! ```rust,ignore
//! let config = ScrollConfig::new().with_scroll_direction(ScrollDirection::RightToLeft);
//! let mut scrolling_text = ScrollingText::new(rows, columns, Delay, FONT_8X8, config)?;
//! scrolling_text.display_text("HELLO", ScrollSpeed::DEFAULT)?;
//! ```
//!
//! See [`scroll::ScrollingText`] for a complete example.
#![cfg_attr(not(feature = "host"), no_std)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: the Cortex-M core is the only supported architecture
#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the 'arm' architecture feature");

pub mod bitmap;
mod error;
pub mod font;
pub mod panel;
pub mod scroll;
pub mod scroll_buffer;
#[cfg(feature = "host")]
pub mod to_png;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
