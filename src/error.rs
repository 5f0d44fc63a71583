//! Error and result types shared by the whole crate.

use embedded_hal::digital::ErrorKind;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while driving the LED matrix.
///
/// Rendering itself cannot fail; the only failure source is a GPIO line that
/// refuses a level change. RP2040 outputs are infallible, so on the Pico this
/// error never occurs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// A row or column line could not be driven.
    #[display("GPIO line could not be driven: {_0:?}")]
    Pin(#[error(not(source))] ErrorKind),
}

impl Error {
    /// Map any `embedded-hal` digital error to [`Error::Pin`].
    pub(crate) fn from_pin<E: embedded_hal::digital::Error>(error: E) -> Self {
        Self::Pin(error.kind())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::Pin(kind) => defmt::write!(f, "Pin({})", defmt::Debug2Format(kind)),
        }
    }
}
