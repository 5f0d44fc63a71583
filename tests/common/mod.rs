#![allow(dead_code, reason = "each test binary uses a different subset")]
//! Recording stand-ins for GPIO lines and the blocking delay.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use scroll_matrix::bitmap::Bitmap;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    Low,
    High,
}

/// Current level of every row and column line, plus a write counter.
#[derive(Debug)]
pub struct Lines<const N: usize> {
    pub rows: [Level; N],
    pub columns: [Level; N],
    pub writes: usize,
}

impl<const N: usize> Lines<N> {
    /// LEDs that are lit right now: row high and column low.
    pub fn lit(&self) -> Bitmap<N> {
        Bitmap::from_fn(|x, y| self.rows[y] == Level::High && self.columns[x] == Level::Low)
    }

    pub fn is_cleared(&self) -> bool {
        self.rows.iter().all(|&level| level == Level::Low)
            && self.columns.iter().all(|&level| level == Level::High)
    }
}

pub type SharedLines<const N: usize> = Rc<RefCell<Lines<N>>>;

#[derive(Clone, Copy, Debug)]
enum Line {
    Row(usize),
    Column(usize),
}

pub struct MockPin<const N: usize> {
    lines: SharedLines<N>,
    line: Line,
}

impl<const N: usize> MockPin<N> {
    fn set(&mut self, level: Level) {
        let mut lines = self.lines.borrow_mut();
        match self.line {
            Line::Row(index) => lines.rows[index] = level,
            Line::Column(index) => lines.columns[index] = level,
        }
        lines.writes += 1;
    }
}

impl<const N: usize> ErrorType for MockPin<N> {
    type Error = Infallible;
}

impl<const N: usize> OutputPin for MockPin<N> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(Level::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(Level::High);
        Ok(())
    }
}

/// Delay that snapshots the lit LEDs every time it is asked to wait.
pub struct MockDelay<const N: usize> {
    lines: SharedLines<N>,
    pub frames: Vec<Bitmap<N>>,
    pub waited_ns: u64,
}

impl<const N: usize> DelayNs for MockDelay<N> {
    fn delay_ns(&mut self, ns: u32) {
        self.frames.push(self.lines.borrow().lit());
        self.waited_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ns(us.saturating_mul(1_000));
    }
}

/// Row pins, column pins and a delay wired to one shared set of lines.
///
/// Lines start in the all-lit state (rows high, columns low) so tests can see
/// that construction switches everything off.
pub fn mock_hardware<const N: usize>()
-> ([MockPin<N>; N], [MockPin<N>; N], MockDelay<N>, SharedLines<N>) {
    let lines = Rc::new(RefCell::new(Lines {
        rows: [Level::High; N],
        columns: [Level::Low; N],
        writes: 0,
    }));
    let rows = core::array::from_fn(|index| MockPin {
        lines: Rc::clone(&lines),
        line: Line::Row(index),
    });
    let columns = core::array::from_fn(|index| MockPin {
        lines: Rc::clone(&lines),
        line: Line::Column(index),
    });
    let delay = MockDelay {
        lines: Rc::clone(&lines),
        frames: Vec::new(),
        waited_ns: 0,
    };
    (rows, columns, delay, lines)
}

/// A line that rejects every level change.
pub struct FailingPin;

impl ErrorType for FailingPin {
    type Error = ErrorKind;
}

impl OutputPin for FailingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}

/// Build a bitmap from ASCII art, `#` for lit and anything else for off.
pub fn bitmap_from_art<const N: usize>(art: [&str; N]) -> Bitmap<N> {
    Bitmap::from_fn(|x, y| art[y].as_bytes().get(x) == Some(&b'#'))
}

/// Only row `row_index` of `bitmap`, as it looks while that row is lit.
pub fn row_only<const N: usize>(bitmap: &Bitmap<N>, row_index: usize) -> Bitmap<N> {
    Bitmap::from_fn(|x, y| y == row_index && bitmap[(x, y)])
}
