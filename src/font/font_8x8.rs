//! Built-in 8×8 font table.
//!
//! Each entry holds one byte per glyph column, left to right, with the least
//! significant bit at the top. Rasterizing an entry row by row and turning it a
//! quarter counter-clockwise (the upright orientation) yields the glyph as read.
//!
//! Codes 0x00..0x1F are control characters and render blank. Entry 0x5F is the
//! unknown-character box, so `'_'` itself cannot be shown.

use super::NUMBER_OF_CHARACTERS;

#[rustfmt::skip]
pub(super) const FONT_8X8_GLYPHS: [[u8; 8]; NUMBER_OF_CHARACTERS] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x00
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x01
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x02
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x03
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x04
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x05
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x06
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x07
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x08
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x09
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0a
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0b
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0c
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0d
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0e
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0f
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x10
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x11
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x12
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x13
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x14
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x15
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x16
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x17
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x18
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x19
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1a
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1b
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1c
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1d
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1e
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1f
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x20 ' '
    [0x00, 0x00, 0x00, 0x5F, 0x5F, 0x00, 0x00, 0x00], // 0x21 '!'
    [0x00, 0x03, 0x07, 0x00, 0x03, 0x07, 0x00, 0x00], // 0x22 '"'
    [0x14, 0x7F, 0x7F, 0x14, 0x7F, 0x7F, 0x14, 0x00], // 0x23 '#'
    [0x24, 0x2E, 0x2A, 0x6B, 0x6B, 0x3A, 0x12, 0x00], // 0x24 '$'
    [0x46, 0x66, 0x30, 0x18, 0x0C, 0x66, 0x62, 0x00], // 0x25 '%'
    [0x30, 0x7A, 0x4F, 0x5D, 0x37, 0x7A, 0x48, 0x00], // 0x26 '&'
    [0x00, 0x00, 0x04, 0x07, 0x03, 0x00, 0x00, 0x00], // 0x27 '\''
    [0x00, 0x00, 0x1C, 0x3E, 0x63, 0x41, 0x00, 0x00], // 0x28 '('
    [0x00, 0x00, 0x41, 0x63, 0x3E, 0x1C, 0x00, 0x00], // 0x29 ')'
    [0x08, 0x2A, 0x3E, 0x1C, 0x1C, 0x3E, 0x2A, 0x08], // 0x2a '*'
    [0x00, 0x08, 0x08, 0x3E, 0x3E, 0x08, 0x08, 0x00], // 0x2b '+'
    [0x00, 0x00, 0x80, 0xE0, 0x60, 0x00, 0x00, 0x00], // 0x2c ','
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00], // 0x2d '-'
    [0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x00, 0x00], // 0x2e '.'
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // 0x2f '/'
    [0x3E, 0x7F, 0x59, 0x4D, 0x47, 0x7F, 0x3E, 0x00], // 0x30 '0'
    [0x00, 0x40, 0x42, 0x7F, 0x7F, 0x40, 0x40, 0x00], // 0x31 '1'
    [0x72, 0x7B, 0x49, 0x49, 0x49, 0x4F, 0x46, 0x00], // 0x32 '2'
    [0x41, 0x41, 0x49, 0x49, 0x49, 0x7F, 0x36, 0x00], // 0x33 '3'
    [0x1E, 0x1E, 0x10, 0x10, 0x7F, 0x7F, 0x10, 0x00], // 0x34 '4'
    [0x27, 0x67, 0x45, 0x45, 0x45, 0x7D, 0x39, 0x00], // 0x35 '5'
    [0x3E, 0x7F, 0x49, 0x49, 0x49, 0x79, 0x30, 0x00], // 0x36 '6'
    [0x01, 0x01, 0x01, 0x71, 0x79, 0x0F, 0x07, 0x00], // 0x37 '7'
    [0x36, 0x7F, 0x49, 0x49, 0x49, 0x7F, 0x36, 0x00], // 0x38 '8'
    [0x06, 0x4F, 0x49, 0x49, 0x49, 0x7F, 0x3E, 0x00], // 0x39 '9'
    [0x00, 0x00, 0x00, 0x66, 0x66, 0x00, 0x00, 0x00], // 0x3a ':'
    [0x00, 0x00, 0x80, 0xE6, 0x66, 0x00, 0x00, 0x00], // 0x3b ';'
    [0x00, 0x08, 0x1C, 0x36, 0x63, 0x41, 0x00, 0x00], // 0x3c '<'
    [0x00, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x00], // 0x3d '='
    [0x00, 0x00, 0x41, 0x63, 0x36, 0x1C, 0x08, 0x00], // 0x3e '>'
    [0x00, 0x02, 0x03, 0x59, 0x5D, 0x07, 0x02, 0x00], // 0x3f '?'
    [0x3E, 0x7F, 0x41, 0x5D, 0x5D, 0x5F, 0x5E, 0x00], // 0x40 '@'
    [0x7C, 0x7E, 0x13, 0x11, 0x13, 0x7E, 0x7C, 0x00], // 0x41 'A'
    [0x7F, 0x7F, 0x49, 0x49, 0x49, 0x7F, 0x36, 0x00], // 0x42 'B'
    [0x3E, 0x7F, 0x41, 0x41, 0x41, 0x63, 0x22, 0x00], // 0x43 'C'
    [0x7F, 0x7F, 0x41, 0x41, 0x63, 0x3E, 0x1C, 0x00], // 0x44 'D'
    [0x7F, 0x7F, 0x49, 0x49, 0x49, 0x41, 0x41, 0x00], // 0x45 'E'
    [0x7F, 0x7F, 0x09, 0x09, 0x09, 0x01, 0x01, 0x00], // 0x46 'F'
    [0x3E, 0x7F, 0x41, 0x41, 0x49, 0x7B, 0x3A, 0x00], // 0x47 'G'
    [0x7F, 0x7F, 0x08, 0x08, 0x08, 0x7F, 0x7F, 0x00], // 0x48 'H'
    [0x00, 0x41, 0x41, 0x7F, 0x7F, 0x41, 0x41, 0x00], // 0x49 'I'
    [0x30, 0x70, 0x40, 0x40, 0x40, 0x7F, 0x3F, 0x00], // 0x4a 'J'
    [0x7F, 0x7F, 0x08, 0x1C, 0x36, 0x63, 0x41, 0x00], // 0x4b 'K'
    [0x7F, 0x7F, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00], // 0x4c 'L'
    [0x7F, 0x7F, 0x06, 0x0C, 0x06, 0x7F, 0x7F, 0x00], // 0x4d 'M'
    [0x7F, 0x7F, 0x06, 0x0C, 0x18, 0x7F, 0x7F, 0x00], // 0x4e 'N'
    [0x3E, 0x7F, 0x41, 0x41, 0x41, 0x7F, 0x3E, 0x00], // 0x4f 'O'
    [0x7F, 0x7F, 0x09, 0x09, 0x09, 0x0F, 0x06, 0x00], // 0x50 'P'
    [0x3E, 0x7F, 0x41, 0x71, 0x61, 0xFF, 0xBE, 0x00], // 0x51 'Q'
    [0x7F, 0x7F, 0x09, 0x19, 0x39, 0x6F, 0x46, 0x00], // 0x52 'R'
    [0x26, 0x6F, 0x49, 0x49, 0x49, 0x7B, 0x32, 0x00], // 0x53 'S'
    [0x00, 0x01, 0x01, 0x7F, 0x7F, 0x01, 0x01, 0x00], // 0x54 'T'
    [0x3F, 0x7F, 0x40, 0x40, 0x40, 0x7F, 0x3F, 0x00], // 0x55 'U'
    [0x0F, 0x1F, 0x30, 0x60, 0x30, 0x1F, 0x0F, 0x00], // 0x56 'V'
    [0x7F, 0x7F, 0x30, 0x18, 0x30, 0x7F, 0x7F, 0x00], // 0x57 'W'
    [0x63, 0x77, 0x1C, 0x08, 0x1C, 0x77, 0x63, 0x00], // 0x58 'X'
    [0x00, 0x07, 0x0F, 0x78, 0x78, 0x0F, 0x07, 0x00], // 0x59 'Y'
    [0x41, 0x61, 0x71, 0x59, 0x4D, 0x47, 0x43, 0x00], // 0x5a 'Z'
    [0x00, 0x00, 0x7F, 0x7F, 0x41, 0x41, 0x00, 0x00], // 0x5b '['
    [0x01, 0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x00], // 0x5c '\\'
    [0x00, 0x00, 0x41, 0x41, 0x7F, 0x7F, 0x00, 0x00], // 0x5d ']'
    [0x08, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x08, 0x00], // 0x5e '^'
    [0x3E, 0x41, 0x45, 0x51, 0x51, 0x45, 0x41, 0x3E], // 0x5f unknown
];
