//! Raw keycode → `AT+BLEKEYBOARDCODE` payload.
//!
//! Each raw report byte becomes two uppercase hex digits and groups are
//! joined with `-`:
//!
//! ```text
//! [0x02, 0x00, 0x04, 0x1B, 0xFF]  →  "02-00-04-1B-FF"
//! ```

use crate::config::KRO_MAX;

/// Length of the encoded fragment: two digits per byte plus separators.
pub const FRAGMENT_LEN: usize = KRO_MAX * 3 - 1;

pub const GROUP_SEPARATOR: u8 = b'-';

const HIGH_NIBBLE: u8 = 0b1111_0000;
const LOW_NIBBLE: u8 = 0b0000_1111;

/// Map a nibble to its ASCII hex digit: 0-9 → `'0'..='9'`, 10-15 → `'A'..='F'`.
#[inline]
pub const fn hex_digit(nibble: u8) -> u8 {
    if nibble <= 9 {
        nibble + 0x30
    } else {
        nibble + 0x37
    }
}

/// Encode one raw byte as `[high, low]` ASCII digits.
#[inline]
pub const fn encode_byte(code: u8) -> [u8; 2] {
    [
        hex_digit((code & HIGH_NIBBLE) >> 4),
        hex_digit(code & LOW_NIBBLE),
    ]
}

/// Lazily encode `raw`, one output byte at a time.
pub fn encode(raw: &[u8; KRO_MAX]) -> KeycodeBytes<'_> {
    KeycodeBytes { raw, pos: 0 }
}

/// Encode `raw` into a fixed buffer.
pub fn encode_to_array(raw: &[u8; KRO_MAX]) -> [u8; FRAGMENT_LEN] {
    let mut out = [0u8; FRAGMENT_LEN];
    for (slot, b) in out.iter_mut().zip(encode(raw)) {
        *slot = b;
    }
    out
}

/// Iterator returned by [`encode`].
#[derive(Clone, Debug)]
pub struct KeycodeBytes<'a> {
    raw: &'a [u8; KRO_MAX],
    pos: usize,
}

impl Iterator for KeycodeBytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos >= FRAGMENT_LEN {
            return None;
        }
        let digits = encode_byte(self.raw[self.pos / 3]);
        let out = match self.pos % 3 {
            0 => digits[0],
            1 => digits[1],
            _ => GROUP_SEPARATOR,
        };
        self.pos += 1;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = FRAGMENT_LEN - self.pos;
        (left, Some(left))
    }
}

impl ExactSizeIterator for KeycodeBytes<'_> {}
