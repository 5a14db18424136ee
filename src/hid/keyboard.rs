//! Boot-protocol keyboard report as kept by the key scanner.
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes)
//! ```
//!
//! `AT+BLEKEYBOARDCODE` carries only the first [`KRO_MAX`] raw bytes, so
//! the Friend sees the modifiers plus the first three keys.

use crate::config::KRO_MAX;

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// Usage range of the eight modifier keys (Left Ctrl .. Right GUI).
const MODIFIER_USAGES: core::ops::RangeInclusive<u8> = 0xE0..=0xE7;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (always 0x00 in the boot protocol).
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes, packed from the front.
    pub keycodes: [u8; 6],
}

impl KeyboardReport {
    /// All keys released.
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: [0; 6],
        }
    }

    /// Parse from raw report bytes. Extra trailing bytes are ignored.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < KEYBOARD_REPORT_SIZE {
            return None;
        }
        Some(Self {
            modifier: data[0],
            reserved: data[1],
            keycodes: [data[2], data[3], data[4], data[5], data[6], data[7]],
        })
    }

    /// The full raw report.
    pub fn raw(&self) -> [u8; KEYBOARD_REPORT_SIZE] {
        let k = self.keycodes;
        [self.modifier, self.reserved, k[0], k[1], k[2], k[3], k[4], k[5]]
    }

    /// The leading raw bytes sent to the Friend.
    pub fn rollover(&self) -> [u8; KRO_MAX] {
        let mut out = [0u8; KRO_MAX];
        out.copy_from_slice(&self.raw()[..KRO_MAX]);
        out
    }

    /// Returns `true` if no keys are pressed (release event).
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes.iter().all(|&k| k == 0)
    }

    /// Register a key press. Modifier usages set their bit, other usages
    /// take the first free slot. Returns `false` if nothing changed.
    pub fn press(&mut self, usage: u8) -> bool {
        if let Some(bit) = modifier_bit(usage) {
            let before = self.modifier;
            self.modifier |= bit;
            return before != self.modifier;
        }
        if usage == 0 || self.keycodes.contains(&usage) {
            return false;
        }
        match self.keycodes.iter_mut().find(|k| **k == 0) {
            Some(slot) => {
                *slot = usage;
                true
            }
            None => false,
        }
    }

    /// Register a key release, keeping the remaining keys packed.
    /// Returns `false` if the key was not held.
    pub fn release(&mut self, usage: u8) -> bool {
        if let Some(bit) = modifier_bit(usage) {
            let before = self.modifier;
            self.modifier &= !bit;
            return before != self.modifier;
        }
        let Some(idx) = self.keycodes.iter().position(|&k| k == usage && k != 0) else {
            return false;
        };
        self.keycodes.copy_within(idx + 1.., idx);
        self.keycodes[5] = 0;
        true
    }
}

fn modifier_bit(usage: u8) -> Option<u8> {
    MODIFIER_USAGES
        .contains(&usage)
        .then(|| 1 << (usage - MODIFIER_USAGES.start()))
}
