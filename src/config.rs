//! Protocol constants and link tunables.
//!
//! Timing, bounds and board assignments live here so they can be tuned
//! in one place. The values match what the Bluefruit LE UART Friend
//! firmware tolerates at 9600 baud.

// AT link

/// Time the Friend gets to process a line before we poll for its reply (ms).
pub const SETTLE_MS: u32 = 15;

/// Extra attempts after the first one, for both probing and sending.
pub const MAX_RETRY: u8 = 1;

/// Longest command line we ever put on the wire, terminator included.
pub const CMD_LEN_MAX: usize = 40;

/// Number of raw report bytes carried by `AT+BLEKEYBOARDCODE`.
///
/// The raw report starts with the modifier and reserved bytes, so five
/// raw bytes leave room for three simultaneous keys.
pub const KRO_MAX: usize = 5;

/// GAP device name advertised after `set_default_device_name`.
pub const DEFAULT_DEVICE_NAME: &str = "Planck Keyboard";

// Board (nRF52840-DK defaults)
//
//   UARTE0 TXD  → P0.06  (to Friend RXI)
//   UARTE0 RXD  → P0.08  (from Friend TXO)
//   Button 1    → P0.11
//   Button 2    → P0.12
//   Button 3    → P0.24
//
// The Friend ships at 9600 8N1 without flow control; CTS on the Friend
// must be tied low.

/// Time the Friend needs after power-up before it reads the UART (ms).
pub const FRIEND_BOOT_MS: u64 = 1000;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// HID usage sent for each board button, in pin order.
/// `a`, `b` and Left Shift.
pub const BUTTON_KEYCODES: [u8; 3] = [0x04, 0x05, 0xE1];

/// Runtime tunables for a [`Bluefriend`](crate::bridge::Bluefriend) link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Settle delay after every transmitted line (ms).
    pub settle_ms: u32,
    /// Retries after the first attempt. `0` means a single attempt.
    pub max_retry: u8,
    /// Upper bound on bytes discarded per drain. `None` polls until the
    /// receive buffer is empty, trusting the Friend to go quiet.
    pub drain_limit: Option<u16>,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            settle_ms: SETTLE_MS,
            max_retry: MAX_RETRY,
            drain_limit: None,
        }
    }

    /// Total number of attempts one operation may make.
    pub const fn attempts(&self) -> u16 {
        self.max_retry as u16 + 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
