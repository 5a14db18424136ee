//! Keyboard bridge for the Adafruit Bluefruit LE UART Friend.
//!
//! Turns keyboard state into `AT+BLEKEYBOARDCODE` lines and keeps the
//! Friend in command mode over a plain UART. The library is `no_std`,
//! allocation free and hardware agnostic: a board provides a
//! [`transport::Transport`] for its UART and any blocking
//! `embedded_hal::delay::DelayNs`.
//!
//! ```ignore
//! use bluefriend::{Bluefriend, KeyboardReport};
//!
//! let mut friend = Bluefriend::new(uart, delay);
//! let _ = friend.enable_hid_mode();
//! let _ = friend.set_default_device_name();
//!
//! let mut report = KeyboardReport::empty();
//! report.press(0x04);
//! friend.send_key_report(&report.rollover())?;
//! ```
//!
//! Usage: `cargo test --lib` runs everything on the host. The nRF52840
//! firmware in `main.rs` needs `--features embedded`.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible below.
#[macro_use]
mod fmt;

pub mod bridge;
pub mod config;
pub mod error;
pub mod hid;
pub mod protocol;
pub mod transport;

pub use bridge::Bluefriend;
pub use config::Config;
pub use error::Error;
pub use hid::KeyboardReport;
pub use protocol::Command;
pub use transport::Transport;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - wire format as seen from a keyboard scan loop
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::protocol::keycode;
    use super::*;

    #[test]
    fn shifted_a_is_encoded_as_boot_report_prefix() {
        let mut report = KeyboardReport::empty();
        report.press(0xE1); // Left Shift
        report.press(0x04); // a
        let fragment = keycode::encode_to_array(&report.rollover());
        assert_eq!(&fragment, b"02-00-04-00-00");
    }

    #[test]
    fn release_all_encodes_zeros() {
        let report = KeyboardReport::empty();
        let fragment = keycode::encode_to_array(&report.rollover());
        assert_eq!(&fragment, b"00-00-00-00-00");
    }

    #[test]
    fn only_first_three_keys_reach_the_friend() {
        let mut report = KeyboardReport::empty();
        for usage in [0x04, 0x05, 0x06, 0x07] {
            report.press(usage);
        }
        let fragment = keycode::encode_to_array(&report.rollover());
        assert_eq!(&fragment, b"00-00-04-05-06");
    }

    #[test]
    fn full_key_line_fits_command_bound() {
        let line_len = protocol::KEYBOARD_CODE_PREFIX.len() + keycode::FRAGMENT_LEN + 1;
        assert_eq!(line_len, 34);
        assert!(line_len <= config::CMD_LEN_MAX);
    }

    #[test]
    fn facade_command_lines() {
        assert_eq!(
            Command::from_line(protocol::FACTORY_RESET).as_bytes(),
            b"AT+FACTORYRESET\n"
        );
        assert_eq!(
            Command::new(protocol::HID_ENABLE, Some("0")).as_bytes(),
            b"AT+BLEHIDEN=0\n"
        );
        assert_eq!(
            Command::new(protocol::GAP_DEVICE_NAME, Some(config::DEFAULT_DEVICE_NAME)).as_bytes(),
            b"AT+GAPDEVNAME=Planck Keyboard\n"
        );
    }
}
