//! Bluefruit AT command grammar.
//!
//! Everything on the wire is ASCII, one command per `\n` terminated line.
//! Replies are judged by their first byte only: `'O'` (as in `OK`) is an
//! acknowledgment, anything else or silence is a failure.
//!
//! ```text
//! AT\n                                  probe
//! +++\n                                 toggle command/data mode
//! ATZ\n                                 reset
//! AT+FACTORYRESET\n
//! AT+BLEHIDEN=1\n / AT+BLEHIDEN=0\n
//! AT+GAPDEVNAME=<name>\n
//! AT+BLEKEYBOARDCODE=HH-HH-HH-HH-HH\n
//! ```

pub mod command;
pub mod keycode;

pub use command::Command;

use crate::error::Error;

/// Line terminator the Friend acts on.
pub const TERMINATOR: u8 = b'\n';

/// First byte of `OK`.
pub const ACK_BYTE: u8 = b'O';

/// "Are you listening?" probe.
pub const PROBE: &[u8] = b"AT\n";

/// Escape sequence toggling the Friend between data and command mode.
pub const ESCAPE: &[u8] = b"+++\n";

/// Soft reset. Required for HID and GAP settings to take effect.
pub const RESET: &[u8] = b"ATZ\n";

/// Prefix of the raw keyboard report command.
pub const KEYBOARD_CODE_PREFIX: &[u8; 19] = b"AT+BLEKEYBOARDCODE=";

pub const FACTORY_RESET: &str = "AT+FACTORYRESET";
pub const HID_ENABLE: &str = "AT+BLEHIDEN";
pub const GAP_DEVICE_NAME: &str = "AT+GAPDEVNAME";

/// Judge a reply by its first byte.
pub fn classify_reply(first: Option<u8>) -> Result<(), Error> {
    match first {
        Some(ACK_BYTE) => Ok(()),
        Some(other) => Err(Error::UnexpectedResponse(other)),
        None => Err(Error::NoResponse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_leading_o_is_an_ack() {
        assert_eq!(classify_reply(Some(b'O')), Ok(()));
        assert_eq!(
            classify_reply(Some(b'E')),
            Err(Error::UnexpectedResponse(b'E'))
        );
        assert_eq!(
            classify_reply(Some(b'o')),
            Err(Error::UnexpectedResponse(b'o'))
        );
        assert_eq!(classify_reply(None), Err(Error::NoResponse));
    }

    #[test]
    fn fixed_lines_are_terminated_once() {
        for line in [PROBE, ESCAPE, RESET] {
            assert_eq!(line.last(), Some(&TERMINATOR));
            assert_eq!(line.iter().filter(|&&b| b == TERMINATOR).count(), 1);
        }
    }

    #[test]
    fn keyboard_prefix_is_nineteen_bytes() {
        assert_eq!(KEYBOARD_CODE_PREFIX.len(), 19);
        assert!(KEYBOARD_CODE_PREFIX.ends_with(b"="));
    }
}
