//! Error type for the AT-command link.
//!
//! We avoid `alloc` - all variants carry only fixed-size data and the
//! enum is `Copy`. Implements `defmt::Format` when the `defmt` feature
//! is enabled.

use core::fmt;

/// Why a probe or command was not acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Nothing was buffered once the settle delay elapsed.
    NoResponse,

    /// The first reply byte was not `'O'` (usually the `E` of `ERROR`).
    UnexpectedResponse(u8),

    /// Every attempt failed.
    RetriesExhausted {
        /// Attempts made, first one included.
        attempts: u16,
        /// First reply byte of the final attempt, `None` for silence.
        last: Option<u8>,
    },
}

impl Error {
    /// First reply byte that caused the failure, if any arrived.
    pub fn reply_byte(&self) -> Option<u8> {
        match *self {
            Error::NoResponse => None,
            Error::UnexpectedResponse(b) => Some(b),
            Error::RetriesExhausted { last, .. } => last,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::NoResponse => write!(f, "no response within settle window"),
            Error::UnexpectedResponse(b) => write!(f, "unexpected response byte {:#04x}", b),
            Error::RetriesExhausted { attempts, last: Some(b) } => {
                write!(f, "gave up after {} attempts, last reply {:#04x}", attempts, b)
            }
            Error::RetriesExhausted { attempts, last: None } => {
                write!(f, "gave up after {} attempts, last reply none", attempts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_byte_tracks_variant() {
        assert_eq!(Error::NoResponse.reply_byte(), None);
        assert_eq!(Error::UnexpectedResponse(b'E').reply_byte(), Some(b'E'));
        let exhausted = Error::RetriesExhausted {
            attempts: 2,
            last: Some(b'E'),
        };
        assert_eq!(exhausted.reply_byte(), Some(b'E'));
    }

    #[test]
    fn display_mentions_attempts() {
        let err = Error::RetriesExhausted {
            attempts: 2,
            last: None,
        };
        assert_eq!(err.to_string(), "gave up after 2 attempts, last reply none");
        assert_eq!(
            Error::UnexpectedResponse(0x45).to_string(),
            "unexpected response byte 0x45"
        );
    }
}
