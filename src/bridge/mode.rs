//! Command-mode negotiation.
//!
//! In data mode the Friend forwards UART bytes over BLE instead of
//! executing them, so an `AT` probe goes unanswered (or answers with
//! whatever the central sent). `+++` toggles the mode; since the toggle
//! is blind, it is only sent after a probe failed.

use embedded_hal::delay::DelayNs;

use super::Bluefriend;
use crate::error::Error;
use crate::protocol::{self, ACK_BYTE};
use crate::transport::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Negotiation {
    Unknown,
    ProbeSent,
    Confirmed,
}

impl<T: Transport, D: DelayNs> Bluefriend<T, D> {
    /// Make sure the Friend executes AT commands.
    ///
    /// Probes with `AT`; on anything but an `'O'` reply sends `+++`,
    /// waits, drains and probes again, up to `max_retry` more times.
    /// An `Err` leaves the mode unknown; senders carry on regardless.
    pub fn ensure_command_mode(&mut self) -> Result<(), Error> {
        let mut state = Negotiation::Unknown;
        let mut retry: u8 = 0;
        loop {
            state = match state {
                Negotiation::Unknown => {
                    self.port.write_all(protocol::PROBE);
                    self.settle();
                    Negotiation::ProbeSent
                }
                Negotiation::ProbeSent => match self.port.try_recv_byte() {
                    Some(ACK_BYTE) => {
                        self.drain();
                        Negotiation::Confirmed
                    }
                    reply => {
                        debug!("bluefriend: probe reply {}, toggling mode", reply);
                        self.port.write_all(protocol::ESCAPE);
                        self.settle();
                        self.drain();
                        if retry >= self.config.max_retry {
                            return Err(Error::RetriesExhausted {
                                attempts: u16::from(retry) + 1,
                                last: reply,
                            });
                        }
                        retry += 1;
                        Negotiation::Unknown
                    }
                },
                Negotiation::Confirmed => return Ok(()),
            };
        }
    }
}
