//! Command transmission and single-byte acknowledgment.

use embedded_hal::delay::DelayNs;

use super::Bluefriend;
use crate::error::Error;
use crate::protocol::{classify_reply, Command};
use crate::transport::Transport;

impl<T: Transport, D: DelayNs> Bluefriend<T, D> {
    /// Send a framed command, retrying until the Friend's reply starts
    /// with `'O'` or the retry budget is spent.
    ///
    /// Only the first reply byte is looked at: `OK` and anything else
    /// starting with `O` count as success, `ERROR` or silence as failure.
    pub fn send(&mut self, command: &Command) -> Result<(), Error> {
        if let Err(e) = self.ensure_command_mode() {
            warn!("bluefriend: command mode not confirmed: {}", e);
        }
        self.transmit_with_retry(|port| port.write_all(command.as_bytes()))
    }

    /// Run `write`, settle, judge the first reply byte and drain the rest,
    /// for at most `max_retry + 1` attempts.
    pub(super) fn transmit_with_retry<F>(&mut self, mut write: F) -> Result<(), Error>
    where
        F: FnMut(&mut T),
    {
        let mut retry: u8 = 0;
        loop {
            write(&mut self.port);
            self.settle();
            let reply = self.port.try_recv_byte();
            self.drain();
            match classify_reply(reply) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    debug!("bluefriend: attempt {} failed: {}", u16::from(retry) + 1, e);
                    if retry >= self.config.max_retry {
                        return Err(Error::RetriesExhausted {
                            attempts: u16::from(retry) + 1,
                            last: reply,
                        });
                    }
                    retry += 1;
                }
            }
        }
    }
}
