//! Bluefruit LE UART Friend bridge.
//!
//! [`Bluefriend`] owns the UART and a blocking delay and exposes the
//! operations a keyboard firmware needs:
//!
//! - configuration commands (`factory_reset`, `enable_hid_mode`,
//!   `disable_hid_mode`, `set_device_name`), each followed by `ATZ` so the
//!   Friend applies the change;
//! - `send_key_report`, the per-scan hot path.
//!
//! A call blocks for up to two settle delays per negotiation attempt and
//! one per send attempt, so with the defaults roughly 90 ms worst case.
//! Results report whether the Friend acknowledged; callers that do not
//! care can drop them.

mod mode;
mod sender;


use embedded_hal::delay::DelayNs;

use crate::config::{Config, CMD_LEN_MAX, DEFAULT_DEVICE_NAME, KRO_MAX};
use crate::error::Error;
use crate::protocol::{self, keycode, Command};
use crate::transport::Transport;

pub struct Bluefriend<T, D> {
    port: T,
    delay: D,
    config: Config,
}

impl<T: Transport, D: DelayNs> Bluefriend<T, D> {
    /// Bridge with the default timing (15 ms settle, one retry).
    pub fn new(port: T, delay: D) -> Self {
        Self::with_config(port, delay, Config::default())
    }

    pub fn with_config(port: T, delay: D, config: Config) -> Self {
        Self {
            port,
            delay,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give the UART and delay back.
    pub fn release(self) -> (T, D) {
        (self.port, self.delay)
    }

    /// Write `ATZ` without waiting for, or looking at, a reply.
    pub fn reset(&mut self) {
        debug!("bluefriend: reset");
        self.port.write_all(protocol::RESET);
    }

    pub fn factory_reset(&mut self) -> Result<(), Error> {
        let result = self.send(&Command::from_line(protocol::FACTORY_RESET));
        self.finish(result)
    }

    /// Let the Friend act as a BLE HID keyboard.
    pub fn enable_hid_mode(&mut self) -> Result<(), Error> {
        let result = self.send(&Command::new(protocol::HID_ENABLE, Some("1")));
        self.finish(result)
    }

    pub fn disable_hid_mode(&mut self) -> Result<(), Error> {
        let result = self.send(&Command::new(protocol::HID_ENABLE, Some("0")));
        self.finish(result)
    }

    /// Set the advertised GAP name. Names longer than the command bound
    /// are shortened; a line break ends the name.
    pub fn set_device_name(&mut self, name: &str) -> Result<(), Error> {
        let cmd = Command::new(protocol::GAP_DEVICE_NAME, Some(name));
        if cmd.is_truncated() {
            warn!("bluefriend: device name shortened to {} bytes", cmd.len());
        }
        let result = self.send(&cmd);
        self.finish(result)
    }

    pub fn set_default_device_name(&mut self) -> Result<(), Error> {
        self.set_device_name(DEFAULT_DEVICE_NAME)
    }

    /// Forward the leading raw report bytes as `AT+BLEKEYBOARDCODE`.
    ///
    /// Bytes are streamed straight to the UART; no command buffer is built.
    pub fn send_key_report(&mut self, raw: &[u8; KRO_MAX]) -> Result<(), Error> {
        if let Err(e) = self.ensure_command_mode() {
            warn!("bluefriend: command mode not confirmed: {}", e);
        }
        let result = self.transmit_with_retry(|port| {
            port.write_all(protocol::KEYBOARD_CODE_PREFIX);
            for b in keycode::encode(raw) {
                port.send_byte(b);
            }
            port.send_byte(protocol::TERMINATOR);
        });
        if let Err(e) = result {
            debug!("bluefriend: key report dropped: {}", e);
        }
        result
    }

    /// Write raw text with no framing, negotiation or acknowledgment.
    /// At most [`CMD_LEN_MAX`] bytes are sent.
    pub fn send_text(&mut self, text: &str) {
        let bytes = text.as_bytes();
        let len = bytes.len().min(CMD_LEN_MAX);
        self.port.write_all(&bytes[..len]);
    }

    /// Reset regardless of how the preceding command went.
    fn finish(&mut self, result: Result<(), Error>) -> Result<(), Error> {
        if let Err(e) = result {
            warn!("bluefriend: command failed: {}", e);
        }
        self.reset();
        result
    }

    fn settle(&mut self) {
        self.delay.delay_ms(self.config.settle_ms);
    }

    fn drain(&mut self) {
        let dropped = self.port.drain(self.config.drain_limit);
        if dropped > 0 {
            trace!("bluefriend: drained {} bytes", dropped);
        }
    }
}
