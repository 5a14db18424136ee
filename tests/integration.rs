//! Integration tests for the bridge through its public API.

use std::collections::VecDeque;

use bluefriend::{Bluefriend, Error, KeyboardReport, Transport};
use embedded_hal_mock::eh1::delay::NoopDelay;

/// UART whose peer answers every line with a fixed reply.
struct Uart {
    tx: Vec<u8>,
    rx: VecDeque<u8>,
    reply: &'static [u8],
}

impl Uart {
    fn answering(reply: &'static [u8]) -> Self {
        Self {
            tx: Vec::new(),
            rx: VecDeque::new(),
            reply,
        }
    }
}

impl Transport for Uart {
    fn send_byte(&mut self, byte: u8) {
        self.tx.push(byte);
        if byte == b'\n' {
            self.rx.extend(self.reply);
        }
    }

    fn try_recv_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}

#[test]
fn boot_sequence_then_key_press() {
    let mut friend = Bluefriend::new(Uart::answering(b"OK\r\n"), NoopDelay::new());
    assert_eq!(friend.enable_hid_mode(), Ok(()));
    assert_eq!(friend.set_default_device_name(), Ok(()));

    let mut report = KeyboardReport::empty();
    report.press(0x04);
    assert_eq!(friend.send_key_report(&report.rollover()), Ok(()));

    let (uart, _) = friend.release();
    let expected: &[u8] = b"AT\nAT+BLEHIDEN=1\nATZ\n\
AT\nAT+GAPDEVNAME=Planck Keyboard\nATZ\n\
AT\nAT+BLEKEYBOARDCODE=00-00-04-00-00\n";
    assert_eq!(uart.tx, expected);
}

#[test]
fn error_replies_are_reported_not_panicked() {
    let mut friend = Bluefriend::new(Uart::answering(b"ERROR\r\n"), NoopDelay::new());
    let err = friend
        .send_key_report(&[0x00, 0x00, 0x2C, 0x00, 0x00])
        .unwrap_err();
    assert!(matches!(err, Error::RetriesExhausted { attempts: 2, .. }));
    assert_eq!(err.reply_byte(), Some(b'E'));

    // The reset still follows a failed configuration command.
    assert!(friend.factory_reset().is_err());
    let (uart, _) = friend.release();
    assert!(uart.tx.ends_with(b"AT+FACTORYRESET\nATZ\n"));
}

#[test]
fn bridge_over_borrowed_uart() {
    let mut uart = Uart::answering(b"OK\r\n");
    {
        let mut friend = Bluefriend::new(&mut uart, NoopDelay::new());
        friend.reset();
        friend.send_text("+++");
    }
    assert_eq!(uart.tx, b"ATZ\n+++");
}
