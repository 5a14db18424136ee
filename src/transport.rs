//! Byte transport towards the Friend.
//!
//! The link only needs to push single bytes and to poll for a received
//! byte without blocking. Delays come from `embedded_hal::delay::DelayNs`,
//! so a board supplies a UART wrapper implementing [`Transport`] plus any
//! blocking delay.

/// Minimal UART contract used by the bridge.
pub trait Transport {
    /// Queue one byte for transmission.
    fn send_byte(&mut self, byte: u8);

    /// Take one received byte if any is buffered. Never blocks.
    fn try_recv_byte(&mut self) -> Option<u8>;

    /// Send every byte of `bytes` in order.
    fn write_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.send_byte(b);
        }
    }

    /// Discard buffered input until the port reports empty, or until
    /// `limit` bytes were discarded. Returns the number of bytes dropped.
    fn drain(&mut self, limit: Option<u16>) -> usize {
        let mut dropped = 0usize;
        while limit.map_or(true, |max| dropped < usize::from(max)) {
            match self.try_recv_byte() {
                Some(_) => dropped += 1,
                None => break,
            }
        }
        dropped
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send_byte(&mut self, byte: u8) {
        (**self).send_byte(byte)
    }

    fn try_recv_byte(&mut self) -> Option<u8> {
        (**self).try_recv_byte()
    }
}
