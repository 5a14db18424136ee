//! UARTE0 wiring for the Friend.
//!
//! TX is driven blocking from the bridge. RX runs as an async task on the
//! high-priority interrupt executor and parks bytes in [`RX_BUFFER`], so
//! replies keep arriving while the bridge busy-waits its settle delay.

use bluefriend::Transport;
use defmt::warn;
use embassy_nrf::peripherals::UARTE0;
use embassy_nrf::uarte::{UarteRx, UarteTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Receive ring shared between the RX task and [`FriendUart`].
pub static RX_BUFFER: Channel<CriticalSectionRawMutex, u8, 64> = Channel::new();

/// Blocking TX half plus the RX ring.
pub struct FriendUart {
    tx: UarteTx<'static, UARTE0>,
}

impl FriendUart {
    pub fn new(tx: UarteTx<'static, UARTE0>) -> Self {
        Self { tx }
    }
}

impl Transport for FriendUart {
    fn send_byte(&mut self, byte: u8) {
        // EasyDMA needs the buffer in RAM, hence the local copy.
        let buf = [byte];
        if self.tx.blocking_write(&buf).is_err() {
            warn!("uart: tx error");
        }
    }

    fn try_recv_byte(&mut self) -> Option<u8> {
        RX_BUFFER.try_receive().ok()
    }
}

/// Move received bytes into [`RX_BUFFER`]. Bytes are dropped when the
/// ring is full; the bridge only ever looks at the first one.
#[embassy_executor::task]
pub async fn rx_task(mut rx: UarteRx<'static, UARTE0>) -> ! {
    let mut buf = [0u8; 1];
    loop {
        match rx.read(&mut buf).await {
            Ok(()) => {
                if RX_BUFFER.try_send(buf[0]).is_err() {
                    warn!("uart: rx ring full - dropping byte");
                }
            }
            Err(e) => warn!("uart: rx error {:?}", e),
        }
    }
}
