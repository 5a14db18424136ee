//! GPIO key input with async debouncing.
//!
//! Each button (active-low with internal pull-up) stands for one HID
//! usage. Presses and releases are debounced and sent to the key task.

use crate::board::KeyEvent;
use bluefriend::config::BUTTON_DEBOUNCE_MS;
use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

/// Run one button loop forever.
///
/// Waits for the pin to go low (pressed), debounces, reports the press,
/// then does the same for the release.
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(
    pin: AnyPin,
    usage: u8,
    tx: Sender<'static, CriticalSectionRawMutex, KeyEvent, 8>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        btn.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if !btn.is_low() {
            continue;
        }
        info!("key {=u8:#x} down", usage);
        tx.send(KeyEvent::Pressed(usage)).await;

        btn.wait_for_rising_edge().await;
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        info!("key {=u8:#x} up", usage);
        tx.send(KeyEvent::Released(usage)).await;
    }
}
