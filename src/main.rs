//! bluefriend firmware - nRF52840 keyboard talking to a Bluefruit LE
//! UART Friend.
//!
//! ## Architecture
//!
//! ```text
//!  ┌──────────────┐  KeyEvent   ┌─────────────┐  AT lines  ┌──────────┐
//!  │ button tasks │ ──────────▶ │  key task   │ ─────────▶ │  UARTE0  │──▶ Friend
//!  │ (thread exec)│   channel   │ (Bluefriend)│ ◀───────── │ RX task  │◀──
//!  └──────────────┘             └─────────────┘  RX ring   └──────────┘
//!                                                          (SWI1 exec)
//! ```
//!
//! The bridge busy-waits while the Friend settles, which would starve a
//! single executor. UART reception therefore runs on an interrupt
//! executor at higher priority.

#![no_std]
#![no_main]

mod board;

use bluefriend::config::{BUTTON_KEYCODES, FRIEND_BOOT_MS};
use bluefriend::{Bluefriend, KeyboardReport};
use board::uart::{self, FriendUart};
use board::{buttons, KeyEvent};
use cortex_m_rt::entry;
use defmt::{info, unwrap, warn};
use embassy_executor::{Executor, InterruptExecutor};
use embassy_nrf::gpio::Pin;
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::{bind_interrupts, peripherals, uarte};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use embassy_time::{Delay, Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
});

/// Button → key task.
static KEY_EVENTS: Channel<CriticalSectionRawMutex, KeyEvent, 8> = Channel::new();

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn EGU1_SWI1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[entry]
fn main() -> ! {
    info!("bluefriend starting...");

    let p = embassy_nrf::init(Default::default());

    let mut uart_config = uarte::Config::default();
    uart_config.parity = uarte::Parity::EXCLUDED;
    uart_config.baudrate = uarte::Baudrate::BAUD9600;
    let uart = uarte::Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, uart_config);
    let (tx, rx) = uart.split();

    interrupt::EGU1_SWI1.set_priority(Priority::P6);
    let high = EXECUTOR_HIGH.start(interrupt::EGU1_SWI1);
    unwrap!(high.spawn(uart::rx_task(rx)));

    let pins = [p.P0_11.degrade(), p.P0_12.degrade(), p.P0_24.degrade()];

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(move |spawner| {
        for (pin, usage) in pins.into_iter().zip(BUTTON_KEYCODES) {
            unwrap!(spawner.spawn(buttons::button_task(
                pin,
                usage,
                KEY_EVENTS.sender()
            )));
        }
        unwrap!(spawner.spawn(key_task(FriendUart::new(tx), KEY_EVENTS.receiver())));
        info!("All tasks spawned - bridge is running");
    })
}

/// Configure the Friend, then forward every key state change.
#[embassy_executor::task]
async fn key_task(
    uart: FriendUart,
    events: Receiver<'static, CriticalSectionRawMutex, KeyEvent, 8>,
) -> ! {
    // The Friend ignores the UART until it has booted.
    Timer::after(Duration::from_millis(FRIEND_BOOT_MS)).await;

    let mut friend = Bluefriend::new(uart, Delay);
    if let Err(e) = friend.enable_hid_mode() {
        warn!("Friend did not confirm HID mode: {}", e);
    }
    if let Err(e) = friend.set_default_device_name() {
        warn!("Friend did not confirm device name: {}", e);
    }
    info!("Friend configured");

    let mut report = KeyboardReport::empty();
    loop {
        let changed = match events.receive().await {
            KeyEvent::Pressed(usage) => report.press(usage),
            KeyEvent::Released(usage) => report.release(usage),
        };
        if !changed {
            continue;
        }
        if let Err(e) = friend.send_key_report(&report.rollover()) {
            warn!("Key report not acknowledged: {}", e);
        }
    }
}
