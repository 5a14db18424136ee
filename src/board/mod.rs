//! nRF52840 board support for the firmware binary.
//!
//! - **uart**: UARTE0 as a [`bluefriend::Transport`], RX pumped by a
//!   high-priority task.
//! - **buttons**: debounced GPIO keys producing [`KeyEvent`]s.

pub mod buttons;
pub mod uart;

use defmt::Format;

/// Key state change from a button task.
#[derive(Clone, Copy, PartialEq, Eq, Format)]
pub enum KeyEvent {
    Pressed(u8),
    Released(u8),
}
