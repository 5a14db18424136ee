//! HID report types fed into the bridge.

pub mod keyboard;

pub use keyboard::KeyboardReport;
