//! Stream Deck HID Protocol Library
//!
//! Protocol translation for the original 15-key Stream Deck button panel:
//! turns images and colors into the device's paged HID output reports and
//! input reports back into per-key button state. The panel is driven
//! through the [`Transport`] trait, so device discovery and image loading
//! stay with the caller.

pub mod error;
pub mod panel;
pub mod pixels;
pub mod protocol;
pub mod transport;

pub use error::{Error, Result};
pub use panel::Panel;
pub use transport::Transport;

/// Button grid dimensions
pub const NUM_ROWS: u32 = 3;
pub const NUM_COLUMNS: u32 = 5;

/// Number of keys on the panel
pub const KEY_COUNT: u8 = (NUM_ROWS * NUM_COLUMNS) as u8;

/// Key icon side length in pixels (icons are square)
pub const ICON_SIZE: u32 = 72;

/// Full-panel image dimensions
pub const PANEL_WIDTH: u32 = NUM_COLUMNS * ICON_SIZE;
pub const PANEL_HEIGHT: u32 = NUM_ROWS * ICON_SIZE;

/// USB VID:PID for the panel
pub const VENDOR_ID: u16 = 0x0FD9;
pub const PRODUCT_ID: u16 = 0x0060;
