//! Error types for the Stream Deck HID library.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the panel.
#[derive(Error, Debug)]
pub enum Error {
    /// USB HID communication error.
    #[error("USB HID error: {0}")]
    Hid(#[from] hidapi::HidError),

    /// Key index outside the 15-key grid.
    #[error("Invalid key index: {0}")]
    InvalidKey(u8),

    /// Image dimensions do not match what the panel expects.
    #[error("Image size mismatch: expected {expected:?}, got {actual:?}")]
    ImageSize {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Input report came back shorter than one full event.
    #[error("Short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// Page write transmitted fewer bytes than one full page.
    #[error("Short write: expected {expected} bytes, wrote {actual}")]
    ShortWrite { expected: usize, actual: usize },
}
