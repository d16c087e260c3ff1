//! Per-key pixel encoding and panel image partitioning.
//!
//! Key images go to the device as 24-bit BMP pixel data: BGR channel
//! order, rows top to bottom, columns mirrored to match the panel's
//! mounting orientation.

use image::{GenericImageView, Rgba};

use crate::error::{Error, Result};
use crate::{ICON_SIZE, KEY_COUNT, NUM_COLUMNS, NUM_ROWS};

/// Pixels in one key image.
pub const PIXEL_COUNT: usize = (ICON_SIZE * ICON_SIZE) as usize;

/// Encoded size of one key image (3 bytes per pixel).
pub const IMAGE_BYTES: usize = PIXEL_COUNT * 3;

/// One key's crop origin within a full-panel image.
///
/// Crops are [`ICON_SIZE`] square. Horizontal origins run right to left as
/// the key index grows across a row, mirroring the encoded pixel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCrop {
    pub key: u8,
    pub x: u32,
    pub y: u32,
}

/// Returns the crop for every key of a full-panel image, in transmission
/// order (column by column).
pub fn panel_crops() -> Vec<KeyCrop> {
    let mut crops = Vec::with_capacity(KEY_COUNT as usize);
    for column in 0..NUM_COLUMNS {
        for row in 0..NUM_ROWS {
            crops.push(KeyCrop {
                key: (column + row * NUM_COLUMNS) as u8,
                x: (NUM_COLUMNS - 1 - column) * ICON_SIZE,
                y: row * ICON_SIZE,
            });
        }
    }
    crops
}

/// Encodes one key image into the device pixel layout.
///
/// The image must be exactly [`ICON_SIZE`] x [`ICON_SIZE`].
pub fn encode_image<I>(image: &I) -> Result<Vec<u8>>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    if (width, height) != (ICON_SIZE, ICON_SIZE) {
        return Err(Error::ImageSize {
            expected: (ICON_SIZE, ICON_SIZE),
            actual: (width, height),
        });
    }
    Ok(encode_region(image, 0, 0))
}

/// Encodes the [`ICON_SIZE`]-square region of `image` with its top-left
/// corner at `(x0, y0)`. The region must lie within the image bounds.
pub(crate) fn encode_region<I>(image: &I, x0: u32, y0: u32) -> Vec<u8>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let mut pixels = vec![0u8; IMAGE_BYTES];
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let Rgba([r, g, b, _]) = image.get_pixel(x0 + x, y0 + y);
            // Each row fills back to front, so x = 0 lands on the row's
            // last pixel slot.
            let i = (y * ICON_SIZE + (ICON_SIZE - x)) as usize * 3;
            pixels[i - 1] = r;
            pixels[i - 2] = g;
            pixels[i - 3] = b;
        }
    }
    pixels
}

/// Encodes a solid color as one key image.
pub fn encode_color(r: u8, g: u8, b: u8) -> Vec<u8> {
    [b, g, r].repeat(PIXEL_COUNT)
}
