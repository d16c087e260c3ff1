//! High-level panel operations: key images, fills, and button state.

use image::{GenericImageView, Rgba};
use tracing::debug;

use crate::error::{Error, Result};
use crate::pixels::{self, KeyCrop};
use crate::protocol::{
    self, FIRST_PAGE_PIXELS, INPUT_REPORT_SIZE, PAGE_SIZE, SECOND_PAGE_PIXELS,
};
use crate::transport::Transport;
use crate::{KEY_COUNT, PANEL_HEIGHT, PANEL_WIDTH};

/// Client for one 15-key panel over an open transport.
///
/// All operations are synchronous and issue their transfers inline, so a
/// panel is driven from one thread at a time. Multi-page operations stop
/// at the first transport failure, which can leave the panel partially
/// updated.
pub struct Panel<T> {
    transport: T,
}

impl<T: Transport> Panel<T> {
    /// Wraps an open transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Reads one input report and returns the pressed state of every key.
    ///
    /// Blocks until the device reports a button event.
    pub fn buttons(&mut self) -> Result<Vec<bool>> {
        let mut report = [0u8; INPUT_REPORT_SIZE];
        let n = self.transport.read(&mut report)?;
        if n < INPUT_REPORT_SIZE {
            return Err(Error::ShortRead {
                expected: INPUT_REPORT_SIZE,
                actual: n,
            });
        }
        protocol::decode_buttons(&report)
    }

    /// Displays a 72x72 image on one key.
    pub fn set_key_image<I>(&mut self, key: u8, image: &I) -> Result<()>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        check_key(key)?;
        let pixels = pixels::encode_image(image)?;
        self.write_key_pixels(key, &pixels)
    }

    /// Fills one key with a solid color.
    pub fn set_key_color(&mut self, key: u8, r: u8, g: u8, b: u8) -> Result<()> {
        check_key(key)?;
        // The fill convention repeats the pixel three times per page slot;
        // the page builders truncate to capacity.
        let pixel = [b, g, r];
        self.write_first_page(key, &pixel.repeat(3 * FIRST_PAGE_PIXELS))?;
        self.write_second_page(key, &pixel.repeat(3 * SECOND_PAGE_PIXELS))?;
        debug!("Key {} filled with color ({}, {}, {})", key, r, g, b);
        Ok(())
    }

    /// Blanks one key.
    pub fn clear_key(&mut self, key: u8) -> Result<()> {
        self.set_key_color(key, 0, 0, 0)
    }

    /// Displays a 360x216 image across the whole panel, one crop per key.
    ///
    /// The error from a failed transfer does not say which keys were
    /// already updated.
    pub fn set_panel_image<I>(&mut self, image: &I) -> Result<()>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let (width, height) = image.dimensions();
        if (width, height) != (PANEL_WIDTH, PANEL_HEIGHT) {
            return Err(Error::ImageSize {
                expected: (PANEL_WIDTH, PANEL_HEIGHT),
                actual: (width, height),
            });
        }
        for KeyCrop { key, x, y } in pixels::panel_crops() {
            let pixels = pixels::encode_region(image, x, y);
            self.write_key_pixels(key, &pixels)?;
        }
        debug!("Panel image written to {} keys", KEY_COUNT);
        Ok(())
    }

    /// Blanks every key, in ascending key order.
    pub fn clear_panel(&mut self) -> Result<()> {
        for key in 0..KEY_COUNT {
            self.clear_key(key)?;
        }
        debug!("Panel cleared");
        Ok(())
    }

    /// Closes the transport, consuming the panel.
    pub fn close(mut self) -> Result<()> {
        self.transport.close()
    }

    /// Sends one encoded key image as its two pages.
    fn write_key_pixels(&mut self, key: u8, pixels: &[u8]) -> Result<()> {
        let split = FIRST_PAGE_PIXELS * 3;
        self.write_first_page(key, &pixels[..split])?;
        self.write_second_page(key, &pixels[split..])?;
        debug!("Key {} image written", key);
        Ok(())
    }

    fn write_first_page(&mut self, key: u8, payload: &[u8]) -> Result<()> {
        self.send(&protocol::build_first_page(key, payload))
    }

    fn write_second_page(&mut self, key: u8, payload: &[u8]) -> Result<()> {
        self.send(&protocol::build_second_page(key, payload))
    }

    fn send(&mut self, page: &[u8; PAGE_SIZE]) -> Result<()> {
        let n = self.transport.write(page)?;
        if n < PAGE_SIZE {
            return Err(Error::ShortWrite {
                expected: PAGE_SIZE,
                actual: n,
            });
        }
        Ok(())
    }
}

fn check_key(key: u8) -> Result<()> {
    if key >= KEY_COUNT {
        return Err(Error::InvalidKey(key));
    }
    Ok(())
}
