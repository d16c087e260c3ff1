//! Byte transport abstraction over the panel's HID endpoints.
//!
//! [`Panel`](crate::Panel) never opens devices itself; it drives any duplex
//! byte channel that carries one page per write and one input report per
//! read. The hidapi implementation below covers the real device, and tests
//! substitute an in-memory channel.

use crate::error::Result;

/// Duplex byte channel to a panel.
///
/// Both transfer methods return the number of bytes actually moved so
/// callers can detect short transfers.
pub trait Transport {
    /// Reads the next input report into `buf`, blocking until one arrives.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Writes one report from `buf`.
    fn write(&mut self, buf: &[u8]) -> Result<usize>;

    /// Releases the underlying channel.
    fn close(&mut self) -> Result<()>;
}

/// HID transport backed by an open [`hidapi::HidDevice`] handle.
impl Transport for hidapi::HidDevice {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(hidapi::HidDevice::read(self, buf)?)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(hidapi::HidDevice::write(self, buf)?)
    }

    fn close(&mut self) -> Result<()> {
        // hidapi handles are released when dropped.
        Ok(())
    }
}

/// Mutable references forward, so a borrowed transport can be driven
/// without giving up ownership.
impl<T: Transport + ?Sized> Transport for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        (**self).write(buf)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Panel, KEY_COUNT, PRODUCT_ID, VENDOR_ID};

    // Hardware test, skipped by default. Run with a panel attached:
    //   cargo test -- --ignored
    #[test]
    #[ignore]
    fn test_real_panel_roundtrip() {
        let api = hidapi::HidApi::new().unwrap();
        let device = api.open(VENDOR_ID, PRODUCT_ID).unwrap();
        let mut panel = Panel::new(device);
        for key in 0..KEY_COUNT {
            panel.set_key_color(key, 0, 64, 128).unwrap();
        }
        panel.clear_panel().unwrap();
        panel.close().unwrap();
    }
}
