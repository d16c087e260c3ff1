//! Wire format for the original 15-key Stream Deck.
//!
//! Key images travel as two fixed-size HID output reports ("pages"): a
//! header, the 1-based key id at byte 5, the pixel payload, and zero fill
//! out to the page size. Button state arrives as 17-byte input reports
//! with one state byte per key.

use crate::error::{Error, Result};
use crate::KEY_COUNT;

/// Page size for image transfer reports.
pub const PAGE_SIZE: usize = 8191;

/// Input report size: report id, one state byte per key, one pad byte.
pub const INPUT_REPORT_SIZE: usize = 17;

/// Pixels carried by the first page of a key image.
pub const FIRST_PAGE_PIXELS: usize = 2583;

/// Pixels carried by the second page of a key image.
pub const SECOND_PAGE_PIXELS: usize = 2601;

/// Offset of the 1-based key id in both page headers.
pub const KEY_INDEX_OFFSET: usize = 5;

/// First page header: report id 0x02, image command, page number 1, key id
/// slot, then the BMP file header for one 72x72 24-bit image.
pub const FIRST_PAGE_HEADER: [u8; 70] = [
    0x02, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x42, 0x4D, 0xF6, 0x3C, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x36, 0x00, 0x00, 0x00, 0x28, 0x00,
    0x00, 0x00, 0x48, 0x00, 0x00, 0x00, 0x48, 0x00,
    0x00, 0x00, 0x01, 0x00, 0x18, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xC0, 0x3C, 0x00, 0x00, 0xC4, 0x0E,
    0x00, 0x00, 0xC4, 0x0E, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Second page header: report id 0x02, image command, page number 2,
/// final-page flag, key id slot.
pub const SECOND_PAGE_HEADER: [u8; 16] = [
    0x02, 0x01, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Builds the first image page for a key.
pub fn build_first_page(key: u8, payload: &[u8]) -> [u8; PAGE_SIZE] {
    build_page(&FIRST_PAGE_HEADER, key, payload)
}

/// Builds the second image page for a key.
pub fn build_second_page(key: u8, payload: &[u8]) -> [u8; PAGE_SIZE] {
    build_page(&SECOND_PAGE_HEADER, key, payload)
}

/// Frames one page: header, key id, payload, zero fill. Payload bytes
/// beyond the page capacity are dropped.
fn build_page(header: &[u8], key: u8, payload: &[u8]) -> [u8; PAGE_SIZE] {
    let mut page = [0u8; PAGE_SIZE];
    page[..header.len()].copy_from_slice(header);
    let n = payload.len().min(PAGE_SIZE - header.len());
    page[header.len()..header.len() + n].copy_from_slice(&payload[..n]);
    page[KEY_INDEX_OFFSET] = key.wrapping_add(1);
    page
}

/// Decodes an input report into one pressed flag per key.
///
/// Only the exact state byte value 1 counts as a press.
pub fn decode_buttons(report: &[u8]) -> Result<Vec<bool>> {
    if report.len() < INPUT_REPORT_SIZE {
        return Err(Error::ShortRead {
            expected: INPUT_REPORT_SIZE,
            actual: report.len(),
        });
    }
    Ok((0..KEY_COUNT as usize).map(|i| report[i + 1] == 1).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::PIXEL_COUNT;

    #[test]
    fn test_page_headers() {
        // Both pages are report 0x02 carrying the image command.
        assert_eq!(FIRST_PAGE_HEADER[..3], [0x02, 0x01, 0x01]);
        assert_eq!(SECOND_PAGE_HEADER[..5], [0x02, 0x01, 0x02, 0x00, 0x01]);
        // Page 1 embeds a "BM" file header for the 72x72 24-bit image.
        assert_eq!(FIRST_PAGE_HEADER[16..18], [0x42, 0x4D]);
    }

    #[test]
    fn test_page_pixel_counts_cover_one_image() {
        assert_eq!(FIRST_PAGE_PIXELS + SECOND_PAGE_PIXELS, PIXEL_COUNT);
    }

    #[test]
    fn test_build_pages_stamp_key_id() {
        for key in 0..KEY_COUNT {
            let page1 = build_first_page(key, &[]);
            let page2 = build_second_page(key, &[]);
            assert_eq!(page1.len(), PAGE_SIZE);
            assert_eq!(page2.len(), PAGE_SIZE);
            assert_eq!(page1[KEY_INDEX_OFFSET], key + 1);
            assert_eq!(page2[KEY_INDEX_OFFSET], key + 1);
        }
    }

    #[test]
    fn test_build_page_copies_payload_after_header() {
        let payload = [0xAB; 100];
        let page = build_first_page(3, &payload);
        assert_eq!(&page[..KEY_INDEX_OFFSET], &FIRST_PAGE_HEADER[..KEY_INDEX_OFFSET]);
        assert_eq!(&page[70..170], &payload[..]);
        assert!(page[170..].iter().all(|&b| b == 0));

        let page = build_second_page(3, &payload);
        assert_eq!(&page[16..116], &payload[..]);
        assert!(page[116..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_build_page_truncates_oversized_payload() {
        // The solid-color fill path hands over three times the page's pixel
        // count; only the page capacity goes on the wire.
        let payload = vec![0xCD; 3 * 3 * FIRST_PAGE_PIXELS];
        let page = build_first_page(0, &payload);
        assert!(page[FIRST_PAGE_HEADER.len()..].iter().all(|&b| b == 0xCD));

        let payload = vec![0xCD; 3 * 3 * SECOND_PAGE_PIXELS];
        let page = build_second_page(0, &payload);
        assert!(page[SECOND_PAGE_HEADER.len()..].iter().all(|&b| b == 0xCD));
    }

    #[test]
    fn test_decode_buttons() {
        let mut report = [0u8; INPUT_REPORT_SIZE];
        report[0] = 0x01;
        report[1] = 1;
        report[8] = 1;
        report[15] = 1;
        report[4] = 2; // only the exact value 1 is a press
        let buttons = decode_buttons(&report).unwrap();
        assert_eq!(buttons.len(), KEY_COUNT as usize);
        for (i, pressed) in buttons.iter().enumerate() {
            assert_eq!(*pressed, i == 0 || i == 7 || i == 14, "key {}", i);
        }
    }

    #[test]
    fn test_decode_buttons_rejects_short_report() {
        let err = decode_buttons(&[0u8; 10]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShortRead {
                expected: INPUT_REPORT_SIZE,
                actual: 10
            }
        ));
    }
}
