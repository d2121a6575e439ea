extern crate icores;

use icores::{read_resource_header, Bitmap, Error, ErrorClass, Icon};
use std::io::Cursor;
use std::path::PathBuf;

//===========================================================================//

// Returns the blue-green-red color of pixel (x, y), counting rows from the
// top.
fn pixel(x: u32, y: u32) -> [u8; 3] {
    [x as u8, y as u8, (x * 7 + y * 13) as u8]
}

// Encodes a 24-bit BMP file, storing rows bottom-up unless `top_down` is
// set.
fn encode_bmp(width: u32, height: u32, top_down: bool) -> Vec<u8> {
    let row_size = ((24 * width + 31) / 32) * 4;
    let image_size = row_size * height;
    let mut data = Vec::<u8>::new();
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&(54 + image_size).to_le_bytes());
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(&54u32.to_le_bytes());
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&(width as i32).to_le_bytes());
    let stored_height =
        if top_down { -(height as i32) } else { height as i32 };
    data.extend_from_slice(&stored_height.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&24u16.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&image_size.to_le_bytes());
    data.extend_from_slice(&[0u8; 16]);
    for row in 0..height {
        let y = if top_down { row } else { height - 1 - row };
        for x in 0..width {
            data.extend_from_slice(&pixel(x, y));
        }
        for _ in (3 * width)..row_size {
            data.push(0);
        }
    }
    data
}

// Returns the expected top-row-first BGR buffer for `encode_bmp`.
fn expected_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::new();
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&pixel(x, y));
        }
    }
    pixels
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("icores-test-{}-{}", std::process::id(), name))
}

//===========================================================================//

#[test]
fn load_24bit_bitmap() {
    let data = encode_bmp(32, 32, false);
    let bitmap = Bitmap::read(Cursor::new(data)).unwrap();
    assert_eq!(bitmap.width(), 32);
    assert_eq!(bitmap.height(), 32);
    assert_eq!(bitmap.bit_depth(), 24);
    assert_eq!(bitmap.pixels().len(), 32 * 32 * 3);
    assert_eq!(bitmap.pixels(), expected_pixels(32, 32).as_slice());
}

#[test]
fn row_order_does_not_change_pixels() {
    // Width 5 needs one byte of padding per row.
    let bottom_up = Bitmap::read(Cursor::new(encode_bmp(5, 3, false)));
    let top_down = Bitmap::read(Cursor::new(encode_bmp(5, 3, true)));
    let expected = expected_pixels(5, 3);
    assert_eq!(bottom_up.unwrap().pixels(), expected.as_slice());
    assert_eq!(top_down.unwrap().pixels(), expected.as_slice());
}

#[test]
fn load_rejects_bad_signature() {
    let mut data = encode_bmp(4, 4, false);
    data[0] = b'X';
    match Bitmap::read(Cursor::new(data)) {
        Err(Error::NotABitmap { actual }) => assert_eq!(&actual, b"XM"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn load_rejects_compressed_bitmap() {
    let mut data = encode_bmp(4, 4, false);
    data[30] = 1;
    match Bitmap::read(Cursor::new(data)) {
        Err(error @ Error::UnsupportedCompression { actual: 1 }) => {
            assert_eq!(error.class(), ErrorClass::Usage);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn load_rejects_truncated_headers() {
    let data = encode_bmp(4, 4, false);
    match Bitmap::read(Cursor::new(&data[..30])) {
        Err(Error::TruncatedHeader { record: "BITMAPINFOHEADER" }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn open_missing_bitmap() {
    let result = Bitmap::open(temp_path("missing.bmp"));
    assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
}

//===========================================================================//

#[test]
fn convert_bitmap_to_icon() {
    let icon = Icon::from_bmp(Cursor::new(encode_bmp(32, 32, false))).unwrap();
    let header = icon.header();
    assert_eq!(header.reserved, 0);
    assert_eq!(header.resource_type, 1);
    assert_eq!(header.count, 1);
    let expected: &[u8] = b"\
        \x00\x00\x01\x00\x01\x00\
        \x20\x20\x00\x00\x01\x00\x20\x00\xa8\x10\x00\x00\x01\x00";
    assert_eq!(icon.resource_header(), expected);
    assert_eq!(icon.images()[0].len(), 4264);
}

#[test]
fn converted_image_is_bottom_up_bgra_with_empty_mask() {
    let bitmap = Bitmap::read(Cursor::new(encode_bmp(5, 3, true))).unwrap();
    let icon = Icon::from_bitmap(&bitmap).unwrap();
    let image = &icon.images()[0];
    // Height is doubled to account for the AND mask.
    assert_eq!(&image[8..12], &6i32.to_le_bytes());
    let colors = &image[40..(40 + 5 * 3 * 4)];
    for (index, bgra) in colors.chunks_exact(4).enumerate() {
        let x = index as u32 % 5;
        let y = 2 - index as u32 / 5;
        assert_eq!(&bgra[..3], &pixel(x, y));
        assert_eq!(bgra[3], 0xff);
    }
    // Three mask rows of four bytes each, all clear.
    let mask = &image[(40 + 5 * 3 * 4)..];
    assert_eq!(mask, &[0u8; 12][..]);
}

#[test]
fn resource_header_reparses_consistently() {
    let icon = Icon::from_bmp(Cursor::new(encode_bmp(48, 16, false))).unwrap();
    let (header, entries) =
        read_resource_header(&icon.resource_header()).unwrap();
    assert_eq!(header.count as usize, icon.entries().len());
    assert_eq!(entries.len(), icon.entries().len());
    for (reparsed, original) in entries.iter().zip(icon.entries()) {
        assert_eq!(reparsed.width(), original.width());
        assert_eq!(reparsed.height(), original.height());
        assert_eq!(reparsed.bit_count(), original.bit_count());
        assert_eq!(reparsed.icon_id(), original.icon_id());
    }
}

#[test]
fn convert_rejects_32bit_bitmap() {
    let mut data = encode_bmp(8, 8, false);
    // Reinterpret the 24-bit rows as 6x8 pixels at 32 bpp.
    data[18] = 6;
    data[28] = 32;
    match Icon::from_bmp(Cursor::new(data)) {
        Err(Error::UnsupportedBitmapFormat { bit_depth: 32, .. }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn save_ico_and_read_it_back() {
    let bitmap = Bitmap::read(Cursor::new(encode_bmp(16, 16, false))).unwrap();
    let path = temp_path("saved.ico");
    bitmap.save_ico(&path).unwrap();
    let from_file = Icon::open(&path);
    std::fs::remove_file(&path).unwrap();
    let from_file = from_file.unwrap();
    let in_memory = Icon::from_bitmap(&bitmap).unwrap();
    assert_eq!(from_file.resource_header(), in_memory.resource_header());
    assert_eq!(from_file.images(), in_memory.images());
}

#[test]
fn save_ico_to_missing_directory() {
    let bitmap = Bitmap::from_bgr_data(1, 1, vec![0, 0, 0]);
    let path = temp_path("no-such-dir").join("out.ico");
    match bitmap.save_ico(&path) {
        Err(error @ Error::DestinationUnavailable { .. }) => {
            assert_eq!(error.class(), ErrorClass::IoFailure);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

//===========================================================================//
