extern crate icores;

use icores::{Error, ErrorClass, Icon};

//===========================================================================//

// ICONDIR and one ICONDIRENTRY for a 32x32, 32 bpp image of 0x10a8 bytes.
const SINGLE_IMAGE_DIR: &[u8] = b"\
    \x00\x00\x01\x00\x01\x00\
    \x20\x20\x00\x00\x01\x00\x20\x00\xa8\x10\x00\x00\x16\x00\x00\x00";

// The matching icon group resource.
const SINGLE_IMAGE_RESOURCE: &[u8] = b"\
    \x00\x00\x01\x00\x01\x00\
    \x20\x20\x00\x00\x01\x00\x20\x00\xa8\x10\x00\x00\x01\x00";

fn single_image_icon() -> Vec<u8> {
    let mut data = SINGLE_IMAGE_DIR.to_vec();
    data.extend((0..0x10a8).map(|index| (index % 251) as u8));
    data
}

// Two 16x16 entries with 2-byte payloads, the second entry invalid at
// `byte` of its record.
fn second_entry_with(byte: usize, value: u8) -> Vec<u8> {
    let mut data = b"\x00\x00\x01\x00\x02\x00".to_vec();
    for offset in [0x26u8, 0x28] {
        data.extend_from_slice(&[16, 16, 0, 0, 1, 0, 32, 0]);
        data.extend_from_slice(&[2, 0, 0, 0, offset, 0, 0, 0]);
    }
    data[6 + 16 + byte] = value;
    data.extend_from_slice(b"\xaa\xbb\xcc\xdd");
    data
}

fn read_err(data: &[u8]) -> Error {
    match Icon::read(data) {
        Ok(_) => panic!("reading {:02x?} unexpectedly succeeded", data),
        Err(error) => error,
    }
}

//===========================================================================//

#[test]
fn read_single_image_icon() {
    let data = single_image_icon();
    let mut icon = Icon::read(data.as_slice()).unwrap();
    // One 6-byte header plus one 14-byte RESDIR record.
    assert_eq!(icon.resource_header().len(), 20);
    assert_eq!(icon.resource_header(), SINGLE_IMAGE_RESOURCE);
    assert_eq!(icon.entries().len(), 1);
    assert_eq!(icon.entries()[0].icon_id(), 1);
    assert_eq!(icon.entries()[0].width(), 32);
    assert_eq!(icon.entries()[0].height(), 32);
    let images = icon.images_mut();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].len(), 4264);
    assert_eq!(images[0].as_slice(), &data[22..]);
}

#[test]
fn icon_ids_follow_read_order() {
    let mut data = b"\x00\x00\x01\x00\x03\x00".to_vec();
    for size in 1..4u8 {
        data.extend_from_slice(&[size, size, 0, 0, 1, 0, 32, 0]);
        data.extend_from_slice(&[size, 0, 0, 0, 0, 0, 0, 0]);
    }
    data.extend_from_slice(b"\x01\x02\x02\x03\x03\x03");
    let icon = Icon::read(data.as_slice()).unwrap();
    let ids: Vec<u16> =
        icon.entries().iter().map(|entry| entry.icon_id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    for (index, image) in icon.images().iter().enumerate() {
        assert_eq!(image.len(), index + 1);
        assert!(image.iter().all(|&byte| byte as usize == index + 1));
    }
}

#[test]
fn short_input_is_a_truncated_header() {
    let data = single_image_icon();
    for len in 0..6 {
        match read_err(&data[..len]) {
            Error::TruncatedHeader { record: "ICONDIR" } => {}
            other => panic!("unexpected error for {} bytes: {:?}", len, other),
        }
    }
}

#[test]
fn header_reserved_must_be_zero() {
    let mut data = single_image_icon();
    data[0] = 0xff;
    data[1] = 0xff;
    match read_err(&data) {
        Error::InvalidHeaderReserved { actual: 0xffff } => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn cursors_are_rejected() {
    let mut data = single_image_icon();
    data[2] = 2;
    assert!(matches!(read_err(&data), Error::WrongContainerType));
}

#[test]
fn unknown_types_are_rejected() {
    let mut data = single_image_icon();
    data[2] = 3;
    match read_err(&data) {
        Error::InvalidContainerType { actual: 3 } => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn header_checks_stop_at_first_failure() {
    // Reserved is checked before the type, and the type before the count.
    let error = read_err(b"\x01\x00\x02\x00\x00\x00");
    assert!(matches!(error, Error::InvalidHeaderReserved { actual: 1 }));
    let error = read_err(b"\x00\x00\x02\x00\x00\x00");
    assert!(matches!(error, Error::WrongContainerType));
}

#[test]
fn empty_icons_are_rejected() {
    let error = read_err(b"\x00\x00\x01\x00\x00\x00");
    assert!(matches!(error, Error::NoImageEntries));
    assert_eq!(error.class(), ErrorClass::Usage);
}

#[test]
fn entry_reserved_must_be_zero() {
    let mut data = single_image_icon();
    data[9] = 0x7f;
    match read_err(&data) {
        Error::InvalidEntryReserved { index: 0, actual: 0x7f } => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn entry_planes_must_be_zero_or_one() {
    let mut data = single_image_icon();
    data[10] = 0;
    assert!(Icon::read(data.as_slice()).is_ok());
    data[10] = 2;
    match read_err(&data) {
        Error::InvalidEntryPlanes { index: 0, actual: 2 } => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn second_entry_reserved_must_be_zero() {
    let data = second_entry_with(3, 0x01);
    match read_err(&data) {
        Error::InvalidEntryReserved { index: 1, actual: 0x01 } => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn second_entry_planes_must_be_zero_or_one() {
    let data = second_entry_with(4, 2);
    match read_err(&data) {
        Error::InvalidEntryPlanes { index: 1, actual: 2 } => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn entries_are_checked_after_earlier_payloads() {
    // Entry 0's payload is cut short, so the bad planes value in entry 1
    // is never reached.
    let data = second_entry_with(4, 2);
    match read_err(&data[..6 + 32 + 1]) {
        Error::TruncatedImageData { index: 0, expected: 2 } => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn truncated_entry_table() {
    let data = single_image_icon();
    let error = read_err(&data[..21]);
    assert!(matches!(error, Error::TruncatedEntryTable { count: 1 }));
    assert_eq!(error.class(), ErrorClass::IoFailure);
}

#[test]
fn truncated_image_data() {
    let data = single_image_icon();
    match read_err(&data[..data.len() - 1]) {
        Error::TruncatedImageData { index: 0, expected: 0x10a8 } => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn open_missing_file() {
    match Icon::open("tests/no-such-icon.ico") {
        Err(error @ Error::SourceUnavailable { .. }) => {
            assert_eq!(error.class(), ErrorClass::Usage);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

//===========================================================================//
