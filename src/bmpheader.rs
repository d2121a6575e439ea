//! Fixed-layout records of the Windows BMP format.

use crate::error::Result;
use crate::header::check_len;
use byteorder::{ByteOrder, LittleEndian};

//===========================================================================//

/// The signature that all BMP files start with.
pub const BMP_SIGNATURE: [u8; 2] = *b"BM";

//===========================================================================//

/// The BITMAPFILEHEADER record that starts a BMP file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BitmapFileHeader {
    /// File signature; `BM` for bitmaps.
    pub signature: [u8; 2],
    /// Size of the whole file, in bytes.
    pub file_size: u32,
    /// Reserved.
    pub reserved1: u16,
    /// Reserved.
    pub reserved2: u16,
    /// Offset of the pixel array from the start of the file.
    pub pixel_data_offset: u32,
}

impl BitmapFileHeader {
    /// The encoded size of the record, in bytes.
    pub const SIZE: usize = 14;

    /// Decodes the record from the start of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<BitmapFileHeader> {
        check_len("BITMAPFILEHEADER", BitmapFileHeader::SIZE, bytes)?;
        Ok(BitmapFileHeader {
            signature: [bytes[0], bytes[1]],
            file_size: LittleEndian::read_u32(&bytes[2..6]),
            reserved1: LittleEndian::read_u16(&bytes[6..8]),
            reserved2: LittleEndian::read_u16(&bytes[8..10]),
            pixel_data_offset: LittleEndian::read_u32(&bytes[10..14]),
        })
    }

    /// Encodes the record.
    pub fn encode(&self) -> [u8; BitmapFileHeader::SIZE] {
        let mut bytes = [0u8; BitmapFileHeader::SIZE];
        bytes[0..2].copy_from_slice(&self.signature);
        LittleEndian::write_u32(&mut bytes[2..6], self.file_size);
        LittleEndian::write_u16(&mut bytes[6..8], self.reserved1);
        LittleEndian::write_u16(&mut bytes[8..10], self.reserved2);
        LittleEndian::write_u32(&mut bytes[10..14], self.pixel_data_offset);
        bytes
    }
}

//===========================================================================//

/// The BITMAPINFOHEADER record.  In a BMP file it follows the file header;
/// in an icon image it starts the payload.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BitmapInfoHeader {
    /// Size of this record, in bytes.
    pub header_size: u32,
    /// Image width, in pixels.
    pub width: i32,
    /// Image height, in pixels.  Negative for top-down row order.
    pub height: i32,
    /// Color planes; always 1.
    pub planes: u16,
    /// Bits per pixel.
    pub bit_count: u16,
    /// Compression method; 0 for uncompressed.
    pub compression: u32,
    /// Size of the pixel array, in bytes (may be 0 when uncompressed).
    pub image_size: u32,
    /// Horizontal resolution, in pixels per meter.
    pub x_pels_per_meter: i32,
    /// Vertical resolution, in pixels per meter.
    pub y_pels_per_meter: i32,
    /// Number of palette colors used.
    pub colors_used: u32,
    /// Number of palette colors required for display.
    pub colors_important: u32,
}

impl BitmapInfoHeader {
    /// The encoded size of the record, in bytes.
    pub const SIZE: usize = 40;

    /// Decodes the record from the start of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<BitmapInfoHeader> {
        check_len("BITMAPINFOHEADER", BitmapInfoHeader::SIZE, bytes)?;
        Ok(BitmapInfoHeader {
            header_size: LittleEndian::read_u32(&bytes[0..4]),
            width: LittleEndian::read_i32(&bytes[4..8]),
            height: LittleEndian::read_i32(&bytes[8..12]),
            planes: LittleEndian::read_u16(&bytes[12..14]),
            bit_count: LittleEndian::read_u16(&bytes[14..16]),
            compression: LittleEndian::read_u32(&bytes[16..20]),
            image_size: LittleEndian::read_u32(&bytes[20..24]),
            x_pels_per_meter: LittleEndian::read_i32(&bytes[24..28]),
            y_pels_per_meter: LittleEndian::read_i32(&bytes[28..32]),
            colors_used: LittleEndian::read_u32(&bytes[32..36]),
            colors_important: LittleEndian::read_u32(&bytes[36..40]),
        })
    }

    /// Encodes the record.
    pub fn encode(&self) -> [u8; BitmapInfoHeader::SIZE] {
        let mut bytes = [0u8; BitmapInfoHeader::SIZE];
        LittleEndian::write_u32(&mut bytes[0..4], self.header_size);
        LittleEndian::write_i32(&mut bytes[4..8], self.width);
        LittleEndian::write_i32(&mut bytes[8..12], self.height);
        LittleEndian::write_u16(&mut bytes[12..14], self.planes);
        LittleEndian::write_u16(&mut bytes[14..16], self.bit_count);
        LittleEndian::write_u32(&mut bytes[16..20], self.compression);
        LittleEndian::write_u32(&mut bytes[20..24], self.image_size);
        LittleEndian::write_i32(&mut bytes[24..28], self.x_pels_per_meter);
        LittleEndian::write_i32(&mut bytes[28..32], self.y_pels_per_meter);
        LittleEndian::write_u32(&mut bytes[32..36], self.colors_used);
        LittleEndian::write_u32(&mut bytes[36..40], self.colors_important);
        bytes
    }
}

//===========================================================================//


//===========================================================================//
