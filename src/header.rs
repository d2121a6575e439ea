//! Fixed-layout records of the ICO file format and of the icon group
//! resource that executables embed.

use crate::error::{Error, Result};
use byteorder::{ByteOrder, LittleEndian};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

/// Returns an error unless `bytes` holds at least `needed` bytes.
pub(crate) fn check_len(
    record: &'static str,
    needed: usize,
    bytes: &[u8],
) -> Result<()> {
    if bytes.len() < needed {
        return Err(Error::TruncatedInput {
            record,
            needed,
            actual: bytes.len(),
        });
    }
    Ok(())
}

//===========================================================================//

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
/// The kind of images stored in an ICO-family container.
pub enum ContainerType {
    /// Plain images (ICO files)
    Icon,
    /// Images with cursor hotspots (CUR files)
    Cursor,
}

impl ContainerType {
    /// Returns the container type for a value of the ICONDIR type field, or
    /// `None` if the value is not defined.
    pub fn from_number(number: u16) -> Option<ContainerType> {
        match number {
            1 => Some(ContainerType::Icon),
            2 => Some(ContainerType::Cursor),
            _ => None,
        }
    }

    /// Returns the value stored in the ICONDIR type field.
    pub fn number(&self) -> u16 {
        match *self {
            ContainerType::Icon => 1,
            ContainerType::Cursor => 2,
        }
    }
}

//===========================================================================//

/// The ICONDIR record that starts an ICO file.  Resource directories
/// (NEWHEADER) use the same layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IconHeader {
    /// Reserved, must be 0.
    pub reserved: u16,
    /// 1 for icons, 2 for cursors.
    pub resource_type: u16,
    /// The number of directory entries that follow.
    pub count: u16,
}

impl IconHeader {
    /// The encoded size of the record, in bytes.
    pub const SIZE: usize = 6;

    /// Creates a header for `count` images of the given type.
    pub fn new(container_type: ContainerType, count: u16) -> IconHeader {
        IconHeader {
            reserved: 0,
            resource_type: container_type.number(),
            count,
        }
    }

    /// Returns the container type named by the type field, if it is valid.
    pub fn container_type(&self) -> Option<ContainerType> {
        ContainerType::from_number(self.resource_type)
    }

    /// Decodes the record from the start of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<IconHeader> {
        check_len("ICONDIR", IconHeader::SIZE, bytes)?;
        Ok(IconHeader {
            reserved: LittleEndian::read_u16(&bytes[0..2]),
            resource_type: LittleEndian::read_u16(&bytes[2..4]),
            count: LittleEndian::read_u16(&bytes[4..6]),
        })
    }

    /// Encodes the record.
    pub fn encode(&self) -> [u8; IconHeader::SIZE] {
        let mut bytes = [0u8; IconHeader::SIZE];
        LittleEndian::write_u16(&mut bytes[0..2], self.reserved);
        LittleEndian::write_u16(&mut bytes[2..4], self.resource_type);
        LittleEndian::write_u16(&mut bytes[4..6], self.count);
        bytes
    }
}

//===========================================================================//

/// One ICONDIRENTRY record of an ICO file, as stored on disk.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IconDirEntry {
    /// Image width in pixels; 0 means 256.
    pub width: u8,
    /// Image height in pixels; 0 means 256.
    pub height: u8,
    /// Number of palette colors, or 0 for direct-color images.
    pub color_count: u8,
    /// Reserved, must be 0.
    pub reserved: u8,
    /// Color planes, 0 or 1.
    pub planes: u16,
    /// Bits per pixel.
    pub bit_count: u16,
    /// Size of the image payload, in bytes.
    pub image_size: u32,
    /// Offset of the image payload from the start of the file.
    pub image_offset: u32,
}

impl IconDirEntry {
    /// The encoded size of the record, in bytes.
    pub const SIZE: usize = 16;

    /// Decodes the record from the start of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<IconDirEntry> {
        check_len("ICONDIRENTRY", IconDirEntry::SIZE, bytes)?;
        Ok(IconDirEntry {
            width: bytes[0],
            height: bytes[1],
            color_count: bytes[2],
            reserved: bytes[3],
            planes: LittleEndian::read_u16(&bytes[4..6]),
            bit_count: LittleEndian::read_u16(&bytes[6..8]),
            image_size: LittleEndian::read_u32(&bytes[8..12]),
            image_offset: LittleEndian::read_u32(&bytes[12..16]),
        })
    }

    /// Encodes the record.
    pub fn encode(&self) -> [u8; IconDirEntry::SIZE] {
        let mut bytes = [0u8; IconDirEntry::SIZE];
        bytes[0] = self.width;
        bytes[1] = self.height;
        bytes[2] = self.color_count;
        bytes[3] = self.reserved;
        LittleEndian::write_u16(&mut bytes[4..6], self.planes);
        LittleEndian::write_u16(&mut bytes[6..8], self.bit_count);
        LittleEndian::write_u32(&mut bytes[8..12], self.image_size);
        LittleEndian::write_u32(&mut bytes[12..16], self.image_offset);
        bytes
    }
}

//===========================================================================//

/// One RESDIR record of an icon group resource.  It carries the same image
/// metadata as an [`IconDirEntry`], but names the image by the ordinal of
/// its `RT_ICON` resource instead of by a file offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ResourceEntry {
    width: u8,
    height: u8,
    color_count: u8,
    reserved: u8,
    planes: u16,
    bit_count: u16,
    resource_size: u32,
    icon_id: u16,
}

impl ResourceEntry {
    /// The encoded size of the record, in bytes.
    pub const SIZE: usize = 14;

    pub(crate) fn from_dir_entry(
        entry: &IconDirEntry,
        icon_id: u16,
    ) -> ResourceEntry {
        ResourceEntry {
            width: entry.width,
            height: entry.height,
            color_count: entry.color_count,
            reserved: entry.reserved,
            planes: entry.planes,
            bit_count: entry.bit_count,
            resource_size: entry.image_size,
            icon_id,
        }
    }

    /// Builds the file-form directory entry for this image, placing its
    /// payload at `image_offset`.
    pub(crate) fn to_dir_entry(&self, image_offset: u32) -> IconDirEntry {
        IconDirEntry {
            width: self.width,
            height: self.height,
            color_count: self.color_count,
            reserved: self.reserved,
            planes: self.planes,
            bit_count: self.bit_count,
            image_size: self.resource_size,
            image_offset,
        }
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        if self.width == 0 {
            256
        } else {
            self.width as u32
        }
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        if self.height == 0 {
            256
        } else {
            self.height as u32
        }
    }

    /// Returns the number of palette colors, or 0 for direct-color images.
    pub fn color_count(&self) -> u8 {
        self.color_count
    }

    /// Returns the reserved byte.  Always 0 for validated entries.
    pub fn reserved(&self) -> u8 {
        self.reserved
    }

    /// Returns the number of color planes (0 or 1).
    pub fn planes(&self) -> u16 {
        self.planes
    }

    /// Returns the bits-per-pixel (color depth) of the image.
    pub fn bit_count(&self) -> u16 {
        self.bit_count
    }

    /// Returns the size of the image payload, in bytes.
    pub fn resource_size(&self) -> u32 {
        self.resource_size
    }

    /// Returns the ordinal of the `RT_ICON` resource holding the payload.
    pub fn icon_id(&self) -> u16 {
        self.icon_id
    }

    /// Decodes the record from the start of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<ResourceEntry> {
        check_len("RESDIR", ResourceEntry::SIZE, bytes)?;
        Ok(ResourceEntry {
            width: bytes[0],
            height: bytes[1],
            color_count: bytes[2],
            reserved: bytes[3],
            planes: LittleEndian::read_u16(&bytes[4..6]),
            bit_count: LittleEndian::read_u16(&bytes[6..8]),
            resource_size: LittleEndian::read_u32(&bytes[8..12]),
            icon_id: LittleEndian::read_u16(&bytes[12..14]),
        })
    }

    /// Encodes the record.
    pub fn encode(&self) -> [u8; ResourceEntry::SIZE] {
        let mut bytes = [0u8; ResourceEntry::SIZE];
        bytes[0] = self.width;
        bytes[1] = self.height;
        bytes[2] = self.color_count;
        bytes[3] = self.reserved;
        LittleEndian::write_u16(&mut bytes[4..6], self.planes);
        LittleEndian::write_u16(&mut bytes[6..8], self.bit_count);
        LittleEndian::write_u32(&mut bytes[8..12], self.resource_size);
        LittleEndian::write_u16(&mut bytes[12..14], self.icon_id);
        bytes
    }
}

//===========================================================================//


//===========================================================================//
