use crate::error::{Error, Result};
use crate::header::{ContainerType, IconDirEntry, IconHeader, ResourceEntry};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

//===========================================================================//

/// A validated icon file, held in the form needed to embed it as an icon
/// group resource in an executable.
#[derive(Clone, Debug)]
pub struct Icon {
    header: IconHeader,
    entries: Vec<ResourceEntry>,
    images: Vec<Vec<u8>>,
}

impl Icon {
    /// Opens and reads the ICO file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Icon> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                return Err(Error::SourceUnavailable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Icon::read(BufReader::new(file))
    }

    /// Reads an ICO file into memory, validating its header and directory.
    ///
    /// Image payloads are read in entry order, immediately following the
    /// directory; the offsets stored in the directory are not used to seek.
    pub fn read<R: Read>(mut reader: R) -> Result<Icon> {
        let mut buffer = [0u8; IconHeader::SIZE];
        read_exact_or!(
            reader,
            &mut buffer,
            Error::TruncatedHeader { record: "ICONDIR" }
        );
        let header = IconHeader::decode(&buffer)?;
        validate_header(&header)?;

        let count = header.count;
        let mut table = vec![0u8; count as usize * IconDirEntry::SIZE];
        read_exact_or!(
            reader,
            &mut table,
            Error::TruncatedEntryTable { count }
        );
        let dir_entries = table
            .chunks_exact(IconDirEntry::SIZE)
            .map(IconDirEntry::decode)
            .collect::<Result<Vec<IconDirEntry>>>()?;

        let mut position = (IconHeader::SIZE + table.len()) as u64;
        let mut images = Vec::<Vec<u8>>::with_capacity(dir_entries.len());
        for (index, entry) in dir_entries.iter().enumerate() {
            if entry.reserved != 0 {
                return Err(Error::InvalidEntryReserved {
                    index,
                    actual: entry.reserved,
                });
            }
            if entry.planes > 1 {
                return Err(Error::InvalidEntryPlanes {
                    index,
                    actual: entry.planes,
                });
            }
            if entry.image_offset as u64 != position {
                warn!(
                    "ICONDIRENTRY {} says its image is at offset {}, but \
                     reading it sequentially from offset {}",
                    index, entry.image_offset, position
                );
            }
            let expected = entry.image_size;
            let mut data = Vec::new();
            reader.by_ref().take(expected as u64).read_to_end(&mut data)?;
            if data.len() as u64 != expected as u64 {
                return Err(Error::TruncatedImageData { index, expected });
            }
            position += expected as u64;
            images.push(data);
        }

        let mut entries = Vec::with_capacity(dir_entries.len());
        for (index, entry) in dir_entries.iter().enumerate() {
            // The header count is a u16, so this cannot overflow.
            let icon_id = index as u16 + 1;
            let entry = ResourceEntry::from_dir_entry(entry, icon_id);
            debug!(
                "icon {}: {}x{}, {} colors, {} planes, {} bpp, {} bytes",
                entry.icon_id(),
                entry.width(),
                entry.height(),
                entry.color_count(),
                entry.planes(),
                entry.bit_count(),
                entry.resource_size()
            );
            entries.push(entry);
        }
        Ok(Icon { header, entries, images })
    }

    /// Returns the validated file header.  It doubles as the header of the
    /// icon group resource.
    pub fn header(&self) -> IconHeader {
        self.header
    }

    /// Returns the resource directory entries, in file order.  Their icon
    /// IDs run from 1 upward.
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    /// Returns the raw image payloads, index-aligned with `entries()`.
    pub fn images(&self) -> &[Vec<u8>] {
        &self.images
    }

    /// Returns the raw image payloads for in-place use.  Each payload is
    /// embedded as the `RT_ICON` resource named by the matching entry's
    /// icon ID.
    pub fn images_mut(&mut self) -> &mut Vec<Vec<u8>> {
        &mut self.images
    }

    /// Serializes the icon group resource: the header followed by one RESDIR
    /// record per image.
    pub fn resource_header(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(
            IconHeader::SIZE + self.entries.len() * ResourceEntry::SIZE,
        );
        data.extend_from_slice(&self.header.encode());
        for entry in self.entries.iter() {
            data.extend_from_slice(&entry.encode());
        }
        data
    }

    /// Writes the icon group resource produced by `resource_header()`.
    pub fn write_resource_header<W: Write>(
        &self,
        mut writer: W,
    ) -> Result<()> {
        writer.write_all(&self.resource_header())?;
        Ok(())
    }

    /// Writes the icon back out as an ICO file, with its images stored
    /// contiguously after the directory.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        if self.images.len() != self.entries.len() {
            return Err(Error::ImageCountMismatch {
                images: self.images.len(),
                entries: self.entries.len(),
            });
        }
        writer.write_all(&self.header.encode())?;
        let mut data_offset = (IconHeader::SIZE
            + IconDirEntry::SIZE * self.entries.len())
            as u32;
        let pairs = self.entries.iter().zip(self.images.iter());
        for (index, (entry, data)) in pairs.enumerate() {
            if data.len() as u64 != entry.resource_size() as u64 {
                return Err(Error::ImageSizeMismatch {
                    index,
                    expected: entry.resource_size(),
                    actual: data.len(),
                });
            }
            writer.write_all(&entry.to_dir_entry(data_offset).encode())?;
            data_offset = data_offset.wrapping_add(entry.resource_size());
        }
        for data in self.images.iter() {
            writer.write_all(data)?;
        }
        Ok(())
    }
}

//===========================================================================//

/// Decodes an icon group resource as produced by [`Icon::resource_header`],
/// applying the same header checks as [`Icon::read`].
pub fn read_resource_header(
    bytes: &[u8],
) -> Result<(IconHeader, Vec<ResourceEntry>)> {
    let header = IconHeader::decode(bytes)?;
    validate_header(&header)?;
    let records = &bytes[IconHeader::SIZE..];
    let entries = (0..header.count as usize)
        .map(|index| {
            let start = (index * ResourceEntry::SIZE).min(records.len());
            ResourceEntry::decode(&records[start..])
        })
        .collect::<Result<Vec<ResourceEntry>>>()?;
    Ok((header, entries))
}

fn validate_header(header: &IconHeader) -> Result<()> {
    if header.reserved != 0 {
        return Err(Error::InvalidHeaderReserved { actual: header.reserved });
    }
    match header.container_type() {
        Some(ContainerType::Icon) => {}
        Some(ContainerType::Cursor) => return Err(Error::WrongContainerType),
        None => {
            return Err(Error::InvalidContainerType {
                actual: header.resource_type,
            })
        }
    }
    if header.count == 0 {
        return Err(Error::NoImageEntries);
    }
    Ok(())
}

//===========================================================================//


//===========================================================================//
