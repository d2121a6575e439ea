use crate::bmpdepth::BmpDepth;
use crate::bmpheader::{BitmapFileHeader, BitmapInfoHeader, BMP_SIGNATURE};
use crate::error::{Error, Result};
use crate::header::{ContainerType, IconDirEntry, IconHeader};
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

//===========================================================================//

/// The largest width or height that an ICO directory entry can describe.
pub const MAX_ICON_DIMENSION: u32 = 256;

//===========================================================================//

/// An uncompressed bitmap image, decoded from a BMP file.
#[derive(Clone, Debug)]
pub struct Bitmap {
    width: u32,
    height: u32,
    depth: BmpDepth,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Creates a new 24-bit bitmap with the given dimensions and pixel data.
    /// `pixels` must hold `3 * width * height` bytes in blue-green-red
    /// order, row-major from top to bottom, without row padding.  Panics if
    /// `pixels` is the wrong length.
    pub fn from_bgr_data(width: u32, height: u32, pixels: Vec<u8>) -> Bitmap {
        let expected_data_len = (width as u64) * (height as u64) * 3;
        if (pixels.len() as u64) != expected_data_len {
            panic!(
                "Invalid data length (was {}, but must be {} for {}x{} image)",
                pixels.len(),
                expected_data_len,
                width,
                height
            );
        }
        Bitmap { width, height, depth: BmpDepth::TwentyFour, pixels }
    }

    /// Opens and decodes the BMP file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Bitmap> {
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
        Bitmap::read(BufReader::new(file))
    }

    /// Decodes an uncompressed BMP file.  The pixel rows are stored top row
    /// first, whichever order the file uses.
    pub fn read<R: Read + Seek>(mut reader: R) -> Result<Bitmap> {
        let mut buffer = [0u8; BitmapFileHeader::SIZE];
        read_exact_or!(
            reader,
            &mut buffer,
            Error::TruncatedHeader { record: "BITMAPFILEHEADER" }
        );
        let file_header = BitmapFileHeader::decode(&buffer)?;
        let mut buffer = [0u8; BitmapInfoHeader::SIZE];
        read_exact_or!(
            reader,
            &mut buffer,
            Error::TruncatedHeader { record: "BITMAPINFOHEADER" }
        );
        let info_header = BitmapInfoHeader::decode(&buffer)?;

        if file_header.signature != BMP_SIGNATURE {
            return Err(Error::NotABitmap { actual: file_header.signature });
        }
        if info_header.compression != 0 {
            return Err(Error::UnsupportedCompression {
                actual: info_header.compression,
            });
        }
        if info_header.width < 0 {
            return Err(Error::InvalidDimensions {
                width: info_header.width,
                height: info_header.height,
            });
        }
        let depth = match BmpDepth::from_bits_per_pixel(info_header.bit_count)
        {
            Some(depth) => depth,
            None => {
                return Err(Error::UnsupportedBitDepth {
                    actual: info_header.bit_count,
                })
            }
        };

        // A negative height marks a top-down bitmap; otherwise rows are
        // stored starting from the *bottom* row.
        let top_down = info_header.height < 0;
        let width = info_header.width as u32;
        let height = info_header.height.unsigned_abs();
        let too_large = Error::DimensionsTooLarge { width, height };
        let padded_row_size = match depth.padded_row_size(width) {
            Some(size) => size,
            None => return Err(too_large),
        };
        let raw_row_size = width as usize * depth.bytes_per_pixel();
        let pixels_len = match raw_row_size.checked_mul(height as usize) {
            Some(len) => len,
            None => return Err(too_large),
        };

        // Rows are collected in file order, then flipped if the file stores
        // them bottom-up.
        reader.seek(SeekFrom::Start(file_header.pixel_data_offset as u64))?;
        let mut pixels = Vec::<u8>::new();
        let mut row_data = Vec::<u8>::new();
        for row in 0..height {
            row_data.clear();
            reader
                .by_ref()
                .take(padded_row_size as u64)
                .read_to_end(&mut row_data)?;
            if row_data.len() != padded_row_size {
                return Err(Error::TruncatedPixelData { row });
            }
            pixels.extend_from_slice(&row_data[..raw_row_size]);
        }
        debug_assert_eq!(pixels.len(), pixels_len);
        if !top_down && raw_row_size > 0 {
            pixels = pixels
                .chunks_exact(raw_row_size)
                .rev()
                .flatten()
                .copied()
                .collect();
        }
        debug!(
            "loaded {}x{} bitmap at {} bpp ({})",
            width,
            height,
            depth.bits_per_pixel(),
            if top_down { "top-down" } else { "bottom-up" }
        );
        Ok(Bitmap { width, height, depth, pixels })
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the bits-per-pixel (color depth) of the image.
    pub fn bit_depth(&self) -> u16 {
        self.depth.bits_per_pixel()
    }

    /// Returns the color depth of the image.
    pub fn depth(&self) -> BmpDepth {
        self.depth
    }

    /// Returns the pixel data in row-major order from top to bottom, with
    /// no row padding.  Channels are in the order stored by the BMP file
    /// (blue, green, red, and alpha for 32-bit images).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Writes this 24-bit bitmap as an ICO file holding a single 32-bit
    /// image.  Every pixel is fully opaque.
    pub fn write_ico<W: Write>(&self, mut writer: W) -> Result<()> {
        let width = self.width;
        let height = self.height;
        if width == 0 || height == 0 || self.depth != BmpDepth::TwentyFour {
            return Err(Error::UnsupportedBitmapFormat {
                width,
                height,
                bit_depth: self.bit_depth(),
            });
        }
        if width > MAX_ICON_DIMENSION || height > MAX_ICON_DIMENSION {
            return Err(Error::DimensionsTooLarge { width, height });
        }

        // Color data is 32 bpp; the AND mask is 1 bpp, with each row padded
        // to a multiple of four bytes.
        let color_size = width * height * 4;
        let mask_row_size = ((width + 31) / 32) * 4;
        let mask_size = mask_row_size * height;
        let image_size =
            BitmapInfoHeader::SIZE as u32 + color_size + mask_size;

        writer.write_all(&IconHeader::new(ContainerType::Icon, 1).encode())?;
        let entry = IconDirEntry {
            // A width/height byte of zero indicates a size of 256.
            width: if width >= 256 { 0 } else { width as u8 },
            height: if height >= 256 { 0 } else { height as u8 },
            color_count: 0,
            reserved: 0,
            planes: 1,
            bit_count: 32,
            image_size,
            image_offset: (IconHeader::SIZE + IconDirEntry::SIZE) as u32,
        };
        writer.write_all(&entry.encode())?;

        // The height is stored doubled, counting the rows of both the color
        // data and the AND mask.
        let info_header = BitmapInfoHeader {
            header_size: BitmapInfoHeader::SIZE as u32,
            width: width as i32,
            height: 2 * height as i32,
            planes: 1,
            bit_count: 32,
            compression: 0,
            image_size: color_size,
            ..BitmapInfoHeader::default()
        };
        writer.write_all(&info_header.encode())?;

        // Write the color data, starting from the *bottom* row:
        let mut row_data = Vec::<u8>::with_capacity(4 * width as usize);
        for row in self.pixels.chunks_exact(3 * width as usize).rev() {
            row_data.clear();
            for bgr in row.chunks_exact(3) {
                row_data.extend_from_slice(bgr);
                row_data.push(u8::MAX);
            }
            writer.write_all(&row_data)?;
        }

        // Write the AND mask; no pixel is transparent.
        let mask_row = vec![0u8; mask_row_size as usize];
        for _ in 0..height {
            writer.write_all(&mask_row)?;
        }
        Ok(())
    }

    /// Encodes this 24-bit bitmap as an in-memory ICO file.
    pub fn to_ico_bytes(&self) -> Result<Vec<u8>> {
        let mut data = Vec::<u8>::new();
        self.write_ico(&mut data)?;
        Ok(data)
    }

    /// Writes this 24-bit bitmap as an ICO file at `path`.
    pub fn save_ico<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = match File::create(path) {
            Ok(file) => file,
            Err(source) => {
                return Err(Error::DestinationUnavailable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let mut writer = BufWriter::new(file);
        self.write_ico(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

//===========================================================================//


//===========================================================================//
