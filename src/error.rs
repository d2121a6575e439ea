use std::io;
use std::path::PathBuf;

//===========================================================================//

/// A specialized `Result` type for ICO and BMP operations.
pub type Result<T> = std::result::Result<T, Error>;

//===========================================================================//

/// Errors from reading, validating, or converting ICO and BMP data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path could not be opened for reading.
    #[error("failed to open {path:?}: {source}")]
    SourceUnavailable {
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output path could not be opened for writing.
    #[error("failed to create {path:?}: {source}")]
    DestinationUnavailable {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A byte slice was too short to hold a fixed-size record.
    #[error("{record} needs {needed} bytes, but only {actual} are available")]
    TruncatedInput {
        /// The name of the record being decoded.
        record: &'static str,
        /// The encoded size of the record.
        needed: usize,
        /// The number of bytes that were available.
        actual: usize,
    },

    /// The stream ended before a file header was complete.
    #[error("failed to read {record} header: unexpected end of data")]
    TruncatedHeader {
        /// The name of the header being read.
        record: &'static str,
    },

    /// The stream ended inside the ICO directory entry table.
    #[error(
        "failed to read {count} ICONDIRENTRY records: \
         unexpected end of data"
    )]
    TruncatedEntryTable {
        /// The number of entries the header announced.
        count: u16,
    },

    /// The stream ended inside an image payload.
    #[error("failed to read {expected} bytes of image data for entry {index}")]
    TruncatedImageData {
        /// The index of the entry whose payload was cut short.
        index: usize,
        /// The payload size recorded in the entry.
        expected: u32,
    },

    /// The stream ended inside the BMP pixel array.
    #[error("failed to read BMP pixel row {row}: unexpected end of data")]
    TruncatedPixelData {
        /// The zero-based index of the row being read, in file order.
        row: u32,
    },

    /// The ICONDIR reserved field was not zero.
    #[error(
        "invalid reserved field in ICONDIR (was {actual:#x}, but must be 0)"
    )]
    InvalidHeaderReserved {
        /// The value found in the file.
        actual: u16,
    },

    /// The ICONDIR type field says this is a cursor.
    #[error("file is a cursor, not an icon")]
    WrongContainerType,

    /// The ICONDIR type field was neither icon nor cursor.
    #[error("invalid resource type {actual:#x} (must be 1 for icons)")]
    InvalidContainerType {
        /// The value found in the file.
        actual: u16,
    },

    /// The ICONDIR announced zero images.
    #[error("icon does not have any image entries")]
    NoImageEntries,

    /// An ICONDIRENTRY reserved byte was not zero.
    #[error(
        "invalid reserved field in ICONDIRENTRY {index} \
         (was {actual:#x}, but must be 0)"
    )]
    InvalidEntryReserved {
        /// The index of the offending entry.
        index: usize,
        /// The value found in the file.
        actual: u8,
    },

    /// An ICONDIRENTRY color plane count was not 0 or 1.
    #[error(
        "invalid color planes in ICONDIRENTRY {index} \
         (was {actual:#x}, but must be 0 or 1)"
    )]
    InvalidEntryPlanes {
        /// The index of the offending entry.
        index: usize,
        /// The value found in the file.
        actual: u16,
    },

    /// The BMP signature was not `BM`.
    #[error("not a BMP file (signature was {actual:02x?}, expected \"BM\")")]
    NotABitmap {
        /// The two signature bytes found in the file.
        actual: [u8; 2],
    },

    /// The BMP uses a compression method other than `BI_RGB`.
    #[error("unsupported BMP compression {actual} (only 0 is supported)")]
    UnsupportedCompression {
        /// The compression code found in the file.
        actual: u32,
    },

    /// The BMP bit depth is indexed or unknown.
    #[error("unsupported BMP bits-per-pixel ({actual})")]
    UnsupportedBitDepth {
        /// The bit count found in the file.
        actual: u16,
    },

    /// The BMP declares a negative width.
    #[error("invalid BMP dimensions {width}x{height}")]
    InvalidDimensions {
        /// The declared width.
        width: i32,
        /// The declared height.
        height: i32,
    },

    /// The image is too large to represent.
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge {
        /// The image width, in pixels.
        width: u32,
        /// The image height, in pixels.
        height: u32,
    },

    /// The bitmap cannot be written as an icon.
    #[error(
        "bitmap must be non-empty and 24-bit to save as ICO \
         (was {width}x{height} at {bit_depth} bpp)"
    )]
    UnsupportedBitmapFormat {
        /// The bitmap width, in pixels.
        width: u32,
        /// The bitmap height, in pixels.
        height: u32,
        /// The bitmap bits-per-pixel.
        bit_depth: u16,
    },

    /// The icon holds a different number of payloads than entries.
    #[error("icon has {images} images, but {entries} entries")]
    ImageCountMismatch {
        /// The number of image payloads.
        images: usize,
        /// The number of directory entries.
        entries: usize,
    },

    /// An image payload no longer matches the size in its entry.
    #[error("image {index} has {actual} bytes, but its entry says {expected}")]
    ImageSizeMismatch {
        /// The zero-based index of the payload.
        index: usize,
        /// The payload size recorded in the entry.
        expected: u32,
        /// The actual length of the payload.
        actual: usize,
    },

    /// Any other I/O failure from the underlying stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns whether the caller can correct this error by supplying
    /// different input, or whether the underlying stream failed.
    pub fn class(&self) -> ErrorClass {
        match *self {
            Error::TruncatedInput { .. }
            | Error::TruncatedHeader { .. }
            | Error::TruncatedEntryTable { .. }
            | Error::TruncatedImageData { .. }
            | Error::TruncatedPixelData { .. }
            | Error::DestinationUnavailable { .. }
            | Error::Io(_) => ErrorClass::IoFailure,
            _ => ErrorClass::Usage,
        }
    }

    /// Converts an I/O error raised while reading a fixed block, treating an
    /// early end of data as `truncated`.
    pub(crate) fn from_read(error: io::Error, truncated: Error) -> Error {
        if error.kind() == io::ErrorKind::UnexpectedEof {
            truncated
        } else {
            Error::Io(error)
        }
    }
}

//===========================================================================//

/// The broad category of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    /// The input was structurally invalid, or a path could not be opened.
    Usage,
    /// A stream ended early or could not be read or written.
    IoFailure,
}

//===========================================================================//


//===========================================================================//
