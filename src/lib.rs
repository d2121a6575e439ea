//! A library for reading ICO files into the form needed to embed them as
//! icon group resources in an executable, and for converting uncompressed
//! 24-bit BMP images into single-image ICO files.
//!
//! # Reading an icon
//!
//! ```no_run
//! let icon = icores::Icon::open("app.ico").unwrap();
//! // The RT_GROUP_ICON resource data:
//! let group = icon.resource_header();
//! // One RT_ICON resource per image, named by its entry's icon ID:
//! for (entry, data) in icon.entries().iter().zip(icon.images()) {
//!     println!("icon {}: {} bytes", entry.icon_id(), data.len());
//! }
//! # let _ = group;
//! ```
//!
//! # Converting a bitmap
//!
//! ```no_run
//! let bitmap = icores::Bitmap::open("app.bmp").unwrap();
//! bitmap.save_ico("app.ico").unwrap();
//! // Or go straight to a validated icon, without touching the disk:
//! let icon = icores::Icon::from_bitmap(&bitmap).unwrap();
//! assert_eq!(icon.entries().len(), 1);
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod bitmap;
mod bmpdepth;
mod bmpheader;
mod convert;
mod error;
mod header;
mod icon;

pub use crate::bitmap::{Bitmap, MAX_ICON_DIMENSION};
pub use crate::bmpdepth::BmpDepth;
pub use crate::bmpheader::{BitmapFileHeader, BitmapInfoHeader, BMP_SIGNATURE};
pub use crate::error::{Error, ErrorClass, Result};
pub use crate::header::{
    ContainerType, IconDirEntry, IconHeader, ResourceEntry,
};
pub use crate::icon::{read_resource_header, Icon};

//===========================================================================//
