use crate::bitmap::Bitmap;
use crate::error::Result;
use crate::icon::Icon;
use log::debug;
use std::io::{Read, Seek};
use std::path::Path;

//===========================================================================//

impl Icon {
    /// Builds a single-image icon from a 24-bit bitmap.
    ///
    /// The bitmap is encoded as an ICO file in memory and then read back
    /// with [`Icon::read`], so the result passes the same validation as an
    /// icon loaded from disk.
    pub fn from_bitmap(bitmap: &Bitmap) -> Result<Icon> {
        let data = bitmap.to_ico_bytes()?;
        let icon = Icon::read(data.as_slice())?;
        debug!(
            "converted {}x{} bitmap into a {}-byte icon image",
            bitmap.width(),
            bitmap.height(),
            data.len()
        );
        Ok(icon)
    }

    /// Decodes a 24-bit BMP file and builds a single-image icon from it.
    pub fn from_bmp<R: Read + Seek>(reader: R) -> Result<Icon> {
        Icon::from_bitmap(&Bitmap::read(reader)?)
    }

    /// Opens the 24-bit BMP file at `path` and builds a single-image icon
    /// from it.
    pub fn from_bmp_file<P: AsRef<Path>>(path: P) -> Result<Icon> {
        Icon::from_bitmap(&Bitmap::open(path)?)
    }
}

//===========================================================================//


//===========================================================================//
