#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

/// A direct-color BMP bit depth.  Palette-based depths are not supported.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum BmpDepth {
    /// 16 bits per pixel
    Sixteen,
    /// 24 bits per pixel, stored as blue-green-red
    TwentyFour,
    /// 32 bits per pixel, stored as blue-green-red-alpha
    ThirtyTwo,
}

impl BmpDepth {
    pub(crate) fn from_bits_per_pixel(
        bits_per_pixel: u16,
    ) -> Option<BmpDepth> {
        match bits_per_pixel {
            16 => Some(BmpDepth::Sixteen),
            24 => Some(BmpDepth::TwentyFour),
            32 => Some(BmpDepth::ThirtyTwo),
            _ => None,
        }
    }

    /// Returns the number of bits used for each pixel.
    pub fn bits_per_pixel(&self) -> u16 {
        match *self {
            BmpDepth::Sixteen => 16,
            BmpDepth::TwentyFour => 24,
            BmpDepth::ThirtyTwo => 32,
        }
    }

    /// Returns the number of bytes used for each pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel() / 8) as usize
    }

    /// Returns the size of one stored row of `width` pixels, padded to a
    /// multiple of four bytes.
    pub(crate) fn padded_row_size(&self, width: u32) -> Option<usize> {
        let bits = (self.bits_per_pixel() as u64).checked_mul(width as u64)?;
        usize::try_from(((bits + 31) / 32) * 4).ok()
    }
}

//===========================================================================//


//===========================================================================//
