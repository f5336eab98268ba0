//! Raster sampling
//!
//! The engine only needs point samples of the source image while the grid is
//! being built. Hosts hand over a canvas `ImageData` buffer (RGBA, row-major,
//! 4 bytes per pixel), which [`RgbaImage`] wraps without copying.

/// Source of RGBA samples for grid construction.
pub trait RasterSampler {
    /// RGBA at integer pixel `(x, y)`. Out-of-range reads are fully transparent.
    fn sample(&self, x: u32, y: u32) -> [u8; 4];
}

/// Borrowed RGBA8 pixel buffer.
pub struct RgbaImage<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbaImage<'a> {
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, String> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| format!("image dimensions overflow: {}x{}", width, height))?;
        if data.len() != expected {
            return Err(format!(
                "rgba buffer has {} bytes, expected {} for {}x{}",
                data.len(),
                expected,
                width,
                height
            ));
        }
        Ok(Self { data, width, height })
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }
}

impl RasterSampler for RgbaImage<'_> {
    #[inline]
    fn sample(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let offset = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }
}

/// Pack RGBA into ABGR (little-endian bytes `[R, G, B, A]`, the layout
/// canvas `ImageData` expects when viewed as `u32`).
#[inline]
pub fn pack_abgr(rgba: [u8; 4]) -> u32 {
    let [r, g, b, a] = rgba;
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}
