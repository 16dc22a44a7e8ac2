use crate::error::FilterError;

/// One pixel as an ordered (R, G, B) triple.
pub type Rgb = [u8; 3];

/// Dense 8-bit RGB image buffer.
///
/// All pixel data is stored row-major as interleaved RGBRGBRGB...
/// Channel values are display-referred integers; `u8` keeps the [0, 255]
/// invariant by construction, so no stage can hand an out-of-range
/// channel across a pipeline boundary.
#[derive(Clone, Debug)]
pub struct PixelBuf {
    pub width: u32,
    pub height: u32,
    /// Flat pixel data: [R, G, B, R, G, B, ...].
    pub data: Vec<u8>,
}

impl PixelBuf {
    /// A width x height buffer with every pixel initialized to black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 3) as usize],
        }
    }

    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> anyhow::Result<Self> {
        let expected = (width * height * 3) as usize;
        anyhow::ensure!(
            data.len() == expected,
            "expected {expected} bytes for {width}x{height} RGB, got {}",
            data.len()
        );
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Read the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb, FilterError> {
        let idx = self.index_of(x, y)?;
        Ok([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Overwrite the pixel at (x, y). The only coordinate-level mutation
    /// the buffer offers.
    pub fn set(&mut self, x: u32, y: u32, rgb: Rgb) -> Result<(), FilterError> {
        let idx = self.index_of(x, y)?;
        self.data[idx..idx + 3].copy_from_slice(&rgb);
        Ok(())
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize, FilterError> {
        if x >= self.width || y >= self.height {
            return Err(FilterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(((y * self.width + x) * 3) as usize)
    }

    /// Procedural placeholder image shown before any photo is loaded.
    ///
    /// Diagonal gradient bands with a distinct period offset per channel,
    /// which also makes it a handy deterministic fixture for tests and
    /// benches.
    pub fn test_card(width: u32, height: u32) -> Self {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push((x % 100 + 40) as u8);
                data.push((y % 100 + 80) as u8);
                data.push(((x + y) % 100 + 120) as u8);
            }
        }
        Self {
            width,
            height,
            data,
        }
    }
}
