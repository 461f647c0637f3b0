use anyhow::bail;

/// Interleaved 8-bit raster. Samples are laid out row-major, channels
/// interleaved: the sample for `(x, y, ch)` lives at
/// `(y * width + x) * channels + ch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Zero-filled raster of the given dimensions.
    pub fn new(width: u32, height: u32, channels: u32) -> Self {
        let data = vec![0u8; width as usize * height as usize * channels as usize];
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Wraps an existing interleaved buffer. The buffer length must be
    /// exactly `width * height * channels`.
    pub fn from_vec(width: u32, height: u32, channels: u32, data: Vec<u8>) -> anyhow::Result<Self> {
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            bail!(
                "buffer of {} bytes does not hold a {}x{} raster with {} channels",
                data.len(),
                width,
                height,
                channels
            );
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Bytes per row of pixels.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    #[inline]
    fn index_of(&self, x: u32, y: u32, ch: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize + ch as usize
    }

    #[inline]
    pub fn sample(&self, x: u32, y: u32, ch: u32) -> u8 {
        self.data[self.index_of(x, y, ch)]
    }

    #[inline]
    pub fn set_sample(&mut self, x: u32, y: u32, ch: u32, value: u8) {
        let index = self.index_of(x, y, ch);
        self.data[index] = value;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_row_major_and_interleaved() {
        let raster = Raster::from_vec(2, 2, 2, (0..8).collect()).unwrap();
        assert_eq!(raster.sample(0, 0, 0), 0);
        assert_eq!(raster.sample(0, 0, 1), 1);
        assert_eq!(raster.sample(1, 0, 0), 2);
        assert_eq!(raster.sample(1, 0, 1), 3);
        assert_eq!(raster.sample(0, 1, 0), 4);
        assert_eq!(raster.sample(1, 1, 1), 7);
    }

    #[test]
    fn new_raster_is_zero_filled() {
        let raster = Raster::new(3, 2, 4);
        assert_eq!(raster.row_stride(), 12);
        assert!(raster.as_slice().iter().all(|&v| v == 0));
        assert_eq!(raster.as_slice().len(), 24);
    }

    #[test]
    fn set_sample_writes_through_to_the_buffer() {
        let mut raster = Raster::new(4, 3, 3);
        raster.set_sample(2, 1, 1, 200);
        assert_eq!(raster.sample(2, 1, 1), 200);
        assert_eq!(raster.as_slice()[(1 * 4 + 2) * 3 + 1], 200);
    }

    #[test]
    fn from_vec_rejects_mismatched_buffer() {
        assert!(Raster::from_vec(2, 2, 3, vec![0; 11]).is_err());
        assert!(Raster::from_vec(2, 2, 3, vec![0; 13]).is_err());
        assert!(Raster::from_vec(2, 2, 3, vec![0; 12]).is_ok());
    }
}
