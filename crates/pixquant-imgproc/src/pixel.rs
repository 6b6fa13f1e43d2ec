use std::ops;

/// A pixel value with `C` u8 channels.
///
/// Arithmetic operators apply channel-wise. Division and multiplication take a
/// scalar, addition takes another pixel and wraps around on overflow.
///
/// # Examples
///
/// ```
/// use pixquant_imgproc::pixel::Pixel;
///
/// let p = Pixel([100u8, 150, 255]);
/// let q = p / 64 * 64 + Pixel::splat(32);
///
/// assert_eq!(q, Pixel([96, 160, 224]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel<const C: usize>(pub [u8; C]);

impl<const C: usize> Pixel<C> {
    /// A pixel with all channels set to `v`.
    pub fn splat(v: u8) -> Self {
        Self([v; C])
    }

    /// Read a pixel from the first `C` samples of a slice.
    ///
    /// # Panics
    ///
    /// Panics if the slice holds fewer than `C` samples.
    #[inline]
    pub fn from_slice(samples: &[u8]) -> Self {
        Self(std::array::from_fn(|i| samples[i]))
    }

    /// Write the pixel into the first `C` samples of a slice.
    ///
    /// # Panics
    ///
    /// Panics if the slice length is not `C`.
    #[inline]
    pub fn write_to(&self, samples: &mut [u8]) {
        samples.copy_from_slice(&self.0);
    }
}

impl<const C: usize> ops::Div<u8> for Pixel<C> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: u8) -> Self::Output {
        Self(self.0.map(|v| v / rhs))
    }
}

impl<const C: usize> ops::Mul<u8> for Pixel<C> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: u8) -> Self::Output {
        Self(self.0.map(|v| v.wrapping_mul(rhs)))
    }
}

impl<const C: usize> ops::Add for Pixel<C> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self;
        out.0
            .iter_mut()
            .zip(rhs.0.iter())
            .for_each(|(a, &b)| *a = a.wrapping_add(b));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Pixel;

    #[test]
    fn test_pixel_ops() {
        let p = Pixel([0u8, 63, 64]);
        assert_eq!(p / 32, Pixel([0, 1, 2]));
        assert_eq!(Pixel([0u8, 1, 2]) * 32, Pixel([0, 32, 64]));
        assert_eq!(Pixel([250u8, 1, 2]) + Pixel::splat(10), Pixel([4, 11, 12]));
    }

    #[test]
    fn test_pixel_slice_roundtrip() {
        let samples = [7u8, 8, 9];
        let p = Pixel::<3>::from_slice(&samples);
        let mut out = [0u8; 3];
        p.write_to(&mut out);
        assert_eq!(out, samples);
    }
}
