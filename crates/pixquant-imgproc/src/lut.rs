use pixquant_image::{Image, ImageError};

use crate::quantize::{check_divisor, reduce_div};

/// A lookup table mapping every u8 value to a new u8 value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lut([u8; 256]);

impl Lut {
    /// Build a table by evaluating `f` once for every input value.
    pub fn from_fn(f: impl Fn(u8) -> u8) -> Self {
        Self(std::array::from_fn(|i| f(i as u8)))
    }

    /// Build the color reduction table for the given divisor.
    ///
    /// Entry `v` holds `v / div * div + div / 2`, wrapped to 8 bits.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::ZeroDivisor`] if `div` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixquant_imgproc::lut::Lut;
    ///
    /// let lut = Lut::color_reduce(64).unwrap();
    /// assert_eq!(lut.get(0), 32);
    /// assert_eq!(lut.get(150), 160);
    /// ```
    pub fn color_reduce(div: u8) -> Result<Self, ImageError> {
        check_divisor(div)?;
        Ok(Self::from_fn(|v| reduce_div(v, div)))
    }

    /// Look up the output for a single value.
    #[inline]
    pub fn get(&self, v: u8) -> u8 {
        self.0[v as usize]
    }

    /// The 256 table entries.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// Remap every sample of the image through the lookup table, in place.
///
/// Padding samples are left untouched.
pub fn apply_lut<const C: usize>(image: &mut Image<u8, C>, lut: &Lut) {
    image.rows_iter_mut().for_each(|row| {
        row.iter_mut().for_each(|v| *v = lut.0[*v as usize]);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixquant_image::ImageSize;

    #[test]
    fn test_color_reduce_table() -> Result<(), ImageError> {
        for div in 1..=255u8 {
            let lut = Lut::color_reduce(div)?;
            assert_eq!(lut.as_slice().len(), 256);
            for v in 0..=255u8 {
                let expected = ((v as u32 / div as u32) * div as u32 + div as u32 / 2) % 256;
                assert_eq!(lut.get(v) as u32, expected, "v={v} div={div}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_color_reduce_table_zero() {
        assert_eq!(Lut::color_reduce(0), Err(ImageError::ZeroDivisor));
    }

    #[test]
    fn test_apply_lut() -> Result<(), ImageError> {
        let mut image = Image::<u8, 1>::new_with_stride(
            ImageSize {
                width: 2,
                height: 2,
            },
            3,
            vec![0, 1, 99, 2, 3, 99],
        )?;
        let lut = Lut::from_fn(|v| v.wrapping_mul(10));
        apply_lut(&mut image, &lut);
        assert_eq!(image.as_slice(), &[0, 10, 99, 20, 30, 99]);
        Ok(())
    }
}
