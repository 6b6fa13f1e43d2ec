use pixquant_image::ImageError;

/// Check that the quantization step can be used by the arithmetic kernels.
///
/// # Errors
///
/// Returns [`ImageError::ZeroDivisor`] if `div` is zero.
#[inline]
pub fn check_divisor(div: u8) -> Result<(), ImageError> {
    if div == 0 {
        return Err(ImageError::ZeroDivisor);
    }
    Ok(())
}

/// Quantize a sample with integer division: `v / div * div + div / 2`.
///
/// This is the reference form of the color reduction. The half step is added
/// with 8-bit wraparound, so values whose bucket plus half step exceed 255 wrap.
///
/// # Panics
///
/// Panics if `div` is zero.
///
/// # Examples
///
/// ```
/// use pixquant_imgproc::quantize::reduce_div;
///
/// assert_eq!(reduce_div(100, 64), 96);
/// assert_eq!(reduce_div(100, 32), 112);
/// ```
#[inline]
pub fn reduce_div(v: u8, div: u8) -> u8 {
    (v / div * div).wrapping_add(div / 2)
}

/// Quantize a sample with the modulo form: `v - v % div + div / 2`.
///
/// # Panics
///
/// Panics if `div` is zero.
#[inline]
pub fn reduce_mod(v: u8, div: u8) -> u8 {
    (v - v % div).wrapping_add(div / 2)
}

/// Precomputed bit-mask form of the quantization, valid for powers of two.
///
/// For `div = 2^n` the bucket start is `v & (0xFF << n)`, so the reduction
/// becomes a mask followed by the addition of `div / 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitMask {
    mask: u8,
    half: u8,
}

impl BitMask {
    /// Build the mask for the given divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::ZeroDivisor`] for zero and
    /// [`ImageError::DivisorNotPowerOfTwo`] for any other non power of two,
    /// where the masked form would silently disagree with [`reduce_div`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pixquant_imgproc::quantize::BitMask;
    ///
    /// let mask = BitMask::new(16).unwrap();
    /// assert_eq!(mask.mask(), 0xF0);
    /// assert_eq!(mask.apply(100), 104);
    ///
    /// assert!(BitMask::new(24).is_err());
    /// ```
    pub fn new(div: u8) -> Result<Self, ImageError> {
        check_divisor(div)?;
        if !div.is_power_of_two() {
            return Err(ImageError::DivisorNotPowerOfTwo(div));
        }

        let n = (div as f64).log2().round() as u32;

        Ok(Self {
            mask: (0xFFu32 << n) as u8,
            half: div >> 1,
        })
    }

    /// The mask clearing the low bits of a sample.
    #[inline]
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Half of the divisor, added after masking.
    #[inline]
    pub fn half(&self) -> u8 {
        self.half
    }

    /// Quantize a sample: `(v & mask) + div / 2`.
    #[inline]
    pub fn apply(&self, v: u8) -> u8 {
        (v & self.mask).wrapping_add(self.half)
    }
}
