//! Color reduction: every sample is mapped to `v / div * div + div / 2`.
//!
//! The same reduction is provided through many traversals of the image so
//! that their throughput can be compared. All of them produce the same
//! output as [`color_reduce_row_index`], the reference traversal, and none
//! of them touches the row padding of strided images.

use std::fmt;
use std::str::FromStr;

use pixquant_image::{Image, ImageError};

use crate::lut::{apply_lut, Lut};
use crate::parallel;
use crate::pixel::Pixel;
use crate::quantize::{check_divisor, reduce_div, reduce_mod, BitMask};

/// Reduce the colors of an image with the reference traversal.
///
/// # Arguments
///
/// * `image` - The image to reduce in place.
/// * `div` - The quantization step.
///
/// # Examples
///
/// ```
/// use pixquant_image::{Image, ImageSize};
/// use pixquant_imgproc::reduce::color_reduce;
///
/// let mut image = Image::<u8, 1>::new(
///     ImageSize { width: 4, height: 1 },
///     vec![0, 70, 140, 250],
/// ).unwrap();
///
/// color_reduce(&mut image, 64).unwrap();
/// assert_eq!(image.as_slice(), &[32, 96, 160, 224]);
/// ```
pub fn color_reduce<const C: usize>(image: &mut Image<u8, C>, div: u8) -> Result<(), ImageError> {
    color_reduce_row_index(image, div)
}

/// Reduce colors addressing each sample of a row by its index.
#[allow(clippy::needless_range_loop)]
pub fn color_reduce_row_index<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    check_divisor(div)?;

    let nl = image.rows();
    let nc = image.row_len();

    for j in 0..nl {
        let data = image.row_mut(j);
        for i in 0..nc {
            data[i] = (data[i] / div * div).wrapping_add(div / 2);
        }
    }

    Ok(())
}

/// Reduce colors walking each row with a single mutable cursor.
pub fn color_reduce_row_iter<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    check_divisor(div)?;

    for j in 0..image.rows() {
        for v in image.row_mut(j).iter_mut() {
            *v = reduce_div(*v, div);
        }
    }

    Ok(())
}

/// Reduce colors walking each row, with the modulo form of the kernel.
pub fn color_reduce_row_modulo<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    check_divisor(div)?;

    for j in 0..image.rows() {
        for v in image.row_mut(j).iter_mut() {
            *v = reduce_mod(*v, div);
        }
    }

    Ok(())
}

/// Reduce colors walking each row, with the bit-mask form of the kernel.
///
/// # Errors
///
/// Fails if `div` is not a power of two.
pub fn color_reduce_row_mask<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    let mask = BitMask::new(div)?;

    for j in 0..image.rows() {
        for v in image.row_mut(j).iter_mut() {
            *v &= mask.mask();
            *v = v.wrapping_add(mask.half());
        }
    }

    Ok(())
}

/// Reduce colors with one offset into the whole buffer, advanced by the
/// stride at the end of every row.
///
/// # Errors
///
/// Fails if `div` is not a power of two.
pub fn color_reduce_flat_stride<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    let mask = BitMask::new(div)?;

    let nl = image.rows();
    let nc = image.row_len();
    let step = image.stride();
    let data = image.as_slice_mut();

    let mut offset = 0;
    for _ in 0..nl {
        for i in 0..nc {
            data[offset + i] = mask.apply(data[offset + i]);
        }
        offset += step;
    }

    Ok(())
}

/// Reduce colors treating a padding-free image as a single row.
///
/// Strided images fall back to a per-row traversal.
///
/// # Errors
///
/// Fails if `div` is not a power of two.
pub fn color_reduce_contiguous<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    let mask = BitMask::new(div)?;

    match image.as_contiguous_slice_mut() {
        Some(data) => {
            log::trace!("image is contiguous, {} samples in one run", data.len());
            data.iter_mut().for_each(|v| *v = mask.apply(*v));
        }
        None => {
            image
                .rows_iter_mut()
                .for_each(|row| row.iter_mut().for_each(|v| *v = mask.apply(*v)));
        }
    }

    Ok(())
}

/// Reduce colors iterating over pixels, one channel at a time.
#[allow(clippy::needless_range_loop)]
pub fn color_reduce_pixel_iter<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    check_divisor(div)?;

    for pixel in image.pixels_mut() {
        for c in 0..C {
            pixel[c] = (pixel[c] / div * div).wrapping_add(div / 2);
        }
    }

    Ok(())
}

/// Reduce colors iterating over pixels, with one pixel-wide arithmetic expression.
pub fn color_reduce_pixel_operator<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    check_divisor(div)?;

    let offset = Pixel::<C>::splat(div / 2);

    for samples in image.pixels_mut() {
        let pixel = Pixel::<C>::from_slice(samples);
        (pixel / div * div + offset).write_to(samples);
    }

    Ok(())
}

/// Reduce colors iterating over pixels, with the bit-mask form of the kernel.
///
/// # Errors
///
/// Fails if `div` is not a power of two.
#[allow(clippy::needless_range_loop)]
pub fn color_reduce_pixel_mask<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    let mask = BitMask::new(div)?;

    for pixel in image.pixels_mut() {
        for c in 0..C {
            pixel[c] &= mask.mask();
            pixel[c] = pixel[c].wrapping_add(mask.half());
        }
    }

    Ok(())
}

/// Reduce colors accessing every pixel by its `[row, col]` coordinates.
///
/// Each access recomputes the pixel address and checks its bounds.
pub fn color_reduce_indexed<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    check_divisor(div)?;

    let nl = image.rows();
    let nc = image.cols();

    for j in 0..nl {
        for i in 0..nc {
            for c in 0..C {
                image[[j, i]][c] = reduce_div(image[[j, i]][c], div);
            }
        }
    }

    Ok(())
}

/// Reduce colors from an input image into an output image.
///
/// The input image is left unmodified. The output image is reallocated to
/// the size of the input image if the sizes differ.
///
/// # Examples
///
/// ```
/// use pixquant_image::{Image, ImageSize};
/// use pixquant_imgproc::reduce::color_reduce_into;
///
/// let src = Image::<u8, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![10, 100, 200],
/// ).unwrap();
///
/// let mut dst = Image::<u8, 3>::new(ImageSize { width: 0, height: 0 }, vec![]).unwrap();
/// color_reduce_into(&src, &mut dst, 64).unwrap();
///
/// assert_eq!(dst.size(), src.size());
/// assert_eq!(dst.as_slice(), &[32, 96, 224]);
/// ```
pub fn color_reduce_into<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    check_divisor(div)?;

    dst.create(src.size());

    src.rows_iter()
        .zip(dst.rows_iter_mut())
        .for_each(|(data_in, data_out)| {
            data_in
                .iter()
                .zip(data_out.iter_mut())
                .for_each(|(&v, out)| *out = reduce_div(v, div));
        });

    Ok(())
}

/// Reduce colors with two whole-image operations: a bitwise AND against a
/// broadcast mask followed by the addition of a broadcast offset.
///
/// # Errors
///
/// Fails if `div` is not a power of two.
pub fn color_reduce_scalar_ops<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    let mask = BitMask::new(div)?;

    *image = (&*image & [mask.mask(); C]) + [mask.half(); C];

    Ok(())
}

/// Reduce colors remapping every sample through a precomputed table.
///
/// The table is typically built once with [`Lut::color_reduce`].
pub fn color_reduce_lut<const C: usize>(image: &mut Image<u8, C>, lut: &Lut) {
    apply_lut(image, lut);
}

/// Reduce colors processing the rows on the rayon thread pool.
pub fn color_reduce_parallel_rows<const C: usize>(
    image: &mut Image<u8, C>,
    div: u8,
) -> Result<(), ImageError> {
    check_divisor(div)?;

    parallel::par_iter_rows_mut(image, |row| {
        row.iter_mut().for_each(|v| *v = reduce_div(*v, div));
    });

    Ok(())
}

/// Error returned when parsing an unknown strategy name.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unknown color reduction strategy: {0}")]
pub struct UnknownStrategy(pub String);

/// The traversal used to apply the color reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReduceStrategy {
    /// See [`color_reduce_row_index`].
    RowIndex,
    /// See [`color_reduce_row_iter`].
    RowIter,
    /// See [`color_reduce_row_modulo`].
    RowModulo,
    /// See [`color_reduce_row_mask`].
    RowMask,
    /// See [`color_reduce_flat_stride`].
    FlatStride,
    /// See [`color_reduce_contiguous`].
    Contiguous,
    /// See [`color_reduce_pixel_iter`].
    PixelIter,
    /// See [`color_reduce_pixel_operator`].
    PixelOperator,
    /// See [`color_reduce_pixel_mask`].
    PixelMask,
    /// See [`color_reduce_indexed`].
    Indexed,
    /// See [`color_reduce_into`].
    InputOutput,
    /// See [`color_reduce_scalar_ops`].
    ScalarOps,
    /// See [`color_reduce_lut`].
    LookupTable,
    /// See [`color_reduce_parallel_rows`].
    ParallelRows,
}

impl ReduceStrategy {
    /// All the strategies, the reference one first.
    pub const ALL: [ReduceStrategy; 14] = [
        ReduceStrategy::RowIndex,
        ReduceStrategy::RowIter,
        ReduceStrategy::RowModulo,
        ReduceStrategy::RowMask,
        ReduceStrategy::FlatStride,
        ReduceStrategy::Contiguous,
        ReduceStrategy::PixelIter,
        ReduceStrategy::PixelOperator,
        ReduceStrategy::PixelMask,
        ReduceStrategy::Indexed,
        ReduceStrategy::InputOutput,
        ReduceStrategy::ScalarOps,
        ReduceStrategy::LookupTable,
        ReduceStrategy::ParallelRows,
    ];

    /// Short identifier, also accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            ReduceStrategy::RowIndex => "row-index",
            ReduceStrategy::RowIter => "row-iter",
            ReduceStrategy::RowModulo => "row-modulo",
            ReduceStrategy::RowMask => "row-mask",
            ReduceStrategy::FlatStride => "flat-stride",
            ReduceStrategy::Contiguous => "contiguous",
            ReduceStrategy::PixelIter => "pixel-iter",
            ReduceStrategy::PixelOperator => "pixel-operator",
            ReduceStrategy::PixelMask => "pixel-mask",
            ReduceStrategy::Indexed => "indexed",
            ReduceStrategy::InputOutput => "input-output",
            ReduceStrategy::ScalarOps => "scalar-ops",
            ReduceStrategy::LookupTable => "lookup-table",
            ReduceStrategy::ParallelRows => "parallel-rows",
        }
    }

    /// Human readable description used in benchmark reports.
    pub fn description(&self) -> &'static str {
        match self {
            ReduceStrategy::RowIndex => "using row slices and []",
            ReduceStrategy::RowIter => "using row slices and iter_mut",
            ReduceStrategy::RowModulo => "using row slices and iter_mut and modulo",
            ReduceStrategy::RowMask => "using row slices and iter_mut and bitwise",
            ReduceStrategy::FlatStride => "using a flat offset and the row stride",
            ReduceStrategy::Contiguous => "using row slices and bitwise (contiguous)",
            ReduceStrategy::PixelIter => "using the pixel iterator",
            ReduceStrategy::PixelOperator => "using the pixel iterator and Pixel operators",
            ReduceStrategy::PixelMask => "using the pixel iterator and bitwise",
            ReduceStrategy::Indexed => "using [row, col] indexing",
            ReduceStrategy::InputOutput => "using input/output images",
            ReduceStrategy::ScalarOps => "using overloaded operators",
            ReduceStrategy::LookupTable => "using lookup table",
            ReduceStrategy::ParallelRows => "using rayon parallel rows",
        }
    }

    /// Whether the strategy relies on the bit-mask form of the kernel.
    pub fn requires_power_of_two(&self) -> bool {
        matches!(
            self,
            ReduceStrategy::RowMask
                | ReduceStrategy::FlatStride
                | ReduceStrategy::Contiguous
                | ReduceStrategy::PixelMask
                | ReduceStrategy::ScalarOps
        )
    }
}

impl fmt::Display for ReduceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReduceStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReduceStrategy::ALL
            .iter()
            .find(|strategy| strategy.name() == s)
            .copied()
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// A color reduction strategy bound to a validated divisor.
///
/// Everything that does not depend on the image, like the divisor checks and
/// the lookup table, is done once in [`ColorReducer::new`] so that
/// [`ColorReducer::apply`] only measures the traversal itself.
///
/// # Examples
///
/// ```
/// use pixquant_image::{Image, ImageSize};
/// use pixquant_imgproc::reduce::{ColorReducer, ReduceStrategy};
///
/// let reducer = ColorReducer::new(ReduceStrategy::LookupTable, 64).unwrap();
///
/// let mut image = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![10, 200],
/// ).unwrap();
///
/// reducer.apply(&mut image).unwrap();
/// assert_eq!(image.as_slice(), &[32, 224]);
///
/// assert!(ColorReducer::new(ReduceStrategy::RowMask, 48).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ColorReducer {
    strategy: ReduceStrategy,
    div: u8,
    lut: Lut,
}

impl ColorReducer {
    /// Bind a strategy to a divisor.
    ///
    /// # Errors
    ///
    /// Fails for a zero divisor, and for a divisor that is not a power of two
    /// when the strategy uses the bit-mask kernel.
    pub fn new(strategy: ReduceStrategy, div: u8) -> Result<Self, ImageError> {
        check_divisor(div)?;
        if strategy.requires_power_of_two() {
            BitMask::new(div)?;
        }

        Ok(Self {
            strategy,
            div,
            lut: Lut::color_reduce(div)?,
        })
    }

    /// The bound strategy.
    pub fn strategy(&self) -> ReduceStrategy {
        self.strategy
    }

    /// The bound divisor.
    pub fn div(&self) -> u8 {
        self.div
    }

    /// The lookup table for the bound divisor.
    pub fn lut(&self) -> &Lut {
        &self.lut
    }

    /// Reduce the colors of the image in place.
    ///
    /// The input/output strategy writes into a fresh image with the same
    /// layout, which then replaces the given one. That copy is not free, use
    /// [`ColorReducer::apply_into`] with a persistent output to time it.
    pub fn apply<const C: usize>(&self, image: &mut Image<u8, C>) -> Result<(), ImageError> {
        let div = self.div;
        match self.strategy {
            ReduceStrategy::RowIndex => color_reduce_row_index(image, div),
            ReduceStrategy::RowIter => color_reduce_row_iter(image, div),
            ReduceStrategy::RowModulo => color_reduce_row_modulo(image, div),
            ReduceStrategy::RowMask => color_reduce_row_mask(image, div),
            ReduceStrategy::FlatStride => color_reduce_flat_stride(image, div),
            ReduceStrategy::Contiguous => color_reduce_contiguous(image, div),
            ReduceStrategy::PixelIter => color_reduce_pixel_iter(image, div),
            ReduceStrategy::PixelOperator => color_reduce_pixel_operator(image, div),
            ReduceStrategy::PixelMask => color_reduce_pixel_mask(image, div),
            ReduceStrategy::Indexed => color_reduce_indexed(image, div),
            ReduceStrategy::InputOutput => {
                let mut result = image.clone();
                color_reduce_into(image, &mut result, div)?;
                *image = result;
                Ok(())
            }
            ReduceStrategy::ScalarOps => color_reduce_scalar_ops(image, div),
            ReduceStrategy::LookupTable => {
                color_reduce_lut(image, &self.lut);
                Ok(())
            }
            ReduceStrategy::ParallelRows => color_reduce_parallel_rows(image, div),
        }
    }

    /// Reduce the colors of `src` into `dst`, leaving `src` untouched.
    ///
    /// `dst` is reallocated to the size of `src` if needed.
    pub fn apply_into<const C: usize>(
        &self,
        src: &Image<u8, C>,
        dst: &mut Image<u8, C>,
    ) -> Result<(), ImageError> {
        match self.strategy {
            ReduceStrategy::InputOutput => color_reduce_into(src, dst, self.div),
            ReduceStrategy::ParallelRows => {
                let div = self.div;
                dst.create(src.size());
                parallel::par_iter_rows_val(src, dst, |&v, out| *out = reduce_div(v, div));
                Ok(())
            }
            _ => {
                dst.clone_from(src);
                self.apply(dst)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixquant_image::ImageSize;

    fn ramp_4x4() -> Result<Image<u8, 1>, ImageError> {
        Image::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            (0..16).map(|i| i * 10).collect(),
        )
    }

    #[test]
    fn test_ramp_all_strategies() -> Result<(), ImageError> {
        let expected = vec![
            32u8, 32, 32, 32, 32, 32, 32, 96, 96, 96, 96, 96, 96, 160, 160, 160,
        ];
        for strategy in ReduceStrategy::ALL {
            let mut image = ramp_4x4()?;
            ColorReducer::new(strategy, 64)?.apply(&mut image)?;
            assert_eq!(image.as_slice(), expected.as_slice(), "{strategy}");
        }
        Ok(())
    }

    #[test]
    fn test_rgb_div_32_all_strategies() -> Result<(), ImageError> {
        // 100 / 32 * 32 + 16 = 112
        for strategy in ReduceStrategy::ALL {
            let mut image = Image::<u8, 3>::from_size_val(
                ImageSize {
                    width: 2,
                    height: 2,
                },
                100,
            )?;
            ColorReducer::new(strategy, 32)?.apply(&mut image)?;
            assert!(image.as_slice().iter().all(|&v| v == 112), "{strategy}");
        }
        Ok(())
    }

    #[test]
    fn test_padding_untouched() -> Result<(), ImageError> {
        const PAD: u8 = 7;
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let stride = 3 * 3 + 2;

        for strategy in ReduceStrategy::ALL {
            let mut image = Image::<u8, 3>::from_size_val_with_stride(size, stride, PAD)?;
            image.pixels_mut().for_each(|p| p.copy_from_slice(&[10, 100, 200]));

            ColorReducer::new(strategy, 64)?.apply(&mut image)?;

            for row in image.as_slice().chunks_exact(stride) {
                assert_eq!(&row[9..], &[PAD, PAD], "{strategy}");
            }
            for pixel in image.pixels() {
                assert_eq!(pixel, &[32, 96, 224], "{strategy}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_reduce_twice_is_stable() -> Result<(), ImageError> {
        for strategy in ReduceStrategy::ALL {
            let reducer = ColorReducer::new(strategy, 16)?;
            let mut image = Image::<u8, 1>::new(
                ImageSize {
                    width: 256,
                    height: 1,
                },
                (0..=255).collect(),
            )?;
            reducer.apply(&mut image)?;
            let once = image.clone();
            reducer.apply(&mut image)?;
            assert_eq!(image, once, "{strategy}");
        }
        Ok(())
    }

    #[test]
    fn test_mask_strategies_reject_non_power_of_two() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        for strategy in ReduceStrategy::ALL {
            let res = ColorReducer::new(strategy, 48);
            if strategy.requires_power_of_two() {
                assert_eq!(
                    res.map(|_| ()),
                    Err(ImageError::DivisorNotPowerOfTwo(48)),
                    "{strategy}"
                );
            } else {
                let mut image = Image::<u8, 1>::new(size, vec![0, 47, 48, 255])?;
                res?.apply(&mut image)?;
                // 255 / 48 * 48 + 24 = 264 wraps to 8
                assert_eq!(image.as_slice(), &[24, 24, 72, 8], "{strategy}");
            }
        }

        let mut image = Image::<u8, 1>::from_size_val(size, 0)?;
        let original = image.clone();
        assert_eq!(
            color_reduce_flat_stride(&mut image, 48),
            Err(ImageError::DivisorNotPowerOfTwo(48))
        );
        assert_eq!(image, original);
        Ok(())
    }

    #[test]
    fn test_zero_divisor() -> Result<(), ImageError> {
        let mut image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 1,
                height: 1,
            },
            0,
        )?;
        for strategy in ReduceStrategy::ALL {
            assert_eq!(
                ColorReducer::new(strategy, 0).map(|_| ()),
                Err(ImageError::ZeroDivisor)
            );
        }
        assert_eq!(color_reduce_row_index(&mut image, 0), Err(ImageError::ZeroDivisor));
        assert_eq!(color_reduce_indexed(&mut image, 0), Err(ImageError::ZeroDivisor));
        Ok(())
    }

    #[test]
    fn test_into_keeps_input() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::new_with_stride(
            ImageSize {
                width: 1,
                height: 2,
            },
            4,
            vec![10, 100, 200, 1, 20, 120, 250, 1],
        )?;
        let original = src.clone();

        let mut dst = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 5,
                height: 5,
            },
            0,
        )?;
        color_reduce_into(&src, &mut dst, 64)?;

        assert_eq!(src, original);
        assert_eq!(dst.size(), src.size());
        assert!(dst.is_contiguous());
        assert_eq!(dst.as_slice(), &[32, 96, 224, 32, 96, 224]);
        Ok(())
    }

    #[test]
    fn test_apply_into_all_strategies() -> Result<(), ImageError> {
        let src = ramp_4x4()?;
        let mut expected = src.clone();
        color_reduce(&mut expected, 64)?;

        for strategy in ReduceStrategy::ALL {
            let mut dst = Image::<u8, 1>::new(
                ImageSize {
                    width: 0,
                    height: 0,
                },
                vec![],
            )?;
            ColorReducer::new(strategy, 64)?.apply_into(&src, &mut dst)?;
            assert_eq!(dst.as_slice(), expected.as_slice(), "{strategy}");
        }
        assert_eq!(src, ramp_4x4()?);
        Ok(())
    }

    #[test]
    fn test_into_reuses_sized_output() -> Result<(), ImageError> {
        let src = ramp_4x4()?;
        let reducer = ColorReducer::new(ReduceStrategy::InputOutput, 64)?;

        let mut dst = Image::<u8, 1>::default();
        reducer.apply_into(&src, &mut dst)?;
        let buffer = dst.as_slice().as_ptr();

        dst.as_slice_mut().fill(0);
        reducer.apply_into(&src, &mut dst)?;

        assert_eq!(dst.as_slice().as_ptr(), buffer);
        assert_eq!(
            dst.as_slice(),
            &[32, 32, 32, 32, 32, 32, 32, 96, 96, 96, 96, 96, 96, 160, 160, 160]
        );
        Ok(())
    }

    #[test]
    fn test_strategy_names() {
        for strategy in ReduceStrategy::ALL {
            assert_eq!(strategy.name().parse::<ReduceStrategy>(), Ok(strategy));
            assert_eq!(strategy.to_string(), strategy.name());
        }
        assert_eq!(
            "pointer".parse::<ReduceStrategy>(),
            Err(UnknownStrategy("pointer".to_string()))
        );
    }
}
