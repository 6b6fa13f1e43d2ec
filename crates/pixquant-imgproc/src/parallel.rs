use rayon::prelude::*;

use pixquant_image::Image;

/// Apply a function to each row of the image in parallel.
///
/// The function receives the samples of one row, padding excluded.
pub fn par_iter_rows_mut<T, const C: usize>(
    image: &mut Image<T, C>,
    f: impl Fn(&mut [T]) + Send + Sync,
) where
    T: Copy + Send + Sync,
{
    let row_len = image.row_len();
    let stride = image.stride().max(1);

    image
        .as_slice_mut()
        .par_chunks_exact_mut(stride)
        .for_each(|row| f(&mut row[..row_len]));
}

/// Apply a function to each pair of source and destination samples in parallel.
///
/// Rows are distributed over the rayon pool; both images must have the same size.
pub fn par_iter_rows_val<T1, T2, const C: usize>(
    src: &Image<T1, C>,
    dst: &mut Image<T2, C>,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Copy + Send + Sync,
    T2: Copy + Send + Sync,
{
    let row_len = src.row_len();
    let (src_stride, dst_stride) = (src.stride().max(1), dst.stride().max(1));

    src.as_slice()
        .par_chunks_exact(src_stride)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(dst_stride))
        .for_each(|(src_row, dst_row)| {
            src_row[..row_len]
                .iter()
                .zip(dst_row[..row_len].iter_mut())
                .for_each(|(s, d)| f(s, d));
        });
}
