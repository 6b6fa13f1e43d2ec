use std::ops;

use num_traits::WrappingAdd;

use crate::image::Image;

/// Bitwise AND of every pixel with a broadcast scalar, in place.
///
/// Padding samples are left untouched.
impl<T, const C: usize> ops::BitAndAssign<[T; C]> for Image<T, C>
where
    T: Copy + ops::BitAnd<Output = T>,
{
    fn bitand_assign(&mut self, rhs: [T; C]) {
        self.pixels_mut().for_each(|pixel| {
            pixel
                .iter_mut()
                .zip(rhs.iter())
                .for_each(|(v, &m)| *v = *v & m);
        });
    }
}

/// Addition of a broadcast scalar to every pixel, in place.
///
/// The sum wraps around on overflow, the same way native unsigned samples do.
impl<T, const C: usize> ops::AddAssign<[T; C]> for Image<T, C>
where
    T: Copy + WrappingAdd,
{
    fn add_assign(&mut self, rhs: [T; C]) {
        self.pixels_mut().for_each(|pixel| {
            pixel
                .iter_mut()
                .zip(rhs.iter())
                .for_each(|(v, o)| *v = WrappingAdd::wrapping_add(&*v, o));
        });
    }
}

/// Bitwise AND against a broadcast scalar, producing a new image.
///
/// # Examples
///
/// ```
/// use pixquant_image::{Image, ImageSize};
///
/// let image = Image::<u8, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![100, 200, 255],
/// ).unwrap();
///
/// let reduced = &image & [0xC0; 3];
/// assert_eq!(reduced.as_slice(), &[64, 192, 192]);
/// ```
impl<T, const C: usize> ops::BitAnd<[T; C]> for &Image<T, C>
where
    T: Copy + ops::BitAnd<Output = T>,
{
    type Output = Image<T, C>;

    fn bitand(self, rhs: [T; C]) -> Self::Output {
        let mut out = self.clone();
        out &= rhs;
        out
    }
}

/// Wrapping addition of a broadcast scalar, consuming the image.
impl<T, const C: usize> ops::Add<[T; C]> for Image<T, C>
where
    T: Copy + WrappingAdd,
{
    type Output = Image<T, C>;

    fn add(mut self, rhs: [T; C]) -> Self::Output {
        self += rhs;
        self
    }
}
