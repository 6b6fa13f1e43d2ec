use std::ops;

use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixquant_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// Represents an image with pixel data.
///
/// The samples are stored row by row, `CHANNELS` interleaved samples per pixel.
/// Each row occupies `stride` samples of which only the first `width * CHANNELS`
/// belong to the image; the rest is padding and is never touched by the
/// processing routines.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    stride: usize,
    data: Vec<T>,
}

/// An empty image, with no rows and no allocated samples.
///
/// Useful as the initial state of an output image sized later with [`Image::create`].
impl<T, const CHANNELS: usize> Default for Image<T, CHANNELS> {
    fn default() -> Self {
        Self {
            size: ImageSize {
                width: 0,
                height: 0,
            },
            stride: 0,
            data: Vec::new(),
        }
    }
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS>
where
    T: Copy,
{
    /// Create a new contiguous image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixquant_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// assert!(image.is_contiguous());
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        Self::new_with_stride(size, size.width * CHANNELS, data)
    }

    /// Create a new image whose rows are `stride` samples apart.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `stride` - The number of samples between the start of two consecutive rows.
    /// * `data` - The sample buffer, `size.height * stride` long, padding included.
    ///
    /// # Errors
    ///
    /// Returns an error if the stride is shorter than a row or the buffer length
    /// does not match `size.height * stride`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixquant_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 1>::new_with_stride(
    ///     ImageSize { width: 2, height: 2 },
    ///     4,
    ///     vec![1, 2, 0, 0, 3, 4, 0, 0],
    /// ).unwrap();
    ///
    /// assert!(!image.is_contiguous());
    /// assert_eq!(image.row(1), &[3, 4]);
    /// ```
    pub fn new_with_stride(
        size: ImageSize,
        stride: usize,
        data: Vec<T>,
    ) -> Result<Self, ImageError> {
        let row_len = size.width * CHANNELS;
        if stride < row_len {
            return Err(ImageError::InvalidStride(stride, row_len));
        }

        if data.len() != size.height * stride {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.height * stride,
            ));
        }

        Ok(Self { size, stride, data })
    }

    /// Create a new contiguous image with the given size and pixel value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixquant_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError> {
        Self::from_size_val_with_stride(size, size.width * CHANNELS, val)
    }

    /// Create a new padded image filled with the given value, padding included.
    pub fn from_size_val_with_stride(
        size: ImageSize,
        stride: usize,
        val: T,
    ) -> Result<Self, ImageError> {
        Self::new_with_stride(size, stride, vec![val; size.height * stride])
    }

    /// Make sure the image has the given size.
    ///
    /// Nothing happens if the size already matches. Otherwise the image is
    /// reallocated as a contiguous buffer filled with the default value.
    pub fn create(&mut self, size: ImageSize)
    where
        T: Default,
    {
        if self.size == size {
            return;
        }

        let stride = size.width * CHANNELS;
        *self = Self {
            size,
            stride,
            data: vec![T::default(); size.height * stride],
        };
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Number of samples between the start of two consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of samples in a row without padding, i.e. `width * CHANNELS`.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.size.width * CHANNELS
    }

    /// Whether the rows follow each other without padding.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.stride == self.row_len()
    }

    /// The whole sample buffer, padding included.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The whole mutable sample buffer, padding included.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// The samples as a single run, only available when there is no padding.
    pub fn as_contiguous_slice(&self) -> Option<&[T]> {
        self.is_contiguous().then_some(self.data.as_slice())
    }

    /// The mutable samples as a single run, only available when there is no padding.
    pub fn as_contiguous_slice_mut(&mut self) -> Option<&mut [T]> {
        if self.is_contiguous() {
            Some(self.data.as_mut_slice())
        } else {
            None
        }
    }

    /// The samples of row `y`, padding excluded.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.row_len()]
    }

    /// The mutable samples of row `y`, padding excluded.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds.
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let row_len = self.row_len();
        &mut self.data[start..start + row_len]
    }

    /// Iterate over the rows of the image, padding excluded.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        let row_len = self.row_len();
        self.data
            .chunks_exact(self.stride.max(1))
            .map(move |row| &row[..row_len])
    }

    /// Iterate mutably over the rows of the image, padding excluded.
    pub fn rows_iter_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        let row_len = self.row_len();
        self.data
            .chunks_exact_mut(self.stride.max(1))
            .map(move |row| &mut row[..row_len])
    }

    /// Iterate over the pixels of the image, `CHANNELS` samples each.
    pub fn pixels(&self) -> impl Iterator<Item = &[T]> {
        self.rows_iter().flat_map(|row| row.chunks_exact(CHANNELS))
    }

    /// Iterate mutably over the pixels of the image, `CHANNELS` samples each.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixquant_image::{Image, ImageSize};
    ///
    /// let mut image = Image::<u8, 3>::new_with_stride(
    ///     ImageSize { width: 1, height: 2 },
    ///     4,
    ///     vec![1, 2, 3, 9, 4, 5, 6, 9],
    /// ).unwrap();
    ///
    /// image.pixels_mut().for_each(|pixel| pixel[0] = 0);
    ///
    /// assert_eq!(image.as_slice(), &[0, 2, 3, 9, 0, 5, 6, 9]);
    /// ```
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.rows_iter_mut()
            .flat_map(|row| row.chunks_exact_mut(CHANNELS))
    }

    /// Get a sample by its `[y, x, channel]` coordinates.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let offset = self.offset(index)?;
        self.data.get(offset)
    }

    /// Get a mutable sample by its `[y, x, channel]` coordinates.
    pub fn get_mut(&mut self, index: [usize; 3]) -> Option<&mut T> {
        let offset = self.offset(index)?;
        self.data.get_mut(offset)
    }

    /// Copy the image into a new buffer without padding.
    pub fn to_contiguous(&self) -> Self {
        if self.is_contiguous() {
            return self.clone();
        }

        let mut data = Vec::with_capacity(self.size.height * self.row_len());
        self.rows_iter().for_each(|row| data.extend_from_slice(row));

        Self {
            size: self.size,
            stride: self.row_len(),
            data,
        }
    }

    fn offset(&self, [y, x, ch]: [usize; 3]) -> Option<usize> {
        if y >= self.size.height || x >= self.size.width || ch >= CHANNELS {
            return None;
        }
        Some(y * self.stride + x * CHANNELS + ch)
    }
}

/// Access a pixel by its `[y, x]` coordinates.
impl<T, const CHANNELS: usize> ops::Index<[usize; 2]> for Image<T, CHANNELS>
where
    T: Copy,
{
    type Output = [T];

    fn index(&self, [y, x]: [usize; 2]) -> &Self::Output {
        assert!(
            y < self.size.height && x < self.size.width,
            "pixel ({y}, {x}) out of bounds for {}",
            self.size
        );
        let start = y * self.stride + x * CHANNELS;
        &self.data[start..start + CHANNELS]
    }
}

impl<T, const CHANNELS: usize> ops::IndexMut<[usize; 2]> for Image<T, CHANNELS>
where
    T: Copy,
{
    fn index_mut(&mut self, [y, x]: [usize; 2]) -> &mut Self::Output {
        assert!(
            y < self.size.height && x < self.size.width,
            "pixel ({y}, {x}) out of bounds for {}",
            self.size
        );
        let start = y * self.stride + x * CHANNELS;
        &mut self.data[start..start + CHANNELS]
    }
}
