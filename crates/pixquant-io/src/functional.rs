use std::path::Path;

use image::{DynamicImage, ExtendedColorType, ImageFormat};
use pixquant_image::{Image, ImageSize};

use crate::error::IoError;

/// A decoded image with the channel count found in the file.
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
}

impl GenericImage {
    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::L8(image) => image.size(),
            GenericImage::Rgb8(image) => image.size(),
        }
    }

    /// Get the number of channels of the image.
    pub fn num_channels(&self) -> usize {
        match self {
            GenericImage::L8(image) => image.num_channels(),
            GenericImage::Rgb8(image) => image.num_channels(),
        }
    }
}

// memory map the file and let the image crate guess the format
fn read_dynamic_image(file_path: &Path) -> Result<DynamicImage, IoError> {
    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let file = std::fs::File::open(file_path)?;
    // SAFETY: the mapping is read-only and dropped before returning
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    let img = image::ImageReader::new(std::io::Cursor::new(&mmap[..]))
        .with_guessed_format()?
        .decode()?;

    Ok(img)
}

fn image_size(img: &DynamicImage) -> ImageSize {
    ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    }
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate.
/// Grayscale files are returned as [`GenericImage::L8`], everything else is
/// converted to [`GenericImage::Rgb8`].
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Errors
///
/// Fails if the file does not exist or cannot be decoded.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let img = read_dynamic_image(file_path.as_ref())?;
    let size = image_size(&img);

    let image = match img.color() {
        image::ColorType::L8 | image::ColorType::La8 | image::ColorType::L16 => {
            GenericImage::L8(Image::new(size, img.into_luma8().into_raw())?)
        }
        _ => GenericImage::Rgb8(Image::new(size, img.into_rgb8().into_raw())?),
    };

    Ok(image)
}

/// Reads any supported image file as an 8-bit RGB image.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let img = read_dynamic_image(file_path.as_ref())?;
    let size = image_size(&img);
    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

/// Reads any supported image file as an 8-bit grayscale image.
pub fn read_image_any_mono8(file_path: impl AsRef<Path>) -> Result<Image<u8, 1>, IoError> {
    let img = read_dynamic_image(file_path.as_ref())?;
    let size = image_size(&img);
    Ok(Image::new(size, img.into_luma8().into_raw())?)
}

fn write_png_impl<const C: usize>(
    file_path: &Path,
    image: &Image<u8, C>,
    color_type: ExtendedColorType,
) -> Result<(), IoError> {
    // the encoder expects tightly packed rows
    let image = image.to_contiguous();

    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        color_type,
        ImageFormat::Png,
    )?;

    Ok(())
}

/// Writes an 8-bit RGB image to a PNG file.
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    write_png_impl(file_path.as_ref(), image, ExtendedColorType::Rgb8)
}

/// Writes an 8-bit grayscale image to a PNG file.
pub fn write_image_png_mono8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 1>,
) -> Result<(), IoError> {
    write_png_impl(file_path.as_ref(), image, ExtendedColorType::L8)
}
