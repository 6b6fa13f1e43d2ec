use std::path::{Path, PathBuf};

use pixquant_image::Image;
use pixquant_io::functional as F;

use crate::error::BenchmarkError;

/// Produces the image handed to a single timed run.
///
/// Every call returns an image owned by the caller, so a strategy mutating
/// it in place cannot affect the input of the next one.
pub trait ImageSource<const C: usize> {
    /// Load a fresh copy of the source image.
    fn load(&self) -> Result<Image<u8, C>, BenchmarkError>;
}

/// Decodes the image file again on every load.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the image file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource<3> for FileSource {
    fn load(&self) -> Result<Image<u8, 3>, BenchmarkError> {
        Ok(F::read_image_any_rgb8(&self.path)?)
    }
}

impl ImageSource<1> for FileSource {
    fn load(&self) -> Result<Image<u8, 1>, BenchmarkError> {
        Ok(F::read_image_any_mono8(&self.path)?)
    }
}

/// Clones an in-memory image on every load.
#[derive(Clone, Debug)]
pub struct MemorySource<const C: usize> {
    image: Image<u8, C>,
}

impl<const C: usize> MemorySource<C> {
    /// Create a source from an image.
    pub fn new(image: Image<u8, C>) -> Self {
        Self { image }
    }
}

impl<const C: usize> ImageSource<C> for MemorySource<C> {
    fn load(&self) -> Result<Image<u8, C>, BenchmarkError> {
        Ok(self.image.clone())
    }
}
