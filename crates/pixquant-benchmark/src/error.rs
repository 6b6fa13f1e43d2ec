use pixquant_image::ImageError;
use pixquant_io::IoError;

/// An error type for the benchmark harness.
///
/// Any error aborts the whole run, no partial report is produced.
#[derive(thiserror::Error, Debug)]
pub enum BenchmarkError {
    /// The source image could not be loaded.
    #[error("Failed to load the source image. {0}")]
    Io(#[from] IoError),

    /// A strategy could not be prepared or applied.
    #[error("Failed to reduce the image. {0}")]
    Image(#[from] ImageError),

    /// The number of iterations must be positive.
    #[error("The number of iterations must be greater than zero")]
    NoIterations,

    /// At least one strategy must be selected.
    #[error("No color reduction strategy selected")]
    NoStrategies,
}
