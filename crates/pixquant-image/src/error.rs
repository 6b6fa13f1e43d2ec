/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the row stride cannot hold a full row of samples.
    #[error("Row stride ({0}) is smaller than the row length ({1})")]
    InvalidStride(usize, usize),

    /// Error when the quantization step is zero.
    #[error("Divisor must be greater than zero")]
    ZeroDivisor,

    /// Error when a bit-mask reduction gets a divisor that is not a power of two.
    #[error("Divisor ({0}) must be a power of two for bit-mask reduction")]
    DivisorNotPowerOfTwo(u8),
}
