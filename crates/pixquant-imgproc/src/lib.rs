#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// per-sample quantization kernels.
pub mod quantize;

/// 256-entry lookup tables for u8 images.
pub mod lut;

/// module containing parallelization utilities.
pub mod parallel;

/// fixed-size pixel value type with arithmetic operators.
pub mod pixel;

/// color reduction strategies over the different image traversals.
pub mod reduce;
