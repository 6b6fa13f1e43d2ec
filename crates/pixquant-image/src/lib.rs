#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation with optional row padding.
pub mod image;

/// Error types for the image module.
pub mod error;

/// whole-image operators against broadcast scalars.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
