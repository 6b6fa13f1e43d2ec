#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use pixquant_image as image;

#[doc(inline)]
pub use pixquant_imgproc as imgproc;

#[doc(inline)]
pub use pixquant_io as io;

#[doc(inline)]
pub use pixquant_benchmark as benchmark;
