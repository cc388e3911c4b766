//! RAPP Compute: bit-parallel kernels for packed-binary (1 bpp) and 8-bit
//! grayscale raster images.
//!
//! This crate is the core kernel layer only: bit-blit, threshold, type
//! conversion, statistics and moments, reduce/expand/rotate, seed fill,
//! crop/bounding-box, contour chain codes, line rasterization, integral
//! images, conditional pixel update, and gather/scatter. Argument validation,
//! a benchmark CLI, and the tuning-file analyzer are external collaborators,
//! not part of this crate (see `SPEC_FULL.md` §1).
//!
//! Every kernel is a pure function of its [`raster`] view arguments: no
//! global mutable state, no I/O, no allocation (except the opt-in
//! [`alloc_buffer`] convenience and `gather`/`gather_u8`'s owned-output
//! helpers, gated on the `alloc` feature).
#![cfg_attr(not(feature = "trace"), no_std)]
#![forbid(unsafe_code)]
//#![warn(missing_docs)]

#[cfg(feature = "trace")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

/// Debug-only trace logging, expanding to nothing unless the `trace` feature
/// is enabled. Used to log dispatch backend/unroll selection and seed-fill
/// sweep convergence, matching the teacher crate's own `trace!` macro.
#[macro_export]
macro_rules! trace {
  ($($arg:tt)*) => {
    #[cfg(feature = "trace")] {
      ::std::print!("{file}:{line}> ", file = file!(), line = line!());
      ::std::println!($($arg)*);
    }
  }
}

pub mod platform;
pub mod word;
pub mod dispatch;
pub mod tables;
pub mod raster;
pub mod error;
pub mod chain_code;

#[cfg(feature = "alloc")]
pub mod alloc_buffer;

pub mod rop;
pub mod bitblt;
pub mod threshold;
pub mod cond;
pub mod reduce;
pub mod expand;
pub mod rotate;
pub mod pad;
pub mod margin;
pub mod stat;
pub mod moment;
pub mod integral;
pub mod fill;
pub mod crop;
pub mod contour;
pub mod rasterize;
pub mod gather;
pub mod gather_u8;

pub use crate::error::{RappError, RappResult};
pub use crate::raster::{BinaryRaster, BinaryRasterMut, GrayRaster, GrayRasterMut, RasterView, RasterViewMut};
