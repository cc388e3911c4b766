//! Horizontal and vertical logical margins over binary rasters (spec.md §4.14).
//!
//! Grounded on `original_source/compute/generic/rc_margin.c`. Horizontal
//! margin ORs every row of the source down into a single output row (the
//! "union of rows" read as a column-wise OR); vertical margin ORs every
//! word of a row down into a single output bit per row (non-emptiness of
//! that row). Both are expressed per pixel against [`BinaryRaster::get`]/
//! [`BinaryRasterMut::set`] for the same reason as [`crate::reduce`]: the
//! original's word-at-a-time OR-accumulate is a throughput concern, not a
//! semantic one, and the per-pixel form is trivially correct by inspection.

use crate::raster::{BinaryRaster, BinaryRasterMut};

/// Horizontal margin: `dst[x, 0] = OR over y of src[x, y]`. `dst` is a
/// single-row raster with `dst.width == src.width`.
pub fn margin_horizontal(dst: &mut BinaryRasterMut, src: &BinaryRaster) {
  debug_assert_eq!(dst.view.width, src.view.width);
  debug_assert_eq!(dst.view.height, 1);
  for x in 0..src.view.width {
    let mut any = false;
    for y in 0..src.view.height {
      if src.get(x, y) {
        any = true;
        break;
      }
    }
    dst.set(x, 0, any);
  }
}

/// Vertical margin: `dst[0, y] = OR over x of src[x, y]`. `dst` is a
/// single-column raster with `dst.height == src.height`.
pub fn margin_vertical(dst: &mut BinaryRasterMut, src: &BinaryRaster) {
  debug_assert_eq!(dst.view.height, src.view.height);
  debug_assert_eq!(dst.view.width, 1);
  for y in 0..src.view.height {
    let mut any = false;
    for x in 0..src.view.width {
      if src.get(x, y) {
        any = true;
        break;
      }
    }
    dst.set(0, y, any);
  }
}
