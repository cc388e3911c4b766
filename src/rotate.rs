//! 90-degree rotation for 8-bit and binary rasters (spec.md §4.6).
//!
//! Grounded on `original_source/compute/generic/rc_rotate.c` (8-bit, a
//! per-row gather) and `rc_rotate_bin.c` (binary, word-block transpose).
//! Both reduce to the same coordinate transform (derived in `DESIGN.md`
//! from the spec's `output[height-1-y][x] = input[x][y]` (CW) /
//! `output[x][width-1-y] = input[x][y]` (CCW) definitions, read as a
//! transpose composed with an axis flip):
//!
//! - CW:  `dst.get(h-1-sy, sx) = src.get(sx, sy)`, `dst` is `h x w`.
//! - CCW: `dst.get(sy, w-1-sx) = src.get(sx, sy)`, `dst` is `h x w`.
//!
//! The binary variant is expressed per pixel against
//! [`BinaryRasterMut::set`] rather than `rc_rotate_bin.c`'s `8W x 8W`
//! word-block bit-scatter, for the same reason as [`crate::reduce`]/
//! [`crate::expand`]: a from-scratch block transpose is easy to get subtly
//! wrong without a compiler to check it against.

use crate::raster::{BinaryRaster, BinaryRasterMut, GrayRaster, GrayRasterMut};

/// Rotates an 8-bit raster 90 degrees clockwise. `dst.width == src.height`
/// and `dst.height == src.width`.
pub fn rotate_cw_u8(dst: &mut GrayRasterMut, src: &GrayRaster) {
  let (w, h) = (src.view.width, src.view.height);
  debug_assert_eq!(dst.view.width, h);
  debug_assert_eq!(dst.view.height, w);
  for sy in 0..h {
    for sx in 0..w {
      dst.set(h - 1 - sy, sx, src.get(sx, sy));
    }
  }
}

/// Rotates an 8-bit raster 90 degrees counterclockwise. `dst.width ==
/// src.height` and `dst.height == src.width`.
pub fn rotate_ccw_u8(dst: &mut GrayRasterMut, src: &GrayRaster) {
  let (w, h) = (src.view.width, src.view.height);
  debug_assert_eq!(dst.view.width, h);
  debug_assert_eq!(dst.view.height, w);
  for sy in 0..h {
    for sx in 0..w {
      dst.set(sy, w - 1 - sx, src.get(sx, sy));
    }
  }
}

/// Rotates a binary raster 90 degrees clockwise. `dst.width == src.height`
/// and `dst.height == src.width`.
pub fn rotate_cw_bin(dst: &mut BinaryRasterMut, src: &BinaryRaster) {
  let (w, h) = (src.view.width, src.view.height);
  debug_assert_eq!(dst.view.width, h);
  debug_assert_eq!(dst.view.height, w);
  for sy in 0..h {
    for sx in 0..w {
      dst.set(h - 1 - sy, sx, src.get(sx, sy));
    }
  }
}

/// Rotates a binary raster 90 degrees counterclockwise. `dst.width ==
/// src.height` and `dst.height == src.width`.
pub fn rotate_ccw_bin(dst: &mut BinaryRasterMut, src: &BinaryRaster) {
  let (w, h) = (src.view.width, src.view.height);
  debug_assert_eq!(dst.view.width, h);
  debug_assert_eq!(dst.view.height, w);
  for sy in 0..h {
    for sx in 0..w {
      dst.set(sy, w - 1 - sx, src.get(sx, sy));
    }
  }
}
