//! Binary 2x spatial expansion (spec.md §4.6), the inverse of [`crate::reduce`].
//!
//! Grounded on `original_source/compute/generic/rc_expand_bin.c`'s
//! duplicate-each-bit LUT ([`crate::tables::EXPAND_DUP`]: bit `i` of a byte
//! becomes bits `2i`/`2i+1` of a halfword). [`expand_1x2`] reuses that table
//! for a whole-byte fast path on little-endian targets, mirroring
//! [`crate::reduce::reduce_1x2`]'s: a pixel's logical position coincides
//! with its raw bit position there, so `EXPAND_DUP[byte]`'s low byte (once
//! split via `to_le_bytes`) is exactly the first 8 output pixels the input
//! byte contributes and its high byte the next 8, i.e.
//! `dst_row[2k..2k+2] == EXPAND_DUP[src_row[k]].to_le_bytes()`. 2x1/2x2 and a
//! row's trailing partial byte keep the per-pixel path against
//! [`BinaryRaster::get`]/[`BinaryRasterMut::set`], since their extra
//! row-duplication step isn't a single-table lookup and is harder to get
//! right without a compiler to check it against (see `DESIGN.md`).

use crate::raster::{BinaryRaster, BinaryRasterMut};

/// 1x2 (horizontal duplication): `dst[2x,y] = dst[2x+1,y] = src[x,y]`.
/// `dst.width` must equal `src.width * 2`.
pub fn expand_1x2(dst: &mut BinaryRasterMut, src: &BinaryRaster) {
  debug_assert_eq!(dst.view.width, src.view.width * 2);
  debug_assert_eq!(dst.view.height, src.view.height);
  #[cfg(target_endian = "little")]
  {
    if src.bit_offset == 0 && dst.bit_offset == 0 {
      expand_1x2_byte_fast(dst, src);
      return;
    }
  }
  expand_1x2_scalar(dst, src, 0);
}

fn expand_1x2_scalar(dst: &mut BinaryRasterMut, src: &BinaryRaster, from_src_x: u32) {
  for y in 0..src.view.height {
    for x in from_src_x..src.view.width {
      let v = src.get(x, y);
      dst.set(2 * x, y, v);
      dst.set(2 * x + 1, y, v);
    }
  }
}

/// The byte-parallel fast path described in this module's header comment.
/// Handles every full source byte via [`crate::tables::EXPAND_DUP`] and
/// falls back to [`expand_1x2_scalar`] for a row's trailing partial byte.
#[cfg(target_endian = "little")]
fn expand_1x2_byte_fast(dst: &mut BinaryRasterMut, src: &BinaryRaster) {
  use crate::tables::EXPAND_DUP;
  let full_src_bytes = (src.view.width as usize) / 8;
  for y in 0..dst.view.height {
    let src_row = src.view.row(y);
    let dst_row = dst.view.row_mut(y);
    for k in 0..full_src_bytes {
      let pair = EXPAND_DUP[src_row[k] as usize].to_le_bytes();
      dst_row[2 * k] = pair[0];
      dst_row[2 * k + 1] = pair[1];
    }
  }
  let handled_src_pixels = (full_src_bytes * 8) as u32;
  if handled_src_pixels < src.view.width {
    expand_1x2_scalar(dst, src, handled_src_pixels);
  }
}

/// 2x1 (vertical duplication): `dst[x,2y] = dst[x,2y+1] = src[x,y]`.
/// `dst.height` must equal `src.height * 2`.
pub fn expand_2x1(dst: &mut BinaryRasterMut, src: &BinaryRaster) {
  debug_assert_eq!(dst.view.width, src.view.width);
  debug_assert_eq!(dst.view.height, src.view.height * 2);
  for y in 0..src.view.height {
    for x in 0..src.view.width {
      let v = src.get(x, y);
      dst.set(x, 2 * y, v);
      dst.set(x, 2 * y + 1, v);
    }
  }
}

/// 2x2 (both): each source pixel becomes a 2x2 block of the same value.
/// `dst.width`/`dst.height` must equal `src.width * 2`/`src.height * 2`.
pub fn expand_2x2(dst: &mut BinaryRasterMut, src: &BinaryRaster) {
  debug_assert_eq!(dst.view.width, src.view.width * 2);
  debug_assert_eq!(dst.view.height, src.view.height * 2);
  for y in 0..src.view.height {
    for x in 0..src.view.width {
      let v = src.get(x, y);
      dst.set(2 * x, 2 * y, v);
      dst.set(2 * x + 1, 2 * y, v);
      dst.set(2 * x, 2 * y + 1, v);
      dst.set(2 * x + 1, 2 * y + 1, v);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::raster::{RasterView, RasterViewMut};
  use crate::reduce::reduce_2x2;

  #[test]
  fn expand_then_reduce_rank1_is_identity() {
    let src_bytes = [0b0000_0101u8]; // pixel0=1, pixel1=0, pixel2=1
    let src =
      BinaryRaster { view: RasterView { data: &src_bytes, dim: 1, width: 3, height: 1 }, bit_offset: 0 };
    let mut expanded = [0u8; 2];
    {
      let mut dst = BinaryRasterMut {
        view: RasterViewMut { data: &mut expanded, dim: 1, width: 6, height: 2 },
        bit_offset: 0,
      };
      expand_2x2(&mut dst, &src);
    }
    let expanded_view =
      BinaryRaster { view: RasterView { data: &expanded, dim: 1, width: 6, height: 2 }, bit_offset: 0 };
    let mut roundtrip = [0u8; 1];
    {
      let mut dst = BinaryRasterMut {
        view: RasterViewMut { data: &mut roundtrip, dim: 1, width: 3, height: 1 },
        bit_offset: 0,
      };
      reduce_2x2(&mut dst, &expanded_view, 1);
    }
    assert_eq!(roundtrip, src_bytes);
  }

  #[test]
  #[cfg(target_endian = "little")]
  fn expand_1x2_byte_fast_path_matches_hand_computed_bytes() {
    // 0b0000_0001: only pixel 0 set, so only the first output pair (pixels
    // 0,1) is set -> dst byte 0 = 0b0000_0011. The rest of the source byte
    // is clear, so the rest of the expansion is clear too.
    let src_bytes = [0b0000_0001u8];
    let src =
      BinaryRaster { view: RasterView { data: &src_bytes, dim: 1, width: 8, height: 1 }, bit_offset: 0 };
    let mut dst_bytes = [0u8; 2];
    let mut dst = BinaryRasterMut {
      view: RasterViewMut { data: &mut dst_bytes, dim: 2, width: 16, height: 1 },
      bit_offset: 0,
    };
    expand_1x2(&mut dst, &src);
    assert_eq!(dst_bytes, [0b0000_0011, 0x00]);
  }

  #[test]
  #[cfg(target_endian = "little")]
  fn expand_1x2_byte_fast_path_agrees_with_scalar_on_a_trailing_partial_byte() {
    // width 12: one full source byte (fast path) plus a partial second byte
    // (4 of its 8 bits are in-image), exercising the scalar fallback for the
    // last 8 output pixels.
    let src_bytes = [0b1001_0110u8, 0b0000_1101u8];
    let src =
      BinaryRaster { view: RasterView { data: &src_bytes, dim: 2, width: 12, height: 1 }, bit_offset: 0 };

    let mut fast = [0u8; 3];
    {
      let mut dst = BinaryRasterMut {
        view: RasterViewMut { data: &mut fast, dim: 3, width: 24, height: 1 },
        bit_offset: 0,
      };
      expand_1x2(&mut dst, &src);
    }

    let mut expected = [0u8; 3];
    {
      let mut dst = BinaryRasterMut {
        view: RasterViewMut { data: &mut expected, dim: 3, width: 24, height: 1 },
        bit_offset: 0,
      };
      expand_1x2_scalar(&mut dst, &src, 0);
    }
    assert_eq!(fast, expected);
  }
}
