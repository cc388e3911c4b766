//! Binary 2x spatial reduction (spec.md §4.6).
//!
//! Grounded on `original_source/compute/generic/rc_reduce_bin.c`'s rank
//! predicate (`RC_REDUCE_1X2_RK1` = OR, `RC_REDUCE_1X2_RK2` = AND,
//! generalized here to "set iff at least `rank` of the contributing source
//! pixels are set", spec.md's definition of rank-k reduction). The
//! original assembles each destination word via a bit-interleave-then-permute
//! trick driven by [`crate::tables::REDUCE_PERMUTE`]. [`reduce_1x2`] reuses
//! that exact table for a whole-byte fast path on little-endian targets
//! (where a pixel's logical position coincides with its raw bit position, so
//! the table's literal `(bits 0,2,4,6,1,3,5,7)` deinterleave lines up with
//! pixel order without any extra bit-twiddling): `REDUCE_PERMUTE[byte]`'s low
//! nibble is the byte's even-indexed pixels and its high nibble the
//! odd-indexed ones, so OR-ing (rank 1) or AND-ing (rank 2) those two nibbles
//! directly gives the 4 pairwise results the byte contributes. 2x1/2x2 and a
//! row's trailing partial byte-pair keep the per-pixel path against
//! [`BinaryRaster::get`]/[`BinaryRasterMut::set`], since their extra
//! row-combining step isn't a single-table lookup and is harder to get right
//! without a compiler to check it against (see `DESIGN.md`).

use crate::raster::{BinaryRaster, BinaryRasterMut};

/// 1x2 (horizontal pairs) reduction: `dst[x,y]` is set iff at least `rank`
/// (1 or 2) of `src[2x,y]`, `src[2x+1,y]` are set. `dst.width` must equal
/// `src.width / 2`.
pub fn reduce_1x2(dst: &mut BinaryRasterMut, src: &BinaryRaster, rank: u8) {
  debug_assert!((1..=2).contains(&rank));
  debug_assert_eq!(dst.view.width, src.view.width / 2);
  debug_assert_eq!(dst.view.height, src.view.height);
  #[cfg(target_endian = "little")]
  {
    if src.bit_offset == 0 && dst.bit_offset == 0 {
      reduce_1x2_byte_fast(dst, src, rank);
      return;
    }
  }
  reduce_1x2_scalar(dst, src, rank, 0);
}

fn reduce_1x2_scalar(dst: &mut BinaryRasterMut, src: &BinaryRaster, rank: u8, from_dst_x: u32) {
  for y in 0..dst.view.height {
    for ox in from_dst_x..dst.view.width {
      let count = src.get(2 * ox, y) as u8 + src.get(2 * ox + 1, y) as u8;
      dst.set(ox, y, count >= rank);
    }
  }
}

/// The byte-parallel fast path described in this module's header comment.
/// Handles every full source byte-pair via [`crate::tables::REDUCE_PERMUTE`]
/// and falls back to [`reduce_1x2_scalar`] for a row's trailing partial pair.
#[cfg(target_endian = "little")]
fn reduce_1x2_byte_fast(dst: &mut BinaryRasterMut, src: &BinaryRaster, rank: u8) {
  use crate::tables::REDUCE_PERMUTE;
  let width = src.view.width as usize;
  let full_src_bytes = width / 8;
  let byte_pairs = full_src_bytes / 2;
  let pair_nibble = |byte: u8| -> u8 {
    let permuted = REDUCE_PERMUTE[byte as usize];
    let lo = permuted & 0x0F;
    let hi = (permuted >> 4) & 0x0F;
    if rank == 1 {
      lo | hi
    } else {
      lo & hi
    }
  };
  for y in 0..dst.view.height {
    let src_row = src.view.row(y);
    let dst_row = dst.view.row_mut(y);
    for k in 0..byte_pairs {
      let lo_nibble = pair_nibble(src_row[2 * k]);
      let hi_nibble = pair_nibble(src_row[2 * k + 1]);
      dst_row[k] = lo_nibble | (hi_nibble << 4);
    }
  }
  let handled_dst_pixels = (byte_pairs * 8) as u32;
  if handled_dst_pixels < dst.view.width {
    reduce_1x2_scalar(dst, src, rank, handled_dst_pixels);
  }
}

/// 2x1 (vertical pairs) reduction: `dst[x,y]` is set iff at least `rank`
/// (1 or 2) of `src[x,2y]`, `src[x,2y+1]` are set. `dst.height` must equal
/// `src.height / 2`.
pub fn reduce_2x1(dst: &mut BinaryRasterMut, src: &BinaryRaster, rank: u8) {
  debug_assert!((1..=2).contains(&rank));
  debug_assert_eq!(dst.view.width, src.view.width);
  debug_assert_eq!(dst.view.height, src.view.height / 2);
  for oy in 0..dst.view.height {
    for x in 0..dst.view.width {
      let count = src.get(x, 2 * oy) as u8 + src.get(x, 2 * oy + 1) as u8;
      dst.set(x, oy, count >= rank);
    }
  }
}

/// 2x2 reduction: `dst[x,y]` is set iff at least `rank` (1..=4) of the four
/// pixels `src[2x..2x+2, 2y..2y+2]` are set. `dst.width`/`dst.height` must
/// equal `src.width / 2`/`src.height / 2`.
pub fn reduce_2x2(dst: &mut BinaryRasterMut, src: &BinaryRaster, rank: u8) {
  debug_assert!((1..=4).contains(&rank));
  debug_assert_eq!(dst.view.width, src.view.width / 2);
  debug_assert_eq!(dst.view.height, src.view.height / 2);
  for oy in 0..dst.view.height {
    for ox in 0..dst.view.width {
      let count = src.get(2 * ox, 2 * oy) as u8
        + src.get(2 * ox + 1, 2 * oy) as u8
        + src.get(2 * ox, 2 * oy + 1) as u8
        + src.get(2 * ox + 1, 2 * oy + 1) as u8;
      dst.set(ox, oy, count >= rank);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::raster::{RasterView, RasterViewMut};

  #[test]
  fn rank_monotonicity_for_2x2() {
    // A 2x2 block with exactly 2 set bits: rank 1 must be set whenever
    // rank 2 is, rank 2 whenever rank 3 is, etc.
    let src_bytes = [0b0000_0011u8, 0b0000_0000u8]; // row0: (0,0)=1,(1,0)=1; row1: both 0
    let src =
      BinaryRaster { view: RasterView { data: &src_bytes, dim: 1, width: 2, height: 2 }, bit_offset: 0 };
    let mut outs = [0u8; 4];
    for rank in 1..=4u8 {
      let mut d = [0u8];
      {
        let mut dst =
          BinaryRasterMut { view: RasterViewMut { data: &mut d, dim: 1, width: 1, height: 1 }, bit_offset: 0 };
        reduce_2x2(&mut dst, &src, rank);
      }
      outs[(rank - 1) as usize] = d[0] & 1;
    }
    // monotonic non-increasing as rank increases
    for i in 1..4 {
      assert!(outs[i] <= outs[i - 1]);
    }
  }

  #[test]
  fn reduce_1x2_rank1_is_or() {
    let src_bytes = [0b0000_0010u8]; // pixel1 set, pixel0 clear
    let src =
      BinaryRaster { view: RasterView { data: &src_bytes, dim: 1, width: 2, height: 1 }, bit_offset: 0 };
    let mut d = [0u8];
    let mut dst =
      BinaryRasterMut { view: RasterViewMut { data: &mut d, dim: 1, width: 1, height: 1 }, bit_offset: 0 };
    reduce_1x2(&mut dst, &src, 1);
    assert!(dst.get(0, 0));
  }

  #[test]
  #[cfg(target_endian = "little")]
  fn reduce_1x2_byte_fast_path_matches_hand_computed_bytes() {
    // byte0 = 0x55 (even pixels set, odd clear): every pair has exactly one
    // bit set, so rank 1 sets the whole resulting nibble and rank 2 clears
    // it. byte1 = 0xAA is the same pattern with parity flipped.
    let src_bytes = [0x55u8, 0xAA];
    let src =
      BinaryRaster { view: RasterView { data: &src_bytes, dim: 2, width: 16, height: 1 }, bit_offset: 0 };

    let mut rank1 = [0u8];
    {
      let mut dst =
        BinaryRasterMut { view: RasterViewMut { data: &mut rank1, dim: 1, width: 8, height: 1 }, bit_offset: 0 };
      reduce_1x2(&mut dst, &src, 1);
    }
    assert_eq!(rank1, [0xFF]);

    let mut rank2 = [0xFFu8];
    {
      let mut dst =
        BinaryRasterMut { view: RasterViewMut { data: &mut rank2, dim: 1, width: 8, height: 1 }, bit_offset: 0 };
      reduce_1x2(&mut dst, &src, 2);
    }
    assert_eq!(rank2, [0x00]);
  }

  #[test]
  #[cfg(target_endian = "little")]
  fn reduce_1x2_byte_fast_path_agrees_with_scalar_on_a_trailing_partial_byte() {
    // width 20: two full source bytes (handled by the fast path) plus a
    // partial third byte (4 of its 8 bits are in-image), exercising the
    // scalar fallback for the last dst byte-pair.
    let src_bytes = [0b1001_0110u8, 0b0110_1001u8, 0b0000_1101u8];
    let src =
      BinaryRaster { view: RasterView { data: &src_bytes, dim: 3, width: 20, height: 1 }, bit_offset: 0 };

    let mut fast = [0u8; 2];
    {
      let mut dst = BinaryRasterMut {
        view: RasterViewMut { data: &mut fast, dim: 2, width: 10, height: 1 },
        bit_offset: 0,
      };
      reduce_1x2(&mut dst, &src, 1);
    }

    let mut expected = [0u8; 2];
    {
      let mut dst = BinaryRasterMut {
        view: RasterViewMut { data: &mut expected, dim: 2, width: 10, height: 1 },
        bit_offset: 0,
      };
      reduce_1x2_scalar(&mut dst, &src, 1, 0);
    }
    assert_eq!(fast, expected);
  }
}
