//! Sums, sums of squares, cross sums, and min/max (spec.md §4.11, first half).
//!
//! Grounded on `original_source/compute/generic/rc_stat.c` (the unrolled
//! per-row-then-widen-accumulator shape for 8-bit sums, and the bitcount-table
//! byte reduction and the AND/OR word reductions for binary min/max). The
//! original's per-row/then-widen unrolling exists to keep an 8-bit inner
//! accumulator from overflowing before it's folded into a `u64`, a concern
//! this crate's `u64` accumulator doesn't have; what's kept instead is the
//! unroll *factor* itself, applied to the pixel loop via [`STAT_UNROLL`]
//! (spec.md §4.15's `UNROLL(K)`), so the compile-time tuning table still
//! governs this kernel's body even though the overflow-driven widening it
//! originally paired with is moot here. Binary sum keeps the genuine
//! byte-at-a-time [`crate::tables::BITCOUNT`] fast path for interior full
//! bytes, falling back to a per-bit mask only at a row's misaligned or
//! partial edge byte.

use crate::dispatch::{unroll_for, Kernel};
use crate::raster::{bit_get, BinaryRaster, GrayRaster};
use crate::tables::BITCOUNT;

/// The pixel-loop unroll factor this build's tuning table selects for
/// [`stat_u8`].
const STAT_UNROLL: usize = unroll_for(Kernel::Stat);

/// Aggregate statistics over an 8-bit raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat8 {
  pub sum: u64,
  pub sum_sq: u64,
  pub min: u8,
  pub max: u8,
}

/// Computes sum, sum of squares, min, and max over every pixel of `src` in
/// one pass. Panics-by-`debug_assert` only on a zero-area raster, since
/// min/max have no defined value there.
pub fn stat_u8(src: &GrayRaster) -> Stat8 {
  debug_assert!(src.view.width > 0 && src.view.height > 0);
  stat_u8_unrolled::<STAT_UNROLL>(src)
}

/// [`stat_u8`]'s body, `UNROLL` pixels at a time with a scalar tail for the
/// remainder, so the compile-time tuning factor genuinely expands in this
/// kernel's loop per spec.md §4.15.
fn stat_u8_unrolled<const UNROLL: usize>(src: &GrayRaster) -> Stat8 {
  let width = src.view.width as usize;
  let mut sum: u64 = 0;
  let mut sum_sq: u64 = 0;
  let mut min = u8::MAX;
  let mut max = 0u8;
  for y in 0..src.view.height {
    let row = &src.view.row(y)[..width];
    let full_groups = width / UNROLL;
    let mut x = 0usize;
    for _ in 0..full_groups {
      for _ in 0..UNROLL {
        let v = row[x];
        sum += v as u64;
        sum_sq += (v as u64) * (v as u64);
        min = min.min(v);
        max = max.max(v);
        x += 1;
      }
    }
    while x < width {
      let v = row[x];
      sum += v as u64;
      sum_sq += (v as u64) * (v as u64);
      min = min.min(v);
      max = max.max(v);
      x += 1;
    }
  }
  Stat8 { sum, sum_sq, min, max }
}

/// Sum of `a[x,y] * b[x,y]` over every pixel. `a` and `b` must have equal
/// dimensions.
pub fn cross_sum_u8(a: &GrayRaster, b: &GrayRaster) -> u64 {
  debug_assert_eq!(a.view.width, b.view.width);
  debug_assert_eq!(a.view.height, b.view.height);
  let mut sum: u64 = 0;
  for y in 0..a.view.height {
    let ra = a.view.row(y);
    let rb = b.view.row(y);
    for x in 0..a.view.width as usize {
      sum += ra[x] as u64 * rb[x] as u64;
    }
  }
  sum
}

/// Count of set pixels in a binary raster.
///
/// Interior bytes that are fully within `[bit_offset, bit_offset+width)`
/// and start on a byte boundary use [`BITCOUNT`] directly; a row's leading
/// (if `bit_offset != 0`) and trailing (if `width` doesn't end on a byte
/// boundary) partial byte is masked bit-by-bit first.
pub fn sum_bin(src: &BinaryRaster) -> u64 {
  let width = src.view.width;
  let mut total: u64 = 0;
  for y in 0..src.view.height {
    let row = src.view.row(y);
    let mut remaining = width;
    let mut byte_i = 0usize;
    let mut bit_off = src.bit_offset as u32;
    while remaining > 0 {
      let byte = row[byte_i];
      let bits_here = (8 - bit_off).min(remaining);
      if bit_off == 0 && bits_here == 8 {
        total += BITCOUNT[byte as usize] as u64;
      } else {
        let mut count = 0u64;
        for i in 0..bits_here {
          if bit_get(byte, bit_off + i) {
            count += 1;
          }
        }
        total += count;
      }
      byte_i += 1;
      remaining -= bits_here;
      bit_off = 0;
    }
  }
  total
}

/// `true` iff any pixel of `src` is set (the OR reduction).
pub fn max_bin(src: &BinaryRaster) -> bool {
  for y in 0..src.view.height {
    for x in 0..src.view.width {
      if src.get(x, y) {
        return true;
      }
    }
  }
  false
}

/// `true` iff every pixel of `src` is set (the AND reduction). Vacuously
/// `true` for a zero-area raster.
pub fn min_bin(src: &BinaryRaster) -> bool {
  for y in 0..src.view.height {
    for x in 0..src.view.width {
      if !src.get(x, y) {
        return false;
      }
    }
  }
  true
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::raster::RasterView;

  #[test]
  fn stat_u8_matches_hand_computed_values() {
    let bytes = [1u8, 2, 3, 4, 5, 6];
    let src = GrayRaster { view: RasterView { data: &bytes, dim: 3, width: 3, height: 2 } };
    let s = stat_u8(&src);
    assert_eq!(s.sum, 1 + 2 + 3 + 4 + 5 + 6);
    assert_eq!(s.sum_sq, 1 + 4 + 9 + 16 + 25 + 36);
    assert_eq!(s.min, 1);
    assert_eq!(s.max, 6);
  }

  #[test]
  fn cross_sum_matches_dot_product() {
    let a_bytes = [1u8, 2, 3];
    let b_bytes = [4u8, 5, 6];
    let a = GrayRaster { view: RasterView { data: &a_bytes, dim: 3, width: 3, height: 1 } };
    let b = GrayRaster { view: RasterView { data: &b_bytes, dim: 3, width: 3, height: 1 } };
    assert_eq!(cross_sum_u8(&a, &b), 1 * 4 + 2 * 5 + 3 * 6);
  }

  #[test]
  fn sum_bin_counts_set_bits_with_partial_trailing_byte() {
    // width 12 spans a full first byte and a half-used second byte.
    let bytes = [0b1111_0000u8, 0b0000_1010u8];
    let src = BinaryRaster { view: RasterView { data: &bytes, dim: 2, width: 12, height: 1 }, bit_offset: 0 };
    // first byte: bits 4..8 are set -> 4 bits; second byte contributes bits
    // 0..4 of width (4 bits of the 12), value 0b1010 -> 2 set bits.
    assert_eq!(sum_bin(&src), 4 + 2);
  }

  #[test]
  fn max_min_bin_agree_with_all_set_all_clear() {
    let all_set = [0xFFu8];
    let all_clear = [0x00u8];
    let mixed = [0b0000_0001u8];
    let a = BinaryRaster { view: RasterView { data: &all_set, dim: 1, width: 8, height: 1 }, bit_offset: 0 };
    let b = BinaryRaster { view: RasterView { data: &all_clear, dim: 1, width: 8, height: 1 }, bit_offset: 0 };
    let c = BinaryRaster { view: RasterView { data: &mixed, dim: 1, width: 8, height: 1 }, bit_offset: 0 };
    assert!(max_bin(&a) && min_bin(&a));
    assert!(!max_bin(&b) && !min_bin(&b));
    assert!(max_bin(&c) && !min_bin(&c));
  }
}
