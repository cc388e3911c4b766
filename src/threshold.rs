//! Thresholding and 8-bit <-> binary type conversion (spec.md §4.4).
//!
//! Grounded on `original_source/compute/generic/rc_thresh_tpl.h` (the
//! per-word accumulate-then-store template) and `rc_type.c` (the
//! binary<->u8 conversions). The four comparison predicates
//! (`src>t`, `src<t`, `t_lo<src<t_hi`, `src<t_lo | src>t_hi`) are plain
//! closures here rather than compile-time template parameters, since their
//! thresholds are runtime values (spec.md §9's monomorphization note
//! applies to the *shape* of a kernel, not to values that are inherently
//! data, not configuration). The destination-word loop is unrolled by
//! [`THRESHOLD_UNROLL`], the compile-time factor [`crate::dispatch`]
//! selects for `Kernel::Threshold` (spec.md §4.15).

use crate::dispatch::{unroll_for, Kernel};
use crate::raster::{div_ceil, BinaryRasterMut, GrayRaster};
use crate::tables::NIBBLE_TO_BYTES;
use crate::word::{insert, Word};

/// The destination-word unroll factor this build's tuning table selects for
/// [`threshold_to_binary`] and its per-pixel variants.
const THRESHOLD_UNROLL: usize = unroll_for(Kernel::Threshold);

/// Assembles one destination word by testing `W::BITS` source pixels
/// starting at pixel `base`, via `pred`, and stores it.
#[inline(always)]
fn threshold_word<W: Word>(dst_row: &mut [u8], wi: usize, base: usize, width: usize, pred: &mut impl FnMut(usize) -> bool) {
  let mut acc: W = W::ZERO;
  let bits_here = (width - base).min(W::BITS as usize);
  for b in 0..bits_here {
    let bit: W = insert(pred(base + b) as u32, b as u32, 1);
    acc = acc | bit;
  }
  let wb = W::BYTES;
  acc.store(&mut dst_row[wi * wb..wi * wb + wb]);
}

/// Assembles an entire destination row, `UNROLL` destination words at a
/// time with a scalar tail for the remainder, per spec.md §4.15.
fn threshold_row<W: Word, const UNROLL: usize>(dst_row: &mut [u8], width: usize, mut pred: impl FnMut(usize) -> bool) {
  let words = div_ceil(width as u32, W::BITS) as usize;
  let full_groups = words / UNROLL;
  let mut wi = 0usize;
  for _ in 0..full_groups {
    for _ in 0..UNROLL {
      threshold_word::<W>(dst_row, wi, wi * W::BITS as usize, width, &mut pred);
      wi += 1;
    }
  }
  while wi < words {
    threshold_word::<W>(dst_row, wi, wi * W::BITS as usize, width, &mut pred);
    wi += 1;
  }
}

/// `src > t`.
#[inline]
#[must_use]
pub fn gt(t: u8) -> impl Fn(u8) -> bool + Copy {
  move |b| b > t
}
/// `src < t`.
#[inline]
#[must_use]
pub fn lt(t: u8) -> impl Fn(u8) -> bool + Copy {
  move |b| b < t
}
/// `t_lo < src < t_hi`.
#[inline]
#[must_use]
pub fn in_range(lo: u8, hi: u8) -> impl Fn(u8) -> bool + Copy {
  move |b| b > lo && b < hi
}
/// `src < t_lo | src > t_hi`.
#[inline]
#[must_use]
pub fn out_range(lo: u8, hi: u8) -> impl Fn(u8) -> bool + Copy {
  move |b| b < lo || b > hi
}

/// Thresholds an 8-bit raster into a packed-binary raster: `dst[x,y] =
/// pred(src[x,y])`.
///
/// Each destination word is assembled by testing `W::BITS` source pixels and
/// inserting one bit per pixel (spec.md §4.4), `THRESHOLD_UNROLL` words at a
/// time; a row's last partial word is handled the same way since the
/// per-pixel insert/accumulate loop already degrades gracefully to a partial
/// word.
pub fn threshold_to_binary<W: Word>(
  dst: &mut BinaryRasterMut,
  src: &GrayRaster,
  pred: impl Fn(u8) -> bool,
) {
  debug_assert_eq!(dst.bit_offset, 0);
  debug_assert_eq!(dst.view.width, src.view.width);
  debug_assert_eq!(dst.view.height, src.view.height);
  let width = dst.view.width as usize;
  for y in 0..dst.view.height {
    let src_row = src.view.row(y);
    let dst_row = dst.view.row_mut(y);
    threshold_row::<W, THRESHOLD_UNROLL>(dst_row, width, |x| pred(src_row[x]));
  }
}

/// The 8-bit-to-binary type conversion: the special case of `gt(127)`
/// (spec.md §4.4).
#[inline]
pub fn u8_to_bin<W: Word>(dst: &mut BinaryRasterMut, src: &GrayRaster) {
  threshold_to_binary::<W>(dst, src, gt(127));
}

/// Per-pixel single-threshold variant: each source pixel is compared
/// against the threshold raster's pixel at the same position.
pub fn threshold_pixel<W: Word>(
  dst: &mut BinaryRasterMut,
  src: &GrayRaster,
  thresh: &GrayRaster,
  cmp: impl Fn(u8, u8) -> bool,
) {
  debug_assert_eq!(dst.view.width, src.view.width);
  debug_assert_eq!(src.view.width, thresh.view.width);
  let width = dst.view.width as usize;
  for y in 0..dst.view.height {
    let src_row = src.view.row(y);
    let thr_row = thresh.view.row(y);
    let dst_row = dst.view.row_mut(y);
    threshold_row::<W, THRESHOLD_UNROLL>(dst_row, width, |x| cmp(src_row[x], thr_row[x]));
  }
}

/// Per-pixel double-threshold variant: `thresh_lo[x,y] < src[x,y] <
/// thresh_hi[x,y]`, or the out-of-range counterpart, selected by `cmp`.
pub fn threshold_pixel2<W: Word>(
  dst: &mut BinaryRasterMut,
  src: &GrayRaster,
  thresh_lo: &GrayRaster,
  thresh_hi: &GrayRaster,
  cmp: impl Fn(u8, u8, u8) -> bool,
) {
  let width = dst.view.width as usize;
  for y in 0..dst.view.height {
    let src_row = src.view.row(y);
    let lo_row = thresh_lo.view.row(y);
    let hi_row = thresh_hi.view.row(y);
    let dst_row = dst.view.row_mut(y);
    threshold_row::<W, THRESHOLD_UNROLL>(dst_row, width, |x| cmp(src_row[x], lo_row[x], hi_row[x]));
  }
}

/// Expands a packed-binary raster into 8-bit grayscale: set bits become
/// `0xFF`, clear bits become `0x00`.
///
/// Uses [`NIBBLE_TO_BYTES`] to expand 4 bits to 4 output bytes at a time, as
/// `rc_type.c`'s `RC_BIN_TO_U8_ITER` does with a 32-bit nibble-expand table.
pub fn bin_to_u8<W: Word>(dst: &mut crate::raster::GrayRasterMut, src: &crate::raster::BinaryRaster) {
  debug_assert_eq!(src.bit_offset, 0);
  debug_assert_eq!(dst.view.width, src.view.width);
  let width = dst.view.width as usize;
  let wb = W::BYTES;
  let words = div_ceil(dst.view.width, W::BITS) as usize;
  for y in 0..dst.view.height {
    let src_row = src.view.row(y);
    let dst_row = dst.view.row_mut(y);
    for wi in 0..words {
      let w: W = W::load(&src_row[wi * wb..wi * wb + wb]);
      let base = wi * W::BITS as usize;
      let nibbles = W::BITS as usize / 4;
      for n in 0..nibbles {
        let pos = (n * 4) as u32;
        let nibble = crate::word::extract(w, pos, 4) as usize;
        let expanded = NIBBLE_TO_BYTES[nibble];
        for k in 0..4 {
          let x = base + n * 4 + k;
          if x < width {
            dst_row[x] = expanded[k];
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::raster::{RasterView, RasterViewMut};

  #[test]
  fn threshold_gt_matches_scenario_3() {
    let src_bytes = [80u8, 100, 101, 255];
    let src = GrayRaster { view: RasterView { data: &src_bytes, dim: 4, width: 4, height: 1 } };
    let mut dst_bytes = [0u8; 4];
    let mut dst = BinaryRasterMut {
      view: RasterViewMut { data: &mut dst_bytes, dim: 4, width: 4, height: 1 },
      bit_offset: 0,
    };
    threshold_to_binary::<u32>(&mut dst, &src, gt(100));
    #[cfg(target_endian = "little")]
    assert_eq!(dst_bytes[0], 0b1100);
  }

  #[test]
  fn u8_to_bin_is_gt_127() {
    let src_bytes = [0u8, 127, 128, 255];
    let a = GrayRaster { view: RasterView { data: &src_bytes, dim: 4, width: 4, height: 1 } };
    let mut d1 = [0u8; 4];
    let mut d2 = [0u8; 4];
    {
      let mut dst = BinaryRasterMut {
        view: RasterViewMut { data: &mut d1, dim: 4, width: 4, height: 1 },
        bit_offset: 0,
      };
      u8_to_bin::<u32>(&mut dst, &a);
    }
    {
      let mut dst = BinaryRasterMut {
        view: RasterViewMut { data: &mut d2, dim: 4, width: 4, height: 1 },
        bit_offset: 0,
      };
      threshold_to_binary::<u32>(&mut dst, &a, gt(127));
    }
    assert_eq!(d1, d2);
  }

  #[test]
  fn bin_to_u8_then_u8_to_bin_is_identity() {
    let bin_bytes = [0b0000_1011u8, 0, 0, 0];
    let bin = crate::raster::BinaryRaster {
      view: RasterView { data: &bin_bytes, dim: 4, width: 8, height: 1 },
      bit_offset: 0,
    };
    let mut gray_bytes = [0u8; 8];
    {
      let mut g = crate::raster::GrayRasterMut {
        view: RasterViewMut { data: &mut gray_bytes, dim: 8, width: 8, height: 1 },
      };
      bin_to_u8::<u32>(&mut g, &bin);
    }
    let mut roundtrip_bytes = [0u8; 4];
    {
      let g = GrayRaster { view: RasterView { data: &gray_bytes, dim: 8, width: 8, height: 1 } };
      let mut d = BinaryRasterMut {
        view: RasterViewMut { data: &mut roundtrip_bytes, dim: 4, width: 8, height: 1 },
        bit_offset: 0,
      };
      u8_to_bin::<u32>(&mut d, &g);
    }
    assert_eq!(roundtrip_bytes, bin_bytes);
  }
}
