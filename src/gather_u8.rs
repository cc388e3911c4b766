//! 8-bit gather and scatter under a mask (spec.md §4.13, 8-bit half).
//!
//! Grounded on `original_source/compute/generic/rc_gather.c`'s byte
//! fast-path structure: an empty mask byte skips 8 pixels outright, a full
//! mask byte copies 8 whole bytes, and a mixed byte falls back to the
//! extract-one-bit-at-a-time path. Per `DESIGN.md`'s Open Question
//! decision, this crate keeps that one generic row-walking path rather
//! than also special-casing `height <= 3`; the mask byte itself is built
//! by testing [`crate::raster::BinaryRaster::get`] once per pixel of the
//! chunk instead of loading and extracting a packed word, since the mask
//! raster's `bit_offset` can be nonzero and this keeps the chunk-alignment
//! logic identical regardless.

use crate::raster::{BinaryRaster, GrayRaster, GrayRasterMut};

/// Copies source bytes at mask-set positions into `dst`, tightly packed in
/// raster order. `dst` must have at least `popcount(mask)` bytes. Returns
/// the number of bytes copied.
pub fn gather_u8(src: &GrayRaster, mask: &BinaryRaster, dst: &mut [u8]) -> usize {
  debug_assert_eq!(src.view.width, mask.view.width);
  debug_assert_eq!(src.view.height, mask.view.height);
  let width = src.view.width as usize;
  let mut count = 0usize;
  for y in 0..src.view.height {
    let src_row = src.view.row(y);
    let mut x = 0usize;
    while x < width {
      let bits_here = (width - x).min(8);
      let mut mask_byte = 0u8;
      for i in 0..bits_here {
        if mask.get(x as u32 + i as u32, y) {
          mask_byte |= 1 << i;
        }
      }
      if mask_byte == 0 {
        x += bits_here;
        continue;
      }
      if mask_byte == 0xFF && bits_here == 8 {
        dst[count..count + 8].copy_from_slice(&src_row[x..x + 8]);
        count += 8;
        x += 8;
        continue;
      }
      for i in 0..bits_here {
        if mask_byte & (1 << i) != 0 {
          dst[count] = src_row[x + i];
          count += 1;
        }
      }
      x += bits_here;
    }
  }
  count
}

/// Inverse of [`gather_u8`]: reads bytes in order from a tightly packed
/// `src` and writes them at mask-set positions of `dst`. Returns the
/// number of bytes scattered.
pub fn scatter_u8(src: &[u8], mask: &BinaryRaster, dst: &mut GrayRasterMut) -> usize {
  debug_assert_eq!(dst.view.width, mask.view.width);
  debug_assert_eq!(dst.view.height, mask.view.height);
  let width = dst.view.width as usize;
  let mut count = 0usize;
  for y in 0..dst.view.height {
    let mut x = 0usize;
    while x < width {
      let bits_here = (width - x).min(8);
      let mut mask_byte = 0u8;
      for i in 0..bits_here {
        if mask.get(x as u32 + i as u32, y) {
          mask_byte |= 1 << i;
        }
      }
      if mask_byte == 0 {
        x += bits_here;
        continue;
      }
      if mask_byte == 0xFF && bits_here == 8 {
        for i in 0..8 {
          dst.set((x + i) as u32, y, src[count + i]);
        }
        count += 8;
        x += 8;
        continue;
      }
      for i in 0..bits_here {
        if mask_byte & (1 << i) != 0 {
          dst.set((x + i) as u32, y, src[count]);
          count += 1;
        }
      }
      x += bits_here;
    }
  }
  count
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::raster::{RasterView, RasterViewMut};

  #[test]
  fn gather_u8_skips_empty_and_copies_full_mask_bytes() {
    let src_bytes: [u8; 16] = core::array::from_fn(|i| i as u8 + 1);
    let mask_bytes = [0x00u8, 0xFFu8];
    let src = GrayRaster { view: RasterView { data: &src_bytes, dim: 16, width: 16, height: 1 } };
    let mask = BinaryRaster { view: RasterView { data: &mask_bytes, dim: 2, width: 16, height: 1 }, bit_offset: 0 };
    let mut dst = [0u8; 8];
    let count = gather_u8(&src, &mask, &mut dst);
    assert_eq!(count, 8);
    assert_eq!(dst, [9, 10, 11, 12, 13, 14, 15, 16]);
  }

  #[test]
  fn gather_then_scatter_u8_round_trips() {
    let src_bytes = [10u8, 20, 30, 40];
    let mask_bytes = [0b0000_1010u8];
    let src = GrayRaster { view: RasterView { data: &src_bytes, dim: 4, width: 4, height: 1 } };
    let mask = BinaryRaster { view: RasterView { data: &mask_bytes, dim: 1, width: 4, height: 1 }, bit_offset: 0 };
    let mut packed = [0u8; 2];
    let count = gather_u8(&src, &mask, &mut packed);
    assert_eq!(count, 2);
    assert_eq!(&packed[..2], &[20, 40]);

    let mut dst_bytes = [0u8; 4];
    let mut dst = GrayRasterMut { view: RasterViewMut { data: &mut dst_bytes, dim: 4, width: 4, height: 1 } };
    let count2 = scatter_u8(&packed, &mask, &mut dst);
    assert_eq!(count2, 2);
    assert_eq!(dst_bytes, [0, 20, 0, 40]);
  }
}
