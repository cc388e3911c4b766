//! Integral (summed-area) images (spec.md §4.12).
//!
//! Grounded on `original_source/compute/generic/rc_integral.c` (the 8-bit
//! variant) and `rc_integral_bin.c` (the binary variant): the standard
//! `dst[x,y] = src[x,y] + dst[x-1,y] + dst[x,y-1] - dst[x-1,y-1]`
//! recurrence, computed directly against the destination buffer (no extra
//! row buffer) the way the original walks the destination left-to-right,
//! top-to-bottom. The binary-source all-zero-row fast path
//! (`rc_integral_bin.c`'s row-skip optimization) is kept: when a source row
//! is entirely clear, that row's integral values equal the row above's,
//! verbatim (provable by induction on the recurrence with `src[x,y]=0`), so
//! it's copied rather than recomputed pixel by pixel.
//!
//! The destination element type varies per call (`u16`/`u32` for an 8-bit
//! source, `u8`/`u16`/`u32` for a binary source); rather than introduce a
//! numeric-conversion trait with no counterpart elsewhere in the crate, each
//! destination width gets its own named function, matching spec.md §6's
//! "the caller selects the appropriate variant" and the flat-function-name
//! convention the rest of the external interface uses.

use crate::raster::{bit_get, BinaryRaster, GrayRaster};

macro_rules! integral_u8_to {
  ($name:ident, $t:ty) => {
    /// Computes the integral image of an 8-bit raster into a `
    #[doc = stringify!($t)]
    /// ` destination buffer (row-major, stride `dst_stride` elements).
    pub fn $name(dst: &mut [$t], dst_stride: usize, src: &GrayRaster) {
      let (w, h) = (src.view.width, src.view.height);
      for y in 0..h {
        for x in 0..w {
          let p = src.get(x, y) as $t;
          let idx = y as usize * dst_stride + x as usize;
          let left = if x > 0 { dst[idx - 1] } else { 0 };
          let up = if y > 0 { dst[idx - dst_stride] } else { 0 };
          let up_left = if x > 0 && y > 0 { dst[idx - dst_stride - 1] } else { 0 };
          dst[idx] = p + left + up - up_left;
        }
      }
    }
  };
}
integral_u8_to!(integral_u8_to_u16, u16);
integral_u8_to!(integral_u8_to_u32, u32);

fn row_is_all_zero(row: &[u8], bit_offset: u8, width: u32) -> bool {
  let mut remaining = width;
  let mut byte_i = 0usize;
  let mut bit_off = bit_offset as u32;
  while remaining > 0 {
    let byte = row[byte_i];
    let bits_here = (8 - bit_off).min(remaining);
    if bit_off == 0 && bits_here == 8 {
      if byte != 0 {
        return false;
      }
    } else {
      for i in 0..bits_here {
        if bit_get(byte, bit_off + i) {
          return false;
        }
      }
    }
    byte_i += 1;
    remaining -= bits_here;
    bit_off = 0;
  }
  true
}

macro_rules! integral_bin_to {
  ($name:ident, $t:ty) => {
    /// Computes the integral image of a binary raster into a `
    #[doc = stringify!($t)]
    /// ` destination buffer (row-major, stride `dst_stride` elements).
    pub fn $name(dst: &mut [$t], dst_stride: usize, src: &BinaryRaster) {
      let (w, h) = (src.view.width, src.view.height);
      for y in 0..h {
        let row = src.view.row(y);
        if row_is_all_zero(row, src.bit_offset, w) && y > 0 {
          for x in 0..w as usize {
            let idx = y as usize * dst_stride + x;
            dst[idx] = dst[idx - dst_stride];
          }
          continue;
        }
        for x in 0..w {
          let p = src.get(x, y) as $t;
          let idx = y as usize * dst_stride + x as usize;
          let left = if x > 0 { dst[idx - 1] } else { 0 };
          let up = if y > 0 { dst[idx - dst_stride] } else { 0 };
          let up_left = if x > 0 && y > 0 { dst[idx - dst_stride - 1] } else { 0 };
          dst[idx] = p + left + up - up_left;
        }
      }
    }
  };
}
integral_bin_to!(integral_bin_to_u8, u8);
integral_bin_to!(integral_bin_to_u16, u16);
integral_bin_to!(integral_bin_to_u32, u32);
