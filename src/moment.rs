//! First- and second-order binary image moments (spec.md §4.11, second half).
//!
//! Grounded on `original_source/compute/generic/rc_moment_bin.c`'s table
//! scheme: each byte of a packed row contributes its bit count
//! ([`crate::tables::BITCOUNT`]), the sum of its set bits' positions
//! ([`crate::tables::X_SUM`]), and the sum of their squared positions
//! ([`crate::tables::X2_SUM`]), with the row's base x-offset folded in
//! algebraically (`(base+i)^2 = base^2 + 2*base*i + i^2`) rather than
//! reapplied bit by bit, matching the original's "all-ones word" fast path
//! generalized down to byte granularity. Row totals are then weighted by
//! `y`/`y^2` to extend to the second-order `Σy`, `Σy²`, `Σxy` moments, per
//! spec.md §4.11's "Row-level updates multiply the row's per-pixel totals
//! by y (or y²)."

use crate::raster::{bit_get, BinaryRaster};
use crate::tables::{BITCOUNT, X2_SUM, X_SUM};

/// First- and second-order moments of the set pixels of a binary raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Moments {
  pub n: u64,
  pub sum_x: u64,
  pub sum_y: u64,
  pub sum_xx: u64,
  pub sum_yy: u64,
  pub sum_xy: u64,
}

/// A row's contribution before it is weighted by `y`.
struct RowMoment {
  n: u64,
  sum_x: u64,
  sum_xx: u64,
}

fn row_moment(row: &[u8], bit_offset: u8, width: u32) -> RowMoment {
  let mut n: u64 = 0;
  let mut sum_x: u64 = 0;
  let mut sum_xx: u64 = 0;
  let mut remaining = width;
  let mut byte_i = 0usize;
  let mut bit_off = bit_offset as u32;
  let mut x_cursor: u64 = 0;
  while remaining > 0 {
    let byte = row[byte_i];
    let bits_here = (8 - bit_off).min(remaining);
    if bit_off == 0 && bits_here == 8 {
      let count = BITCOUNT[byte as usize] as u64;
      let base = x_cursor;
      n += count;
      sum_x += X_SUM[byte as usize] as u64 + base * count;
      sum_xx += X2_SUM[byte as usize] as u64 + 2 * base * X_SUM[byte as usize] as u64 + base * base * count;
    } else {
      for i in 0..bits_here {
        if bit_get(byte, bit_off + i) {
          let x = x_cursor + i as u64;
          n += 1;
          sum_x += x;
          sum_xx += x * x;
        }
      }
    }
    x_cursor += bits_here as u64;
    byte_i += 1;
    remaining -= bits_here;
    bit_off = 0;
  }
  RowMoment { n, sum_x, sum_xx }
}

/// Computes all five moments over every set pixel of `src` in one pass.
pub fn moments_bin(src: &BinaryRaster) -> Moments {
  let mut m = Moments::default();
  for y in 0..src.view.height {
    let row = src.view.row(y);
    let r = row_moment(row, src.bit_offset, src.view.width);
    let yy = y as u64;
    m.n += r.n;
    m.sum_x += r.sum_x;
    m.sum_xx += r.sum_xx;
    m.sum_y += r.n * yy;
    m.sum_yy += r.n * yy * yy;
    m.sum_xy += r.sum_x * yy;
  }
  m
}
