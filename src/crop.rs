//! First-set-pixel seek and bounding box of a binary raster (spec.md §4.8).
//!
//! Grounded on `original_source/compute/generic/rc_crop.c`: `seek` scans in
//! raster order for the first set pixel; `box` finds the first/last
//! non-empty row, then the first/last non-empty column within that row
//! range, each edge resolved to an exact bit position with the 4-bit
//! nibble [`crate::tables::CLZ4`]/[`crate::tables::CTZ4`] tables the
//! original uses, rather than a per-bit scan, for any byte that is fully
//! within the row's valid bit range. A byte straddling the row's
//! `bit_offset` or trailing partial width (at most 7 bits either side)
//! falls back to a direct per-bit scan, the same split used by
//! [`crate::stat::sum_bin`] and [`crate::moment`].

use crate::raster::{bit_get, BinaryRaster};
use crate::tables::{CLZ4, CTZ4};

fn nibble_value(byte: u8, base: u32) -> u8 {
  let mut n = 0u8;
  for i in 0..4 {
    if bit_get(byte, base + i) {
      n |= 1 << i;
    }
  }
  n
}

fn first_set_in_byte(byte: u8) -> Option<u32> {
  if byte == 0 {
    return None;
  }
  let low = nibble_value(byte, 0);
  if low != 0 {
    return Some(CTZ4[low as usize] as u32);
  }
  let high = nibble_value(byte, 4);
  Some(4 + CTZ4[high as usize] as u32)
}

fn last_set_in_byte(byte: u8) -> Option<u32> {
  if byte == 0 {
    return None;
  }
  let high = nibble_value(byte, 4);
  if high != 0 {
    return Some(7 - CLZ4[high as usize] as u32);
  }
  let low = nibble_value(byte, 0);
  Some(3 - CLZ4[low as usize] as u32)
}

/// Logical x of the first set pixel in a row, or `None` if the row is
/// entirely clear.
fn first_set_in_row(row: &[u8], bit_offset: u8, width: u32) -> Option<u32> {
  let mut remaining = width;
  let mut byte_i = 0usize;
  let mut bit_off = bit_offset as u32;
  let mut x_cursor = 0u32;
  while remaining > 0 {
    let byte = row[byte_i];
    let bits_here = (8 - bit_off).min(remaining);
    if bit_off == 0 && bits_here == 8 {
      if let Some(p) = first_set_in_byte(byte) {
        return Some(x_cursor + p);
      }
    } else {
      for i in 0..bits_here {
        if bit_get(byte, bit_off + i) {
          return Some(x_cursor + i);
        }
      }
    }
    x_cursor += bits_here;
    byte_i += 1;
    remaining -= bits_here;
    bit_off = 0;
  }
  None
}

/// Logical x of the last set pixel in a row, or `None` if the row is
/// entirely clear.
fn last_set_in_row(row: &[u8], bit_offset: u8, width: u32) -> Option<u32> {
  let mut remaining = width;
  let mut byte_i = 0usize;
  let mut bit_off = bit_offset as u32;
  let mut x_cursor = 0u32;
  let mut found = None;
  while remaining > 0 {
    let byte = row[byte_i];
    let bits_here = (8 - bit_off).min(remaining);
    if bit_off == 0 && bits_here == 8 {
      if let Some(p) = last_set_in_byte(byte) {
        found = Some(x_cursor + p);
      }
    } else {
      for i in 0..bits_here {
        if bit_get(byte, bit_off + i) {
          found = Some(x_cursor + i);
        }
      }
    }
    x_cursor += bits_here;
    byte_i += 1;
    remaining -= bits_here;
    bit_off = 0;
  }
  found
}

/// Returns the `(x, y)` of the first set pixel in raster order, or `None`
/// if `src` is entirely clear.
pub fn seek(src: &BinaryRaster) -> Option<(u32, u32)> {
  for y in 0..src.view.height {
    if let Some(x) = first_set_in_row(src.view.row(y), src.bit_offset, src.view.width) {
      return Some((x, y));
    }
  }
  None
}

/// Returns the bounding box `(x, y, w, h)` of the set pixels of `src`, or
/// `None` if `src` is entirely clear.
pub fn bounding_box(src: &BinaryRaster) -> Option<(u32, u32, u32, u32)> {
  let mut ymin = None;
  let mut ymax = None;
  for y in 0..src.view.height {
    if first_set_in_row(src.view.row(y), src.bit_offset, src.view.width).is_some() {
      ymin.get_or_insert(y);
      ymax = Some(y);
    }
  }
  let (ymin, ymax) = match (ymin, ymax) {
    (Some(a), Some(b)) => (a, b),
    _ => return None,
  };
  let mut xmin = u32::MAX;
  let mut xmax = 0u32;
  for y in ymin..=ymax {
    let row = src.view.row(y);
    if let Some(fx) = first_set_in_row(row, src.bit_offset, src.view.width) {
      xmin = xmin.min(fx);
    }
    if let Some(lx) = last_set_in_row(row, src.bit_offset, src.view.width) {
      xmax = xmax.max(lx);
    }
  }
  Some((xmin, ymin, xmax - xmin + 1, ymax - ymin + 1))
}
