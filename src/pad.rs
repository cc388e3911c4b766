//! Left/right edge padding for 8-bit and binary rasters (spec.md §4.14).
//!
//! Grounded on `original_source/compute/generic/rc_pad.c`: padding writes
//! into columns that already exist in the destination's backing buffer,
//! immediately outside the `[0, width)` core region the caller is treating
//! as "real" pixels. The caller passes a view whose `width` already covers
//! the padded columns and a `core_left`/`core_right` span describing which
//! columns are the unpadded core; this crate expresses that as explicit
//! `core_start`/`core_width` parameters rather than a separate over-wide
//! view type, since `RasterView` has no notion of "core vs. pad" itself.
//!
//! Binary padding is expressed per pixel against [`BinaryRasterMut::set`]
//! rather than the original's masked-partial-word-then-whole-pad-words
//! scheme, for the same reason as [`crate::reduce`]/[`crate::expand`]: the
//! edge-word masking is fiddly to get right from scratch without a compiler
//! to check it, and the observable per-pixel result is identical either way.

use crate::raster::{BinaryRasterMut, GrayRasterMut};

/// How pad columns are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadMode<T> {
  /// Every pad pixel gets the same fixed value.
  Const(T),
  /// Every pad pixel copies the nearest core-edge pixel.
  Clamp,
}

/// Pads `count` columns immediately left of `core_start` in an 8-bit raster.
pub fn pad_left_u8(view: &mut GrayRasterMut, core_start: u32, count: u32, mode: PadMode<u8>) {
  for y in 0..view.view.height {
    let edge = view.get(core_start, y);
    for i in 0..count {
      let x = core_start - count + i;
      let v = match mode {
        PadMode::Const(k) => k,
        PadMode::Clamp => edge,
      };
      view.set(x, y, v);
    }
  }
}

/// Pads `count` columns immediately right of the last core column
/// (`core_start + core_width - 1`) in an 8-bit raster.
pub fn pad_right_u8(
  view: &mut GrayRasterMut,
  core_start: u32,
  core_width: u32,
  count: u32,
  mode: PadMode<u8>,
) {
  let last_core = core_start + core_width - 1;
  for y in 0..view.view.height {
    let edge = view.get(last_core, y);
    for i in 0..count {
      let x = last_core + 1 + i;
      let v = match mode {
        PadMode::Const(k) => k,
        PadMode::Clamp => edge,
      };
      view.set(x, y, v);
    }
  }
}

/// Pads `count` columns immediately left of `core_start` in a binary raster.
pub fn pad_left_bin(view: &mut BinaryRasterMut, core_start: u32, count: u32, mode: PadMode<bool>) {
  for y in 0..view.view.height {
    let edge = view.get(core_start, y);
    for i in 0..count {
      let x = core_start - count + i;
      let v = match mode {
        PadMode::Const(k) => k,
        PadMode::Clamp => edge,
      };
      view.set(x, y, v);
    }
  }
}

/// Pads `count` columns immediately right of the last core column in a
/// binary raster.
pub fn pad_right_bin(
  view: &mut BinaryRasterMut,
  core_start: u32,
  core_width: u32,
  count: u32,
  mode: PadMode<bool>,
) {
  let last_core = core_start + core_width - 1;
  for y in 0..view.view.height {
    let edge = view.get(last_core, y);
    for i in 0..count {
      let x = last_core + 1 + i;
      let v = match mode {
        PadMode::Const(k) => k,
        PadMode::Clamp => edge,
      };
      view.set(x, y, v);
    }
  }
}
