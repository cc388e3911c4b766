//! Mask-gated pixelwise conditional update over 8-bit images (spec.md §4.5).
//!
//! Grounded on `original_source/compute/generic/rc_cond.c`'s three-tier
//! word/byte/nibble fast path: a mask word of all zeros skips `8*W::BITS`
//! pixels outright, all ones applies the operation unconditionally, and a
//! mixed word is split into bytes (same two fast cases) and then, for a
//! genuinely mixed byte, into nibbles, using [`crate::tables::NIBBLE_TO_BYTES`]
//! to build a 0x00/0xFF "apply here" mask blended against the old pixel
//! values -- the same table [`crate::threshold::bin_to_u8`] uses for the
//! unconditional binary-to-8-bit expansion.

use crate::raster::{BinaryRaster, GrayRaster, GrayRasterMut};
use crate::tables::NIBBLE_TO_BYTES;
use crate::word::Word;

/// Applies `op(old)` to each destination pixel where `mask` is set, leaving
/// the others unchanged. Covers the single-operand variants: set-constant
/// (`op = |_| k`), saturating add-const (`op = |v| v.saturating_add(k)`),
/// saturating sub-const (`op = |v| v.saturating_sub(k)`).
pub fn cond_apply<W: Word>(dst: &mut GrayRasterMut, mask: &BinaryRaster, op: impl Fn(u8) -> u8) {
  cond_apply2::<W>(dst, mask, None, |old, _| op(old))
}

/// Applies `op(old, src)` to each destination pixel where `mask` is set.
/// Covers the double-operand variants: copy (`op = |_old, src| src`) and
/// saturating add (`op = |old, src| old.saturating_add(src)`).
///
/// Per spec.md §9 Open Question (b), `src` supplies the *source* operand for
/// the double-operand add, not a constant broadcast from the single-operand
/// add's argument slot; callers of the saturating-add-constant variant
/// should go through [`cond_apply`] instead.
pub fn cond_apply2<W: Word>(
  dst: &mut GrayRasterMut,
  mask: &BinaryRaster,
  src: Option<&GrayRaster>,
  op: impl Fn(u8, u8) -> u8,
) {
  debug_assert_eq!(mask.bit_offset, 0);
  debug_assert_eq!(dst.view.width, mask.view.width);
  let width = dst.view.width as usize;
  let wb = W::BYTES;
  let words = crate::raster::div_ceil(dst.view.width, W::BITS) as usize;
  for y in 0..dst.view.height {
    let mask_row = mask.view.row(y);
    let src_row = src.map(|s| s.view.row(y));
    let dst_row = dst.view.row_mut(y);
    for wi in 0..words {
      let base = wi * W::BITS as usize;
      let bits_here = (width - base).min(W::BITS as usize);
      let m: W = W::load(&mask_row[wi * wb..wi * wb + wb]);
      if m == W::ZERO {
        continue;
      }
      if m == W::ONE && bits_here == W::BITS as usize {
        for b in 0..bits_here {
          let x = base + b;
          let s = src_row.map(|r| r[x]).unwrap_or(0);
          dst_row[x] = op(dst_row[x], s);
        }
        continue;
      }
      // Mixed word: walk byte by byte, reusing the all-zero/all-ones fast
      // cases, then falling to a per-bit nibble blend for a genuinely
      // mixed byte.
      for byte_i in 0..(bits_here + 7) / 8 {
        let bit_base = base + byte_i * 8;
        let bits_in_byte = (width - bit_base).min(8);
        let mask_byte = extract_mask_byte::<W>(m, byte_i * 8, bits_in_byte);
        if mask_byte == 0 {
          continue;
        }
        if mask_byte == 0xFF && bits_in_byte == 8 {
          for b in 0..8 {
            let x = bit_base + b;
            let s = src_row.map(|r| r[x]).unwrap_or(0);
            dst_row[x] = op(dst_row[x], s);
          }
          continue;
        }
        for nibble_i in 0..2 {
          let nibble_bits = (bits_in_byte as i32 - nibble_i as i32 * 4).clamp(0, 4) as usize;
          if nibble_bits == 0 {
            continue;
          }
          let nibble = ((mask_byte >> (nibble_i * 4)) & 0x0F) as usize;
          let apply_mask = NIBBLE_TO_BYTES[nibble];
          for b in 0..nibble_bits {
            let x = bit_base + nibble_i * 4 + b;
            if apply_mask[b] != 0 {
              let s = src_row.map(|r| r[x]).unwrap_or(0);
              dst_row[x] = op(dst_row[x], s);
            }
          }
        }
      }
    }
  }
}

/// Extracts `count` (`<= 8`) consecutive logical mask bits starting at
/// `start` into a byte, one bit per output bit, low bit first.
fn extract_mask_byte<W: Word>(w: W, start: usize, count: usize) -> u8 {
  let mut out = 0u8;
  for i in 0..count {
    if crate::word::extract(w, (start + i) as u32, 1) != 0 {
      out |= 1 << i;
    }
  }
  out
}

/// `set(v)`: unconditionally writes `v` where `mask` is set.
#[inline]
pub fn set<W: Word>(dst: &mut GrayRasterMut, mask: &BinaryRaster, v: u8) {
  cond_apply::<W>(dst, mask, move |_| v);
}
/// `add_const(k)`: saturating add of a constant where `mask` is set.
#[inline]
pub fn add_const<W: Word>(dst: &mut GrayRasterMut, mask: &BinaryRaster, k: u8) {
  cond_apply::<W>(dst, mask, move |v| v.saturating_add(k));
}
/// `sub_const(k)`: saturating subtract of a constant where `mask` is set.
#[inline]
pub fn sub_const<W: Word>(dst: &mut GrayRasterMut, mask: &BinaryRaster, k: u8) {
  cond_apply::<W>(dst, mask, move |v| v.saturating_sub(k));
}
/// `copy(src)`: copies `src` into `dst` where `mask` is set.
#[inline]
pub fn copy<W: Word>(dst: &mut GrayRasterMut, mask: &BinaryRaster, src: &GrayRaster) {
  cond_apply2::<W>(dst, mask, Some(src), |_old, s| s);
}
/// `add(src)`: saturating add of `src` into `dst` where `mask` is set.
#[inline]
pub fn add<W: Word>(dst: &mut GrayRasterMut, mask: &BinaryRaster, src: &GrayRaster) {
  cond_apply2::<W>(dst, mask, Some(src), |old, s| old.saturating_add(s));
}
