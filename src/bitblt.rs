//! Word-aligned and word-misaligned bit-blits (spec.md §4.3).
//!
//! Grounded on `original_source/compute/generic/rc_bitblt_wa.c` (aligned)
//! and `rc_bitblt_wm.c` (misaligned). Both are expressed here as one
//! generic row routine parameterized over `R: Rop` and `W: Word`: the
//! misaligned case degenerates to the aligned case when `shift == 0`
//! because [`crate::word::align`] with `bits == 0` reduces to `nom_shl(w,
//! 0) | nom_shr(_, W::BITS)`, i.e. just `w`. This crate's [`BinaryRaster`]
//! already folds real pointer-modulo-word misalignment into the
//! `bit_offset` field (spec.md §3), so the "shift" spec.md §4.3 derives
//! from `8*(src_ptr % W) + bit_offset` is simply `bit_offset` here.
//!
//! The row loop's manual unroll factor is not a free parameter: it is a
//! `const UNROLL: usize` baked in from [`crate::dispatch::unroll_for`] (see
//! [`ALIGNED_UNROLL`]/[`MISALIGNED_UNROLL`]), so `UNROLL(K)` from spec.md
//! §4.15 genuinely expands inside the kernel body rather than sitting
//! unconsumed alongside it.

use crate::dispatch::{unroll_for, Kernel};
use crate::raster::{div_ceil, BinaryRaster, BinaryRasterMut};
use crate::rop::{Copy as RopCopy, Rop};
use crate::word::{align, Word};

/// The aligned-blit unroll factor this build's tuning table (or a
/// `FORCE_UNROLL*` feature) selects, per spec.md §4.15.
const ALIGNED_UNROLL: usize = unroll_for(Kernel::BitbltAligned);
/// The misaligned-blit unroll factor, mirroring [`ALIGNED_UNROLL`].
const MISALIGNED_UNROLL: usize = unroll_for(Kernel::BitbltMisaligned);

/// One word of the row loop's body: reads one (possibly misaligned) source
/// word, the destination word it needs, applies `R`, and stores.
#[inline(always)]
fn blit_word<R: Rop, W: Word>(dst_row: &mut [u8], src_row: &[u8], shift: u32, i: usize, prev: W) -> W {
  let wb = W::BYTES;
  let next_off = (i + 1) * wb;
  let cur: W =
    if next_off + wb <= src_row.len() { W::load(&src_row[next_off..next_off + wb]) } else { W::ZERO };
  let src_word: W = if shift == 0 { prev } else { align(prev, cur, shift) };
  let dst_off = i * wb;
  let d: W = if R::USES_DST { W::load(&dst_row[dst_off..dst_off + wb]) } else { W::ZERO };
  let result = R::apply(d, src_word);
  result.store(&mut dst_row[dst_off..dst_off + wb]);
  cur
}

/// Applies the row loop `UNROLL` words at a time, with a scalar tail for the
/// remainder, per spec.md §4.15's `UNROLL(K)` contract: the manual unroll
/// factor is a compile-time constant baked into the monomorphized body, not
/// a runtime loop-stride parameter.
fn blit_row<R: Rop, W: Word, const UNROLL: usize>(
  dst_row: &mut [u8],
  src_row: &[u8],
  shift: u32,
  width_words: usize,
) {
  let wb = W::BYTES;
  let mut prev: W = if width_words == 0 { W::ZERO } else { W::load(&src_row[0..wb]) };
  let full_groups = width_words / UNROLL;
  let mut i = 0usize;
  for _ in 0..full_groups {
    for _ in 0..UNROLL {
      prev = blit_word::<R, W>(dst_row, src_row, shift, i, prev);
      i += 1;
    }
  }
  while i < width_words {
    prev = blit_word::<R, W>(dst_row, src_row, shift, i, prev);
    i += 1;
  }
}

/// Applies `R` row by row: `dst[x,y] = R(dst[x,y], src[x,y])`.
///
/// Requires neither raster to alias the other (spec.md §3). Works whether
/// or not `src.bit_offset` is zero; when it is, this is the spec.md §4.3
/// "aligned variant", otherwise the "misaligned variant". Kept as a single
/// entry point per spec.md §9's monomorphization note: callers pick `R` and
/// `W` and the compiler specializes, rather than the source's separate
/// `rc_bitblt_wa`/`rc_bitblt_wm` translation units.
pub fn blit<R: Rop, W: Word>(dst: &mut BinaryRasterMut, src: &BinaryRaster) {
  debug_assert_eq!(dst.view.width, src.view.width);
  debug_assert_eq!(dst.view.height, src.view.height);
  debug_assert_eq!(dst.bit_offset, 0, "destination must be word-aligned (bit_offset 0)");
  let shift = (src.bit_offset as u32) % 8;
  let width_words = div_ceil(dst.view.width, W::BITS) as usize;
  let height = dst.view.height;
  if shift == 0 {
    for y in 0..height {
      let src_row = src.view.row(y);
      let dst_row = dst.view.row_mut(y);
      blit_row::<R, W, ALIGNED_UNROLL>(dst_row, src_row, shift, width_words);
    }
  } else {
    for y in 0..height {
      let src_row = src.view.row(y);
      let dst_row = dst.view.row_mut(y);
      blit_row::<R, W, MISALIGNED_UNROLL>(dst_row, src_row, shift, width_words);
    }
  }
}

/// The `COPY` ROP's dedicated fast path: a byte-for-byte row copy.
///
/// Per spec.md §4.3, `COPY`'s per-word ROP never reads the destination word
/// and is bit-identical to a byte copy once `src` and `dst` share the same
/// bit offset (in particular, both word-aligned). Per spec.md §9 Open
/// Question (a), this is compiled unconditionally rather than gated behind
/// [`crate::dispatch::is_selected`], since [`crate::integral`]'s binary
/// row fast path calls it directly.
pub fn aligned_copy(dst: &mut BinaryRasterMut, src: &BinaryRaster) {
  debug_assert_eq!(dst.view.width, src.view.width);
  debug_assert_eq!(dst.view.height, src.view.height);
  debug_assert_eq!(dst.bit_offset, src.bit_offset);
  let row_bytes = div_ceil(dst.view.width + dst.bit_offset as u32, 8) as usize;
  for y in 0..dst.view.height {
    let src_row = &src.view.row(y)[..row_bytes];
    let dst_row = &mut dst.view.row_mut(y)[..row_bytes];
    dst_row.copy_from_slice(src_row);
  }
}

/// `blit::<rop::Copy, W>`, provided for symmetry with [`aligned_copy`] and
/// for the case where `src.bit_offset != dst.bit_offset`, which
/// [`aligned_copy`] cannot handle.
#[inline]
pub fn copy<W: Word>(dst: &mut BinaryRasterMut, src: &BinaryRaster) {
  blit::<RopCopy, W>(dst, src)
}
