//! An aligned buffer allocator for raster backing storage.
//!
//! Grounded on `original_source/compute/common/rc_malloc.c`'s `rc_malloc`/
//! `rc_free` pair and `rc_align`. The original over-allocates raw bytes and
//! hands back a pointer bumped up to alignment; this crate is
//! `#![forbid(unsafe_code)]`, so instead of a raw-pointer bump allocation
//! this allocates a `Vec<dispatch::NativeWord>` (whose element type already
//! guarantees the platform word alignment spec.md §4.2 requires) and exposes
//! it as a byte slice via `bytemuck::cast_slice`, matching how this crate's
//! [`crate::word::Word`] trait already leans on `bytemuck::Pod` elsewhere.
//! `rc_free` has no counterpart here: freeing is just the `Vec`'s `Drop`.

use crate::dispatch::{NativeWord, Word};
use crate::error::{RappError, RappResult};
use alloc::vec::Vec;

/// Rounds `n` bytes up to a whole number of [`NativeWord`]s, matching
/// `rc_malloc.c`'s `rc_align`.
#[inline]
#[must_use]
pub const fn align(n: usize) -> usize {
  let w = NativeWord::BYTES;
  ((n + w - 1) / w) * w
}

/// A word-aligned, zero-initialized byte buffer.
///
/// The only fallible operation in this crate (spec.md §7): [`Self::try_new`]
/// surfaces the host allocator's failure as [`RappError::Alloc`] instead of
/// aborting, matching `rc_malloc`'s "return a null sentinel" contract.
pub struct AlignedBuffer {
  words: Vec<NativeWord>,
  len: usize,
}

impl AlignedBuffer {
  /// Allocates a zeroed buffer of at least `n` bytes, aligned to
  /// [`crate::platform::ALIGNMENT`].
  pub fn try_new(n: usize) -> RappResult<Self> {
    let word_count = align(n) / NativeWord::BYTES;
    let mut words = Vec::new();
    words.try_reserve_exact(word_count).map_err(RappError::from)?;
    words.resize(word_count, NativeWord::ZERO);
    Ok(Self { words, len: n })
  }

  /// The requested size in bytes (not the rounded-up backing capacity).
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.len
  }

  /// `true` if this buffer holds zero requested bytes.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Borrows the buffer's first `len()` bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &bytemuck::cast_slice(&self.words)[..self.len]
  }

  /// Mutably borrows the buffer's first `len()` bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes_mut(&mut self) -> &mut [u8] {
    &mut bytemuck::cast_slice_mut(&mut self.words)[..self.len]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn align_rounds_up_to_native_word() {
    let w = NativeWord::BYTES;
    assert_eq!(align(0), 0);
    assert_eq!(align(1), w);
    assert_eq!(align(w), w);
    assert_eq!(align(w + 1), 2 * w);
  }

  #[test]
  fn try_new_gives_zeroed_aligned_storage() {
    let mut buf = AlignedBuffer::try_new(13).unwrap();
    assert_eq!(buf.len(), 13);
    assert!(buf.as_bytes().iter().all(|&b| b == 0));
    assert_eq!(buf.as_bytes().as_ptr() as usize % NativeWord::BYTES, 0);
    buf.as_bytes_mut()[0] = 0xAB;
    assert_eq!(buf.as_bytes()[0], 0xAB);
  }
}
