//! A fixed-capacity chain-code string buffer.
//!
//! Grounded on `imagine`'s `AsciiArray<N>` (`ascii_array.rs`): a byte array
//! newtype with `Debug`/`Display` impls that print it as ASCII text, used
//! there for magic-byte tags and here for the digit string spec.md §3
//! describes ("a NUL-terminated ASCII string whose characters are '0'-'3' or
//! '0'-'7'"). [`crate::contour`] and [`crate::rasterize`] write into a
//! caller-supplied `&mut [u8]` directly (matching the C function-signature
//! contract in spec.md §6), so this type exists purely as a convenient,
//! `Debug`-friendly owned buffer for callers and tests, not as a kernel
//! parameter.

use core::fmt::Write;

/// A fixed-capacity, NUL-padded buffer for a chain-code digit string.
///
/// `N` should be at least as large as the perimeter of any shape the caller
/// expects to trace or rasterize, per spec.md §3's "length is bounded by the
/// perimeter" invariant. Unlike `imagine`'s `AsciiArray`, this also tracks a
/// logical length separate from the backing array's capacity, since
/// [`crate::contour::trace`] and [`crate::rasterize::line`] report the
/// *untruncated* chain length even when the caller's buffer was too small
/// (spec.md §7).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct ChainCode<const N: usize> {
  bytes: [u8; N],
  len: usize,
}

impl<const N: usize> Default for ChainCode<N> {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self { bytes: [0u8; N], len: 0 }
  }
}

impl<const N: usize> ChainCode<N> {
  /// An empty chain code.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { bytes: [0u8; N], len: 0 }
  }

  /// Capacity of the backing buffer, in digits (not counting the NUL).
  #[inline]
  #[must_use]
  pub const fn capacity() -> usize {
    if N == 0 {
      0
    } else {
      N - 1
    }
  }

  /// Copies `code` into this buffer, truncating at `Self::capacity()` and
  /// always NUL-terminating within bounds, per spec.md §7's truncation
  /// contract. Returns the *untruncated* length of `code`.
  #[inline]
  pub fn fill_from(&mut self, code: &[u8]) -> usize {
    let cap = Self::capacity();
    let take = code.len().min(cap);
    self.bytes[..take].copy_from_slice(&code[..take]);
    if N > 0 {
      self.bytes[take] = 0;
    }
    self.len = take;
    code.len()
  }

  /// The digits actually stored (excludes the NUL terminator and any
  /// truncated tail).
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes[..self.len]
  }

  /// The digits actually stored, as `&str` (chain-code digits are always
  /// ASCII, so this never fails for a correctly produced chain code).
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    core::str::from_utf8(self.as_bytes()).unwrap_or("")
  }
}

impl<const N: usize> core::fmt::Debug for ChainCode<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    for ch in self.as_bytes().iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    f.write_char('\"')
  }
}
impl<const N: usize> core::fmt::Display for ChainCode<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fill_from_fits() {
    let mut cc: ChainCode<8> = ChainCode::new();
    let reported = cc.fill_from(b"0321");
    assert_eq!(reported, 4);
    assert_eq!(cc.as_bytes(), b"0321");
    assert_eq!(cc.as_str(), "0321");
  }

  #[test]
  fn fill_from_truncates_but_reports_full_length() {
    let mut cc: ChainCode<4> = ChainCode::new();
    let reported = cc.fill_from(b"000111222");
    assert_eq!(reported, 9);
    assert_eq!(cc.as_bytes(), b"000");
    assert!(reported > cc.as_bytes().len());
  }
}
