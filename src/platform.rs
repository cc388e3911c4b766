//! Platform-specific constants: endianness, native word size, required
//! buffer alignment, and branch-prediction hints.
//!
//! Grounded on `original_source/compute/include/rc_platform.h`; re-expressed
//! as `cfg`-derived `const`s rather than preprocessor macros since these are
//! all properties of the compilation target, not a user-facing choice.

/// `true` when the target is big-endian, `false` when little-endian.
///
/// Binary-raster bit numbering within a byte is MSB-first on big-endian
/// targets and LSB-first on little-endian targets; see [`crate::word`].
#[cfg(target_endian = "big")]
pub const BIG_ENDIAN: bool = true;
#[cfg(target_endian = "little")]
pub const BIG_ENDIAN: bool = false;

/// The required buffer alignment in bytes.
///
/// Equal to the larger of the native word size and the active backend's
/// vector width. Since this crate ships only the `Generic` dispatch backend
/// (see [`crate::dispatch`]), this tracks the native word size; a future
/// SIMD backend would raise it to 16 (128-bit) or 8 (64-bit) as
/// `rc_platform.h` does.
pub const ALIGNMENT: usize = crate::dispatch::NativeWord::BYTES;

use crate::dispatch::Word as _;

/// Hints that `expr` is likely to be true, for branchy hot loops.
///
/// There is no stable `core::intrinsics::likely` outside of nightly, so this
/// is presently a transparent passthrough; it exists so kernel code can be
/// written against a stable name the way `rc_platform.h`'s `RC_LIKELY` is
/// used throughout the original kernels, and can pick up `core::hint::likely`
/// once that stabilizes without touching call sites.
#[inline(always)]
#[must_use]
pub const fn likely(expr: bool) -> bool {
  expr
}

/// Hints that `expr` is unlikely to be true. See [`likely`].
#[inline(always)]
#[must_use]
pub const fn unlikely(expr: bool) -> bool {
  expr
}
