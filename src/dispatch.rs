//! Compile-time kernel dispatch and loop-unroll selection.
//!
//! Grounded on `original_source/compute/generic/rc_impl_cfg.h`: every kernel
//! name resolves, at compile time, to exactly one implementation and one
//! unroll factor. The original does this with the `RC_IMPL`/`RC_UNROLL`
//! preprocessor macros fed by a generated tuning header; here the same
//! guarantee is expressed as a `const fn` lookup over [`TUNING`] plus the
//! [`NativeWord`] type alias, so kernel code is generic over `W: Word` and a
//! `const UNROLL: usize` and gets monomorphized per call site.
//!
//! Per spec.md §9 open question 3 (recorded in `DESIGN.md`), only the
//! [`Backend::Generic`] backend is implemented: this crate carries no SIMD
//! intrinsics dependency, matching the rest of the example pack.

pub use crate::word::Word;

/// The word size feature (`word16`/`word32`/`word64`) selects this type.
/// Defaults to `u64` if more than one or none is set, matching
/// `rc_platform.h`'s `RC_NATIVE_SIZE` fallback to the platform's native
/// word.
#[cfg(feature = "word64")]
pub type NativeWord = u64;
#[cfg(all(feature = "word32", not(feature = "word64")))]
pub type NativeWord = u32;
#[cfg(all(feature = "word16", not(feature = "word64"), not(feature = "word32")))]
pub type NativeWord = u16;
#[cfg(not(any(feature = "word16", feature = "word32", feature = "word64")))]
pub type NativeWord = u64;

/// A candidate kernel implementation family.
///
/// Only [`Backend::Generic`] has an actual implementation in this crate;
/// the variant list is kept to mirror spec.md §6's "SIMD back-end: one of
/// none, MMX, SSE, SSE2, SSSE3, AltiVec, VADMX" build setting, so a future
/// vectorized backend slots in without reshaping the dispatch surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Backend {
  /// Portable scalar/SWAR implementation built on [`crate::word::Word`].
  Generic,
}

/// `true` iff `backend` is the implementation compiled in for this build.
///
/// With only `Backend::Generic` implemented this is always `true` for it;
/// kept as a function (rather than inlined away) so kernel modules read the
/// same way the original's `#if RC_IMPL(name, unrollable)` guards did.
#[inline(always)]
#[must_use]
pub const fn is_selected(backend: Backend) -> bool {
  matches!(backend, Backend::Generic)
}

/// The loop-unroll factor for a named kernel: 1, 2, or 4.
///
/// A build-time feature (`unroll1`/`unroll2`/`unroll4`) overrides every
/// kernel's factor uniformly, modeling spec.md §6's `FORCE_UNROLL`. Absent
/// an override, each kernel takes its factor from [`TUNING`], modeling the
/// generated tuning header spec.md §6 describes.
#[inline]
#[must_use]
pub const fn unroll_for(kernel: Kernel) -> usize {
  #[cfg(feature = "unroll1")]
  {
    1
  }
  #[cfg(all(feature = "unroll2", not(feature = "unroll1")))]
  {
    2
  }
  #[cfg(all(feature = "unroll4", not(feature = "unroll1"), not(feature = "unroll2")))]
  {
    4
  }
  #[cfg(not(any(feature = "unroll1", feature = "unroll2", feature = "unroll4")))]
  {
    TUNING[kernel as usize]
  }
}

/// The set of kernel families that have a tunable unroll factor.
///
/// Corresponds to the exported function families of spec.md §6 whose inner
/// loop is a per-word or per-pixel stride amenable to manual unrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Kernel {
  BitbltAligned = 0,
  BitbltMisaligned,
  Threshold,
  Cond,
  Reduce,
  Expand,
  Rotate,
  Pad,
  Stat,
  Moment,
  Integral,
  Gather,
}

const KERNEL_COUNT: usize = 12;

/// The compiled-in tuning table: one unroll factor (1, 2, or 4) per
/// [`Kernel`]. Stands in for the analyzer-generated tuning header of
/// spec.md §6; the analyzer itself remains an external, out-of-scope tool
/// (spec.md §1's "deliberately out of scope" list).
pub const TUNING: [usize; KERNEL_COUNT] = [
  4, // BitbltAligned
  2, // BitbltMisaligned
  4, // Threshold
  2, // Cond
  2, // Reduce
  2, // Expand
  1, // Rotate
  1, // Pad
  4, // Stat
  2, // Moment
  1, // Integral
  2, // Gather
];
