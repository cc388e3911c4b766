//! The crate's error type.

/// An error from the `rapp_compute` crate.
///
/// Every kernel in this crate is an infallible function of its raster-view
/// arguments; the only fallible operation is aligned allocation, which
/// surfaces the host allocator's failure here instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RappError {
  /// The aligned allocator couldn't give us enough space.
  #[cfg(feature = "alloc")]
  Alloc,
}
#[cfg(feature = "alloc")]
impl From<alloc::collections::TryReserveError> for RappError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}

/// Shorthand for a `Result` using [`RappError`].
pub type RappResult<T> = Result<T, RappError>;
