//! The twelve bit-blit boolean raster operations (ROPs).
//!
//! Grounded on `original_source/compute/generic/rc_bitblt_rop.h`'s
//! `RC_BITBLT_ROP_*` macros, `ROP(dst, src)`. Re-expressed per spec.md §9 as
//! a sealed trait with one zero-sized type per op, so [`crate::bitblt`]'s
//! kernel function is generic over `R: Rop` and monomorphizes per exported
//! name instead of textually expanding a macro per op.

use crate::word::Word;

/// A two-operand boolean raster operation: `dst' = apply(dst, src)`.
pub trait Rop {
  /// `false` for ops whose result doesn't depend on the destination word
  /// (`Copy`, `Not`): the aligned/misaligned blit loops skip loading `dst`
  /// for these, matching spec.md §4.3's "skipped when the ROP ignores dst".
  const USES_DST: bool;
  /// Applies the op to one word of destination and one word of source.
  fn apply<W: Word>(dst: W, src: W) -> W;
}

macro_rules! rop {
  ($name:ident, $uses_dst:expr, |$dst:ident, $src:ident| $body:expr) => {
    #[doc = concat!("The `", stringify!($name), "` raster operation.")]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct $name;
    impl Rop for $name {
      const USES_DST: bool = $uses_dst;
      #[inline]
      fn apply<W: Word>($dst: W, $src: W) -> W {
        $body
      }
    }
  };
}

rop!(Copy, false, |_dst, src| src);
rop!(Not, false, |_dst, src| !src);
rop!(And, true, |dst, src| dst & src);
rop!(Or, true, |dst, src| dst | src);
rop!(Xor, true, |dst, src| dst ^ src);
rop!(Nand, true, |dst, src| !(dst & src));
rop!(Nor, true, |dst, src| !(dst | src));
rop!(Xnor, true, |dst, src| !(dst ^ src));
rop!(Andn, true, |dst, src| dst & !src);
rop!(Orn, true, |dst, src| dst | !src);
rop!(Nandn, true, |dst, src| !dst | src);
rop!(Norn, true, |dst, src| !dst & src);

/// All twelve ROPs, for callers that need a runtime-selectable operation
/// (e.g. a dispatch table keyed by name) rather than a monomorphized
/// `R: Rop` type parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RopKind {
  Copy,
  Not,
  And,
  Or,
  Xor,
  Nand,
  Nor,
  Xnor,
  Andn,
  Orn,
  Nandn,
  Norn,
}

impl RopKind {
  /// Applies the selected op to one word of destination and source.
  #[inline]
  #[must_use]
  pub fn apply<W: Word>(self, dst: W, src: W) -> W {
    match self {
      RopKind::Copy => Copy::apply(dst, src),
      RopKind::Not => Not::apply(dst, src),
      RopKind::And => And::apply(dst, src),
      RopKind::Or => Or::apply(dst, src),
      RopKind::Xor => Xor::apply(dst, src),
      RopKind::Nand => Nand::apply(dst, src),
      RopKind::Nor => Nor::apply(dst, src),
      RopKind::Xnor => Xnor::apply(dst, src),
      RopKind::Andn => Andn::apply(dst, src),
      RopKind::Orn => Orn::apply(dst, src),
      RopKind::Nandn => Nandn::apply(dst, src),
      RopKind::Norn => Norn::apply(dst, src),
    }
  }

  /// See [`Rop::USES_DST`].
  #[inline]
  #[must_use]
  pub const fn uses_dst(self) -> bool {
    !matches!(self, RopKind::Copy | RopKind::Not)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn copy_is_identity() {
    let x: u32 = 0xDEAD_BEEF;
    assert_eq!(Copy::apply(0x1234_5678u32, x), x);
  }

  #[test]
  fn not_is_involution() {
    let x: u32 = 0xDEAD_BEEF;
    assert_eq!(Not::apply(0u32, Not::apply(0u32, x)), x);
  }

  #[test]
  fn xor_with_self_is_zero() {
    let x: u32 = 0xDEAD_BEEF;
    assert_eq!(Xor::apply(x, x), 0u32);
  }

  #[test]
  fn and_with_all_ones_is_identity() {
    let x: u32 = 0xDEAD_BEEF;
    assert_eq!(And::apply(x, u32::ONE), x);
  }

  #[test]
  fn or_with_zero_is_identity() {
    let x: u32 = 0xDEAD_BEEF;
    assert_eq!(Or::apply(x, u32::ZERO), x);
  }

  #[test]
  fn de_morgan_pairs_match() {
    let a: u32 = 0xF0F0_00FF;
    let b: u32 = 0x1234_5678;
    assert_eq!(Nand::apply(a, b), Not::apply(0, And::apply(a, b)));
    assert_eq!(Nor::apply(a, b), Not::apply(0, Or::apply(a, b)));
    assert_eq!(Xnor::apply(a, b), Not::apply(0, Xor::apply(a, b)));
    assert_eq!(Andn::apply(a, b), And::apply(a, Not::apply(0, b)));
    assert_eq!(Orn::apply(a, b), Or::apply(a, Not::apply(0, b)));
    assert_eq!(Nandn::apply(a, b), Or::apply(Not::apply(0, a), b));
    assert_eq!(Norn::apply(a, b), And::apply(Not::apply(0, a), b));
  }

  #[test]
  fn rop_kind_matches_monomorphic_types() {
    let a: u32 = 0xAAAA_5555;
    let b: u32 = 0x0F0F_F0F0;
    assert_eq!(RopKind::And.apply(a, b), And::apply(a, b));
    assert_eq!(RopKind::Xnor.apply(a, b), Xnor::apply(a, b));
    assert!(RopKind::And.uses_dst());
    assert!(!RopKind::Copy.uses_dst());
  }
}
