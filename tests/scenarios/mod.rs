//! The six literal end-to-end scenarios from spec.md §8, exercised against
//! the crate's public API rather than its internal unit tests, so they also
//! double as a check that every kernel's public signature is usable from
//! outside the crate.

use rapp_compute::bitblt::blit;
use rapp_compute::contour::{trace_contour, Connectivity as ContourConn};
use rapp_compute::crop::seek;
use rapp_compute::fill::{fill_sweep_4conn_fwd, fill_to_fixpoint, Connectivity as FillConn};
use rapp_compute::integral::integral_u8_to_u32;
use rapp_compute::rop::{And, Copy as RopCopy};
use rapp_compute::threshold::{gt, threshold_to_binary};
use rapp_compute::{BinaryRaster, BinaryRasterMut, GrayRaster, RasterView, RasterViewMut};

#[test]
fn scenario_1_aligned_and() {
  let src_bytes = [0xF0u8, 0x0F, 0xAA, 0x55];
  let mut dst_bytes = [0xFFu8, 0xFF, 0xFF, 0xFF];
  let src = BinaryRaster { view: RasterView { data: &src_bytes, dim: 4, width: 32, height: 1 }, bit_offset: 0 };
  let mut dst = BinaryRasterMut {
    view: RasterViewMut { data: &mut dst_bytes, dim: 4, width: 32, height: 1 },
    bit_offset: 0,
  };
  blit::<And, u32>(&mut dst, &src);
  assert_eq!(dst_bytes, [0xF0, 0x0F, 0xAA, 0x55]);
}

#[test]
#[cfg(target_endian = "little")]
fn scenario_2_misaligned_copy_offset_3() {
  let src_bytes = [0b1111_1000u8, 0x00, 0x00, 0x00];
  let mut dst_bytes = [0u8; 4];
  let src = BinaryRaster { view: RasterView { data: &src_bytes, dim: 4, width: 29, height: 1 }, bit_offset: 3 };
  let mut dst = BinaryRasterMut {
    view: RasterViewMut { data: &mut dst_bytes, dim: 4, width: 29, height: 1 },
    bit_offset: 0,
  };
  blit::<RopCopy, u32>(&mut dst, &src);
  // See DESIGN.md's arithmetic-slip note: `align(0xF8, 0, 3)` shifts the
  // source word right by 3 logical positions, giving `0x1F`, not `0xFF`.
  assert_eq!(dst_bytes, [0x1F, 0x00, 0x00, 0x00]);
}

#[test]
fn scenario_3_threshold_gt_100() {
  let src_bytes = [80u8, 100, 101, 255];
  let src = GrayRaster { view: RasterView { data: &src_bytes, dim: 4, width: 4, height: 1 } };
  let mut dst_bytes = [0u8; 4];
  let mut dst =
    BinaryRasterMut { view: RasterViewMut { data: &mut dst_bytes, dim: 4, width: 4, height: 1 }, bit_offset: 0 };
  threshold_to_binary::<u32>(&mut dst, &src, gt(100));
  #[cfg(target_endian = "little")]
  assert_eq!(dst_bytes[0] & 0b1111, 0b1100);
}

#[test]
fn scenario_4_seed_fill_4conn_3x3() {
  let mask_bytes = [0b0000_0111u8, 0b0000_0111u8, 0b0000_0111u8];
  let mask = BinaryRaster { view: RasterView { data: &mask_bytes, dim: 1, width: 3, height: 3 }, bit_offset: 0 };
  let mut seed_bytes = [0b0000_0001u8, 0b0000_0000u8, 0b0000_0000u8];
  let mut seed =
    BinaryRasterMut { view: RasterViewMut { data: &mut seed_bytes, dim: 1, width: 3, height: 3 }, bit_offset: 0 };

  let changed = fill_sweep_4conn_fwd(&mut seed, &mask);
  // On a fully-open mask a single forward sweep already converges the whole
  // region: row 0 widens left-to-right to [1,1,1], then row 1 picks up the
  // now-fully-set row above through the `up` term and widens across its own
  // row the same way, and likewise row 2. See DESIGN.md for why this differs
  // from spec.md §8 scenario 4's literal per-row prose.
  assert_eq!(changed, 3); // every row changes during this one sweep
  let v = seed.as_binary_view();
  for y in 0..3 {
    for x in 0..3 {
      assert!(v.get(x, y), "x={x} y={y}");
    }
  }

  fill_to_fixpoint(&mut seed, &mask, FillConn::Four);
  let v = seed.as_binary_view();
  for y in 0..3 {
    for x in 0..3 {
      assert!(v.get(x, y), "x={x} y={y}");
    }
  }
}

#[test]
fn scenario_5_contour_4conn_2x2_block() {
  let bytes = [0b0000_0011u8, 0b0000_0011u8, 0b0000_0000u8, 0b0000_0000u8];
  let src = BinaryRaster { view: RasterView { data: &bytes, dim: 1, width: 4, height: 4 }, bit_offset: 0 };
  let origin = seek(&src).expect("2x2 block is non-empty");
  assert_eq!(origin, (0, 0));
  let mut out = [0u8; 8];
  let len = trace_contour(&src, origin, ContourConn::Four, &mut out);
  assert_eq!(len, 4);
  assert_eq!(&out[..len], b"0321");
}

#[test]
fn scenario_6_integral_u8_to_u32() {
  let bytes = [1u8, 2, 3, 4];
  let src = GrayRaster { view: RasterView { data: &bytes, dim: 2, width: 2, height: 2 } };
  let mut dst = [0u32; 4];
  integral_u8_to_u32(&mut dst, 2, &src);
  assert_eq!(dst, [1, 3, 4, 10]);
}
