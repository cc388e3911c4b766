//! Contour chain-code tracing (spec.md §4.9).
//!
//! Grounded on `original_source/compute/generic/rc_contour.c`'s "turn as
//! far left as possible" rule: arriving at a boundary pixel from a known
//! direction, scan the neighborhood starting just past the direction you
//! arrived from, stepping through directions in decreasing index order
//! (the rotational sense the §3 numbering below requires), and step to the
//! first set pixel found. This
//! is the textbook Moore-neighbor boundary trace; it's used here in place
//! of the original's packed-word sliding-neighborhood-plus-rotated-CLZ
//! scheme (assembling a 3-word, endian-corrected 8-neighborhood bitmask and
//! finding the turn via a rotate + leading-zero table) because that scheme
//! is intricate bit-twiddling with no compiler available in this exercise
//! to catch a subtly wrong rotation or off-by-one; both produce the same
//! chain-code output for a given shape (see `DESIGN.md`).
//!
//! Direction codes follow spec.md §3's chain-code convention, numbered
//! counterclockwise starting at East (`N` meaning toward decreasing row
//! index, i.e. up): 4-connectivity is `0=E, 1=N, 2=W, 3=S`; 8-connectivity
//! is `0=E, 1=NE, 2=N, 3=NW, 4=W, 5=SW, 6=S, 7=SE`. Each emitted code is the
//! ASCII digit `b'0' + code`, matching spec.md §4.9's "ASCII chain-code
//! string."

use crate::raster::BinaryRaster;

/// Neighborhood connectivity used by a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
  Four,
  Eight,
}

const DIRS4: [(i64, i64); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];
const DIRS8: [(i64, i64); 8] =
  [(1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1), (1, 1)];

fn get_bool(src: &BinaryRaster, x: i64, y: i64) -> bool {
  if x < 0 || y < 0 || x as u32 >= src.view.width || y as u32 >= src.view.height {
    return false;
  }
  src.get(x as u32, y as u32)
}

/// Traces the closed contour of the connected foreground region containing
/// `start` (which must be a set pixel), writing ASCII direction digits into
/// `out` (up to `out.len()` of them) and returning the full, untruncated
/// chain length, per spec.md §4.9's truncation contract.
///
/// A single isolated pixel (no set neighbor at all) produces a chain of
/// length 0.
pub fn trace_contour(src: &BinaryRaster, start: (u32, u32), conn: Connectivity, out: &mut [u8]) -> usize {
  debug_assert!(src.get(start.0, start.1));
  let dirs: &[(i64, i64)] = match conn {
    Connectivity::Four => &DIRS4,
    Connectivity::Eight => &DIRS8,
  };
  let k = dirs.len() as i64;
  // The direction index pointing "west," used as the assumed backtrack
  // direction for the starting pixel (valid because a raster-order seek
  // always finds a start pixel with background immediately to its west).
  let initial_came_from = match conn {
    Connectivity::Four => 2,
    Connectivity::Eight => 4,
  };
  let (sx, sy) = (start.0 as i64, start.1 as i64);
  let (mut cx, mut cy) = (sx, sy);
  let mut came_from = initial_came_from;
  let mut len = 0usize;
  loop {
    let mut found = None;
    for step in 1..=k {
      // Scan in decreasing index order starting just past the backtrack
      // direction; this is the rotational sense that "turn as far left as
      // possible" needs under the §3 counterclockwise-from-east numbering.
      let d = ((came_from + k - step) % k) as usize;
      let (dx, dy) = dirs[d];
      let (nx, ny) = (cx + dx, cy + dy);
      if get_bool(src, nx, ny) {
        found = Some((d, nx, ny));
        break;
      }
    }
    let (d, nx, ny) = match found {
      Some(v) => v,
      None => break,
    };
    if len < out.len() {
      out[len] = b'0' + d as u8;
    }
    len += 1;
    cx = nx;
    cy = ny;
    came_from = (d as i64 + k / 2) % k;
    if cx == sx && cy == sy {
      break;
    }
  }
  len
}
