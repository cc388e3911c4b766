//! Chain-code line rasterization (spec.md §4.10).
//!
//! Grounded on `original_source/compute/generic/rc_rasterize.c`'s Bresenham
//! line walk. The original first normalizes the endpoints (swap axes if
//! `|dy| > |dx|`, reflect x if `x0 > x1`, reflect y if `y0 > y1`) so a
//! single inner loop always walks a first-octant line forward, then
//! reverses those same three transforms on the emitted "ahead"/"side"
//! symbols. This port runs the accumulating-error walk directly against
//! the real endpoints and maps each step's literal `(dx, dy)` to a Freeman
//! direction digit (the same numbering [`crate::contour`] uses), which
//! produces the identical chain-code sequence without needing to track and
//! invert three independent axis transforms (see `DESIGN.md`).
//!
//! 4-connectivity emits exactly one axis-aligned step per unit of
//! Manhattan distance (`|dx|+|dy|` total steps, digits `0`/`2` for
//! horizontal and `1`/`3` for vertical, per [`crate::contour`]'s
//! 4-connectivity numbering); 8-connectivity emits one step per unit of
//! Chebyshev distance (`max(|dx|,|dy|)` total steps), diagonal where the
//! accumulated error calls for it.

/// Freeman direction of an axis-aligned 4-connectivity unit step.
fn dir_code_4(dx: i32, dy: i32) -> u8 {
  match (dx, dy) {
    (1, 0) => b'0',
    (0, -1) => b'1',
    (-1, 0) => b'2',
    (0, 1) => b'3',
    _ => unreachable!("4-connectivity step must be axis-aligned unit"),
  }
}

/// Freeman direction of an 8-connectivity unit step (possibly diagonal).
fn dir_code_8(dx: i32, dy: i32) -> u8 {
  match (dx, dy) {
    (1, 0) => b'0',
    (1, -1) => b'1',
    (0, -1) => b'2',
    (-1, -1) => b'3',
    (-1, 0) => b'4',
    (-1, 1) => b'5',
    (0, 1) => b'6',
    (1, 1) => b'7',
    _ => unreachable!("8-connectivity step must be a unit step"),
  }
}

fn emit(out: &mut [u8], len: &mut usize, code: u8) {
  if *len < out.len() {
    out[*len] = code;
  }
  *len += 1;
}

/// Rasterizes a 4-connected chain-code line from `(x0,y0)` to `(x1,y1)`,
/// writing up to `out.len()` ASCII direction digits and returning the full,
/// untruncated length (`|x1-x0| + |y1-y0|`).
pub fn rasterize_line_4conn(x0: i32, y0: i32, x1: i32, y1: i32, out: &mut [u8]) -> usize {
  let (dx, dy) = (x1 - x0, y1 - y0);
  let (adx, ady) = (dx.abs(), dy.abs());
  let (sx, sy) = (dx.signum(), dy.signum());
  let mut len = 0usize;
  if adx == 0 && ady == 0 {
    return 0;
  }
  if adx >= ady {
    let mut err = adx / 2;
    for _ in 0..adx {
      emit(out, &mut len, dir_code_4(sx, 0));
      err -= ady;
      if err < 0 {
        emit(out, &mut len, dir_code_4(0, sy));
        err += adx;
      }
    }
  } else {
    let mut err = ady / 2;
    for _ in 0..ady {
      emit(out, &mut len, dir_code_4(0, sy));
      err -= adx;
      if err < 0 {
        emit(out, &mut len, dir_code_4(sx, 0));
        err += ady;
      }
    }
  }
  len
}

/// Rasterizes an 8-connected chain-code line from `(x0,y0)` to `(x1,y1)`,
/// writing up to `out.len()` ASCII direction digits and returning the full,
/// untruncated length (`max(|x1-x0|, |y1-y0|)`).
pub fn rasterize_line_8conn(x0: i32, y0: i32, x1: i32, y1: i32, out: &mut [u8]) -> usize {
  let (dx, dy) = (x1 - x0, y1 - y0);
  let (adx, ady) = (dx.abs(), dy.abs());
  let (sx, sy) = (dx.signum(), dy.signum());
  let mut len = 0usize;
  if adx == 0 && ady == 0 {
    return 0;
  }
  if adx >= ady {
    let mut err = adx / 2;
    for _ in 0..adx {
      let mut ystep = 0;
      err -= ady;
      if err < 0 {
        ystep = sy;
        err += adx;
      }
      emit(out, &mut len, dir_code_8(sx, ystep));
    }
  } else {
    let mut err = ady / 2;
    for _ in 0..ady {
      let mut xstep = 0;
      err -= adx;
      if err < 0 {
        xstep = sx;
        err += ady;
      }
      emit(out, &mut len, dir_code_8(xstep, sy));
    }
  }
  len
}
