// Copyright 2023 Google Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! This file contains the orientation predicate, which returns the correct
//! sign for coordinates of moderate magnitude (see orientation_index for the
//! limit). It is also relatively efficient: a
//! cheap double-precision filter with a conservative error bound decides the
//! sign in almost all cases, and only inputs that are numerically ambiguous
//! (nearly collinear points) fall back to double-double arithmetic.
//!
//! The filter follows Shewchuk's approach for orient2d, which is in the
//! public domain.

use crate::consts::DOUBLE_PRECISION_SAFE_EPSILON;
use crate::dd::DoubleDouble;
use crate::geom::Coordinate;
use tracing::trace;

/// Orientation is the direction of a point relative to a directed line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// The point is to the right of the line.
    Clockwise,
    /// The point lies on the line.
    Collinear,
    /// The point is to the left of the line.
    CounterClockwise,
}

impl Orientation {
    /// Converts an orientation index (any sign-valued integer) to an
    /// Orientation.
    pub fn from_index(index: i32) -> Self {
        match index.signum() {
            1 => Orientation::CounterClockwise,
            -1 => Orientation::Clockwise,
            _ => Orientation::Collinear,
        }
    }

    /// Returns 1 for counter-clockwise, -1 for clockwise and 0 for collinear.
    pub fn index(self) -> i32 {
        match self {
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
            Orientation::CounterClockwise => 1,
        }
    }
}

/// orientation_index returns the direction of the point q relative to the
/// directed line p1 -> p2:
///
///   1 if q is counter-clockwise (left) of p1 -> p2,
///  -1 if q is clockwise (right) of p1 -> p2,
///   0 if q is collinear with p1 -> p2.
///
/// The result is exact as long as the products of coordinate differences
/// stay finite, i.e. the differences are below about 1e150 in magnitude.
/// Beyond that both the filter and the double-double path overflow and the
/// sign is meaningless. Within the limit:
///
///  (1) orientation_index(p1, p2, q) == -orientation_index(p2, p1, q)
///  (2) orientation_index(p1, p2, q) == 0 whenever q lies on the line p1 p2
pub fn orientation_index(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> i32 {
    // The fast filter avoids extended-precision arithmetic in most cases.
    if let Some(index) = orientation_index_filter(p1, p2, q) {
        return index;
    }

    trace!(%p1, %p2, %q, "orientation filter inconclusive, using double-double");
    orientation_index_dd(p1, p2, q)
}

/// orientation returns the same answer as orientation_index as an
/// Orientation.
pub fn orientation(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> Orientation {
    Orientation::from_index(orientation_index(p1, p2, q))
}

/// orientation_index_filter computes the orientation index in double
/// precision when that can be done safely, and returns None otherwise.
///
/// The determinant is evaluated as detleft - detright. If the two terms have
/// opposite signs (or one is zero) there is no cancellation and the sign of
/// the difference is exact. Otherwise the sign is trusted only when the
/// difference exceeds DOUBLE_PRECISION_SAFE_EPSILON times the magnitude of
/// the terms.
pub fn orientation_index_filter(pa: &Coordinate, pb: &Coordinate, pc: &Coordinate) -> Option<i32> {
    let detleft = (pa.x - pc.x) * (pb.y - pc.y);
    let detright = (pa.y - pc.y) * (pb.x - pc.x);
    let det = detleft - detright;

    let detsum = if detleft > 0.0 {
        if detright <= 0.0 {
            return Some(signum(det));
        }
        detleft + detright
    } else if detleft < 0.0 {
        if detright >= 0.0 {
            return Some(signum(det));
        }
        -detleft - detright
    } else {
        return Some(signum(det));
    };

    let errbound = DOUBLE_PRECISION_SAFE_EPSILON * detsum;
    if det >= errbound || -det >= errbound {
        return Some(signum(det));
    }

    None
}

/// orientation_index_dd computes the orientation index entirely in
/// double-double arithmetic, without the filter.
pub fn orientation_index_dd(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> i32 {
    // Translate so that p2 is the origin; the differences are exact.
    let dx1 = DoubleDouble::from(p2.x) - p1.x;
    let dy1 = DoubleDouble::from(p2.y) - p1.y;
    let dx2 = DoubleDouble::from(q.x) - p2.x;
    let dy2 = DoubleDouble::from(q.y) - p2.y;

    sign_of_det2x2(dx1, dy1, dx2, dy2)
}

/// sign_of_det2x2 returns the sign of the determinant of the matrix
///
///   | x1 y1 |
///   | x2 y2 |
///
/// i.e. -1 if x1*y2 - y1*x2 is negative, 1 if it is positive and 0 if it is
/// zero in double-double arithmetic.
pub fn sign_of_det2x2(x1: DoubleDouble, y1: DoubleDouble, x2: DoubleDouble, y2: DoubleDouble) -> i32 {
    let det = x1 * y2 - y1 * x2;
    det.signum()
}

/// sign_of_det2x2_f64 is sign_of_det2x2 for plain f64 entries.
pub fn sign_of_det2x2_f64(x1: f64, y1: f64, x2: f64, y2: f64) -> i32 {
    sign_of_det2x2(x1.into(), y1.into(), x2.into(), y2.into())
}

fn signum(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DBL_EPSILON;
    use float_extras::f64::nextafter;
    use num_rational::BigRational;
    use num_traits::{Signed, Zero};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    // Exact orientation of q relative to p1 -> p2 in rational arithmetic.
    fn exact_orientation(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> i32 {
        let r = |v: f64| BigRational::from_float(v).unwrap();
        let det = (r(p2.x) - r(p1.x)) * (r(q.y) - r(p1.y)) - (r(p2.y) - r(p1.y)) * (r(q.x) - r(p1.x));
        if det.is_zero() {
            0
        } else if det.is_positive() {
            1
        } else {
            -1
        }
    }

    #[test]
    fn test_known_orientations() {
        let p1 = c(0.0, 0.0);
        let p2 = c(1.0, 0.0);
        assert_eq!(orientation_index(&p1, &p2, &c(0.0, 1.0)), 1);
        assert_eq!(orientation_index(&p1, &p2, &c(0.0, -1.0)), -1);
        assert_eq!(orientation(&p1, &p2, &c(0.0, 1.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(&p1, &p2, &c(0.0, -1.0)), Orientation::Clockwise);
    }

    #[test]
    fn test_collinear() {
        assert_eq!(orientation_index(&c(0.0, 0.0), &c(1.0, 1.0), &c(2.0, 2.0)), 0);
        assert_eq!(orientation_index(&c(0.0, 0.0), &c(2.0, 2.0), &c(1.0, 1.0)), 0);
        assert_eq!(orientation_index(&c(1.0, 1.0), &c(1.0, 1.0), &c(5.0, -3.0)), 0);
        // 0.3 is not 0.1 + 0.2 in f64, but every point still has x == y.
        assert_eq!(orientation_index(&c(0.1, 0.1), &c(0.2, 0.2), &c(0.3, 0.3)), 0);
        assert_eq!(orientation(&c(-3.0, 6.0), &c(0.0, 0.0), &c(4.0, -8.0)), Orientation::Collinear);
    }

    #[test]
    fn test_collinear_on_steep_line() {
        // Points on y = 2x are exactly collinear, whatever the rounding of x.
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let a: f64 = rng.gen_range(-1e3..1e3);
            let b: f64 = rng.gen_range(-1e3..1e3);
            let t: f64 = rng.gen_range(-1e3..1e3);
            let (p1, p2, q) = (c(a, 2.0 * a), c(b, 2.0 * b), c(t, 2.0 * t));
            assert_eq!(orientation_index(&p1, &p2, &q), 0, "{} {} {}", p1, p2, q);
        }
    }

    #[test]
    fn test_near_degenerate_uses_fallback() {
        // q sits one ulp-sized step above the line y = x. The f64 filter
        // cannot decide the sign, the double-double path can.
        let p1 = c(0.0, 0.0);
        let p2 = c(1.0, 1.0);
        let above = c(0.5, 0.5 + DBL_EPSILON);
        let below = c(0.5, 0.5 - 2f64.powi(-53));

        assert_eq!(orientation_index_filter(&p1, &p2, &above), None);
        assert_eq!(orientation_index(&p1, &p2, &above), 1);
        assert_eq!(orientation_index(&p2, &p1, &above), -1);

        assert_eq!(orientation_index_filter(&p1, &p2, &below), None);
        assert_eq!(orientation_index(&p1, &p2, &below), -1);
    }

    #[test]
    fn test_differences_at_fifteenth_digit() {
        let p1 = c(1.0, 1.0);
        let p2 = c(2.0, 2.0);
        let q = c(1.5, nextafter(1.5, 2.0));
        assert_eq!(orientation_index(&p1, &p2, &q), 1);
        let q = c(1.5, nextafter(1.5, 1.0));
        assert_eq!(orientation_index(&p1, &p2, &q), -1);
        let q = c(nextafter(1.5, 2.0), 1.5);
        assert_eq!(orientation_index(&p1, &p2, &q), -1);
    }

    #[test]
    fn test_near_collinear_matches_exact() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut resolved_by_fallback = 0;
        for _ in 0..2000 {
            let p1 = c(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
            let p2 = c(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
            let t: f64 = rng.gen_range(0.0..1.0);
            let mut q = c(p1.x + t * (p2.x - p1.x), p1.y + t * (p2.y - p1.y));
            for _ in 0..rng.gen_range(0..3) {
                q.y = nextafter(q.y, if rng.gen_bool(0.5) { f64::INFINITY } else { f64::NEG_INFINITY });
            }

            let want = exact_orientation(&p1, &p2, &q);
            if want == 0 {
                continue;
            }
            if orientation_index_filter(&p1, &p2, &q).is_none() {
                resolved_by_fallback += 1;
            }
            assert_eq!(orientation_index(&p1, &p2, &q), want, "{} {} {}", p1, p2, q);
        }
        assert!(resolved_by_fallback > 0);
    }

    #[test]
    fn test_filter_agrees_with_dd() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2000 {
            let p1 = c(rng.gen_range(-1e6..1e6), rng.gen_range(-1e6..1e6));
            let p2 = c(rng.gen_range(-1e6..1e6), rng.gen_range(-1e6..1e6));
            let q = c(rng.gen_range(-1e6..1e6), rng.gen_range(-1e6..1e6));
            if let Some(index) = orientation_index_filter(&p1, &p2, &q) {
                assert_eq!(index, orientation_index_dd(&p1, &p2, &q));
            }
        }
    }

    #[test]
    fn test_large_magnitude_within_limit() {
        let (p1, p2, q) = (c(0.0, 0.0), c(1e150, 1e150), c(2e150, 2e150));
        assert_eq!(orientation_index(&p1, &p2, &q), 0);
        assert_eq!(orientation_index(&p2, &p1, &q), 0);

        let above = c(2e150, nextafter(2e150, f64::INFINITY));
        assert_eq!(orientation_index(&p1, &p2, &above), 1);
        assert_eq!(orientation_index(&p2, &p1, &above), -1);
    }

    #[test]
    fn test_sign_of_det2x2() {
        assert_eq!(sign_of_det2x2_f64(1.0, 0.0, 0.0, 1.0), 1);
        assert_eq!(sign_of_det2x2_f64(0.0, 1.0, 1.0, 0.0), -1);
        assert_eq!(sign_of_det2x2_f64(2.0, 4.0, 1.0, 2.0), 0);

        // 1 * (1 + 2^-60) - 1 * 1 vanishes in f64 but not here.
        let tiny = DoubleDouble::ONE + 2f64.powi(-60);
        assert_eq!(sign_of_det2x2(DoubleDouble::ONE, DoubleDouble::ONE, DoubleDouble::ONE, tiny), 1);
        assert_eq!(sign_of_det2x2(DoubleDouble::ONE, tiny, DoubleDouble::ONE, DoubleDouble::ONE), -1);
    }

    #[test]
    fn test_orientation_index_conversion() {
        for o in [Orientation::Clockwise, Orientation::Collinear, Orientation::CounterClockwise] {
            assert_eq!(Orientation::from_index(o.index()), o);
        }
        assert_eq!(Orientation::from_index(5), Orientation::CounterClockwise);
        assert_eq!(Orientation::from_index(-2), Orientation::Clockwise);
    }
}
