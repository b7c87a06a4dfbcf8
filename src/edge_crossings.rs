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
use crate::dd::DoubleDouble;
use crate::error::{KernelError, KernelResult};
use crate::geom::Coordinate;

// The parametrization of both lines, in double-double arithmetic:
//
//   denom = (q2.y - q1.y)(p2.x - p1.x) - (q2.x - q1.x)(p2.y - p1.y)
//   frac_p = [(q2.x - q1.x)(p1.y - q1.y) - (q2.y - q1.y)(p1.x - q1.x)] / denom
//   frac_q = [(p2.x - p1.x)(p1.y - q1.y) - (p2.y - p1.y)(p1.x - q1.x)] / denom
//
// denom is zero iff the lines are parallel. The crossing lies within segment
// p iff 0 <= frac_p <= 1, and within segment q iff 0 <= frac_q <= 1.
struct LineParams {
    denom: DoubleDouble,
    frac_p: DoubleDouble,
    frac_q: DoubleDouble,
}

impl LineParams {
    fn new(p1: &Coordinate, p2: &Coordinate, q1: &Coordinate, q2: &Coordinate) -> Self {
        let px = DoubleDouble::from(p2.x) - p1.x;
        let py = DoubleDouble::from(p2.y) - p1.y;
        let qx = DoubleDouble::from(q2.x) - q1.x;
        let qy = DoubleDouble::from(q2.y) - q1.y;
        let dx = DoubleDouble::from(p1.x) - q1.x;
        let dy = DoubleDouble::from(p1.y) - q1.y;

        let denom = qy * px - qx * py;
        let num_p = qx * dy - qy * dx;
        let num_q = px * dy - py * dx;

        LineParams {
            denom,
            frac_p: num_p / denom,
            frac_q: num_q / denom,
        }
    }
}

/// intersection returns the point where the line through p1, p2 crosses the
/// line through q1, q2.
///
/// The x ordinate is interpolated along p and the y ordinate along q, which
/// keeps the error of each ordinate tied to a single parametrization. All
/// arithmetic is done in double-double and rounded once at the end.
///
/// Parallel lines are not handled: the denominator is zero and the result is
/// not finite or meaningless. Callers that cannot rule that out beforehand
/// (e.g. with orientation_index) should use checked_intersection.
pub fn intersection(p1: &Coordinate, p2: &Coordinate, q1: &Coordinate, q2: &Coordinate) -> Coordinate {
    let params = LineParams::new(p1, p2, q1, q2);
    interpolate(&params, p1, p2, q1, q2)
}

/// checked_intersection is intersection with the parallel case reported as
/// KernelError::ParallelLines instead of returning garbage.
pub fn checked_intersection(
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> KernelResult<Coordinate> {
    let params = LineParams::new(p1, p2, q1, q2);
    if params.denom.is_zero() {
        return Err(KernelError::ParallelLines);
    }
    Ok(interpolate(&params, p1, p2, q1, q2))
}

fn interpolate(
    params: &LineParams,
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> Coordinate {
    let x = DoubleDouble::from(p1.x) + (DoubleDouble::from(p2.x) - p1.x) * params.frac_p;
    let y = DoubleDouble::from(q1.y) + (DoubleDouble::from(q2.y) - q1.y) * params.frac_q;
    Coordinate::new(x.to_f64(), y.to_f64())
}
