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
//! Point-in-ring location by counting crossings of a ray.
//!
//! A horizontal ray is cast from the query point towards +x and the ring
//! segments it crosses are counted; an odd count means the point is inside.
//! Which side of a segment the point lies on is decided with the robust
//! orientation predicate, so the answer is exact within its magnitude limit
//! (coordinate differences below about 1e150), and a point on the boundary is
//! always reported as such.

use crate::geom::Coordinate;
use crate::predicates::orientation_index;

/// Location is the position of a point relative to a ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

/// RayCrossingCounter accumulates the crossings of the ray from a fixed
/// point with the segments fed to it. Segments may come from several rings,
/// which gives the even-odd location within all of them at once.
#[derive(Debug, Clone)]
pub struct RayCrossingCounter {
    p: Coordinate,
    crossing_count: usize,
    // true if the point lies exactly on one of the segments seen so far
    point_on_segment: bool,
}

impl RayCrossingCounter {
    pub fn new(p: Coordinate) -> Self {
        RayCrossingCounter {
            p,
            crossing_count: 0,
            point_on_segment: false,
        }
    }

    /// Counts the segment p1 -> p2. Segments that touch the ray at a vertex
    /// are counted only when the other endpoint is strictly above the ray,
    /// so a vertex shared by two segments is counted once.
    pub fn count_segment(&mut self, p1: &Coordinate, p2: &Coordinate) {
        let p = &self.p;

        // Segments entirely to the left of the point cannot cross the ray.
        if p1.x < p.x && p2.x < p.x {
            return;
        }

        if p.x == p2.x && p.y == p2.y {
            self.point_on_segment = true;
            return;
        }

        // Horizontal segment on the ray.
        if p1.y == p.y && p2.y == p.y {
            let min_x = p1.x.min(p2.x);
            let max_x = p1.x.max(p2.x);
            if p.x >= min_x && p.x <= max_x {
                self.point_on_segment = true;
            }
            return;
        }

        // Segment straddles the ray: one endpoint strictly above, the other
        // on or below.
        if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
            let mut orient = orientation_index(p1, p2, p);
            if orient == 0 {
                self.point_on_segment = true;
                return;
            }
            // Re-orient the segment upwards.
            if p2.y < p1.y {
                orient = -orient;
            }
            if orient > 0 {
                self.crossing_count += 1;
            }
        }
    }

    /// Counts every segment of the ring.
    pub fn count_ring(&mut self, ring: &[Coordinate]) {
        for w in ring.windows(2) {
            self.count_segment(&w[0], &w[1]);
            if self.point_on_segment {
                return;
            }
        }
    }

    pub fn crossing_count(&self) -> usize {
        self.crossing_count
    }

    pub fn is_on_segment(&self) -> bool {
        self.point_on_segment
    }

    /// Returns the location of the point given the segments counted so far.
    pub fn location(&self) -> Location {
        if self.point_on_segment {
            Location::Boundary
        } else if self.crossing_count % 2 == 1 {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}

/// locate_point_in_ring returns the location of p relative to a closed ring
/// given as its coordinates. The ring may be oriented either way.
pub fn locate_point_in_ring(p: &Coordinate, ring: &[Coordinate]) -> Location {
    let mut counter = RayCrossingCounter::new(*p);
    counter.count_ring(ring);
    counter.location()
}

/// is_point_in_ring reports whether p is inside or on the boundary of the
/// ring.
pub fn is_point_in_ring(p: &Coordinate, ring: &[Coordinate]) -> bool {
    locate_point_in_ring(p, ring) != Location::Exterior
}

/// is_ccw reports whether the closed ring, given as its coordinates, is
/// oriented counter-clockwise.
///
/// The orientation is read off at the highest vertex, using its nearest
/// neighbours that are distinct from it. Rings with fewer than three distinct
/// vertices, or that fold back on themselves at the highest vertex, are
/// reported as not counter-clockwise.
pub fn is_ccw(pts: &[Coordinate]) -> bool {
    // The closing point repeats the first.
    let n = pts.len().saturating_sub(1);
    if n < 3 {
        return false;
    }

    let mut hi_index = 0;
    for i in 1..n {
        if pts[i].y > pts[hi_index].y {
            hi_index = i;
        }
    }
    let hi = &pts[hi_index];

    // Nearest distinct neighbours of the highest vertex, in each direction.
    let mut prev = hi_index;
    loop {
        prev = (prev + n - 1) % n;
        if !pts[prev].equals_2d(hi) || prev == hi_index {
            break;
        }
    }
    let mut next = hi_index;
    loop {
        next = (next + 1) % n;
        if !pts[next].equals_2d(hi) || next == hi_index {
            break;
        }
    }

    let prev = &pts[prev];
    let next = &pts[next];
    if prev.equals_2d(hi) || next.equals_2d(hi) || prev.equals_2d(next) {
        return false;
    }

    match orientation_index(prev, hi, next) {
        // A flat top: the previous point is to the right when ccw.
        0 => prev.x > next.x,
        index => index > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::LinearRing;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn square() -> LinearRing {
        LinearRing::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)])
            .unwrap()
    }

    #[test]
    fn test_square_locations() {
        let ring = square();
        let pts = ring.coords();
        assert_eq!(locate_point_in_ring(&c(5.0, 5.0), pts), Location::Interior);
        assert_eq!(locate_point_in_ring(&c(15.0, 5.0), pts), Location::Exterior);
        assert_eq!(locate_point_in_ring(&c(-5.0, 5.0), pts), Location::Exterior);
        assert_eq!(locate_point_in_ring(&c(5.0, 10.5), pts), Location::Exterior);
    }

    #[test]
    fn test_boundary() {
        let ring = square();
        let pts = ring.coords();
        assert_eq!(locate_point_in_ring(&c(10.0, 5.0), pts), Location::Boundary);
        assert_eq!(locate_point_in_ring(&c(5.0, 0.0), pts), Location::Boundary);
        assert_eq!(locate_point_in_ring(&c(0.0, 0.0), pts), Location::Boundary);
        assert_eq!(locate_point_in_ring(&c(10.0, 10.0), pts), Location::Boundary);
        assert!(is_point_in_ring(&c(0.0, 5.0), pts));
    }

    #[test]
    fn test_ray_through_vertex() {
        // The ray from (0, 5) passes exactly through the vertex (5, 5).
        let ring = LinearRing::from_xy(&[
            (5.0, 0.0),
            (10.0, 5.0),
            (5.0, 10.0),
            (5.0, 5.0),
            (2.0, 0.0),
            (5.0, 0.0),
        ])
        .unwrap();
        assert_eq!(locate_point_in_ring(&c(0.0, 5.0), ring.coords()), Location::Exterior);
        assert_eq!(locate_point_in_ring(&c(7.0, 5.0), ring.coords()), Location::Interior);

        let diamond =
            LinearRing::from_xy(&[(5.0, 0.0), (10.0, 5.0), (5.0, 10.0), (0.0, 5.0), (5.0, 0.0)])
                .unwrap();
        assert_eq!(locate_point_in_ring(&c(-1.0, 5.0), diamond.coords()), Location::Exterior);
        assert_eq!(locate_point_in_ring(&c(2.0, 5.0), diamond.coords()), Location::Interior);
        assert_eq!(locate_point_in_ring(&c(0.0, 5.0), diamond.coords()), Location::Boundary);
    }

    #[test]
    fn test_near_boundary_is_exact() {
        // A point a single ulp inside the slanted edge of a triangle.
        let ring = LinearRing::from_xy(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]).unwrap();
        let above = c(0.5, 0.5 + 2f64.powi(-53));
        let below = c(0.5, 0.5 - 2f64.powi(-54));
        let on = c(0.5, 0.5);
        assert_eq!(locate_point_in_ring(&above, ring.coords()), Location::Exterior);
        assert_eq!(locate_point_in_ring(&below, ring.coords()), Location::Interior);
        assert_eq!(locate_point_in_ring(&on, ring.coords()), Location::Boundary);
    }

    #[test]
    fn test_counter_over_two_rings() {
        let outer = square();
        let hole =
            LinearRing::from_xy(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0), (2.0, 2.0)])
                .unwrap();

        let mut counter = RayCrossingCounter::new(c(3.0, 3.0));
        counter.count_ring(outer.coords());
        counter.count_ring(hole.coords());
        assert_eq!(counter.crossing_count(), 2);
        assert_eq!(counter.location(), Location::Exterior);

        let mut counter = RayCrossingCounter::new(c(6.0, 3.0));
        counter.count_ring(outer.coords());
        counter.count_ring(hole.coords());
        assert_eq!(counter.location(), Location::Interior);
    }

    #[test]
    fn test_is_ccw() {
        let ring = square();
        assert!(is_ccw(ring.coords()));

        let reversed: Vec<Coordinate> = ring.coords().iter().rev().copied().collect();
        assert!(!is_ccw(&reversed));

        let flat_top = LinearRing::from_xy(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (0.0, 2.0),
            (0.0, 0.0),
        ])
        .unwrap();
        assert!(is_ccw(flat_top.coords()));

        let degenerate = LinearRing::from_xy(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]).unwrap();
        assert!(!is_ccw(degenerate.coords()));
        assert!(!is_ccw(&[]));
    }
}
