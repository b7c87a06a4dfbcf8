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
use crate::geom::{Coordinate, LinearRing};
use crate::ray_crossing::{locate_point_in_ring, Location};

/// NodeGraph is the part of a topology graph the nested-ring test needs:
/// knowing which points of one ring are nodes, i.e. places where another
/// ring touches or crosses it.
pub trait NodeGraph {
    /// Returns a point of ring_pts that is not a node of the edge formed by
    /// other, or None if every point of ring_pts is such a node.
    fn find_non_node_point(&self, ring_pts: &[Coordinate], other: &LinearRing) -> Option<Coordinate>;
}

/// BoundaryNodeGraph treats a point as a node of a ring when it lies on the
/// ring's boundary, either on a vertex or in the interior of a segment. It
/// needs no precomputed graph, at the cost of one point-in-ring pass per
/// candidate point.
#[derive(Debug, Copy, Clone, Default)]
pub struct BoundaryNodeGraph;

impl NodeGraph for BoundaryNodeGraph {
    fn find_non_node_point(&self, ring_pts: &[Coordinate], other: &LinearRing) -> Option<Coordinate> {
        ring_pts
            .iter()
            .find(|p| locate_point_in_ring(p, other.coords()) != Location::Boundary)
            .copied()
    }
}
