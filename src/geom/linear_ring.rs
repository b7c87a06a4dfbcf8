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
use crate::error::{KernelError, KernelResult};
use crate::geom::{Coordinate, Envelope};

/// LinearRing is a closed sequence of coordinates: the last coordinate
/// repeats the first. It caches its envelope, since every consumer of a ring
/// in this crate starts with a bounding-box test.
///
/// A ring needs at least three distinct vertices to bound any area. That is
/// not checked here; predicates fed a degenerate ring return an answer, just
/// not a meaningful one.
///
/// With the serde feature a ring is (de)serialized as its coordinate list;
/// deserializing goes through LinearRing::new, so the closure check applies
/// and the envelope is recomputed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")
)]
pub struct LinearRing {
    coords: Vec<Coordinate>,
    envelope: Envelope,
}

impl LinearRing {
    /// Creates a ring from its coordinates. Returns an error if the sequence
    /// is empty or its endpoints differ in x or y.
    pub fn new(coords: Vec<Coordinate>) -> KernelResult<Self> {
        let (first, last) = match (coords.first(), coords.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(KernelError::InvalidRing("ring has no coordinates".into())),
        };
        if !first.equals_2d(last) {
            return Err(KernelError::InvalidRing(format!(
                "ring is not closed: starts at {} and ends at {}",
                first, last
            )));
        }
        let envelope = Envelope::from_coords(&coords);
        Ok(LinearRing { coords, envelope })
    }

    /// Creates a ring from (x, y) pairs.
    pub fn from_xy(points: &[(f64, f64)]) -> KernelResult<Self> {
        LinearRing::new(points.iter().copied().map(Coordinate::from).collect())
    }

    /// Returns the coordinates, including the closing repeat of the first.
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn coord(&self, i: usize) -> Coordinate {
        self.coords[i]
    }

    /// Returns the number of coordinates, counting the closing one.
    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Iterates over the ring's segments as (start, end) pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&Coordinate, &Coordinate)> + '_ {
        self.coords.windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl TryFrom<Vec<Coordinate>> for LinearRing {
    type Error = KernelError;

    fn try_from(coords: Vec<Coordinate>) -> KernelResult<Self> {
        LinearRing::new(coords)
    }
}

impl From<LinearRing> for Vec<Coordinate> {
    fn from(ring: LinearRing) -> Self {
        ring.coords
    }
}
