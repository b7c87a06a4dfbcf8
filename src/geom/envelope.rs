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
use crate::geom::Coordinate;
use std::fmt;

/// Envelope is an axis-aligned bounding box in the plane.
///
/// An envelope that has not seen any coordinate yet is "null": it contains
/// nothing, intersects nothing, and becomes the bound of the first coordinate
/// or envelope it is expanded to include.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Envelope {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Envelope::null()
    }
}

impl Envelope {
    /// Returns the null envelope.
    pub const fn null() -> Self {
        Envelope {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Creates the envelope spanned by two corner coordinates, in any order.
    pub fn new(a: &Coordinate, b: &Coordinate) -> Self {
        Envelope {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Creates the degenerate envelope of a single coordinate.
    pub fn of_coordinate(c: &Coordinate) -> Self {
        Envelope::new(c, c)
    }

    /// Returns the bound of all the given coordinates, or the null envelope
    /// if there are none.
    pub fn from_coords(coords: &[Coordinate]) -> Self {
        let mut env = Envelope::null();
        for c in coords {
            env.expand_to_include_coord(c);
        }
        env
    }

    pub fn is_null(&self) -> bool {
        self.min_x > self.max_x
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Returns the extent along x, or 0 for the null envelope.
    pub fn width(&self) -> f64 {
        if self.is_null() {
            return 0.0;
        }
        self.max_x - self.min_x
    }

    /// Returns the extent along y, or 0 for the null envelope.
    pub fn height(&self) -> f64 {
        if self.is_null() {
            return 0.0;
        }
        self.max_y - self.min_y
    }

    /// Grows this envelope so that it also covers the given coordinate.
    pub fn expand_to_include_coord(&mut self, c: &Coordinate) {
        self.min_x = self.min_x.min(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_x = self.max_x.max(c.x);
        self.max_y = self.max_y.max(c.y);
    }

    /// Grows this envelope so that it also covers the other one. Expanding by
    /// a null envelope leaves this one unchanged.
    pub fn expand_to_include(&mut self, other: &Envelope) {
        if other.is_null() {
            return;
        }
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Reports whether the two closed boxes share at least one point.
    /// Envelopes that only touch along an edge or corner intersect.
    pub fn intersects(&self, other: &Envelope) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    /// Reports whether the coordinate lies in the closed box.
    pub fn contains_coord(&self, c: &Coordinate) -> bool {
        if self.is_null() {
            return false;
        }
        c.x >= self.min_x && c.x <= self.max_x && c.y >= self.min_y && c.y <= self.max_y
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "Env[null]");
        }
        write!(
            f,
            "Env[{} : {}, {} : {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
