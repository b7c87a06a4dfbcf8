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
use std::fmt;

/// Coordinate is a location in the plane with an optional elevation.
///
/// Only x and y take part in the predicates; z is carried along untouched.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coordinate {
    /// Creates a 2D coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y, z: None }
    }

    /// Creates a coordinate with an elevation.
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Coordinate { x, y, z: Some(z) }
    }

    /// Reports whether the two coordinates have the same x and y, ignoring z.
    pub fn equals_2d(&self, other: &Coordinate) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Returns the euclidean distance between the two coordinates in the plane.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(value: (f64, f64)) -> Self {
        Coordinate::new(value.0, value.1)
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from(value: (f64, f64, f64)) -> Self {
        Coordinate::new_3d(value.0, value.1, value.2)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z {
            Some(z) => write!(f, "({}, {}, {})", self.x, self.y, z),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
