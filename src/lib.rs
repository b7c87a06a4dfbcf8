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

//! Robust 2D geometric predicates.
//!
//! The kernel answers two questions that every topology operation is built
//! on: which side of a directed line a point lies on, and where two lines
//! cross. Both are evaluated on a double-double number type
//! ([`DoubleDouble`]) so that near-collinear inputs still get the right
//! answer, while the orientation test keeps a cheap `f64` filter in front
//! of the extended-precision path.
//!
//! ```rust
//! use ddkernel::{orientation_index, Coordinate};
//!
//! let p1 = Coordinate::new(0.0, 0.0);
//! let p2 = Coordinate::new(1.0, 0.0);
//! assert_eq!(orientation_index(&p1, &p2, &Coordinate::new(0.0, 1.0)), 1);
//! assert_eq!(orientation_index(&p1, &p2, &Coordinate::new(0.0, -1.0)), -1);
//! ```
//!
//! The [`valid`] module shows the predicates used in bulk: a nested-ring
//! check that indexes ring envelopes and only runs point-in-ring tests on
//! candidate pairs.

pub mod consts;
pub mod dd;
pub mod edge_crossings;
pub mod error;
pub mod geom;
pub mod index;
pub mod predicates;
pub mod ray_crossing;
pub mod valid;

pub use dd::DoubleDouble;
pub use edge_crossings::{checked_intersection, intersection};
pub use error::{KernelError, KernelResult};
pub use geom::{Coordinate, Envelope, LinearRing};
pub use predicates::{orientation, orientation_index, sign_of_det2x2, Orientation};
pub use ray_crossing::{is_point_in_ring, locate_point_in_ring, Location};
pub use valid::{NestedRingTester, NestedRingTesterBuilder};
