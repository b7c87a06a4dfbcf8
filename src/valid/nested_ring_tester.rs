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
use crate::error::KernelResult;
use crate::geom::{Coordinate, Envelope, LinearRing};
use crate::index::{EnvelopeIndex, EnvelopeIndexBuilder};
use crate::ray_crossing::{locate_point_in_ring, Location};
use crate::valid::NodeGraph;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// NestedRing describes the first nesting found: a point of the inner ring
/// that lies in the interior of the outer ring. Rings are identified by the
/// order in which they were added.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NestedRing {
    pub point: Coordinate,
    pub inner: usize,
    pub outer: usize,
}

/// NestedRingTesterBuilder collects the rings to be tested for nesting.
///
/// Rings are borrowed, not copied; they must outlive the tester built from
/// them. Once build() is called no more rings can be added.
pub struct NestedRingTesterBuilder<'a, G> {
    graph: &'a G,
    rings: Vec<&'a LinearRing>,
    total_env: Envelope,
}

impl<'a, G: NodeGraph> NestedRingTesterBuilder<'a, G> {
    /// Creates a builder. The graph decides which ring points are nodes
    /// shared with another ring.
    pub fn new(graph: &'a G) -> Self {
        NestedRingTesterBuilder {
            graph,
            rings: Vec::new(),
            total_env: Envelope::null(),
        }
    }

    pub fn add(&mut self, ring: &'a LinearRing) {
        self.rings.push(ring);
        self.total_env.expand_to_include(ring.envelope());
    }

    /// Returns the envelope of all rings added so far.
    pub fn total_envelope(&self) -> &Envelope {
        &self.total_env
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Indexes the ring envelopes and returns the tester.
    pub fn build(self) -> KernelResult<NestedRingTester<'a, G>> {
        let mut builder = EnvelopeIndexBuilder::with_capacity(self.rings.len());
        for (i, ring) in self.rings.iter().enumerate() {
            builder.insert(*ring.envelope(), i);
        }
        let index = builder.build()?;

        debug!(
            rings = self.rings.len(),
            total_envelope = %self.total_env,
            "built nested ring index"
        );

        Ok(NestedRingTester {
            graph: self.graph,
            rings: self.rings,
            total_env: self.total_env,
            index,
            nested: OnceLock::new(),
        })
    }
}

/// NestedRingTester reports whether any ring of a set lies inside another
/// ring of the set, using an envelope index so that only rings whose
/// envelopes intersect are compared.
///
/// The rings are assumed not to cross each other (that is checked elsewhere),
/// so one point of a ring is enough to decide whether it is nested. The point
/// must not be a node shared with the other ring, since a shared point says
/// nothing about containment. If every point of a ring is such a node, the
/// pair is skipped: the rings then either split the interior or overlap along
/// a segment, both of which are separate validity errors.
///
/// The scan runs once, on the first query; later queries return the same
/// answer. Queries take &self and may run concurrently.
pub struct NestedRingTester<'a, G> {
    graph: &'a G,
    rings: Vec<&'a LinearRing>,
    total_env: Envelope,
    index: EnvelopeIndex<usize>,
    nested: OnceLock<Option<NestedRing>>,
}

impl<'a, G: NodeGraph> NestedRingTester<'a, G> {
    /// Reports whether no ring is nested in another.
    pub fn is_non_nested(&self) -> bool {
        self.nested_rings().is_none()
    }

    /// Returns a point of a nested ring lying inside its enclosing ring, or
    /// None if no ring is nested.
    pub fn nested_point(&self) -> Option<Coordinate> {
        self.nested_rings().map(|n| n.point)
    }

    /// Returns the first nesting found, if any.
    pub fn nested_rings(&self) -> Option<NestedRing> {
        *self.nested.get_or_init(|| self.find_nested())
    }

    pub fn rings(&self) -> &[&'a LinearRing] {
        &self.rings
    }

    pub fn total_envelope(&self) -> &Envelope {
        &self.total_env
    }

    fn find_nested(&self) -> Option<NestedRing> {
        for (i, inner) in self.rings.iter().enumerate() {
            let inner_env = inner.envelope();

            for &j in self.index.query(inner_env) {
                let search = self.rings[j];
                if std::ptr::eq(*inner, search) {
                    continue;
                }
                // The index may return envelopes that do not quite intersect.
                if !inner_env.intersects(search.envelope()) {
                    continue;
                }

                let inner_pt = match self.graph.find_non_node_point(inner.coords(), search) {
                    Some(pt) => pt,
                    None => {
                        trace!(inner = i, outer = j, "no non-node point, skipping ring pair");
                        continue;
                    }
                };

                if locate_point_in_ring(&inner_pt, search.coords()) == Location::Interior {
                    debug!(inner = i, outer = j, point = %inner_pt, "found nested ring");
                    return Some(NestedRing {
                        point: inner_pt,
                        inner: i,
                        outer: j,
                    });
                }
            }
        }
        None
    }
}
