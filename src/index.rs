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
//! A static bounding-box index over envelopes.
//!
//! Items are collected with their envelopes by an [`EnvelopeIndexBuilder`]
//! and packed into a Hilbert-sorted R-tree once, on [`build`]. The built
//! [`EnvelopeIndex`] is read-only; to index more items, build a new one.
//!
//! [`build`]: EnvelopeIndexBuilder::build

use crate::error::{KernelError, KernelResult};
use crate::geom::Envelope;
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

/// EnvelopeIndexBuilder collects (envelope, item) pairs for an EnvelopeIndex.
#[derive(Debug, Clone)]
pub struct EnvelopeIndexBuilder<T> {
    entries: Vec<(Envelope, T)>,
}

impl<T> Default for EnvelopeIndexBuilder<T> {
    fn default() -> Self {
        EnvelopeIndexBuilder {
            entries: Vec::new(),
        }
    }
}

impl<T> EnvelopeIndexBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        EnvelopeIndexBuilder {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Adds an item with its envelope. Items with a null envelope bound
    /// nothing and are never returned by a query.
    pub fn insert(&mut self, envelope: Envelope, item: T) {
        self.entries.push((envelope, item));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Packs the collected items into a queryable index.
    pub fn build(self) -> KernelResult<EnvelopeIndex<T>> {
        let entries: Vec<(Envelope, T)> = self
            .entries
            .into_iter()
            .filter(|(env, _)| !env.is_null())
            .collect();

        if entries.is_empty() {
            return Ok(EnvelopeIndex {
                index: None,
                items: Vec::new(),
            });
        }

        let mut builder = StaticAABB2DIndexBuilder::new(entries.len());
        let mut items = Vec::with_capacity(entries.len());
        for (env, item) in entries {
            builder.add(env.min_x(), env.min_y(), env.max_x(), env.max_y());
            items.push(item);
        }

        let index = builder
            .build()
            .map_err(|e| KernelError::IndexBuild(e.to_string()))?;
        Ok(EnvelopeIndex {
            index: Some(index),
            items,
        })
    }
}

/// EnvelopeIndex answers "which items may intersect this envelope" queries.
///
/// Results may over-approximate: callers that need exact envelope
/// intersection must check it themselves.
pub struct EnvelopeIndex<T> {
    // None when no item has a non-null envelope.
    index: Option<StaticAABB2DIndex<f64>>,
    items: Vec<T>,
}

impl<T> EnvelopeIndex<T> {
    /// Returns the items whose envelopes may intersect the given one.
    pub fn query(&self, envelope: &Envelope) -> Vec<&T> {
        let index = match &self.index {
            Some(index) if !envelope.is_null() => index,
            _ => return Vec::new(),
        };
        index
            .query(
                envelope.min_x(),
                envelope.min_y(),
                envelope.max_x(),
                envelope.max_y(),
            )
            .into_iter()
            .map(|i| &self.items[i])
            .collect()
    }

    /// Returns the number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
