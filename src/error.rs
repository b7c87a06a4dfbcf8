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
use std::error::Error;
use std::fmt;

/// KernelError represents the conditions the kernel reports instead of
/// silently computing a meaningless answer.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// A ring that is empty or whose first and last coordinates differ.
    InvalidRing(String),
    /// The two lines passed to an intersection are parallel (or coincident),
    /// so they have no single crossing point.
    ParallelLines,
    /// The envelope index could not be built.
    IndexBuild(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidRing(msg) => write!(f, "Invalid ring: {}", msg),
            KernelError::ParallelLines => write!(f, "Lines are parallel"),
            KernelError::IndexBuild(msg) => write!(f, "Index build error: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;
