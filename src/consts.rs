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

/// DBL_EPSILON is the machine epsilon for f64, the gap between 1.0 and the
/// next representable value.
pub const DBL_EPSILON: f64 = f64::EPSILON;

/// DOUBLE_PRECISION_SAFE_EPSILON is safely larger than the relative round-off
/// error accumulated by the orientation filter in double precision. A filter
/// result whose magnitude exceeds this fraction of the summed terms has a
/// trustworthy sign.
pub const DOUBLE_PRECISION_SAFE_EPSILON: f64 = 1e-15;

/// SPLIT is the Dekker splitting constant 2^27 + 1. Multiplying by it splits
/// an f64 into two halves of at most 26 significant bits each, whose pairwise
/// products are exact.
pub const SPLIT: f64 = 134_217_729.0;
