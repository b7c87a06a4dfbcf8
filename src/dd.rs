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
//! Double-double arithmetic.
//!
//! A [`DoubleDouble`] holds a value as the unevaluated sum of two f64s,
//! `hi + lo`, where `hi` is the value rounded to double precision and `lo`
//! is the rounding error, so `|lo| <= 0.5 ulp(hi)`. That gives roughly 106
//! bits of mantissa. The operations below are built from error-free
//! transformations: Knuth's two-sum for addition and Dekker's split product
//! for multiplication and division.
//!
//! Overflow and underflow are not guarded. Infinities and NaNs propagate, and
//! values beyond about 2^996 overflow inside the split.

use crate::consts::SPLIT;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// DoubleDouble is an extended-precision value stored as `hi + lo`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoubleDouble {
    hi: f64,
    lo: f64,
}

impl DoubleDouble {
    pub const ZERO: DoubleDouble = DoubleDouble { hi: 0.0, lo: 0.0 };
    pub const ONE: DoubleDouble = DoubleDouble { hi: 1.0, lo: 0.0 };

    /// Creates a value from its two parts. The caller guarantees that the
    /// parts are normalized, i.e. `hi + lo == hi` in f64 arithmetic.
    pub const fn new(hi: f64, lo: f64) -> Self {
        DoubleDouble { hi, lo }
    }

    /// Creates the exact double-double representation of an f64.
    pub const fn value_of(x: f64) -> Self {
        DoubleDouble { hi: x, lo: 0.0 }
    }

    /// Returns the high-order part, which is also the value rounded to f64.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Returns the low-order part, the error of rounding to f64.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Narrows to the nearest f64.
    pub fn to_f64(&self) -> f64 {
        self.hi
    }

    pub fn is_zero(&self) -> bool {
        self.hi == 0.0 && self.lo == 0.0
    }

    /// Reports whether the value is below zero. The sign is carried by `hi`
    /// unless `hi` is zero.
    pub fn is_negative(&self) -> bool {
        self.hi < 0.0 || (self.hi == 0.0 && self.lo < 0.0)
    }

    pub fn is_positive(&self) -> bool {
        self.hi > 0.0 || (self.hi == 0.0 && self.lo > 0.0)
    }

    pub fn is_nan(&self) -> bool {
        self.hi.is_nan()
    }

    /// Returns -1, 0 or 1 according to the sign of the value.
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    pub fn sqr(self) -> Self {
        self * self
    }

    pub fn reciprocal(self) -> Self {
        DoubleDouble::ONE / self
    }

    fn add_parts(self, yhi: f64, ylo: f64) -> Self {
        let s_sum = self.hi + yhi;
        let t_sum = self.lo + ylo;
        let mut e = s_sum - self.hi;
        let f = t_sum - self.lo;
        let mut s = s_sum - e;
        let mut t = t_sum - f;
        // Two-sum errors of the high and low parts.
        s = (yhi - e) + (self.hi - s);
        t = (ylo - f) + (self.lo - t);
        e = s + t_sum;
        let h_sum = s_sum + e;
        let h = e + (s_sum - h_sum);
        e = t + h;
        let zhi = h_sum + e;
        let zlo = e + (h_sum - zhi);
        DoubleDouble { hi: zhi, lo: zlo }
    }

    fn mul_parts(self, yhi: f64, ylo: f64) -> Self {
        // Split both high parts into 26-bit halves so their products are exact.
        let mut c_big = SPLIT * self.hi;
        let mut hx = c_big - self.hi;
        let mut c = SPLIT * yhi;
        hx = c_big - hx;
        let tx = self.hi - hx;
        let mut hy = c - yhi;
        c_big = self.hi * yhi;
        hy = c - hy;
        let ty = yhi - hy;
        c = ((((hx * hy - c_big) + hx * ty) + tx * hy) + tx * ty) + (self.hi * ylo + self.lo * yhi);
        let zhi = c_big + c;
        let zlo = c + (c_big - zhi);
        DoubleDouble { hi: zhi, lo: zlo }
    }

    fn div_parts(self, yhi: f64, ylo: f64) -> Self {
        let q = self.hi / yhi;
        let mut c = SPLIT * q;
        let mut hc = c - q;
        let mut u = SPLIT * yhi;
        hc = c - hc;
        let tc = q - hc;
        let mut hy = u - yhi;
        let u_big = q * yhi;
        hy = u - hy;
        let ty = yhi - hy;
        // u is the rounding error of q * yhi, used to correct the quotient.
        u = (((hc * hy - u_big) + hc * ty) + tc * hy) + tc * ty;
        c = ((((self.hi - u_big) - u) + self.lo) - q * ylo) / yhi;
        u = q + c;
        DoubleDouble {
            hi: u,
            lo: (q - u) + c,
        }
    }
}

impl From<f64> for DoubleDouble {
    fn from(x: f64) -> Self {
        DoubleDouble::value_of(x)
    }
}

impl From<DoubleDouble> for f64 {
    fn from(x: DoubleDouble) -> Self {
        x.to_f64()
    }
}

impl Neg for DoubleDouble {
    type Output = DoubleDouble;

    fn neg(self) -> DoubleDouble {
        DoubleDouble {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Add for DoubleDouble {
    type Output = DoubleDouble;

    fn add(self, rhs: DoubleDouble) -> DoubleDouble {
        self.add_parts(rhs.hi, rhs.lo)
    }
}

impl Add<f64> for DoubleDouble {
    type Output = DoubleDouble;

    fn add(self, rhs: f64) -> DoubleDouble {
        self.add_parts(rhs, 0.0)
    }
}

impl Sub for DoubleDouble {
    type Output = DoubleDouble;

    fn sub(self, rhs: DoubleDouble) -> DoubleDouble {
        self.add_parts(-rhs.hi, -rhs.lo)
    }
}

impl Sub<f64> for DoubleDouble {
    type Output = DoubleDouble;

    fn sub(self, rhs: f64) -> DoubleDouble {
        self.add_parts(-rhs, 0.0)
    }
}

impl Mul for DoubleDouble {
    type Output = DoubleDouble;

    fn mul(self, rhs: DoubleDouble) -> DoubleDouble {
        self.mul_parts(rhs.hi, rhs.lo)
    }
}

impl Mul<f64> for DoubleDouble {
    type Output = DoubleDouble;

    fn mul(self, rhs: f64) -> DoubleDouble {
        self.mul_parts(rhs, 0.0)
    }
}

impl Div for DoubleDouble {
    type Output = DoubleDouble;

    fn div(self, rhs: DoubleDouble) -> DoubleDouble {
        self.div_parts(rhs.hi, rhs.lo)
    }
}

impl Div<f64> for DoubleDouble {
    type Output = DoubleDouble;

    fn div(self, rhs: f64) -> DoubleDouble {
        self.div_parts(rhs, 0.0)
    }
}

impl PartialOrd for DoubleDouble {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.hi.partial_cmp(&other.hi) {
            Some(Ordering::Equal) => self.lo.partial_cmp(&other.lo),
            ord => ord,
        }
    }
}

impl fmt::Display for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lo == 0.0 {
            write!(f, "{}", self.hi)
        } else if self.lo < 0.0 {
            write!(f, "{} - {:e}", self.hi, -self.lo)
        } else {
            write!(f, "{} + {:e}", self.hi, self.lo)
        }
    }
}
