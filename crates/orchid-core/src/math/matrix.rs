// Copyright 2026 Orchid Contributors
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

//! Provides a column-major 4x4 matrix type.
//!
//! The orchestrator treats view-projection matrices as opaque values that
//! are snapshotted, compared, and handed to shader constants; only the
//! operations needed for that are provided.

use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A 4x4 matrix of `f32`, stored as four column vectors.
#[derive(
    Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct Mat4 {
    /// The four columns of the matrix, each `[x, y, z, w]`.
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from four column vectors.
    #[inline]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Creates a uniform scale matrix. Handy for building distinct test
    /// matrices without a full transform stack.
    pub const fn from_scale(s: f32) -> Self {
        Self {
            cols: [
                [s, 0.0, 0.0, 0.0],
                [0.0, s, 0.0, 0.0],
                [0.0, 0.0, s, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Self {
        let m = &self.cols;
        Self {
            cols: [
                [m[0][0], m[1][0], m[2][0], m[3][0]],
                [m[0][1], m[1][1], m[2][1], m[3][1]],
                [m[0][2], m[1][2], m[2][2], m[3][2]],
                [m[0][3], m[1][3], m[2][3], m[3][3]],
            ],
        }
    }

    /// Returns `true` if every element differs by at most `epsilon`.
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.cols
            .iter()
            .flatten()
            .zip(other.cols.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0f32; 4]; 4];
        for (c, col) in b.iter().enumerate() {
            for r in 0..4 {
                out[c][r] =
                    a[0][r] * col[0] + a[1][r] * col[1] + a[2][r] * col[2] + a[3][r] * col[3];
            }
        }
        Self { cols: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_multiplicative_neutral() {
        let m = Mat4::from_scale(2.5);
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
    }

    #[test]
    fn transpose_round_trip() {
        let m = Mat4::from_cols([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().cols[0], [1.0, 5.0, 9.0, 13.0]);
    }

    #[test]
    fn abs_diff_eq_tolerance() {
        let a = Mat4::from_scale(1.0);
        let mut b = a;
        b.cols[2][2] += 1e-6;
        assert!(a.abs_diff_eq(&b, 1e-5));
        assert!(!a.abs_diff_eq(&Mat4::from_scale(1.1), 1e-5));
    }
}
