// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Floating-point precision used for every geometry field of a database.
//!
//! Placement flows run in either single or double precision. The choice is
//! made once, at compile time, through the element type of the buffers.

use num::{Float, NumCast};
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Element type of position, size and region-box buffers.
pub trait Coord: Float + Debug + Display + Serialize + Send + Sync + 'static {
    /// Short name used in logs and summaries
    const NAME: &'static str;

    /// Convert a scalar parameter (always supplied as `f64`) into this precision
    fn from_scalar(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    fn to_scalar(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Coord for f32 {
    const NAME: &'static str = "f32";
}

impl Coord for f64 {
    const NAME: &'static str = "f64";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversion() {
        assert_eq!(<f32 as Coord>::from_scalar(2.5), 2.5f32);
        assert_eq!(Coord::to_scalar(2.5f32), 2.5);
        assert_eq!(<f64 as Coord>::from_scalar(1e300), 1e300);
    }

    #[test]
    fn test_precision_names() {
        assert_eq!(<f32 as Coord>::NAME, "f32");
        assert_eq!(<f64 as Coord>::NAME, "f64");
    }
}
