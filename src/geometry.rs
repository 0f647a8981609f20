// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Layout bounds and the bin and site grids derived from them.
//!
//! Scalar parameters arrive as `f64` and are narrowed to the database
//! precision first. Both grids are then derived from the narrowed values, so
//! an `f32` database satisfies `bin_size_x * num_bins_x == xh - xl` on the
//! fields it actually stores. Quotients are taken in `f64`.

use log::warn;
use serde::Serialize;

use crate::coord::Coord;
use crate::error::{InvalidConfiguration, Result};

fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidConfiguration::NonFiniteScalar { name, value })
    }
}

/// Narrow a validated scalar, rejecting values the precision cannot hold
fn narrow<T: Coord>(name: &'static str, value: f64) -> Result<T> {
    let narrowed = T::from_scalar(value);
    if narrowed.is_finite() {
        Ok(narrowed)
    } else {
        Err(InvalidConfiguration::NonFiniteScalar { name, value })
    }
}

/// Narrow a granularity; it must stay positive after narrowing
fn narrow_positive<T: Coord>(name: &'static str, value: f64) -> Result<T> {
    let value = finite(name, value)?;
    if value <= 0.0 {
        return Err(InvalidConfiguration::NonPositiveGranularity { name, value });
    }
    let narrowed: T = narrow(name, value)?;
    if narrowed <= T::zero() {
        // underflowed, e.g. a subnormal f64 narrowed to f32
        return Err(InvalidConfiguration::NonPositiveGranularity {
            name,
            value: narrowed.to_scalar(),
        });
    }
    Ok(narrowed)
}

/// Whole granularity steps that fit in `extent`, floor-truncated
fn step_count(name: &'static str, extent: f64, granularity: f64) -> Result<usize> {
    let count = (extent / granularity).floor();
    if !count.is_finite() || count >= usize::MAX as f64 {
        return Err(InvalidConfiguration::SiteCountOverflow {
            name,
            extent,
            granularity,
        });
    }
    if count * granularity < extent {
        warn!(
            "layout extent {extent} is not a multiple of {granularity}; \
             {} is left over when deriving {name}",
            extent - count * granularity
        );
    }
    Ok(count as usize)
}

/// Bounding box of the placement canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutBox<T> {
    pub xl: T,
    pub yl: T,
    pub xh: T,
    pub yh: T,
}

impl<T: Coord> LayoutBox<T> {
    /// Narrow the bounds and check the box is non-empty in `T`
    pub fn new(xl: f64, yl: f64, xh: f64, yh: f64) -> Result<Self> {
        let layout = Self {
            xl: narrow("xl", finite("xl", xl)?)?,
            yl: narrow("yl", finite("yl", yl)?)?,
            xh: narrow("xh", finite("xh", xh)?)?,
            yh: narrow("yh", finite("yh", yh)?)?,
        };
        if layout.xh <= layout.xl {
            return Err(InvalidConfiguration::EmptyLayout {
                axis: "x",
                low: layout.xl.to_scalar(),
                high: layout.xh.to_scalar(),
            });
        }
        if layout.yh <= layout.yl {
            return Err(InvalidConfiguration::EmptyLayout {
                axis: "y",
                low: layout.yl.to_scalar(),
                high: layout.yh.to_scalar(),
            });
        }
        finite("xh - xl", layout.extent_x())?;
        finite("yh - yl", layout.extent_y())?;
        Ok(layout)
    }

    /// `xh - xl` of the stored bounds, taken in `f64`
    pub fn extent_x(&self) -> f64 {
        self.xh.to_scalar() - self.xl.to_scalar()
    }

    /// `yh - yl` of the stored bounds, taken in `f64`
    pub fn extent_y(&self) -> f64 {
        self.yh.to_scalar() - self.yl.to_scalar()
    }
}

/// Placement sites: `site_width` wide columns and `row_height` tall rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiteGrid<T> {
    pub site_width: T,
    pub row_height: T,
    pub num_sites_x: usize,
    pub num_sites_y: usize,
}

impl<T: Coord> SiteGrid<T> {
    /// Site counts are floor-truncated so every site lies inside the layout.
    pub fn new(layout: &LayoutBox<T>, site_width: f64, row_height: f64) -> Result<Self> {
        let site_width: T = narrow_positive("site_width", site_width)?;
        let row_height: T = narrow_positive("row_height", row_height)?;
        Ok(Self {
            site_width,
            row_height,
            num_sites_x: step_count("num_sites_x", layout.extent_x(), site_width.to_scalar())?,
            num_sites_y: step_count("num_sites_y", layout.extent_y(), row_height.to_scalar())?,
        })
    }
}

/// Coarse bin grid covering the layout with `num_bins_x * num_bins_y` cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinGrid<T> {
    pub num_bins_x: usize,
    pub num_bins_y: usize,
    pub bin_size_x: T,
    pub bin_size_y: T,
}

impl<T: Coord> BinGrid<T> {
    pub fn new(layout: &LayoutBox<T>, num_bins_x: usize, num_bins_y: usize) -> Result<Self> {
        if num_bins_x == 0 {
            return Err(InvalidConfiguration::ZeroBinCount { name: "num_bins_x" });
        }
        if num_bins_y == 0 {
            return Err(InvalidConfiguration::ZeroBinCount { name: "num_bins_y" });
        }
        Ok(Self {
            num_bins_x,
            num_bins_y,
            bin_size_x: narrow_positive("bin_size_x", layout.extent_x() / num_bins_x as f64)?,
            bin_size_y: narrow_positive("bin_size_y", layout.extent_y() / num_bins_y as f64)?,
        })
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins_x * self.num_bins_y
    }

    /// Bin containing the offset `(dx, dy)` from the layout origin, clamped
    /// into the grid
    pub fn bin_at(&self, dx: T, dy: T) -> (usize, usize) {
        (
            clamp_index(dx / self.bin_size_x, self.num_bins_x),
            clamp_index(dy / self.bin_size_y, self.num_bins_y),
        )
    }
}

fn clamp_index<T: Coord>(value: T, count: usize) -> usize {
    let floored = value.floor();
    if floored.is_nan() || floored <= T::zero() {
        0
    } else {
        (floored.to_scalar() as usize).min(count - 1)
    }
}
