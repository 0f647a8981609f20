// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Fence regions in flat CSR form.
//!
//! `boxes` stores `xl, yl, xh, yh` for every box of every region back to
//! back. `starts` has `num_regions + 1` offsets counted in boxes, so region
//! `r` owns boxes `starts[r]..starts[r + 1]`.

use serde::Serialize;
use std::ops::Range;

use crate::coord::Coord;
use crate::error::{InvalidConfiguration, Result};

/// Region id stored in `node2fence_region_map` for nodes without a fence
pub const UNCONSTRAINED: i32 = i32::MAX;

/// One rectangle of a fence region
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionBox<T> {
    pub xl: T,
    pub yl: T,
    pub xh: T,
    pub yh: T,
}

impl<T: Coord> RegionBox<T> {
    fn from_chunk(chunk: &[T]) -> Self {
        Self {
            xl: chunk[0],
            yl: chunk[1],
            xh: chunk[2],
            yh: chunk[3],
        }
    }

    pub fn width(&self) -> T {
        self.xh - self.xl
    }

    pub fn height(&self) -> T {
        self.yh - self.yl
    }

    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    /// Half-open containment test, `[xl, xh) x [yl, yh)`
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.xl && x < self.xh && y >= self.yl && y < self.yh
    }
}

/// Borrowed fence-region table plus the node-to-region map
#[derive(Debug, Clone, Copy)]
pub struct FenceRegions<'a, T> {
    boxes: &'a [T],
    starts: &'a [i32],
    node2fence_region_map: &'a [i32],
}

impl<'a, T: Coord> FenceRegions<'a, T> {
    /// Validate the CSR structure in one pass over `starts`.
    ///
    /// The map itself is not scanned; see [`FenceRegions::region_of`].
    pub fn new(boxes: &'a [T], starts: &'a [i32], node2fence_region_map: &'a [i32]) -> Result<Self> {
        if boxes.len() % 4 != 0 {
            return Err(InvalidConfiguration::RegionBoxesLength { len: boxes.len() });
        }
        let num_boxes = boxes.len() / 4;

        let (&first, _) = starts
            .split_first()
            .ok_or(InvalidConfiguration::EmptyRegionStart)?;
        if first != 0 {
            return Err(InvalidConfiguration::RegionStartNotZero { first });
        }

        for (region, pair) in starts.windows(2).enumerate() {
            if pair[0] > pair[1] {
                return Err(InvalidConfiguration::RegionStartDecreasing {
                    region,
                    start: pair[0],
                    next: pair[1],
                });
            }
        }

        // starts is non-empty here
        let last = starts[starts.len() - 1];
        if usize::try_from(last).ok() != Some(num_boxes) {
            return Err(InvalidConfiguration::RegionStartEnd { last, num_boxes });
        }

        Ok(Self {
            boxes,
            starts,
            node2fence_region_map,
        })
    }

    pub fn num_regions(&self) -> usize {
        self.starts.len() - 1
    }

    pub fn num_boxes(&self) -> usize {
        self.boxes.len() / 4
    }

    pub fn flat_boxes(&self) -> &'a [T] {
        self.boxes
    }

    pub fn starts(&self) -> &'a [i32] {
        self.starts
    }

    pub fn node2fence_region_map(&self) -> &'a [i32] {
        self.node2fence_region_map
    }

    /// Box index range of `region`; panics if `region >= num_regions()`
    pub fn box_range(&self, region: usize) -> Range<usize> {
        // offsets were checked to be non-negative and non-decreasing
        self.starts[region] as usize..self.starts[region + 1] as usize
    }

    /// Boxes of `region` as a bounded iterator over the flat buffer
    pub fn boxes(&self, region: usize) -> impl ExactSizeIterator<Item = RegionBox<T>> + 'a {
        let range = self.box_range(region);
        let boxes: &'a [T] = self.boxes;
        boxes[range.start * 4..range.end * 4]
            .chunks_exact(4)
            .map(RegionBox::from_chunk)
    }

    /// Region a node is fenced into.
    ///
    /// Returns `None` for [`UNCONSTRAINED`] and for any other id outside
    /// `[0, num_regions)`.
    pub fn region_of(&self, node: usize) -> Option<usize> {
        let region = usize::try_from(self.node2fence_region_map[node]).ok()?;
        (region < self.num_regions()).then_some(region)
    }

    /// Whether `(x, y)` lies inside any box of `region`
    pub fn region_contains(&self, region: usize, x: T, y: T) -> bool {
        self.boxes(region).any(|b| b.contains(x, y))
    }

    /// Total area of the boxes of `region`, assuming they do not overlap
    pub fn region_area(&self, region: usize) -> T {
        self.boxes(region).fold(T::zero(), |acc, b| acc + b.area())
    }
}
