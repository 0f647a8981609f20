// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Error type for database construction.
//!
//! Every rejected input maps to one variant of [`InvalidConfiguration`]. The
//! variant names the violated precondition and carries the offending values,
//! so a message like `"num_movable_nodes 9 exceeds non-filler node count 8"`
//! can be traced back to the upstream stage that produced it.

use thiserror::Error;

/// Result type for database construction
pub type Result<T> = std::result::Result<T, InvalidConfiguration>;

/// Precondition violated by the inputs of the database builder
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    #[error("position buffer length {len} is odd; x and y halves must be equal")]
    OddPositionLength { len: usize },

    #[error("initial position buffer has length {init_len} but current position buffer has length {pos_len}")]
    PositionLengthMismatch { init_len: usize, pos_len: usize },

    #[error("{buffer} has length {len}, expected one entry per node ({expected})")]
    NodeBufferLength {
        buffer: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("num_filler_nodes {num_filler_nodes} + num_terminal_nis {num_terminal_nis} exceeds node count {num_nodes_total}")]
    ExcludedNodesExceedTotal {
        num_filler_nodes: usize,
        num_terminal_nis: usize,
        num_nodes_total: usize,
    },

    #[error("num_movable_nodes {num_movable_nodes} exceeds non-filler node count {num_non_filler}")]
    MovableExceedsNonFiller {
        num_movable_nodes: usize,
        num_non_filler: usize,
    },

    #[error("{name} is not a finite number ({value})")]
    NonFiniteScalar { name: &'static str, value: f64 },

    #[error("layout is empty along {axis}: low {low} >= high {high}")]
    EmptyLayout {
        axis: &'static str,
        low: f64,
        high: f64,
    },

    #[error("{name} must be positive, got {value}")]
    NonPositiveGranularity { name: &'static str, value: f64 },

    #[error("{name} does not fit in usize: extent {extent} / granularity {granularity}")]
    SiteCountOverflow {
        name: &'static str,
        extent: f64,
        granularity: f64,
    },

    #[error("{name} must be positive, got 0")]
    ZeroBinCount { name: &'static str },

    #[error("region box buffer length {len} is not a multiple of 4")]
    RegionBoxesLength { len: usize },

    #[error("region_boxes_start is empty; it needs num_regions + 1 entries")]
    EmptyRegionStart,

    #[error("region_boxes_start must begin at 0, got {first}")]
    RegionStartNotZero { first: i32 },

    #[error("region_boxes_start decreases at region {region}: {start} > {next}")]
    RegionStartDecreasing { region: usize, start: i32, next: i32 },

    #[error("region_boxes_start ends at {last} but there are {num_boxes} region boxes")]
    RegionStartEnd { last: i32, num_boxes: usize },
}
