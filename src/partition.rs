// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Node index partition.
//!
//! All per-node buffers share one index order:
//!
//! ```text
//! [0, num_movable_nodes)                          movable
//! [num_movable_nodes, total - num_filler_nodes)   fixed (terminal NIs included)
//! [total - num_filler_nodes, total)               filler
//! ```

use serde::Serialize;
use std::fmt;
use std::ops::Range;

use crate::error::{InvalidConfiguration, Result};

/// Class of a node, decided purely by its index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeClass {
    Movable,
    Fixed,
    Filler,
}

impl NodeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeClass::Movable => "MOVABLE",
            NodeClass::Fixed => "FIXED",
            NodeClass::Filler => "FILLER",
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated split of `num_nodes_total` node indices into contiguous ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodePartition {
    num_nodes_total: usize,
    num_movable_nodes: usize,
    num_terminal_nis: usize,
    num_filler_nodes: usize,
}

impl NodePartition {
    pub fn new(
        num_nodes_total: usize,
        num_movable_nodes: usize,
        num_terminal_nis: usize,
        num_filler_nodes: usize,
    ) -> Result<Self> {
        let excluded = num_filler_nodes.checked_add(num_terminal_nis);
        if excluded.map_or(true, |excluded| excluded > num_nodes_total) {
            return Err(InvalidConfiguration::ExcludedNodesExceedTotal {
                num_filler_nodes,
                num_terminal_nis,
                num_nodes_total,
            });
        }

        // fillers fit, so this cannot underflow
        let num_non_filler = num_nodes_total - num_filler_nodes;
        if num_movable_nodes > num_non_filler {
            return Err(InvalidConfiguration::MovableExceedsNonFiller {
                num_movable_nodes,
                num_non_filler,
            });
        }

        Ok(Self {
            num_nodes_total,
            num_movable_nodes,
            num_terminal_nis,
            num_filler_nodes,
        })
    }

    /// Node count seen by legalization: fillers and terminal NIs excluded
    pub fn num_nodes(&self) -> usize {
        self.num_nodes_total - self.num_filler_nodes - self.num_terminal_nis
    }

    pub fn num_nodes_total(&self) -> usize {
        self.num_nodes_total
    }

    pub fn num_movable_nodes(&self) -> usize {
        self.num_movable_nodes
    }

    pub fn num_terminal_nis(&self) -> usize {
        self.num_terminal_nis
    }

    pub fn num_filler_nodes(&self) -> usize {
        self.num_filler_nodes
    }

    pub fn movable_range(&self) -> Range<usize> {
        0..self.num_movable_nodes
    }

    pub fn fixed_range(&self) -> Range<usize> {
        self.num_movable_nodes..self.filler_start()
    }

    pub fn filler_range(&self) -> Range<usize> {
        self.filler_start()..self.num_nodes_total
    }

    /// Class of node `index`, or `None` past the end of the node set
    pub fn classify(&self, index: usize) -> Option<NodeClass> {
        if index < self.num_movable_nodes {
            Some(NodeClass::Movable)
        } else if index < self.filler_start() {
            Some(NodeClass::Fixed)
        } else if index < self.num_nodes_total {
            Some(NodeClass::Filler)
        } else {
            None
        }
    }

    fn filler_start(&self) -> usize {
        self.num_nodes_total - self.num_filler_nodes
    }
}
