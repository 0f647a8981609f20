// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use serde::{Deserialize, Serialize};

/// Scalar inputs of the database builder.
///
/// Derives serde so the surrounding flow can keep these next to the rest of
/// its placement configuration in whatever format it uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub xl: f64,
    pub yl: f64,
    pub xh: f64,
    pub yh: f64,
    pub site_width: f64,
    pub row_height: f64,
    pub num_bins_x: usize,
    pub num_bins_y: usize,
    pub num_movable_nodes: usize,
    #[serde(default, alias = "num_terminal_NIs")]
    pub num_terminal_nis: usize,
    #[serde(default)]
    pub num_filler_nodes: usize,
}
