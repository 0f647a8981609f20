// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Legalization database: a borrowed view over placement buffers.
//!
//! The database never owns node data. Positions, sizes and fence regions
//! stay in caller storage, and the lifetime `'a` ties the view to it. The
//! current-position buffer is held as a unique borrow, so writes a legalizer
//! makes through [`LegalizationDb::set_position`] or
//! [`LegalizationDb::x_mut`] land directly in the caller's buffer and become
//! visible once the database is dropped.

use log::{debug, warn};
use serde::Serialize;
use std::ops::Range;

use crate::coord::Coord;
use crate::error::{InvalidConfiguration, Result};
use crate::geometry::{BinGrid, LayoutBox, SiteGrid};
use crate::params::LayoutParams;
use crate::partition::{NodeClass, NodePartition};
use crate::region::{FenceRegions, RegionBox};
use crate::view::{CoordView, CoordViewMut};

/// Caller-owned buffers the database borrows
#[derive(Debug)]
pub struct DbBuffers<'a, T> {
    /// Initial positions, x half then y half, length `2 * N`
    pub init_pos: &'a [T],
    /// Current positions, same layout as `init_pos`; the legalizer writes here
    pub pos: &'a mut [T],
    pub node_size_x: &'a [T],
    pub node_size_y: &'a [T],
    /// `xl, yl, xh, yh` per box, all regions back to back
    pub region_boxes: &'a [T],
    /// `num_regions + 1` box offsets into `region_boxes`
    pub region_boxes_start: &'a [i32],
    pub node2fence_region_map: &'a [i32],
}

/// Builds a [`LegalizationDb`] from raw buffers and scalar parameters
#[derive(Debug)]
pub struct LegalizationDbBuilder<'a, T> {
    buffers: DbBuffers<'a, T>,
    params: LayoutParams,
}

impl<'a, T: Coord> LegalizationDbBuilder<'a, T> {
    pub fn new(buffers: DbBuffers<'a, T>, params: LayoutParams) -> Self {
        Self { buffers, params }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Validate every input and derive the grids.
    ///
    /// Fails with the first violated precondition; nothing is copied or
    /// written either way.
    pub fn build(self) -> Result<LegalizationDb<'a, T>> {
        let result = Self::assemble(self.buffers, &self.params);
        match &result {
            Ok(db) => debug!(
                "legalization db ({}): {} nodes total, {} legalizable, movable {:?}, fixed {:?}, \
                 filler {:?}, {} regions, bins {}x{} of {}x{}, sites {}x{}",
                T::NAME,
                db.num_nodes_total(),
                db.num_nodes(),
                db.movable_range(),
                db.fixed_range(),
                db.filler_range(),
                db.num_regions(),
                db.num_bins_x(),
                db.num_bins_y(),
                db.bin_size_x(),
                db.bin_size_y(),
                db.num_sites_x(),
                db.num_sites_y(),
            ),
            Err(err) => warn!("rejected legalization db inputs: {err}"),
        }
        result
    }

    fn assemble(buffers: DbBuffers<'a, T>, params: &LayoutParams) -> Result<LegalizationDb<'a, T>> {
        let DbBuffers {
            init_pos,
            pos,
            node_size_x,
            node_size_y,
            region_boxes,
            region_boxes_start,
            node2fence_region_map,
        } = buffers;

        if init_pos.len() != pos.len() {
            return Err(InvalidConfiguration::PositionLengthMismatch {
                init_len: init_pos.len(),
                pos_len: pos.len(),
            });
        }
        let init = CoordView::split(init_pos)?;
        let pos = CoordViewMut::split(pos)?;
        let num_nodes_total = init.len();

        for (buffer, len) in [
            ("node_size_x", node_size_x.len()),
            ("node_size_y", node_size_y.len()),
            ("node2fence_region_map", node2fence_region_map.len()),
        ] {
            if len != num_nodes_total {
                return Err(InvalidConfiguration::NodeBufferLength {
                    buffer,
                    len,
                    expected: num_nodes_total,
                });
            }
        }

        let partition = NodePartition::new(
            num_nodes_total,
            params.num_movable_nodes,
            params.num_terminal_nis,
            params.num_filler_nodes,
        )?;

        let layout = LayoutBox::<T>::new(params.xl, params.yl, params.xh, params.yh)?;
        let sites = SiteGrid::new(&layout, params.site_width, params.row_height)?;
        let bins = BinGrid::new(&layout, params.num_bins_x, params.num_bins_y)?;

        let regions = FenceRegions::new(region_boxes, region_boxes_start, node2fence_region_map)?;

        Ok(LegalizationDb {
            init,
            pos,
            node_size_x,
            node_size_y,
            regions,
            partition,
            layout,
            sites,
            bins,
        })
    }
}

/// One-call form of [`LegalizationDbBuilder`]
pub fn make_legalization_db<'a, T: Coord>(
    buffers: DbBuffers<'a, T>,
    params: LayoutParams,
) -> Result<LegalizationDb<'a, T>> {
    LegalizationDbBuilder::new(buffers, params).build()
}

/// Node geometry, fence regions and layout grids for one legalization pass
#[derive(Debug)]
pub struct LegalizationDb<'a, T> {
    init: CoordView<'a, T>,
    pos: CoordViewMut<'a, T>,
    node_size_x: &'a [T],
    node_size_y: &'a [T],
    regions: FenceRegions<'a, T>,
    partition: NodePartition,
    layout: LayoutBox<T>,
    sites: SiteGrid<T>,
    bins: BinGrid<T>,
}

impl<'a, T: Coord> LegalizationDb<'a, T> {
    // ---- node counts and ranges ----

    /// Nodes legalization iterates over: fillers and terminal NIs excluded
    pub fn num_nodes(&self) -> usize {
        self.partition.num_nodes()
    }

    /// Length of every per-node buffer
    pub fn num_nodes_total(&self) -> usize {
        self.partition.num_nodes_total()
    }

    pub fn num_movable_nodes(&self) -> usize {
        self.partition.num_movable_nodes()
    }

    pub fn num_terminal_nis(&self) -> usize {
        self.partition.num_terminal_nis()
    }

    pub fn num_filler_nodes(&self) -> usize {
        self.partition.num_filler_nodes()
    }

    pub fn partition(&self) -> &NodePartition {
        &self.partition
    }

    pub fn movable_range(&self) -> Range<usize> {
        self.partition.movable_range()
    }

    pub fn fixed_range(&self) -> Range<usize> {
        self.partition.fixed_range()
    }

    pub fn filler_range(&self) -> Range<usize> {
        self.partition.filler_range()
    }

    pub fn node_class(&self, node: usize) -> Option<NodeClass> {
        self.partition.classify(node)
    }

    // ---- positions and sizes ----

    pub fn init_x(&self) -> &'a [T] {
        self.init.x()
    }

    pub fn init_y(&self) -> &'a [T] {
        self.init.y()
    }

    pub fn x(&self) -> &[T] {
        self.pos.x()
    }

    pub fn y(&self) -> &[T] {
        self.pos.y()
    }

    pub fn x_mut(&mut self) -> &mut [T] {
        self.pos.x_mut()
    }

    pub fn y_mut(&mut self) -> &mut [T] {
        self.pos.y_mut()
    }

    /// Both current-position halves, writable at the same time
    pub fn xy_mut(&mut self) -> (&mut [T], &mut [T]) {
        self.pos.xy_mut()
    }

    pub fn init_position(&self, node: usize) -> (T, T) {
        self.init.get(node)
    }

    pub fn position(&self, node: usize) -> (T, T) {
        self.pos.get(node)
    }

    pub fn set_position(&mut self, node: usize, x: T, y: T) {
        self.pos.set(node, x, y);
    }

    pub fn node_size_x(&self) -> &'a [T] {
        self.node_size_x
    }

    pub fn node_size_y(&self) -> &'a [T] {
        self.node_size_y
    }

    pub fn node_size(&self, node: usize) -> (T, T) {
        (self.node_size_x[node], self.node_size_y[node])
    }

    /// Manhattan distance between the initial and current position of `node`
    pub fn displacement(&self, node: usize) -> T {
        let (x0, y0) = self.init_position(node);
        let (x, y) = self.position(node);
        (x - x0).abs() + (y - y0).abs()
    }

    // ---- fence regions ----

    pub fn regions(&self) -> &FenceRegions<'a, T> {
        &self.regions
    }

    pub fn num_regions(&self) -> usize {
        self.regions.num_regions()
    }

    pub fn region_boxes(&self, region: usize) -> impl ExactSizeIterator<Item = RegionBox<T>> + 'a {
        self.regions.boxes(region)
    }

    pub fn node_region(&self, node: usize) -> Option<usize> {
        self.regions.region_of(node)
    }

    // ---- layout and grids ----

    pub fn layout(&self) -> &LayoutBox<T> {
        &self.layout
    }

    pub fn site_grid(&self) -> &SiteGrid<T> {
        &self.sites
    }

    pub fn bin_grid(&self) -> &BinGrid<T> {
        &self.bins
    }

    pub fn xl(&self) -> T {
        self.layout.xl
    }

    pub fn yl(&self) -> T {
        self.layout.yl
    }

    pub fn xh(&self) -> T {
        self.layout.xh
    }

    pub fn yh(&self) -> T {
        self.layout.yh
    }

    pub fn site_width(&self) -> T {
        self.sites.site_width
    }

    pub fn row_height(&self) -> T {
        self.sites.row_height
    }

    pub fn num_sites_x(&self) -> usize {
        self.sites.num_sites_x
    }

    pub fn num_sites_y(&self) -> usize {
        self.sites.num_sites_y
    }

    pub fn bin_size_x(&self) -> T {
        self.bins.bin_size_x
    }

    pub fn bin_size_y(&self) -> T {
        self.bins.bin_size_y
    }

    pub fn num_bins_x(&self) -> usize {
        self.bins.num_bins_x
    }

    pub fn num_bins_y(&self) -> usize {
        self.bins.num_bins_y
    }

    /// Snap `x` down to a site boundary, keeping a `width` wide node inside
    /// the layout
    pub fn align_to_site(&self, x: T, width: T) -> T {
        let xx = x.min(self.xh() - width).max(self.xl());
        ((xx - self.xl()) / self.site_width()).floor() * self.site_width() + self.xl()
    }

    /// Snap `y` down to a row boundary, keeping a `height` tall node inside
    /// the layout
    pub fn align_to_row(&self, y: T, height: T) -> T {
        let yy = y.min(self.yh() - height).max(self.yl());
        ((yy - self.yl()) / self.row_height()).floor() * self.row_height() + self.yl()
    }

    /// Bin containing `(x, y)`, clamped into the grid
    pub fn bin_index(&self, x: T, y: T) -> (usize, usize) {
        self.bins.bin_at(x - self.xl(), y - self.yl())
    }

    pub fn summary(&self) -> DbSummary {
        DbSummary::from_db(self)
    }
}

/// Derived scalars of a database, for logs and reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DbSummary {
    pub precision: &'static str,
    pub num_nodes_total: usize,
    pub num_nodes: usize,
    pub num_movable_nodes: usize,
    pub num_terminal_nis: usize,
    pub num_filler_nodes: usize,
    pub movable_range: Range<usize>,
    pub fixed_range: Range<usize>,
    pub filler_range: Range<usize>,
    pub num_regions: usize,
    pub num_region_boxes: usize,
    pub xl: f64,
    pub yl: f64,
    pub xh: f64,
    pub yh: f64,
    pub site_width: f64,
    pub row_height: f64,
    pub num_sites_x: usize,
    pub num_sites_y: usize,
    pub num_bins_x: usize,
    pub num_bins_y: usize,
    pub bin_size_x: f64,
    pub bin_size_y: f64,
}

impl DbSummary {
    pub fn from_db<T: Coord>(db: &LegalizationDb<'_, T>) -> Self {
        Self {
            precision: T::NAME,
            num_nodes_total: db.num_nodes_total(),
            num_nodes: db.num_nodes(),
            num_movable_nodes: db.num_movable_nodes(),
            num_terminal_nis: db.num_terminal_nis(),
            num_filler_nodes: db.num_filler_nodes(),
            movable_range: db.movable_range(),
            fixed_range: db.fixed_range(),
            filler_range: db.filler_range(),
            num_regions: db.num_regions(),
            num_region_boxes: db.regions().num_boxes(),
            xl: db.xl().to_scalar(),
            yl: db.yl().to_scalar(),
            xh: db.xh().to_scalar(),
            yh: db.yh().to_scalar(),
            site_width: db.site_width().to_scalar(),
            row_height: db.row_height().to_scalar(),
            num_sites_x: db.num_sites_x(),
            num_sites_y: db.num_sites_y(),
            num_bins_x: db.num_bins_x(),
            num_bins_y: db.num_bins_y(),
            bin_size_x: db.bin_size_x().to_scalar(),
            bin_size_y: db.bin_size_y().to_scalar(),
        }
    }
}
