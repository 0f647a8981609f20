//! Legalization Database Library
//!
//! This library builds a borrowed, validated view over the flat numeric
//! buffers a global placer produces (positions, node sizes, fence regions)
//! and derives the bin and site grids a legalizer needs.

pub mod coord;
pub mod database;
pub mod error;
pub mod export;
pub mod geometry;
pub mod params;
pub mod partition;
pub mod region;
pub mod view;

// Re-export commonly used types
pub use coord::Coord;
pub use database::{
    make_legalization_db, DbBuffers, DbSummary, LegalizationDb, LegalizationDbBuilder,
};
pub use error::{InvalidConfiguration, Result};
pub use export::{export_nodes_to_csv, write_nodes_csv};
pub use geometry::{BinGrid, LayoutBox, SiteGrid};
pub use params::LayoutParams;
pub use partition::{NodeClass, NodePartition};
pub use region::{FenceRegions, RegionBox, UNCONSTRAINED};
pub use view::{CoordView, CoordViewMut};
