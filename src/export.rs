// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::io::Write;

use crate::coord::Coord;
use crate::database::LegalizationDb;

#[derive(Debug, Serialize)]
pub struct NodeCsvRecord {
    #[serde(rename = "Index")]
    pub index: usize,
    #[serde(rename = "Class")]
    pub class: &'static str,
    #[serde(rename = "InitX")]
    pub init_x: f64,
    #[serde(rename = "InitY")]
    pub init_y: f64,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Width")]
    pub width: f64,
    #[serde(rename = "Height")]
    pub height: f64,
    /// Empty when the node is not fenced
    #[serde(rename = "Region")]
    pub region: Option<usize>,
}

/// Convert node `index` of a database to a NodeCsvRecord
fn node_to_csv_record<T: Coord>(db: &LegalizationDb<'_, T>, index: usize) -> NodeCsvRecord {
    let (init_x, init_y) = db.init_position(index);
    let (x, y) = db.position(index);
    let (width, height) = db.node_size(index);
    NodeCsvRecord {
        index,
        class: db.node_class(index).map_or("", |class| class.as_str()),
        init_x: init_x.to_scalar(),
        init_y: init_y.to_scalar(),
        x: x.to_scalar(),
        y: y.to_scalar(),
        width: width.to_scalar(),
        height: height.to_scalar(),
        region: db.node_region(index),
    }
}

/// Write every node of the database (fillers included) as CSV
pub fn write_nodes_csv<T: Coord, W: Write>(
    db: &LegalizationDb<'_, T>,
    writer: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = Writer::from_writer(writer);

    for index in 0..db.num_nodes_total() {
        writer.serialize(node_to_csv_record(db, index))?;
    }

    writer.flush()?;
    Ok(())
}

/// Export the node table of a database to a CSV file
pub fn export_nodes_to_csv<T: Coord>(
    db: &LegalizationDb<'_, T>,
    file_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(file_path)?;
    write_nodes_csv(db, file)
}
