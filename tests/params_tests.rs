// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use legalization_db::LayoutParams;

#[test]
fn test_params_from_json() {
    let params: LayoutParams = serde_json::from_str(
        r#"{
            "xl": 0.0, "yl": 0.0, "xh": 100.0, "yh": 50.0,
            "site_width": 2.0, "row_height": 5.0,
            "num_bins_x": 10, "num_bins_y": 5,
            "num_movable_nodes": 6,
            "num_terminal_NIs": 1,
            "num_filler_nodes": 2
        }"#,
    )
    .unwrap();

    assert_eq!(
        params,
        LayoutParams {
            xl: 0.0,
            yl: 0.0,
            xh: 100.0,
            yh: 50.0,
            site_width: 2.0,
            row_height: 5.0,
            num_bins_x: 10,
            num_bins_y: 5,
            num_movable_nodes: 6,
            num_terminal_nis: 1,
            num_filler_nodes: 2,
        }
    );
}

#[test]
fn test_optional_counts_default_to_zero() {
    let params: LayoutParams = serde_json::from_str(
        r#"{
            "xl": 0.0, "yl": 0.0, "xh": 10.0, "yh": 10.0,
            "site_width": 1.0, "row_height": 1.0,
            "num_bins_x": 1, "num_bins_y": 1,
            "num_movable_nodes": 3
        }"#,
    )
    .unwrap();

    assert_eq!(params.num_terminal_nis, 0);
    assert_eq!(params.num_filler_nodes, 0);
}

#[test]
fn test_negative_count_rejected_by_deserializer() {
    let result: Result<LayoutParams, _> = serde_json::from_str(
        r#"{
            "xl": 0.0, "yl": 0.0, "xh": 10.0, "yh": 10.0,
            "site_width": 1.0, "row_height": 1.0,
            "num_bins_x": 1, "num_bins_y": 1,
            "num_movable_nodes": -1
        }"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_params_round_trip() {
    let params = LayoutParams {
        xl: -5.0,
        yl: 2.5,
        xh: 5.0,
        yh: 12.5,
        site_width: 0.5,
        row_height: 1.25,
        num_bins_x: 8,
        num_bins_y: 4,
        ..Default::default()
    };
    let json = serde_json::to_string(&params).unwrap();
    assert!(json.contains("\"num_terminal_nis\":0"));
    let back: LayoutParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);
}

#[test]
fn test_default_params_are_rejected_as_empty_layout() {
    use legalization_db::{make_legalization_db, DbBuffers, InvalidConfiguration};

    let mut pos: [f64; 0] = [];
    let err = make_legalization_db(
        DbBuffers {
            init_pos: &[],
            pos: &mut pos,
            node_size_x: &[],
            node_size_y: &[],
            region_boxes: &[],
            region_boxes_start: &[0],
            node2fence_region_map: &[],
        },
        LayoutParams::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        InvalidConfiguration::EmptyLayout {
            axis: "x",
            low: 0.0,
            high: 0.0
        }
    );
}
