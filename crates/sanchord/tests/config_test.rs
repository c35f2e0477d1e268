use sanchord::shape::LensStyle;
use sanchord::{ChordConfig, ChordLayout, Error, FlowMatrix, SortOrder};

#[test]
fn missing_keys_keep_their_defaults() {
    let cfg = ChordConfig::from_json_str(r#"{ "nodePadding": 0.1 }"#).unwrap();
    let defaults = ChordConfig::default();
    assert_eq!(cfg.node_padding, 0.1);
    assert_eq!(cfg.io_padding, defaults.io_padding);
    assert_eq!(cfg.radius, defaults.radius);
    assert_eq!(cfg.lens_style, LensStyle::Curved);
    assert!(cfg.sort_nodes.is_none());
}

#[test]
fn named_sort_orders_and_lens_style_parse() {
    let cfg = ChordConfig::from_json_str(
        r#"{ "sortNodes": "descending", "sortFlows": "ascending", "lensStyle": "straight" }"#,
    )
    .unwrap();
    assert_eq!(cfg.sort_nodes, Some(SortOrder::Descending));
    assert_eq!(cfg.sort_flows, Some(SortOrder::Ascending));
    assert_eq!(cfg.lens_style, LensStyle::Straight);

    let layout_cfg = cfg.layout_config().unwrap();
    assert!(layout_cfg.sort_nodes.is_some());
    assert!(layout_cfg.sort_flows.is_some());
}

#[test]
fn unknown_sort_order_is_a_json_error() {
    assert!(matches!(
        ChordConfig::from_json_str(r#"{ "sortNodes": "sideways" }"#),
        Err(Error::Json(_))
    ));
}

#[test]
fn negative_padding_is_rejected_when_building_the_layout_config() {
    let cfg = ChordConfig::from_json_str(r#"{ "ioPadding": -0.5 }"#).unwrap();
    assert!(matches!(
        cfg.layout_config(),
        Err(Error::InvalidConfig { .. })
    ));
}

#[test]
fn config_drives_a_layout() {
    let cfg = ChordConfig::from_json_str(
        r#"{ "nodePadding": 0.2, "ioPadding": 0.1, "sortNodes": "descending" }"#,
    )
    .unwrap();
    let matrix = FlowMatrix::new(vec![vec![0.0, 1.0], vec![4.0, 0.0]]).unwrap();
    let layout = ChordLayout::with_config(matrix, cfg.layout_config().unwrap()).unwrap();
    assert_eq!(layout.node_padding(), 0.2);
    assert_eq!(layout.io_padding(), 0.1);
    assert_eq!(layout.nodes().len(), 2);
}

#[test]
fn layout_config_rejects_an_overfull_budget() {
    let cfg = ChordConfig::from_json_str(r#"{ "nodePadding": 3.0, "ioPadding": 0.5 }"#).unwrap();
    let matrix = FlowMatrix::new(vec![vec![0.0, 1.0], vec![4.0, 0.0]]).unwrap();
    assert!(matches!(
        ChordLayout::with_config(matrix, cfg.layout_config().unwrap()),
        Err(Error::PaddingBudgetExceeded { .. })
    ));
}
