mod common;

use common::translate_u32;
use index_assembly::prelude::*;

#[test]
fn request_roundtrips_through_json() {
    let req = GenerationRequest::translate(Topology::Polygon, InputWidth::U8, OutputWidth::U16)
        .with_start(3)
        .with_counts(10, 9)
        .with_provoking(ProvokingVertex::Last, ProvokingVertex::First)
        .with_restart(0xFF);
    let json = serde_json::to_string(&req).unwrap();
    let back: GenerationRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, req);
}

#[test]
fn request_loads_from_json_config() {
    let json = r#"{
        "mode": { "Translate": "U16" },
        "topology": "TriangleFan",
        "output_width": "U32",
        "provoking_in": "First",
        "provoking_out": "Last",
        "restart_mode": "Disabled",
        "restart_sentinel": null,
        "start": 0,
        "input_count": 5,
        "output_count": 9
    }"#;
    let req: GenerationRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.mode, Mode::Translate(InputWidth::U16));
    assert_eq!(req.topology, Topology::TriangleFan);
    assert!(req.validate().is_ok());
}

#[test]
fn plan_serializes() {
    let plan = plan_translate(Topology::LineLoop, InputWidth::U32, 4);
    let v = serde_json::to_value(plan).unwrap();
    assert_eq!(v["assembled"], "Lines");
    assert_eq!(v["output_count"], 8);
}

#[test]
fn misaligned_output_count_is_rejected() {
    let req = GenerationRequest::translate(Topology::Triangles, InputWidth::U32, OutputWidth::U32)
        .with_counts(6, 5);
    assert!(matches!(
        translate_u32(&req, &[0, 1, 2, 3, 4, 5]),
        Err(IndexError::MisalignedOutputCount { group: 3, .. })
    ));
}

#[test]
fn restart_on_unsupported_topology_is_rejected() {
    for topology in [Topology::TriangleStrip, Topology::LineLoop, Topology::TrianglesAdjacency] {
        let req = GenerationRequest::translate(topology, InputWidth::U32, OutputWidth::U32)
            .with_counts(0, 0)
            .with_restart(0xFFFF_FFFF);
        assert!(matches!(
            translate_u32(&req, &[]),
            Err(IndexError::UnsupportedCombination(_))
        ));
    }
}

#[test]
fn size_resolvers_reject_odd_widths() {
    assert_eq!(input_width(1).unwrap(), InputWidth::U8);
    assert_eq!(output_width(4).unwrap(), OutputWidth::U32);
    assert!(matches!(output_width(1), Err(IndexError::InvalidWidth { bytes: 1, .. })));
    assert!(matches!(input_width(8), Err(IndexError::InvalidWidth { bytes: 8, .. })));
}

#[test]
fn errors_render_context() {
    let err = IndexError::OutputTooSmall {
        required: 12,
        actual: 6,
    };
    let msg = err.to_string();
    assert!(msg.contains("12") && msg.contains('6'), "{msg}");
}

#[test]
fn failed_translate_leaves_output_untouched() {
    let input = [0u16; 3];
    let mut out = [0x5555u16; 6];
    let req = GenerationRequest::translate(Topology::Lines, InputWidth::U16, OutputWidth::U16)
        .with_counts(3, 6);
    assert!(translate(&req, IndexSlice::U16(&input), IndexSliceMut::U16(&mut out)).is_err());
    assert_eq!(out, [0x5555; 6]);
}
