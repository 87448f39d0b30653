use chart_viewport::ChartError;
use chart_viewport::core::{VIEWPORT_ENCODED_LEN, Viewport};

#[test]
fn binary_round_trip_is_bit_exact() {
    let viewport = Viewport::new(1.5, 99.25, -3.0, 0.0);
    let bytes = viewport.to_bytes();
    assert_eq!(bytes.len(), VIEWPORT_ENCODED_LEN);
    assert_eq!(&bytes[..8], &1.5f64.to_le_bytes());

    let decoded = Viewport::from_bytes(&bytes).expect("decode");
    assert_eq!(decoded.left.to_bits(), 1.5f64.to_bits());
    assert_eq!(decoded.top.to_bits(), 99.25f64.to_bits());
    assert_eq!(decoded.right.to_bits(), (-3.0f64).to_bits());
    assert_eq!(decoded.bottom.to_bits(), 0.0f64.to_bits());
}

#[test]
fn decoding_rejects_wrong_length() {
    let err = Viewport::from_bytes(&[0u8; 31]).expect_err("short buffer must fail");
    assert!(matches!(
        err,
        ChartError::Decode {
            expected: 32,
            actual: 31
        }
    ));
}

#[test]
fn json_snapshot_round_trip() {
    let viewport = Viewport::new(-10.0, 4.5, 22.0, -1.25);
    let json = serde_json::to_string(&viewport).expect("serialize");
    let decoded: Viewport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, viewport);
}

#[test]
fn containment_is_half_open() {
    let viewport = Viewport::new(0.0, 10.0, 10.0, 0.0);
    assert!(viewport.contains_point(0.0, 0.0));
    assert!(viewport.contains_point(9.999, 9.999));
    assert!(!viewport.contains_point(10.0, 5.0));
    assert!(!viewport.contains_point(5.0, 10.0));

    assert!(viewport.contains(Viewport::new(2.0, 8.0, 4.0, 1.0)));
    assert!(!viewport.contains(Viewport::new(2.0, 11.0, 4.0, 1.0)));
}

#[test]
fn union_grows_and_intersect_reports_overlap() {
    let mut viewport = Viewport::new(0.0, 10.0, 10.0, 0.0);
    viewport.union(Viewport::new(5.0, 20.0, 15.0, 5.0));
    assert_eq!(viewport, Viewport::new(0.0, 20.0, 15.0, 0.0));

    assert!(viewport.intersect(Viewport::new(10.0, 30.0, 30.0, 10.0)));
    assert_eq!(viewport, Viewport::new(10.0, 20.0, 15.0, 10.0));

    let before = viewport;
    assert!(!viewport.intersect(Viewport::new(100.0, 200.0, 150.0, 100.0)));
    assert_eq!(viewport, before);
}

#[test]
fn inset_and_offset_move_edges() {
    let mut viewport = Viewport::new(0.0, 10.0, 10.0, 0.0);
    viewport.inset(1.0, 2.0);
    assert_eq!(viewport, Viewport::new(1.0, 8.0, 9.0, 2.0));
    viewport.offset(1.0, -2.0);
    assert_eq!(viewport, Viewport::new(2.0, 6.0, 10.0, 0.0));
    viewport.offset_to(0.0, 100.0);
    assert_eq!(viewport, Viewport::new(0.0, 100.0, 8.0, 94.0));
}
