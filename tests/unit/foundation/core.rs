use super::*;

#[test]
fn rgb8_serializes_as_triplet() {
    let c = Rgb8::new(236, 128, 16);
    assert_eq!(serde_json::to_string(&c).unwrap(), "[236,128,16]");
    let back: Rgb8 = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(back, Rgb8::new(1, 2, 3));
    assert_eq!(back.to_rgba8(), [1, 2, 3, 255]);
}

#[test]
fn frame_id_file_name_parses_back() {
    let id = FrameId::new(12, 3);
    assert_eq!(id.file_name(), "lvg-12-3.png");
    assert_eq!(FrameId::parse_file_name("lvg-12-3.png").unwrap(), id);
}

#[test]
fn frame_id_rejects_foreign_names() {
    assert!(FrameId::parse_file_name("frame-1.png").is_err());
    assert!(FrameId::parse_file_name("lvg-1.png").is_err());
    assert!(FrameId::parse_file_name("lvg-a-1.png").is_err());
}

#[test]
fn frame_id_orders_by_event_then_sub() {
    let mut ids = vec![FrameId::new(1, 0), FrameId::new(0, 10), FrameId::new(0, 2)];
    ids.sort();
    assert_eq!(
        ids,
        vec![FrameId::new(0, 2), FrameId::new(0, 10), FrameId::new(1, 0)]
    );
}
