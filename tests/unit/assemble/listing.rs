use super::*;

fn tmp_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let dir = std::env::temp_dir().join(format!(
        "lyric_reel_listing_{tag}_{}_{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(path: &Path, w: u32, h: u32) {
    let data = vec![255u8; (w * h * 4) as usize];
    image::save_buffer_with_format(
        path,
        &data,
        w,
        h,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .unwrap();
}

fn sorted(mut names: Vec<&str>) -> Vec<&str> {
    names.sort_by(|a, b| natural_cmp(a, b));
    names
}

#[test]
fn numbers_sort_by_value() {
    assert_eq!(
        sorted(vec!["frame-2", "frame-10", "frame-1"]),
        vec!["frame-1", "frame-2", "frame-10"]
    );
}

#[test]
fn frame_ids_sort_in_playback_order() {
    assert_eq!(
        sorted(vec![
            "lvg-10-0.png",
            "lvg-2-11.png",
            "lvg-2-2.png",
            "lvg-2-0.png",
            "lvg-9-3.png"
        ]),
        vec![
            "lvg-2-0.png",
            "lvg-2-2.png",
            "lvg-2-11.png",
            "lvg-9-3.png",
            "lvg-10-0.png"
        ]
    );
}

#[test]
fn leading_zeros_and_text() {
    assert_eq!(natural_cmp("a007", "a7"), Ordering::Less);
    assert_eq!(natural_cmp("a07", "a8"), Ordering::Less);
    assert_eq!(natural_cmp("b1", "a2"), Ordering::Greater);
    assert_eq!(natural_cmp("a", "a1"), Ordering::Less);
    assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    assert_eq!(
        natural_cmp("99999999999999999999999", "100000000000000000000000"),
        Ordering::Less
    );
}

#[test]
fn list_frames_filters_and_orders() {
    let dir = tmp_dir("list");
    for name in ["f-10.png", "f-2.jpg", "f-1.jpeg", "notes.txt"] {
        std::fs::write(dir.join(name), b"x").unwrap();
    }
    std::fs::create_dir(dir.join("sub.png")).unwrap();

    let names: Vec<String> = list_frames(&dir)
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["f-1.jpeg", "f-2.jpg", "f-10.png"]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_or_empty_dir_is_input_error() {
    let dir = tmp_dir("empty");
    std::fs::write(dir.join("readme.md"), b"x").unwrap();
    assert!(matches!(list_frames(&dir), Err(ReelError::Input(_))));
    assert!(matches!(
        list_frames(&dir.join("nope")),
        Err(ReelError::Input(_))
    ));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn uniform_policy_accepts_equal_sizes_and_rejects_mismatch() {
    let dir = tmp_dir("uniform");
    write_png(&dir.join("a-1.png"), 8, 6);
    write_png(&dir.join("a-2.png"), 8, 6);
    let frames = list_frames(&dir).unwrap();
    assert_eq!(
        derive_frame_size(&frames, FrameSizePolicy::Uniform).unwrap(),
        (8, 6)
    );

    write_png(&dir.join("a-3.png"), 4, 6);
    let frames = list_frames(&dir).unwrap();
    let err = derive_frame_size(&frames, FrameSizePolicy::Uniform).unwrap_err();
    assert!(matches!(err, ReelError::Input(_)));
    assert!(err.to_string().contains("a-3.png"), "{err}");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn mean_policy_truncates() {
    let dir = tmp_dir("mean");
    write_png(&dir.join("a-1.png"), 8, 6);
    write_png(&dir.join("a-2.png"), 4, 6);
    write_png(&dir.join("a-3.png"), 4, 5);
    let frames = list_frames(&dir).unwrap();
    // (16 / 3, 17 / 3)
    assert_eq!(
        derive_frame_size(&frames, FrameSizePolicy::Mean).unwrap(),
        (5, 5)
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unreadable_frame_header_is_input_error() {
    let dir = tmp_dir("garbage");
    std::fs::write(dir.join("a-1.png"), b"not a png").unwrap();
    let frames = list_frames(&dir).unwrap();
    assert!(matches!(
        derive_frame_size(&frames, FrameSizePolicy::Uniform),
        Err(ReelError::Input(_))
    ));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn size_policy_serde_names() {
    assert_eq!(
        serde_json::to_string(&FrameSizePolicy::Mean).unwrap(),
        "\"mean\""
    );
    assert_eq!(
        serde_json::from_str::<FrameSizePolicy>("\"uniform\"").unwrap(),
        FrameSizePolicy::Uniform
    );
}
