use super::*;

#[test]
fn empty_json_yields_defaults() {
    let spec: FrameSpec = serde_json::from_str("{}").unwrap();
    assert_eq!(spec, FrameSpec::default());
    spec.validate().unwrap();
}

#[test]
fn partial_json_overrides_only_given_keys() {
    let spec: FrameSpec = serde_json::from_str(
        r#"{ "width": 640, "indentation": "middle", "text_color": [1, 2, 3], "font": { "size_px": 40 } }"#,
    )
    .unwrap();
    assert_eq!(spec.width, 640);
    assert_eq!(spec.height, 768);
    assert_eq!(spec.indentation, IndentStyle::Middle);
    assert_eq!(spec.text_color, Rgb8::new(1, 2, 3));
    assert_eq!(spec.font.size_px, 40.0);
    assert_eq!(spec.font.name, DEFAULT_FONT_NAME);
}

#[test]
fn default_indentation_alias_means_middle() {
    let spec: FrameSpec = serde_json::from_str(r#"{ "indentation": "default" }"#).unwrap();
    assert_eq!(spec.indentation, IndentStyle::Middle);
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(serde_json::from_str::<FrameSpec>(r#"{ "colour": [0, 0, 0] }"#).is_err());
}

#[test]
fn validation_catches_bad_values() {
    let bad = [
        FrameSpec {
            width: 0,
            ..FrameSpec::default()
        },
        FrameSpec {
            height: 767,
            ..FrameSpec::default()
        },
        FrameSpec {
            fps: 0,
            ..FrameSpec::default()
        },
        FrameSpec {
            max_lines_per_frame: 0,
            ..FrameSpec::default()
        },
        FrameSpec {
            margin_left_right: 600.0,
            ..FrameSpec::default()
        },
        FrameSpec {
            line_gap: f32::NAN,
            ..FrameSpec::default()
        },
    ];
    for spec in bad {
        assert!(spec.validate().is_err(), "{spec:?} should be rejected");
    }
}

#[test]
fn font_candidates_put_explicit_path_first_and_dedupe_default() {
    let font = FontSpec {
        path: Some(PathBuf::from("/fonts/custom.ttf")),
        dir: PathBuf::from("/fonts"),
        ..FontSpec::default()
    };
    assert_eq!(
        font.candidates(),
        vec![
            PathBuf::from("/fonts/custom.ttf"),
            PathBuf::from("/fonts/CaviarDreams_BoldItalic.ttf"),
        ]
    );

    let named = FontSpec {
        name: "notosans-black".to_string(),
        dir: PathBuf::from("/fonts"),
        ..FontSpec::default()
    };
    assert_eq!(
        named.candidates(),
        vec![
            PathBuf::from("/fonts/NotoSans-Black.ttf"),
            PathBuf::from("/fonts/CaviarDreams_BoldItalic.ttf"),
        ]
    );
}

#[test]
fn spec_file_roundtrip_through_disk() {
    let dir = std::env::temp_dir().join(format!(
        "lyric_reel_spec_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("spec.json");
    std::fs::write(&path, r#"{ "fps": 30, "max_lines_per_frame": 3 }"#).unwrap();

    let spec = FrameSpec::load_or_default(Some(&path)).unwrap();
    assert_eq!(spec.fps, 30);
    assert_eq!(spec.max_lines_per_frame, 3);

    std::fs::write(&path, r#"{ "fps": 0 }"#).unwrap();
    assert!(FrameSpec::from_path(&path).is_err());

    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(
        FrameSpec::from_path(&path),
        Err(ReelError::Serde(_))
    ));

    let _ = std::fs::remove_dir_all(&dir);
}
