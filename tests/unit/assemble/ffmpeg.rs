use super::*;

#[test]
fn partial_path_keeps_extension_last() {
    assert_eq!(
        partial_path(Path::new("/media/video/song.mp4")),
        PathBuf::from("/media/video/song.partial.mp4")
    );
    assert_eq!(
        partial_path(Path::new("song-audio.mkv")),
        PathBuf::from("song-audio.partial.mkv")
    );
    assert_eq!(partial_path(Path::new("out")), PathBuf::from("out.partial"));
}

#[test]
fn flatten_alpha_0_returns_bg() {
    let src = vec![0u8, 0, 0, 0];
    let mut dst = vec![0u8; 4];
    flatten_over_bg(&mut dst, &src, [10, 20, 30, 255]);
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_alpha_255_is_identity() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_over_bg(&mut dst, &src, [10, 20, 30, 255]);
    assert_eq!(dst, src);
}

#[test]
fn flatten_half_alpha_blends() {
    let src = vec![255u8, 0, 100, 128];
    let mut dst = vec![0u8; 4];
    flatten_over_bg(&mut dst, &src, [0, 255, 100, 255]);
    assert_eq!(dst, vec![128, 127, 100, 255]);
}

#[test]
fn begin_rejects_odd_sizes_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(
        std::env::temp_dir().join("lyric_reel_never_written.mp4"),
    ));
    let err = sink
        .begin(SinkConfig {
            width: 3,
            height: 2,
            fps: 24,
        })
        .unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
    let err = sink
        .begin(SinkConfig {
            width: 2,
            height: 2,
            fps: 0,
        })
        .unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}

#[test]
fn push_before_begin_is_an_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    let frame = RgbaFrame {
        width: 2,
        height: 2,
        data: vec![0; 16],
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}
