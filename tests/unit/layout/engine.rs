use super::*;
use crate::{config::spec::IndentStyle, text::shaper::BlockFace};

fn words(text: &str) -> Vec<ScriptEvent> {
    crate::timeline::builder::build_events(text, Default::default())
}

fn run(spec: &FrameSpec, text: &str) -> ScriptLayout {
    let mut face = BlockFace::default();
    layout_script(spec, &words(text), &mut face).unwrap()
}

#[test]
fn hello_world_left() {
    let out = run(&FrameSpec::default(), "hello world");
    assert_eq!(out.words.len(), 2);

    let hello = &out.words[0];
    assert_eq!(hello.event_index, 0);
    assert_eq!(hello.pause_ms, 500);
    assert!(hello.read_lines.is_empty());
    assert_eq!(
        hello.active,
        PlacedLine {
            text: "hello".into(),
            x: 50.0,
            y: 100.0
        }
    );
    // margin + "hello" - " hello"
    assert_eq!(hello.word_x, 40.0);

    let world = &out.words[1];
    assert_eq!(world.event_index, 1);
    assert_eq!(world.active.text, "hello world");
    assert_eq!(world.word_x, 100.0);
}

#[test]
fn middle_indentation_centers_and_anchors_word() {
    let spec = FrameSpec {
        indentation: IndentStyle::Middle,
        ..FrameSpec::default()
    };
    let out = run(&spec, "hello");
    let w = &out.words[0];
    // (1024 - 50) / 2 - 60 / 2
    assert_eq!(w.active.x, 457.0);
    assert_eq!(w.word_x, 507.0);
}

#[test]
fn punctuated_active_line_is_not_shifted() {
    let spec = FrameSpec {
        indentation: IndentStyle::Middle,
        ..FrameSpec::default()
    };
    let out = run(&spec, "end.");
    let w = &out.words[0];
    assert_eq!(w.active.x, 492.0);
    assert_eq!(w.word_x, 507.0);
}

#[test]
fn window_scrolls_old_lines_out() {
    let spec = FrameSpec {
        width: 200,
        max_lines_per_frame: 2,
        ..FrameSpec::default()
    };
    let out = run(&spec, "aaaa bbbb cccc dddd eeee");
    assert_eq!(out.metrics.char_budget, 10);

    let last = out.words.last().unwrap();
    assert_eq!(last.word, "eeee");
    assert_eq!(last.read_lines.len(), 1);
    assert_eq!(last.read_lines[0].text, "cccc dddd");
    assert_eq!(last.read_lines[0].y, 100.0);
    assert_eq!(last.active.text, "eeee");
    assert_eq!(last.active.y, 130.0);
}

#[test]
fn event_index_counts_line_breaks_and_page_clears() {
    let out = run(&FrameSpec::default(), "a\n\nb");
    let ids: Vec<usize> = out.words.iter().map(|w| w.event_index).collect();
    assert_eq!(ids, vec![0, 3]);
    let b = &out.words[1];
    assert!(b.read_lines.is_empty());
    assert_eq!(b.active.text, "b");
}

#[test]
fn sentence_terminal_word_is_highlighted_on_its_own_line() {
    let out = run(&FrameSpec::default(), "so.\nnext");
    let so = &out.words[0];
    assert_eq!(so.active.text, "so.");
    assert_eq!(so.active.y, 100.0);

    let next = &out.words[1];
    assert_eq!(next.read_lines[0].text, "so.");
    assert_eq!(next.active.text, "next");
    assert_eq!(next.active.y, 130.0);
}

#[test]
fn layout_is_deterministic() {
    let text = "the quick brown fox.\njumps over\n\nthe lazy dog";
    assert_eq!(
        run(&FrameSpec::default(), text),
        run(&FrameSpec::default(), text)
    );
}

#[test]
fn word_prefix_counts_chars() {
    let out = run(&FrameSpec::default(), "héllo");
    let w = &out.words[0];
    assert_eq!(w.word_prefix(0), " ");
    assert_eq!(w.word_prefix(2), " hé");
    assert_eq!(w.word_prefix(99), " héllo");
}

#[test]
fn invalid_spec_is_rejected_before_layout() {
    let spec = FrameSpec {
        fps: 0,
        ..FrameSpec::default()
    };
    let mut face = BlockFace::default();
    assert!(layout_script(&spec, &words("x"), &mut face).is_err());
}
