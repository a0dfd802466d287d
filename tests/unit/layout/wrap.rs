use super::*;

fn feed(state: &mut WrapState, words: &[&str]) {
    for w in words {
        assert_eq!(state.apply(&ScriptEvent::word(*w, 500)), WrapStep::Word);
    }
}

#[test]
fn append_only_while_strictly_under_budget() {
    let mut s = WrapState::new(10);
    feed(&mut s, &["abcde", "fghij"]);
    assert_eq!(s.lines(), ["abcde", "fghij"]);
    assert_eq!(s.active_line(), 1);

    let mut s = WrapState::new(12);
    feed(&mut s, &["abcde", "fghij"]);
    assert_eq!(s.lines(), ["abcde fghij"]);
    assert_eq!(s.active_line(), 0);
}

#[test]
fn sentence_terminal_word_stays_active_and_opens_empty_line() {
    let mut s = WrapState::new(40);
    feed(&mut s, &["so", "it", "ends."]);
    assert_eq!(s.lines(), ["so it ends.", ""]);
    assert_eq!(s.active_line(), 0);
    assert_eq!(s.active_text(), "so it ends.");

    feed(&mut s, &["again"]);
    assert_eq!(s.lines(), ["so it ends.", "again"]);
    assert_eq!(s.active_line(), 1);
}

#[test]
fn quote_and_semicolon_also_terminate() {
    assert!(is_sentence_terminal("said\""));
    assert!(is_sentence_terminal("then;"));
    assert!(is_sentence_terminal("."));
    assert!(!is_sentence_terminal("wait,"));
    assert!(!is_sentence_terminal("why?"));
    assert!(!is_sentence_terminal(""));
}

#[test]
fn single_break_keeps_lines_double_break_clears() {
    let mut s = WrapState::new(40);
    feed(&mut s, &["one", "two"]);
    assert_eq!(s.apply(&ScriptEvent::line_break(500)), WrapStep::LineBreak);
    assert_eq!(s.lines(), ["one two"]);

    feed(&mut s, &["three"]);
    assert_eq!(s.lines(), ["one two three"]);

    assert_eq!(s.apply(&ScriptEvent::line_break(500)), WrapStep::LineBreak);
    assert_eq!(s.apply(&ScriptEvent::line_break(500)), WrapStep::PageCleared);
    assert!(s.lines().is_empty());
    assert_eq!(s.active_text(), "");

    feed(&mut s, &["fresh"]);
    assert_eq!(s.lines(), ["fresh"]);
    assert_eq!(s.active_line(), 0);
}

#[test]
fn break_word_break_does_not_clear() {
    let mut s = WrapState::new(40);
    s.apply(&ScriptEvent::line_break(500));
    feed(&mut s, &["kept"]);
    assert_eq!(s.apply(&ScriptEvent::line_break(500)), WrapStep::LineBreak);
    assert_eq!(s.lines(), ["kept"]);
}

#[test]
fn visible_window_tails_up_to_active_line() {
    let mut s = WrapState::new(4);
    feed(&mut s, &["aa", "bb", "cc", "dd."]);
    assert_eq!(s.lines(), ["aa", "bb", "cc", "dd.", ""]);
    assert_eq!(s.visible_window(2), ["cc", "dd."]);
    assert_eq!(s.visible_window(10), ["aa", "bb", "cc", "dd."]);
    assert_eq!(s.visible_window(0), ["dd."]);
    assert!(WrapState::new(4).visible_window(3).is_empty());
}

#[test]
fn multibyte_words_count_chars_not_bytes() {
    let mut s = WrapState::new(8);
    feed(&mut s, &["héé", "ààà"]);
    assert_eq!(s.lines(), ["héé ààà"]);
}

#[test]
fn punctuated_line_needs_break() {
    for line in ["end.", "pause, ", "wow!", "list:", "semi;", "why?\t"] {
        assert!(line_needs_break(line), "{line:?}");
    }
    for line in ["", "   ", "plain", "quoted\"", "dash-"] {
        assert!(!line_needs_break(line), "{line:?}");
    }
}
