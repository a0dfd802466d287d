use super::*;

const FRAME: HorizontalFrame = HorizontalFrame {
    width: 1000.0,
    margin: 50.0,
};

#[test]
fn left_lines_start_at_margin() {
    assert_eq!(line_x(IndentStyle::Left, FRAME, 300.0, 60.0), 50.0);
    assert_eq!(line_x(IndentStyle::Left, FRAME, 5000.0, 60.0), 50.0);
}

#[test]
fn left_word_sits_at_line_end() {
    // 50 + 300 - 60
    assert_eq!(word_x(IndentStyle::Left, FRAME, 300.0, 60.0), 290.0);
}

#[test]
fn left_word_falls_back_to_margin_on_overflow() {
    // 50 + 900 + 50 is not under 1000.
    assert_eq!(word_x(IndentStyle::Left, FRAME, 900.0, 60.0), 50.0);
    assert_eq!(word_x(IndentStyle::Left, FRAME, 899.0, 60.0), 889.0);
}

#[test]
fn middle_line_shifts_left_by_half_word() {
    assert_eq!(line_x(IndentStyle::Middle, FRAME, 400.0, 100.0), 250.0);
    assert_eq!(line_x(IndentStyle::Middle, FRAME, 400.0, 0.0), 300.0);
    // No shift once line + word reach the canvas width.
    assert_eq!(line_x(IndentStyle::Middle, FRAME, 950.0, 50.0), 25.0);
}

#[test]
fn middle_word_anchors_after_line_when_it_fits() {
    // line at 250, 250 + 400 + 100 + 50 < 1000
    assert_eq!(word_x(IndentStyle::Middle, FRAME, 400.0, 100.0), 650.0);
}

#[test]
fn middle_word_centers_when_anchor_overflows() {
    // line at 100 - 50 = 50; 50 + 800 + 100 + 50 is not under 1000
    assert_eq!(word_x(IndentStyle::Middle, FRAME, 800.0, 100.0), 450.0);
}
