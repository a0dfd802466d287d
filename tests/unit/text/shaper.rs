use super::*;

#[test]
fn block_face_measures_by_char_count() {
    let mut shaper = BlockFace::default().shaper().unwrap();
    let e = shaper.measure(" héllo").unwrap();
    assert_eq!(e.width, 60.0);
    assert_eq!(e.height, 20.0);
    assert_eq!(shaper.measure("").unwrap().width, 0.0);
}

#[test]
fn block_face_paints_only_non_space_cells() {
    let face = BlockFace {
        advance_px: 4.0,
        height_px: 4.0,
    };
    let mut shaper = face.shaper().unwrap();
    let mut ctx = vello_cpu::RenderContext::new(16, 8);
    shaper
        .draw(&mut ctx, "a b", 0.0, 0.0, Rgb8::new(255, 0, 0))
        .unwrap();
    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(16, 8);
    ctx.render_to_pixmap(&mut pixmap);

    let data = pixmap.data_as_u8_slice();
    let alpha_at = |x: usize, y: usize| data[(y * 16 + x) * 4 + 3];
    assert_eq!(alpha_at(1, 1), 255, "first glyph cell is filled");
    assert_eq!(alpha_at(5, 1), 0, "space cell stays empty");
    assert_eq!(alpha_at(9, 1), 255, "third glyph cell is filled");
    assert_eq!(alpha_at(1, 6), 0, "below the line box stays empty");
}
