use egui::{Color32, Pos2};
use sticker_sketchpad::{
    DrawOp, RecordingSurface, RenderStyle, Renderer, SketchpadConfig, SketchpadState, Thickness,
};

fn render(state: &SketchpadState) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    Renderer::default().render(&mut surface, state);
    surface
}

#[test]
fn test_full_repaint_in_commit_order() {
    let mut state = SketchpadState::new(&SketchpadConfig::default());
    state.select_pen(Thickness::Thick);
    state.pointer_down(Pos2::new(0.0, 0.0));
    state.pointer_move(Pos2::new(10.0, 10.0));
    state.pointer_up(Pos2::new(10.0, 10.0));
    state.select_sticker("🎃");
    state.pointer_down(Pos2::new(40.0, 40.0));

    let surface = render(&state);
    let style = RenderStyle::default();

    assert_eq!(
        surface.ops(),
        &[
            DrawOp::Clear,
            DrawOp::Path {
                points: vec![Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0)],
                width: 5.0,
                color: Color32::BLACK,
            },
            DrawOp::Text {
                center: Pos2::new(40.0, 40.0),
                text: "🎃".to_owned(),
                font_size: style.sticker_font_size,
                color: Color32::BLACK,
            },
        ]
    );
}

#[test]
fn test_undo_removes_from_next_render() {
    let mut state = SketchpadState::new(&SketchpadConfig::default());
    state.select_sticker("🌟");
    state.pointer_down(Pos2::new(5.0, 5.0));
    state.pointer_down(Pos2::new(6.0, 6.0));
    state.undo();

    let surface = render(&state);
    assert_eq!(surface.visible_ops().len(), 1);
    assert!(matches!(
        &surface.visible_ops()[0],
        DrawOp::Text { center, .. } if *center == Pos2::new(5.0, 5.0)
    ));
}

#[test]
fn test_sticker_preview_full_opacity() {
    let mut state = SketchpadState::new(&SketchpadConfig::default());
    state.select_sticker("🍕");
    state.pointer_move(Pos2::new(20.0, 30.0));

    let surface = render(&state);
    assert_eq!(
        surface.visible_ops(),
        &[DrawOp::Text {
            center: Pos2::new(20.0, 30.0),
            text: "🍕".to_owned(),
            font_size: RenderStyle::default().sticker_font_size,
            color: Color32::BLACK,
        }]
    );
}

#[test]
fn test_style_follows_config() {
    let config = SketchpadConfig {
        sticker_font_size: 48.0,
        cursor_marker: "+".to_owned(),
        ..SketchpadConfig::default()
    };
    let style = RenderStyle::from_config(&config);
    assert_eq!(style.sticker_font_size, 48.0);
    assert_eq!(style.cursor_marker, "+");
    assert_eq!(style.ink, Color32::BLACK);
}
