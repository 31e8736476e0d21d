use egui::Pos2;
use sticker_sketchpad::event::EventCounter;
use sticker_sketchpad::{
    EditorState, InputEvent, Preview, SketchpadConfig, SketchpadState, StickerError, Thickness,
    ToolState,
};

fn sketchpad() -> (SketchpadState, EventCounter) {
    let state = SketchpadState::new(&SketchpadConfig::default());
    let counter = EventCounter::new();
    state.subscribe(Box::new(counter.clone()));
    (state, counter)
}

#[test]
fn test_thin_pen_stroke() {
    let (mut state, _) = sketchpad();
    state.select_pen(Thickness::Thin);

    state.handle_input(&InputEvent::PointerDown {
        position: Pos2::new(10.0, 10.0),
    });
    state.handle_input(&InputEvent::PointerMove {
        position: Pos2::new(20.0, 10.0),
    });
    state.handle_input(&InputEvent::PointerMove {
        position: Pos2::new(20.0, 20.0),
    });
    state.handle_input(&InputEvent::PointerUp {
        position: Pos2::new(20.0, 20.0),
    });

    let snapshot = state.history().snapshot();
    assert_eq!(snapshot.len(), 1);
    let stroke = snapshot[0].as_stroke().expect("a stroke");
    assert_eq!(stroke.thickness(), 1.0);
    assert_eq!(
        stroke.points(),
        &[
            Pos2::new(10.0, 10.0),
            Pos2::new(20.0, 10.0),
            Pos2::new(20.0, 20.0)
        ]
    );
    assert_eq!(state.mode(), EditorState::Idle);
}

#[test]
fn test_sticker_click_places_sticker_only() {
    let (mut state, _) = sketchpad();
    state.select_sticker("🌟");

    state.pointer_down(Pos2::new(50.0, 50.0));
    state.pointer_up(Pos2::new(50.0, 50.0));

    let snapshot = state.history().snapshot();
    assert_eq!(snapshot.len(), 1);
    let sticker = snapshot[0].as_sticker().expect("a sticker");
    assert_eq!(sticker.glyph(), "🌟");
    assert_eq!(sticker.anchor(), Pos2::new(50.0, 50.0));
    assert_eq!(state.mode(), EditorState::Idle);
}

#[test]
fn test_stroke_visible_from_pointer_down() {
    let (mut state, counter) = sketchpad();
    state.select_pen(Thickness::Thick);
    state.pointer_down(Pos2::new(3.0, 4.0));

    assert_eq!(state.mode(), EditorState::Drawing);
    assert_eq!(state.history().snapshot().len(), 1);
    assert_eq!(counter.counts().content_changed, 1);
}

#[test]
fn test_idle_move_only_updates_preview() {
    let (mut state, counter) = sketchpad();
    state.pointer_move(Pos2::new(7.0, 8.0));
    state.pointer_move(Pos2::new(9.0, 8.0));

    assert!(state.history().snapshot().is_empty());
    assert_eq!(
        state.preview(),
        Some(&Preview::Cursor {
            position: Pos2::new(9.0, 8.0),
            thickness: Thickness::Thin
        })
    );
    assert_eq!(counter.counts().tool_moved, 2);
    assert_eq!(counter.counts().content_changed, 0);
}

#[test]
fn test_preview_hidden_while_drawing_and_after_release() {
    let (mut state, _) = sketchpad();
    state.pointer_move(Pos2::new(1.0, 1.0));
    assert!(state.preview().is_some());

    state.pointer_down(Pos2::new(1.0, 1.0));
    assert!(state.preview().is_none());

    state.pointer_move(Pos2::new(2.0, 2.0));
    assert!(state.preview().is_none());

    state.pointer_up(Pos2::new(2.0, 2.0));
    assert!(state.preview().is_none());

    state.pointer_move(Pos2::new(3.0, 3.0));
    assert!(state.preview().is_some());
}

#[test]
fn test_leaving_canvas_removes_preview() {
    let (mut state, _) = sketchpad();
    state.pointer_move(Pos2::new(1.0, 1.0));
    state.handle_input(&InputEvent::PointerLeave);
    assert!(state.preview().is_none());
}

#[test]
fn test_tool_change_retargets_preview() {
    let (mut state, counter) = sketchpad();
    state.pointer_move(Pos2::new(12.0, 13.0));
    state.select_sticker("🍕");

    assert_eq!(
        state.preview(),
        Some(&Preview::Sticker {
            position: Pos2::new(12.0, 13.0),
            glyph: "🍕".to_owned()
        })
    );
    assert_eq!(state.tool(), &ToolState::sticker("🍕"));
    assert_eq!(counter.counts().tool_changed, 1);
    assert!(state.history().snapshot().is_empty());
}

#[test]
fn test_out_of_bounds_points_are_kept() {
    let (mut state, _) = sketchpad();
    state.pointer_down(Pos2::new(250.0, 10.0));
    state.pointer_move(Pos2::new(300.0, -20.0));
    state.pointer_up(Pos2::new(300.0, -20.0));

    let stroke = state.history().snapshot()[0].as_stroke().unwrap();
    assert_eq!(stroke.points()[1], Pos2::new(300.0, -20.0));
}

#[test]
fn test_new_stroke_after_undo_discards_redo() {
    let (mut state, _) = sketchpad();
    state.pointer_down(Pos2::new(1.0, 1.0));
    state.pointer_up(Pos2::new(1.0, 1.0));
    assert!(state.undo());
    assert!(state.history().can_redo());

    state.pointer_down(Pos2::new(2.0, 2.0));
    state.pointer_up(Pos2::new(2.0, 2.0));
    assert!(!state.history().can_redo());
    assert!(!state.redo());
}

#[test]
fn test_undo_redo_signal_only_on_change() {
    let (mut state, counter) = sketchpad();
    assert!(!state.undo());
    assert!(!state.redo());
    assert_eq!(counter.counts().content_changed, 0);

    state.select_sticker("🌟");
    state.pointer_down(Pos2::new(5.0, 5.0));
    assert!(state.undo());
    assert!(state.redo());
    assert_eq!(counter.counts().content_changed, 3);
}

#[test]
fn test_clear_resets_everything() {
    let (mut state, counter) = sketchpad();
    state.pointer_down(Pos2::new(1.0, 1.0));
    state.clear();

    assert_eq!(state.mode(), EditorState::Idle);
    assert!(state.history().is_empty());
    assert!(!state.undo());
    assert!(!state.redo());
    assert_eq!(counter.counts().content_changed, 2);

    // The cleared stroke must not keep growing
    state.pointer_move(Pos2::new(9.0, 9.0));
    assert!(state.history().snapshot().is_empty());
}

#[test]
fn test_custom_sticker_added_and_selected() {
    let (mut state, _) = sketchpad();
    let glyph = state.add_custom_sticker(Some("  hello ")).unwrap();

    assert_eq!(glyph, "hello");
    assert!(state.palette().contains("hello"));
    assert_eq!(state.tool(), &ToolState::sticker("hello"));
}

#[test]
fn test_custom_sticker_rejects_cancel_and_blank() {
    let (mut state, _) = sketchpad();
    let before = state.palette().glyphs().len();

    assert_eq!(state.add_custom_sticker(None), Err(StickerError::Empty));
    assert_eq!(state.add_custom_sticker(Some("")), Err(StickerError::Empty));
    assert_eq!(state.add_custom_sticker(Some("   ")), Err(StickerError::Empty));

    assert_eq!(state.palette().glyphs().len(), before);
    assert_eq!(state.tool(), &ToolState::default());
}
