use crate::SketchpadApp;
use crate::components::ToolButton;
use crate::tool::Thickness;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            ui.label("Pen");
            ui.horizontal(|ui| {
                for thickness in [Thickness::Thin, Thickness::Thick] {
                    let selected = app.state().tool().is_pen(thickness);
                    if ui.selectable_label(selected, thickness.name()).clicked() {
                        app.state_mut().select_pen(thickness);
                    }
                }
            });

            ui.label("Stickers");
            // Collect glyphs first, selecting one borrows the state mutably
            let glyphs = app.state().palette().glyphs().to_vec();
            ui.horizontal_wrapped(|ui| {
                for glyph in &glyphs {
                    let selected = app.state().tool().is_sticker(glyph);
                    if ToolButton::new(glyph, selected).show(ui).clicked() {
                        app.state_mut().select_sticker(glyph);
                    }
                }
            });
            if ui.button("Custom Sticker").clicked() {
                app.open_sticker_prompt();
            }

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.state().history().can_undo();
                let can_redo = app.state().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.state_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.state_mut().redo();
                }
                if ui.button("Clear Canvas").clicked() {
                    app.state_mut().clear();
                }
            });

            ui.separator();

            let history = app.state().history();
            ui.horizontal(|ui| {
                ui.label(format!("On canvas: {}", history.snapshot().len()));
                ui.label(format!("Redo: {}", history.redo_stack().len()));
            });

            egui::Grid::new("history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Undo Stack");
                    ui.strong("Redo Stack");
                    ui.end_row();

                    let undo_stack = history.snapshot();
                    let redo_stack = history.redo_stack();
                    let max_len = undo_stack.len().max(redo_stack.len());

                    for i in 0..max_len {
                        ui.label(undo_stack.get(i).map_or("", |d| d.label()));
                        ui.label(redo_stack.get(i).map_or("", |d| d.label()));
                        ui.end_row();
                    }
                });

            ui.separator();

            let counts = app.event_counter().counts();
            ui.label(format!("Tool: {}", app.state().tool()));
            ui.label(format!(
                "Signals: {} content, {} tool moves",
                counts.content_changed, counts.tool_moved
            ));
        });
}
