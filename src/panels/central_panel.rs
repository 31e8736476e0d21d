use crate::SketchpadApp;
use crate::input::PointerFrame;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(&app.config().title);
        ui.add_space(8.0);

        let (response, painter) =
            ui.allocate_painter(app.config().canvas_size(), egui::Sense::drag());

        // The preview replaces the system cursor while over the canvas
        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        app.handle_pointer(PointerFrame::capture(ctx, &response));

        let renderer = app.renderer();
        let mut surface = PainterSurface::new(&painter, response.rect, renderer.style().background);
        renderer.render(&mut surface, app.state());

        painter.rect_stroke(
            response.rect,
            0.0,
            ui.visuals().widgets.noninteractive.bg_stroke,
        );
    });
}
