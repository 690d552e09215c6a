use crate::app::DoodleApp;
use crate::input::{self, InputEvent};
use crate::renderer::SceneTransform;
use crate::util::time;
use eframe::egui;

/// The drawing surface: turns egui pointer input into scene-space events,
/// hands them to the toolbar, then paints the scene.
pub fn central_panel(app: &mut DoodleApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::from_gray(235)))
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) =
                ui.allocate_painter(available_size, egui::Sense::click_and_drag());
            let rect = response.rect;
            let transform = app.renderer.transform(rect);

            for event in pointer_events(&response, &transform) {
                input::route_event(&event, &mut app.toolbar, &mut app.scene);
            }

            app.scene.prune_expired(time::current_time_secs());
            if app.renderer.render(&painter, rect, &app.scene) {
                ctx.request_repaint();
            }
        });
}

fn pointer_events(response: &egui::Response, transform: &SceneTransform) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let Some(pos) = response.interact_pointer_pos() else {
        return events;
    };
    let position = transform.to_scene(pos);

    if response.clicked() {
        events.push(InputEvent::Tap { position });
    } else if response.drag_started() || (response.dragged() && response.drag_delta() != egui::Vec2::ZERO) {
        events.push(InputEvent::PointerMove { position });
    }
    if response.drag_stopped() {
        events.push(InputEvent::PointerUp { position });
    }
    events
}
