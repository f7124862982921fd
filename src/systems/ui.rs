use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::{egui, EguiContexts, EguiPlugin};
use crate::core::viewer_context::ViewerContext;
use crate::core::viewer_plugin::ViewerSystems;
use crate::systems::commands::{StepDirection, ViewerCommand};

pub(crate) struct ViewerUiPlugin;

impl Plugin for ViewerUiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin);
        }
        app
            .init_resource::<PointerCaptured>()
            .add_systems(Update, viewer_panel_system.in_set(ViewerSystems::Panel));
    }
}

/// Set while the pointer is over the panel so camera drags don't leak through.
#[derive(Resource, Default, Debug)]
pub struct PointerCaptured(pub bool);

fn viewer_panel_system(
    mut contexts: EguiContexts,
    context: Res<ViewerContext>,
    mut writer: EventWriter<ViewerCommand>,
    mut captured: ResMut<PointerCaptured>,
) {
    let ctx = contexts.ctx_mut();

    egui::Window::new("Viewer")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            if ui.button("Reset camera").clicked() {
                writer.send(ViewerCommand::ResetCamera);
            }

            ui.separator();
            ui.add_enabled_ui(context.has_character(), |ui| {
                ui.label("Move character");
                ui.horizontal(|ui| {
                    for direction in StepDirection::ALL {
                        if ui.button(direction.label()).clicked() {
                            writer.send(ViewerCommand::StepCharacter(direction));
                        }
                    }
                });
            });
        });

    captured.0 = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
}
