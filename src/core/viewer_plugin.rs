use bevy::app::{App, AppExit, Plugin};
use bevy::prelude::*;
use crate::core::components::LightFalloff;
use crate::core::light_definition::{LightRole, ShadowCameraSettings};
use crate::core::viewer_context::ViewerContext;
use crate::management::asset_loading::*;
use crate::management::material_tuning::{tune_arriving_textures, tune_placed_materials, UntunedTextures};
use crate::serialization::config::ViewerConfig;
use crate::spawning::light_spawning::{rig_shadow_map, spawn_light_rig};
use crate::systems::camera::CameraPlugin;
use crate::systems::commands::{apply_viewer_commands, drain_queued_commands, ViewerCommand};
use crate::systems::input::InputPlugin;
use crate::systems::ui::ViewerUiPlugin;

/// Per-frame order of the interactive systems: input is read, the panel records
/// whether it owns the pointer, commands are applied, then the camera moves.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewerSystems {
    Input,
    Panel,
    Commands,
    Camera,
}

pub fn configure_viewer_sets(app: &mut App) {
    app.configure_sets(Update, (
        ViewerSystems::Input,
        ViewerSystems::Panel,
        ViewerSystems::Commands,
        ViewerSystems::Camera,
    ).chain());
}

/// Everything the viewer needs on top of `DefaultPlugins`.
pub struct ViewerPlugin {
    pub config: ViewerConfig,
}

impl ViewerPlugin {
    pub fn new(config: ViewerConfig) -> Self {
        ViewerPlugin { config }
    }
}

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(self.config.clone())
            .insert_resource(ClearColor(Color::BLACK))
            .insert_resource(rig_shadow_map())
            // Stays dark until the rig goes in.
            .insert_resource(AmbientLight {
                color: Color::BLACK,
                brightness: 0.0,
            })
            .init_resource::<ViewerContext>()
            .init_resource::<UntunedTextures>()
            .init_state::<ViewerState>()
            .add_event::<ViewerCommand>()
            .add_event::<LoadFinished>()
            .add_event::<AssetPlaced>()
            .register_type::<ViewerContext>()
            .register_type::<ShadowCameraSettings>()
            .register_type::<LightFalloff>()
            .register_type::<LightRole>();

        configure_viewer_sets(app);
        app.add_plugins((InputPlugin, CameraPlugin, ViewerUiPlugin));

        app.add_systems(OnEnter(ViewerState::LoadingBackground), begin_background_load)
            .add_systems(OnEnter(ViewerState::LoadingCharacter), begin_character_load)
            .add_systems(OnEnter(ViewerState::Ready), (spawn_light_rig, announce_ready).chain());

        app.add_systems(Update, (
            poll_pending_load,
            settle_finished_loads,
            apply_pending_fits,
            tune_placed_materials,
            record_placements,
        ).chain());

        app.add_systems(Update, tune_arriving_textures);
        app.add_systems(Update, (drain_queued_commands, apply_viewer_commands)
            .chain()
            .in_set(ViewerSystems::Commands));
        app.add_systems(Last, shutdown_viewer);
    }
}

fn shutdown_viewer(mut exit_events: EventReader<AppExit>, mut context: ResMut<ViewerContext>) {
    if exit_events.read().next().is_some() {
        info!("viewer shutting down");
        context.clear();
    }
}
