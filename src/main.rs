use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use scene_viewer::core::viewer_plugin::ViewerPlugin;
use scene_viewer::serialization::config::{ViewerConfig, DEFAULT_CONFIG_PATH};

fn main() {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let loaded = ViewerConfig::load(&config_path);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: config.log_filter.clone(),
                level: bevy::log::Level::INFO,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: config.window.title.clone(),
                    resolution: (config.window.width, config.window.height).into(),
                    ..default()
                }),
                ..default()
            })
            .build(),
    );

    // The logger only exists once the plugins above are built.
    match &loaded {
        Ok(_) => info!("loaded viewer config from {}", config_path),
        Err(error) => warn!("{}; using default viewer config", error),
    }

    app.add_plugins(ViewerPlugin::new(config));

    // Setup inspector plugins
    app.add_plugins(
        WorldInspectorPlugin::default().run_if(input_toggle_active(false, KeyCode::Escape)),
    );

    app.run();
}
