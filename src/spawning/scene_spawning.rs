use bevy::prelude::*;
use crate::core::components::{BackgroundModel, CharacterModel, PendingFit};
use crate::core::fit_spec::FitSpec;
use crate::core::viewer_context::{AssetRole, AssetSource};

/// Spawns a loaded scene hidden, tagged for its one-time fit.
pub(crate) fn spawn_scene_for_fit(
    commands: &mut Commands,
    scene: Handle<Scene>,
    role: AssetRole,
    spec: FitSpec,
    name: &str,
) -> Entity {
    let entity = commands.spawn_empty()
        .insert(SceneRoot(scene))
        .insert(Transform::default())
        .insert(Visibility::Hidden)
        .insert(Name::new(name.to_string()))
        .id();

    mark_for_fit(commands, entity, role, AssetSource::Loaded, spec);
    entity
}

pub(crate) fn mark_for_fit(
    commands: &mut Commands,
    entity: Entity,
    role: AssetRole,
    source: AssetSource,
    spec: FitSpec,
) {
    let mut entity_commands = commands.entity(entity);
    entity_commands.insert(PendingFit { role, source, spec });

    match role {
        AssetRole::Background => entity_commands.insert(BackgroundModel),
        AssetRole::Character => entity_commands.insert(CharacterModel),
    };
}
