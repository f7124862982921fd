use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::{SceneInstance, SceneSpawner};
use crate::core::components::PendingFit;
use crate::core::viewer_context::{AssetRole, AssetSource, PlacedBackground, ViewerContext};
use crate::core::viewer_error::ViewerError;
use crate::serialization::config::ViewerConfig;
use crate::spawning::placeholder::spawn_placeholder_room;
use crate::spawning::scene_spawning::{mark_for_fit, spawn_scene_for_fit};
use crate::spawning::transformation::{fit_and_place, hierarchy_local_bounds};

/// Assets load one at a time, background first; lights go in once both are settled.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum ViewerState {
    #[default]
    LoadingBackground,
    LoadingCharacter,
    Ready,
}

/// What to do when an asset cannot be loaded.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Fallback {
    Placeholder,
    Skip,
}

pub fn fallback_for(role: AssetRole) -> Fallback {
    match role {
        AssetRole::Background => Fallback::Placeholder,
        AssetRole::Character => Fallback::Skip,
    }
}

pub fn state_after(role: AssetRole) -> ViewerState {
    match role {
        AssetRole::Background => ViewerState::LoadingCharacter,
        AssetRole::Character => ViewerState::Ready,
    }
}

#[derive(Resource, Debug)]
pub struct PendingLoad {
    pub role: AssetRole,
    pub path: String,
    pub handle: Handle<Gltf>,
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Handle<Scene>),
    Failed(ViewerError),
}

/// A load that has settled one way or the other, waiting for its fallback policy.
#[derive(Event, Debug)]
pub struct LoadFinished {
    pub role: AssetRole,
    pub path: String,
    pub outcome: LoadOutcome,
}

/// Sent once per asset when its fit has been applied and it is visible.
#[derive(Event, Debug, Clone, Copy)]
pub struct AssetPlaced {
    pub entity: Entity,
    pub role: AssetRole,
    pub source: AssetSource,
}

pub fn scene_from_gltf(gltf: &Gltf, path: &str) -> LoadOutcome {
    gltf.default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
        .map(LoadOutcome::Loaded)
        .unwrap_or_else(|| LoadOutcome::Failed(ViewerError::MissingScene { path: path.to_string() }))
}

/// `None` while the load is still in flight.
pub fn poll_load(pending: &PendingLoad, asset_server: &AssetServer, gltfs: &Assets<Gltf>) -> Option<LoadOutcome> {
    outcome_for_states(
        &pending.path,
        asset_server.load_state(&pending.handle),
        asset_server.recursive_dependency_load_state(&pending.handle),
        gltfs.get(&pending.handle),
    )
}

/// A glTF is only done once its external textures have settled as well. A texture
/// that failed still lets the model through.
pub fn outcome_for_states(
    path: &str,
    load: LoadState,
    dependencies: RecursiveDependencyLoadState,
    gltf: Option<&Gltf>,
) -> Option<LoadOutcome> {
    match (load, dependencies) {
        (LoadState::Failed(error), _) => Some(LoadOutcome::Failed(ViewerError::AssetLoad {
            path: path.to_string(),
            reason: error.to_string(),
        })),
        (LoadState::Loaded, RecursiveDependencyLoadState::Loaded) => {
            gltf.map(|gltf| scene_from_gltf(gltf, path))
        }
        (LoadState::Loaded, RecursiveDependencyLoadState::Failed(error)) => {
            let gltf = gltf?;
            warn!("{} loaded without some of its dependencies: {}", path, error);
            Some(scene_from_gltf(gltf, path))
        }
        _ => None,
    }
}

fn begin_load(commands: &mut Commands, asset_server: &AssetServer, config: &ViewerConfig, role: AssetRole) {
    let path = config.path_for(role).to_string();
    info!("loading {} asset from {}", role.label(), path);

    commands.insert_resource(PendingLoad {
        role,
        handle: asset_server.load(path.clone()),
        path,
    });
}

pub(crate) fn begin_background_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
) {
    begin_load(&mut commands, &asset_server, &config, AssetRole::Background);
}

pub(crate) fn begin_character_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
) {
    begin_load(&mut commands, &asset_server, &config, AssetRole::Character);
}

pub(crate) fn poll_pending_load(
    mut commands: Commands,
    pending: Option<Res<PendingLoad>>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut finished: EventWriter<LoadFinished>,
) {
    let Some(pending) = pending else { return };
    let Some(outcome) = poll_load(&pending, &asset_server, &gltfs) else { return };

    commands.remove_resource::<PendingLoad>();
    finished.send(LoadFinished {
        role: pending.role,
        path: pending.path.clone(),
        outcome,
    });
}

pub(crate) fn settle_finished_loads(
    mut commands: Commands,
    mut events: EventReader<LoadFinished>,
    config: Res<ViewerConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut next_state: ResMut<NextState<ViewerState>>,
) {
    for LoadFinished { role, path, outcome } in events.read() {
        let role = *role;
        let spec = config.fit_for(role);

        match outcome {
            LoadOutcome::Loaded(scene) => {
                info!("{} asset loaded from {}", role.label(), path);
                spawn_scene_for_fit(&mut commands, scene.clone(), role, spec, path);
            }
            LoadOutcome::Failed(error) => match fallback_for(role) {
                Fallback::Placeholder => {
                    warn!("{}; using placeholder room", error);
                    let room = spawn_placeholder_room(&mut commands, &mut meshes, &mut materials);
                    mark_for_fit(&mut commands, room, role, AssetSource::Placeholder, spec);
                }
                Fallback::Skip => {
                    warn!("{}; continuing without {}", error, role.label());
                    next_state.set(state_after(role));
                }
            },
        }
    }
}

pub(crate) fn apply_pending_fits(
    mut commands: Commands,
    pending: Query<(Entity, &PendingFit, Option<&SceneRoot>, Option<&SceneInstance>)>,
    scene_spawner: Res<SceneSpawner>,
    children: Query<&Children>,
    mut nodes: ParamSet<(Query<(&Transform, Option<&Mesh3d>)>, Query<&mut Transform>)>,
    meshes: Res<Assets<Mesh>>,
    mut placed: EventWriter<AssetPlaced>,
) {
    for (entity, fit, scene_root, scene_instance) in pending.iter() {
        let scene_ready = scene_instance.is_some_and(|instance| scene_spawner.instance_is_ready(**instance));
        if scene_root.is_some() && !scene_ready {
            continue;
        }

        let local_bounds = hierarchy_local_bounds(entity, &children, &nodes.p0(), &meshes);
        let mut transforms = nodes.p1();
        let Ok(mut transform) = transforms.get_mut(entity) else { continue };

        let report = fit_and_place(&mut transform, local_bounds, &fit.spec);
        if report.degenerate {
            warn!("{} has no measurable geometry; keeping scale 1", fit.role.label());
        }
        info!(
            "{} placed: original size {:?}, scale {}, center {:?}, final position {:?}",
            fit.role.label(),
            report.original_size,
            report.scale,
            report.center,
            report.final_position
        );

        commands.entity(entity)
            .remove::<PendingFit>()
            .insert(Visibility::Inherited);

        placed.send(AssetPlaced {
            entity,
            role: fit.role,
            source: fit.source,
        });
    }
}

pub(crate) fn record_placements(
    mut events: EventReader<AssetPlaced>,
    mut context: ResMut<ViewerContext>,
    mut next_state: ResMut<NextState<ViewerState>>,
) {
    for event in events.read() {
        match event.role {
            AssetRole::Background => {
                context.background = Some(PlacedBackground {
                    entity: event.entity,
                    source: event.source,
                });
            }
            AssetRole::Character => context.character = Some(event.entity),
        }
        next_state.set(state_after(event.role));
    }
}

pub(crate) fn announce_ready(context: Res<ViewerContext>) {
    let background = match context.background.map(|placed| placed.source) {
        Some(AssetSource::Loaded) => "loaded",
        Some(AssetSource::Placeholder) => "placeholder",
        None => "missing",
    };
    info!(
        "scene ready: background {}, character {}",
        background,
        if context.has_character() { "present" } else { "absent" }
    );
}
