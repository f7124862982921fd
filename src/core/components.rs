use bevy::prelude::*;
use crate::core::fit_spec::FitSpec;
use crate::core::viewer_context::{AssetRole, AssetSource};

#[derive(Component)]
pub struct MainCamera;

#[derive(Component)]
pub struct BackgroundModel;

#[derive(Component)]
pub struct CharacterModel;

/// Marks the lights spawned from the studio rig table.
#[derive(Component)]
pub struct RigLight;

/// Falloff values carried over from the rig table. The renderer uses physically
/// based inverse-square falloff, so `decay` is informational.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LightFalloff {
    pub range: f32,
    pub decay: f32,
}

/// Waiting for geometry before the one-time fit. The entity stays hidden until
/// the fit has been applied.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingFit {
    pub role: AssetRole,
    pub source: AssetSource,
    pub spec: FitSpec,
}
