use std::f32::consts::PI;
use bevy::prelude::*;
use bevy::pbr::PointLightShadowMap;
use crate::core::components::{LightFalloff, RigLight};
use crate::core::light_definition::*;

/// Luminous power per unit of table intensity. Table values are candela-like, so
/// this folds in the 4π of an isotropic emitter plus a studio gain.
pub const LUMENS_PER_INTENSITY: f32 = 4.0 * PI * 1000.0;

/// Ambient brightness per unit of table intensity.
pub const AMBIENT_BRIGHTNESS_PER_INTENSITY: f32 = 100.0;

/// A rig row turned into the components an engine light needs.
#[derive(Debug, Clone)]
pub struct LightInstance {
    pub definition: &'static LightDefinition,
    pub point_light: PointLight,
    pub transform: Transform,
    pub shadow: ShadowCameraSettings,
    pub falloff: LightFalloff,
}

impl LightInstance {
    pub fn name(&self) -> &'static str {
        self.definition.name
    }
}

#[derive(Debug, Clone)]
pub struct AmbientLightInstance {
    pub definition: &'static AmbientDefinition,
    pub light: AmbientLight,
}

fn point_light_from(definition: &LightDefinition, shadow: &ShadowCameraSettings) -> PointLight {
    let range = if definition.range > 0.0 { definition.range } else { shadow.far };

    PointLight {
        color: color_from_hex(definition.color),
        intensity: definition.intensity * LUMENS_PER_INTENSITY,
        range,
        shadows_enabled: true,
        shadow_map_near_z: shadow.near,
        ..default()
    }
}

pub fn build_lights() -> Vec<LightInstance> {
    LIGHT_RIG
        .iter()
        .map(|definition| LightInstance {
            definition,
            point_light: point_light_from(definition, &SHADOW_CAMERA),
            transform: Transform::from_translation(definition.position),
            shadow: SHADOW_CAMERA,
            falloff: LightFalloff {
                range: definition.range,
                decay: definition.decay,
            },
        })
        .collect()
}

pub fn build_ambient() -> AmbientLightInstance {
    AmbientLightInstance {
        definition: &AMBIENT,
        light: AmbientLight {
            color: color_from_hex(AMBIENT.color),
            brightness: AMBIENT.intensity * AMBIENT_BRIGHTNESS_PER_INTENSITY,
        },
    }
}

/// Shadow-map resolution for every point light in the scene.
pub fn rig_shadow_map() -> PointLightShadowMap {
    PointLightShadowMap {
        size: SHADOW_CAMERA.map_size.max_element() as usize,
    }
}

pub(crate) fn spawn_point_light(commands: &mut Commands, instance: LightInstance) -> Entity {
    let entity = commands.spawn_empty()
        .insert(instance.point_light)
        .insert(instance.transform)
        .insert(instance.shadow)
        .insert(instance.falloff)
        .insert(instance.definition.role)
        .insert(Name::new(instance.definition.name))
        .insert(RigLight)
        .insert(InheritedVisibility::default())
        .id();

    entity
}

pub(crate) fn spawn_light_rig(mut commands: Commands) {
    commands.insert_resource(build_ambient().light);

    for instance in build_lights() {
        let name = instance.name();
        let role = instance.definition.role;
        let position = instance.transform.translation;
        spawn_point_light(&mut commands, instance);
        info!("added {} light {} at {:?}", role.label(), name, position);
    }
}
