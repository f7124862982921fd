use bevy::prelude::*;
use scene_viewer::core::light_definition::{color_from_hex, LightRole, SHADOW_CAMERA};
use scene_viewer::spawning::light_spawning::{
    build_ambient, build_lights, rig_shadow_map, AMBIENT_BRIGHTNESS_PER_INTENSITY, LUMENS_PER_INTENSITY,
};

const EXPECTED: [(&str, u32, f32); 5] = [
    ("KeyLight", 0xFFFFFF, 3.0),
    ("FillLight", 0xFFFFFF, 2.5),
    ("BackLight", 0xD07676, 1.2),
    ("RimLight", 0xBAA1A1, 1.0),
    ("KickerLight", 0xFFFFFF, 0.8),
];

#[test]
fn rig_has_five_named_lights() {
    let lights = build_lights();
    assert_eq!(lights.len(), 5);

    for (instance, (name, color, intensity)) in lights.iter().zip(EXPECTED) {
        assert_eq!(instance.name(), name);
        assert_eq!(instance.definition.color, color);
        assert_eq!(instance.definition.intensity, intensity);
        assert_eq!(instance.point_light.color, color_from_hex(color));
        assert_eq!(instance.point_light.intensity, intensity * LUMENS_PER_INTENSITY);
    }
}

#[test]
fn every_light_casts_configured_shadows() {
    for instance in build_lights() {
        assert!(instance.point_light.shadows_enabled);
        assert_eq!(instance.point_light.shadow_map_near_z, 0.1);
        assert_eq!(instance.point_light.range, 1000.0);
        assert_eq!(instance.shadow, SHADOW_CAMERA);
        assert_eq!(instance.shadow.map_size, UVec2::new(1024, 1024));
        assert_eq!(instance.shadow.fov_degrees, 120.0);
        assert_eq!(instance.transform.translation, instance.definition.position);
    }
    assert_eq!(rig_shadow_map().size, 1024);
}

#[test]
fn construction_is_deterministic() {
    let first = build_lights();
    let second = build_lights();

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.definition, b.definition);
        assert_eq!(a.point_light.color, b.point_light.color);
        assert_eq!(a.point_light.intensity, b.point_light.intensity);
        assert_eq!(a.transform, b.transform);
        assert_eq!(a.falloff, b.falloff);
    }
}

#[test]
fn ambient_is_fixed() {
    let first = build_ambient();
    let second = build_ambient();

    assert_eq!(first.definition.color, 0x404040);
    assert_eq!(first.definition.intensity, 0.8);
    assert_eq!(first.light.color, color_from_hex(0x404040));
    assert_eq!(first.light.brightness, 0.8 * AMBIENT_BRIGHTNESS_PER_INTENSITY);
    assert_eq!(first.light.color, second.light.color);
    assert_eq!(first.light.brightness, second.light.brightness);
}

#[test]
fn roles_follow_the_rig_order() {
    let roles: Vec<LightRole> = build_lights().iter().map(|instance| instance.definition.role).collect();
    assert_eq!(
        roles,
        vec![LightRole::Key, LightRole::Fill, LightRole::Back, LightRole::Rim, LightRole::Kicker]
    );
    assert_eq!(LightRole::Kicker.label(), "kicker");
}
