use bevy::prelude::*;

/// Where a light sits in the rig; carried on the spawned light entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum LightRole {
    Key,
    Fill,
    Back,
    Rim,
    Kicker,
}

impl LightRole {
    pub fn label(&self) -> &'static str {
        match self {
            LightRole::Key => "key",
            LightRole::Fill => "fill",
            LightRole::Back => "back",
            LightRole::Rim => "rim",
            LightRole::Kicker => "kicker",
        }
    }
}

/// One row of the studio rig. Colors are packed `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub role: LightRole,
    pub position: Vec3,
    pub color: u32,
    pub intensity: f32,
    /// Zero means unbounded.
    pub range: f32,
    pub decay: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientDefinition {
    pub color: u32,
    pub intensity: f32,
}

/// Shadow map and shadow camera parameters shared by every rig light.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ShadowCameraSettings {
    pub map_size: UVec2,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub focus: f32,
}

pub const SHADOW_CAMERA: ShadowCameraSettings = ShadowCameraSettings {
    map_size: UVec2::new(1024, 1024),
    fov_degrees: 120.0,
    aspect: 1.0,
    near: 0.1,
    far: 1000.0,
    focus: 5.0,
};

pub static LIGHT_RIG: [LightDefinition; 5] = [
    LightDefinition {
        id: "c83c02a7-d553-4aa3-a477-4cb6a17f9ec4",
        name: "KeyLight",
        role: LightRole::Key,
        position: Vec3::new(0.6, 0.4, 0.3),
        color: 0xFFFFFF,
        intensity: 3.0,
        range: 0.0,
        decay: 1.0,
    },
    LightDefinition {
        id: "a716519d-2ba3-4a4b-8c74-78d0dff76c74",
        name: "FillLight",
        role: LightRole::Fill,
        position: Vec3::new(-0.6, 0.3, 0.4),
        color: 0xFFFFFF,
        intensity: 2.5,
        range: 0.0,
        decay: 1.0,
    },
    LightDefinition {
        id: "0aa5c0f7-4f82-4bba-963a-ed26c152eefd",
        name: "BackLight",
        role: LightRole::Back,
        position: Vec3::new(0.6, 0.5, 2.5),
        color: 0xD07676,
        intensity: 1.2,
        range: 0.0,
        decay: 1.2,
    },
    LightDefinition {
        id: "rim-light-1",
        name: "RimLight",
        role: LightRole::Rim,
        position: Vec3::new(1.2, 0.3, 0.8),
        color: 0xBAA1A1,
        intensity: 1.0,
        range: 0.0,
        decay: 1.2,
    },
    LightDefinition {
        id: "kicker-light",
        name: "KickerLight",
        role: LightRole::Kicker,
        position: Vec3::new(0.0, 0.8, 1.0),
        color: 0xFFFFFF,
        intensity: 0.8,
        range: 0.0,
        decay: 1.2,
    },
];

pub static AMBIENT: AmbientDefinition = AmbientDefinition {
    color: 0x404040,
    intensity: 0.8,
};

pub fn color_from_hex(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        assert_eq!(color_from_hex(0xD07676), Color::srgb_u8(0xD0, 0x76, 0x76));
        assert_eq!(color_from_hex(0xFFFFFF), Color::srgb_u8(255, 255, 255));
    }

    #[test]
    fn rig_names_are_unique() {
        for (i, a) in LIGHT_RIG.iter().enumerate() {
            for b in LIGHT_RIG.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
                assert_ne!(a.id, b.id);
            }
        }
    }
}
