use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::render_resource::Face;

struct PlaceholderPiece {
    name: &'static str,
    mesh: Mesh,
    material: StandardMaterial,
    translation: Vec3,
    casts_shadow: bool,
}

fn matte(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    }
}

fn placeholder_pieces() -> Vec<PlaceholderPiece> {
    vec![
        PlaceholderPiece {
            name: "Room",
            mesh: Mesh::from(Cuboid::new(10.0, 6.0, 8.0)),
            material: StandardMaterial {
                alpha_mode: AlphaMode::Blend,
                cull_mode: Some(Face::Front),
                ..matte(Color::srgba(245.0 / 255.0, 245.0 / 255.0, 220.0 / 255.0, 0.1))
            },
            translation: Vec3::ZERO,
            casts_shadow: false,
        },
        PlaceholderPiece {
            name: "Floor",
            mesh: Mesh::from(Plane3d::default().mesh().size(10.0, 8.0)),
            material: StandardMaterial {
                double_sided: true,
                cull_mode: None,
                ..matte(Color::srgb_u8(0x8b, 0x73, 0x55))
            },
            translation: Vec3::new(0.0, -3.0, 0.0),
            casts_shadow: false,
        },
        PlaceholderPiece {
            name: "Bookshelf",
            mesh: Mesh::from(Cuboid::new(2.0, 4.0, 0.3)),
            material: matte(Color::srgb_u8(0x4a, 0x4a, 0x4a)),
            translation: Vec3::new(3.0, 0.0, -3.0),
            casts_shadow: true,
        },
        PlaceholderPiece {
            name: "Vase",
            mesh: Mesh::from(ConicalFrustum {
                radius_top: 0.2,
                radius_bottom: 0.3,
                height: 0.8,
            }),
            material: matte(Color::srgb_u8(0x8b, 0x45, 0x13)),
            translation: Vec3::new(-2.0, -1.0, -2.0),
            casts_shadow: true,
        },
        PlaceholderPiece {
            name: "Plant",
            mesh: Sphere::new(0.5).mesh().uv(8, 6),
            material: matte(Color::srgb_u8(0x22, 0x8b, 0x22)),
            translation: Vec3::new(-2.0, -0.5, -2.0),
            casts_shadow: true,
        },
    ]
}

/// Stand-in room used when the background asset cannot be loaded. Returns the
/// group entity; its children carry the meshes.
pub fn spawn_placeholder_room(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    let group = commands.spawn_empty()
        .insert(Transform::default())
        .insert(Visibility::Hidden)
        .insert(Name::new("PlaceholderRoom"))
        .id();

    for piece in placeholder_pieces() {
        let mesh = meshes.add(piece.mesh);
        let material = materials.add(piece.material);

        let child = commands.spawn_empty()
            .insert(Mesh3d(mesh))
            .insert(MeshMaterial3d(material))
            .insert(Transform::from_translation(piece.translation))
            .insert(Name::new(piece.name))
            .id();

        if !piece.casts_shadow {
            commands.entity(child).insert(NotShadowCaster);
        }
        commands.entity(child).set_parent(group);
    }

    group
}
