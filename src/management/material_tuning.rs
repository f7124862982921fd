use bevy::image::{ImageAddressMode, ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::utils::HashSet;
use crate::core::viewer_context::AssetSource;
use crate::management::asset_loading::AssetPlaced;

pub const MAX_ANISOTROPY: u16 = 16;
pub const ALPHA_CUTOFF: f32 = 0.1;

/// Blended materials become alpha-tested and double sided so they sort and
/// shadow like the opaque parts of the model. Returns whether anything changed.
pub fn tune_material(material: &mut StandardMaterial) -> bool {
    if !matches!(material.alpha_mode, AlphaMode::Blend) {
        return false;
    }

    material.alpha_mode = AlphaMode::Mask(ALPHA_CUTOFF);
    material.double_sided = true;
    material.cull_mode = None;
    true
}

/// Anisotropic filtering needs linear filtering on every axis.
pub fn anisotropic_sampler(sampler: &ImageSampler) -> ImageSampler {
    let mut descriptor = match sampler {
        ImageSampler::Descriptor(descriptor) => descriptor.clone(),
        ImageSampler::Default => ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::Repeat,
            address_mode_v: ImageAddressMode::Repeat,
            ..ImageSamplerDescriptor::linear()
        },
    };

    descriptor.mag_filter = ImageFilterMode::Linear;
    descriptor.min_filter = ImageFilterMode::Linear;
    descriptor.mipmap_filter = ImageFilterMode::Linear;
    descriptor.anisotropy_clamp = MAX_ANISOTROPY;

    ImageSampler::Descriptor(descriptor)
}

/// Base color textures of placed models that had not arrived yet when their
/// materials were tuned.
#[derive(Resource, Default, Debug)]
pub struct UntunedTextures(pub HashSet<AssetId<Image>>);

pub(crate) fn tune_placed_materials(
    mut events: EventReader<AssetPlaced>,
    children: Query<&Children>,
    material_handles: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut untuned: ResMut<UntunedTextures>,
) {
    for event in events.read() {
        if event.source != AssetSource::Loaded {
            continue;
        }

        let mut blended = 0;
        let mut textured = 0;
        let entities = std::iter::once(event.entity).chain(children.iter_descendants(event.entity));

        for entity in entities {
            let Ok(handle) = material_handles.get(entity) else { continue };
            let Some(material) = materials.get_mut(&handle.0) else { continue };

            if tune_material(material) {
                blended += 1;
            }

            if let Some(texture) = material.base_color_texture.clone() {
                match images.get_mut(&texture) {
                    Some(image) => {
                        image.sampler = anisotropic_sampler(&image.sampler);
                        textured += 1;
                    }
                    None => {
                        untuned.0.insert(texture.id());
                    }
                }
            }
        }

        debug!(
            "tuned {} materials: {} switched to alpha mask, {} textures filtered",
            event.role.label(),
            blended,
            textured
        );
    }
}

pub(crate) fn tune_arriving_textures(
    mut events: EventReader<AssetEvent<Image>>,
    mut images: ResMut<Assets<Image>>,
    mut untuned: ResMut<UntunedTextures>,
) {
    for event in events.read() {
        let (AssetEvent::Added { id } | AssetEvent::LoadedWithDependencies { id }) = event else { continue };
        if !untuned.0.remove(id) {
            continue;
        }
        if let Some(image) = images.get_mut(*id) {
            image.sampler = anisotropic_sampler(&image.sampler);
            debug!("filtered late texture {:?}", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetPlugin;
    use crate::core::viewer_context::AssetRole;

    fn tuning_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Image>()
            .init_asset::<StandardMaterial>()
            .init_resource::<UntunedTextures>()
            .add_event::<AssetPlaced>()
            .add_systems(Update, (tune_placed_materials, tune_arriving_textures).chain());
        app
    }

    fn anisotropy_of(app: &App, texture: &Handle<Image>) -> Option<u16> {
        let image = app.world().resource::<Assets<Image>>().get(texture)?;
        match &image.sampler {
            ImageSampler::Descriptor(descriptor) => Some(descriptor.anisotropy_clamp),
            ImageSampler::Default => Some(1),
        }
    }

    fn place_textured_model(app: &mut App, texture: Handle<Image>, source: AssetSource) -> Entity {
        let material = app.world_mut().resource_mut::<Assets<StandardMaterial>>().add(StandardMaterial {
            base_color_texture: Some(texture),
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        let entity = app.world_mut().spawn(MeshMaterial3d(material)).id();
        app.world_mut().send_event(AssetPlaced {
            entity,
            role: AssetRole::Character,
            source,
        });
        entity
    }

    #[test]
    fn texture_present_at_placement_is_filtered() {
        let mut app = tuning_app();
        let texture = app.world_mut().resource_mut::<Assets<Image>>().add(Image::default());
        place_textured_model(&mut app, texture.clone(), AssetSource::Loaded);

        app.update();

        assert_eq!(anisotropy_of(&app, &texture), Some(MAX_ANISOTROPY));
        assert!(app.world().resource::<UntunedTextures>().0.is_empty());
    }

    #[test]
    fn texture_arriving_after_placement_is_filtered() {
        let mut app = tuning_app();
        let texture = app.world().resource::<Assets<Image>>().reserve_handle();
        place_textured_model(&mut app, texture.clone(), AssetSource::Loaded);

        app.update();
        assert_eq!(anisotropy_of(&app, &texture), None);
        assert!(app.world().resource::<UntunedTextures>().0.contains(&texture.id()));

        app.world_mut().resource_mut::<Assets<Image>>().insert(&texture, Image::default());
        app.update();
        app.update();

        assert_eq!(anisotropy_of(&app, &texture), Some(MAX_ANISOTROPY));
        assert!(app.world().resource::<UntunedTextures>().0.is_empty());
    }

    #[test]
    fn placeholder_materials_are_untouched() {
        let mut app = tuning_app();
        let texture = app.world_mut().resource_mut::<Assets<Image>>().add(Image::default());
        let entity = place_textured_model(&mut app, texture.clone(), AssetSource::Placeholder);

        app.update();

        assert_eq!(anisotropy_of(&app, &texture), Some(1));
        let handle = app.world().get::<MeshMaterial3d<StandardMaterial>>(entity).unwrap().0.clone();
        let materials = app.world().resource::<Assets<StandardMaterial>>();
        assert_eq!(materials.get(&handle).unwrap().alpha_mode, AlphaMode::Blend);
    }

    #[test]
    fn blend_becomes_mask() {
        let mut material = StandardMaterial {
            alpha_mode: AlphaMode::Blend,
            ..default()
        };
        assert!(tune_material(&mut material));
        assert_eq!(material.alpha_mode, AlphaMode::Mask(ALPHA_CUTOFF));
        assert!(material.double_sided);
        assert_eq!(material.cull_mode, None);
    }

    #[test]
    fn opaque_is_left_alone() {
        let mut material = StandardMaterial::default();
        assert!(!tune_material(&mut material));
        assert_eq!(material.alpha_mode, AlphaMode::Opaque);
        assert!(!material.double_sided);
    }

    #[test]
    fn sampler_gains_anisotropy_and_keeps_addressing() {
        let clamped = ImageSampler::Descriptor(ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::MirrorRepeat,
            ..ImageSamplerDescriptor::nearest()
        });

        let ImageSampler::Descriptor(tuned) = anisotropic_sampler(&clamped) else {
            panic!("expected an explicit descriptor");
        };
        assert_eq!(tuned.anisotropy_clamp, MAX_ANISOTROPY);
        assert!(matches!(tuned.address_mode_u, ImageAddressMode::MirrorRepeat), "{:?}", tuned.address_mode_u);
        assert!(matches!(tuned.min_filter, ImageFilterMode::Linear), "{:?}", tuned.min_filter);
    }

    #[test]
    fn default_sampler_repeats() {
        let ImageSampler::Descriptor(tuned) = anisotropic_sampler(&ImageSampler::Default) else {
            panic!("expected an explicit descriptor");
        };
        assert!(matches!(tuned.address_mode_v, ImageAddressMode::Repeat), "{:?}", tuned.address_mode_v);
        assert_eq!(tuned.anisotropy_clamp, MAX_ANISOTROPY);
    }
}
