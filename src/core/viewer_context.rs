use bevy::prelude::*;

/// Whether the background on screen came from disk or was built procedurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AssetSource {
    Loaded,
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct PlacedBackground {
    pub entity: Entity,
    pub source: AssetSource,
}

/// Everything the viewer's commands need to reach: the camera and whichever
/// models made it into the scene.
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct ViewerContext {
    pub camera: Option<Entity>,
    pub background: Option<PlacedBackground>,
    pub character: Option<Entity>,
}

impl ViewerContext {
    pub fn has_character(&self) -> bool {
        self.character.is_some()
    }

    pub fn clear(&mut self) {
        *self = ViewerContext::default();
    }
}

/// Which of the two viewer assets a load or placement refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum AssetRole {
    Background,
    Character,
}

impl AssetRole {
    pub fn label(&self) -> &'static str {
        match self {
            AssetRole::Background => "background",
            AssetRole::Character => "character",
        }
    }
}
