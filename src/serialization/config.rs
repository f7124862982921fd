use std::fs;
use std::path::Path;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::core::fit_spec::FitSpec;
use crate::core::viewer_context::AssetRole;
use crate::core::viewer_error::ViewerError;

pub const DEFAULT_CONFIG_PATH: &str = "assets/viewer.ron";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Scene Viewer".to_string(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Paths relative to the asset root.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub character: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            background: "background.glb".to_string(),
            character: "2D_Girl_Glb_Full.glb".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Linear exposure multiplier.
    pub exposure: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            position: Vec3::new(2.0, 0.0, 7.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
            exposure: 1.3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_pan: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        OrbitConfig {
            damping_factor: 0.05,
            min_distance: 2.0,
            max_distance: 12.0,
            enable_pan: false,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
        }
    }
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub log_filter: String,
    pub assets: AssetPaths,
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
    pub background_fit: FitSpec,
    pub character_fit: FitSpec,
    pub character_step: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            window: WindowConfig::default(),
            log_filter: "info,wgpu=error,naga=warn".to_string(),
            assets: AssetPaths::default(),
            camera: CameraConfig::default(),
            orbit: OrbitConfig::default(),
            background_fit: FitSpec::background(),
            character_fit: FitSpec::character(),
            character_step: 0.5,
        }
    }
}

impl ViewerConfig {
    pub fn fit_for(&self, role: AssetRole) -> FitSpec {
        match role {
            AssetRole::Background => self.background_fit,
            AssetRole::Character => self.character_fit,
        }
    }

    pub fn path_for(&self, role: AssetRole) -> &str {
        match role {
            AssetRole::Background => &self.assets.background,
            AssetRole::Character => &self.assets.character,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ViewerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_ron(&contents).map_err(|source| ViewerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }
}
