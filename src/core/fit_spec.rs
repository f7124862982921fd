use std::f32::consts::PI;
use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Where a fitted object ends up once it has been re-centered on the origin.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Added to the re-centered position.
    Offset(Vec3),
    /// Replaces the re-centered position outright.
    Absolute(Vec3),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FitSpec {
    pub target_max_dimension: f32,
    pub placement: Placement,
    /// Yaw in radians, applied last.
    pub rotation_y: Option<f32>,
}

impl FitSpec {
    /// Environment framing: eight units across, nudged left and back.
    pub fn background() -> Self {
        FitSpec {
            target_max_dimension: 8.0,
            placement: Placement::Offset(Vec3::new(-1.0, 0.0, 1.0)),
            rotation_y: None,
        }
    }

    /// Character framing: one unit tall, standing in front of the fireplace.
    pub fn character() -> Self {
        FitSpec {
            target_max_dimension: 1.0,
            placement: Placement::Absolute(Vec3::new(0.6, -2.5, 1.5)),
            // 15 degrees, although the scene was described as facing the fireplace at 90.
            rotation_y: Some(PI / 12.0),
        }
    }
}
