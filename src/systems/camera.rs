use std::f32::consts::{PI, TAU};
use bevy::app::{App, Plugin};
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::MouseWheel;
use bevy::pbr::ShadowFilteringMethod;
use bevy::prelude::*;
use bevy::render::view::{ColorGrading, ColorGradingGlobal};
use bevy::window::PrimaryWindow;
use crate::core::components::MainCamera;
use crate::core::viewer_context::ViewerContext;
use crate::core::viewer_plugin::ViewerSystems;
use crate::serialization::config::{CameraConfig, OrbitConfig, ViewerConfig};
use crate::systems::input::{InputStates, MouseButtonState};
use crate::systems::ui::PointerCaptured;

/// Keeps the polar angle off the poles so `look_at` has a usable up vector.
const POLAR_EPSILON: f32 = 1e-4;
const ZOOM_BASE: f32 = 0.95;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, initialize_camera_system)
            .add_systems(Update, (camera_controller_system, orbit_update_system)
                .chain()
                .in_set(ViewerSystems::Camera));
    }
}

/// Orbit controls with damped rotation: drag to orbit, wheel to dolly, optional pan.
#[derive(Component, Debug, Clone)]
pub struct OrbitController {
    pub target: Vec3,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_pan: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    home_position: Vec3,
    home_target: Vec3,
    yaw_delta: f32,
    pitch_delta: f32,
    zoom_factor: f32,
    pan_offset: Vec3,
}

impl OrbitController {
    pub fn new(camera: &CameraConfig, orbit: &OrbitConfig) -> Self {
        OrbitController {
            target: camera.target,
            damping_factor: orbit.damping_factor,
            min_distance: orbit.min_distance,
            max_distance: orbit.max_distance,
            enable_pan: orbit.enable_pan,
            rotate_speed: orbit.rotate_speed,
            zoom_speed: orbit.zoom_speed,
            home_position: camera.position,
            home_target: camera.target,
            yaw_delta: 0.0,
            pitch_delta: 0.0,
            zoom_factor: 1.0,
            pan_offset: Vec3::ZERO,
        }
    }

    /// `delta` in pixels; a drag across the full viewport height is one full turn.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        self.yaw_delta -= TAU * delta.x / height * self.rotate_speed;
        self.pitch_delta -= TAU * delta.y / height * self.rotate_speed;
    }

    /// Positive `scroll` moves toward the target.
    pub fn zoom(&mut self, scroll: f32) {
        self.zoom_factor *= ZOOM_BASE.powf(self.zoom_speed * scroll);
    }

    pub fn pan(&mut self, delta: Vec2, viewport_height: f32, transform: &Transform) {
        if !self.enable_pan {
            return;
        }
        let distance = (transform.translation - self.target).length();
        let units_per_pixel = distance / viewport_height.max(1.0);
        self.pan_offset += (transform.left() * delta.x + transform.up() * delta.y) * units_per_pixel;
    }

    /// Advances the damped motion by one frame and writes the camera transform.
    pub fn update(&mut self, transform: &mut Transform) {
        let offset = transform.translation - self.target;
        let radius = offset.length().max(f32::EPSILON);
        let mut yaw = offset.x.atan2(offset.z);
        let mut polar = (offset.y / radius).clamp(-1.0, 1.0).acos();

        yaw += self.yaw_delta * self.damping_factor;
        polar = (polar + self.pitch_delta * self.damping_factor).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        let radius = (radius * self.zoom_factor).clamp(self.min_distance, self.max_distance);
        self.target += self.pan_offset * self.damping_factor;

        let direction = Vec3::new(polar.sin() * yaw.sin(), polar.cos(), polar.sin() * yaw.cos());
        transform.translation = self.target + direction * radius;
        transform.look_at(self.target, Vec3::Y);

        let decay = 1.0 - self.damping_factor;
        self.yaw_delta *= decay;
        self.pitch_delta *= decay;
        self.pan_offset *= decay;
        self.zoom_factor = 1.0;
    }

    /// Back to the pose the camera started in, dropping any motion still in flight.
    pub fn reset(&mut self, transform: &mut Transform) {
        self.target = self.home_target;
        self.yaw_delta = 0.0;
        self.pitch_delta = 0.0;
        self.zoom_factor = 1.0;
        self.pan_offset = Vec3::ZERO;
        *transform = Transform::from_translation(self.home_position).looking_at(self.target, Vec3::Y);
    }
}

pub(crate) fn initialize_camera_system(
    mut commands: Commands,
    config: Res<ViewerConfig>,
    mut context: ResMut<ViewerContext>,
) {
    let camera = &config.camera;
    let cam_trans = Transform::from_translation(camera.position).looking_at(camera.target, Vec3::Y);

    let entity = commands.spawn_empty()
        .insert(Camera3d::default())
        .insert(Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }))
        .insert(cam_trans)
        .insert(Tonemapping::AcesFitted)
        .insert(ColorGrading {
            global: ColorGradingGlobal {
                exposure: camera.exposure.max(f32::EPSILON).log2(),
                ..default()
            },
            ..default()
        })
        .insert(ShadowFilteringMethod::Gaussian)
        .insert(Msaa::Sample4)
        .insert(OrbitController::new(camera, &config.orbit))
        .insert(Name::new("MainCamera"))
        .insert(MainCamera)
        .id();

    context.camera = Some(entity);
}

pub(crate) fn camera_controller_system(
    mut camera_query: Query<(&mut OrbitController, &Transform), With<MainCamera>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cursor_moved_events: EventReader<CursorMoved>,
    mut mouse_wheel_events: EventReader<MouseWheel>,
    input: Res<InputStates>,
    captured: Option<Res<PointerCaptured>>,
) {
    let Ok((mut controller, cam_trans)) = camera_query.get_single_mut() else { return };
    let viewport_height = windows.get_single().map(|window| window.height()).unwrap_or(1.0);

    if captured.is_some_and(|captured| captured.0) {
        cursor_moved_events.clear();
        mouse_wheel_events.clear();
        return;
    }

    for event in mouse_wheel_events.read() {
        controller.zoom(event.y);
    }

    for event in cursor_moved_events.read() {
        let Some(delta) = event.delta else { continue };

        if input.left == MouseButtonState::Held {
            controller.rotate(delta, viewport_height);
        } else if input.right == MouseButtonState::Held {
            controller.pan(delta, viewport_height, cam_trans);
        }
    }
}

fn orbit_update_system(mut camera_query: Query<(&mut OrbitController, &mut Transform)>) {
    for (mut controller, mut transform) in camera_query.iter_mut() {
        controller.update(&mut transform);
    }
}
