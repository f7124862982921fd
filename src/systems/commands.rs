use std::str::FromStr;
use std::sync::Mutex;
use bevy::prelude::*;
use lazy_static::lazy_static;
use crate::core::components::MainCamera;
use crate::core::viewer_context::ViewerContext;
use crate::core::viewer_error::ViewerError;
use crate::serialization::config::ViewerConfig;
use crate::systems::camera::OrbitController;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl StepDirection {
    pub const ALL: [StepDirection; 4] = [
        StepDirection::Forward,
        StepDirection::Backward,
        StepDirection::Left,
        StepDirection::Right,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StepDirection::Forward => "forward",
            StepDirection::Backward => "backward",
            StepDirection::Left => "left",
            StepDirection::Right => "right",
        }
    }

    /// Unit offset on the ground plane; forward is toward -Z.
    pub fn offset(&self) -> Vec3 {
        match self {
            StepDirection::Forward => Vec3::NEG_Z,
            StepDirection::Backward => Vec3::Z,
            StepDirection::Left => Vec3::NEG_X,
            StepDirection::Right => Vec3::X,
        }
    }
}

impl FromStr for StepDirection {
    type Err = ViewerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        StepDirection::ALL
            .into_iter()
            .find(|direction| direction.label() == value)
            .ok_or_else(|| ViewerError::UnknownDirection(value.to_string()))
    }
}

/// Requests coming from the keyboard, the panel, or the hosting page.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    ResetCamera,
    StepCharacter(StepDirection),
}

lazy_static! {
    static ref QUEUED_COMMANDS: Mutex<Vec<ViewerCommand>> = Mutex::new(Vec::new());
}

/// Queues a command from outside the ECS; it becomes an event on the next frame.
pub fn queue_command(command: ViewerCommand) {
    if let Ok(mut queue) = QUEUED_COMMANDS.lock() {
        queue.push(command);
    }
}

pub fn take_queued_commands() -> Vec<ViewerCommand> {
    QUEUED_COMMANDS
        .lock()
        .map(|mut queue| std::mem::take(&mut *queue))
        .unwrap_or_default()
}

/// Moves the character one step. Returns the new position, or `None` when there
/// is no character to move.
pub fn step_character(transform: Option<&mut Transform>, direction: StepDirection, step: f32) -> Option<Vec3> {
    let transform = transform?;
    transform.translation += direction.offset() * step;
    Some(transform.translation)
}

pub(crate) fn drain_queued_commands(mut writer: EventWriter<ViewerCommand>) {
    for command in take_queued_commands() {
        writer.send(command);
    }
}

pub(crate) fn apply_viewer_commands(
    mut events: EventReader<ViewerCommand>,
    context: Res<ViewerContext>,
    config: Res<ViewerConfig>,
    mut cameras: Query<(&mut OrbitController, &mut Transform), With<MainCamera>>,
    mut models: Query<&mut Transform, Without<MainCamera>>,
) {
    for command in events.read() {
        match command {
            ViewerCommand::ResetCamera => {
                match context.camera.and_then(|entity| cameras.get_mut(entity).ok()) {
                    Some((mut controller, mut transform)) => controller.reset(&mut transform),
                    None => debug!("no camera to reset"),
                }
            }
            ViewerCommand::StepCharacter(direction) => {
                let mut character = context.character.and_then(|entity| models.get_mut(entity).ok());
                match step_character(character.as_deref_mut(), *direction, config.character_step) {
                    Some(position) => info!("character moved {} to {:?}", direction.label(), position),
                    None => debug!("no character loaded; ignoring step {}", direction.label()),
                }
            }
        }
    }
}
