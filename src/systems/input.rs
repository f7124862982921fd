use bevy::app::Plugin;
use bevy::input::ButtonState;
use bevy::input::mouse::MouseButtonInput;
use bevy::prelude::*;
use crate::core::viewer_plugin::ViewerSystems;
use crate::systems::commands::{StepDirection, ViewerCommand};

pub(crate) struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<InputStates>()
            .add_systems(Update, (input_management_system, keyboard_command_system).in_set(ViewerSystems::Input));
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MouseButtonState {
    #[default]
    Unheld,
    Held,
}

/// Left drags orbit, right drags pan.
#[derive(Default, Resource)]
pub struct InputStates {
    pub left: MouseButtonState,
    pub right: MouseButtonState,
}

pub(crate) fn input_management_system(
    mut mouse_button_input_events: EventReader<MouseButtonInput>,
    mut input: ResMut<InputStates>,
) {
    for event in mouse_button_input_events.read() {
        let state = match event.state {
            ButtonState::Pressed => MouseButtonState::Held,
            ButtonState::Released => MouseButtonState::Unheld,
        };

        match event.button {
            MouseButton::Left => input.left = state,
            MouseButton::Right => input.right = state,
            _ => {}
        }
    }
}

pub fn command_for_key(key: KeyCode) -> Option<ViewerCommand> {
    let command = match key {
        KeyCode::ArrowUp | KeyCode::KeyW => ViewerCommand::StepCharacter(StepDirection::Forward),
        KeyCode::ArrowDown | KeyCode::KeyS => ViewerCommand::StepCharacter(StepDirection::Backward),
        KeyCode::ArrowLeft | KeyCode::KeyA => ViewerCommand::StepCharacter(StepDirection::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => ViewerCommand::StepCharacter(StepDirection::Right),
        KeyCode::KeyR => ViewerCommand::ResetCamera,
        _ => return None,
    };
    Some(command)
}

fn keyboard_command_system(keys: Res<ButtonInput<KeyCode>>, mut writer: EventWriter<ViewerCommand>) {
    for key in keys.get_just_pressed() {
        if let Some(command) = command_for_key(*key) {
            writer.send(command);
        }
    }
}
