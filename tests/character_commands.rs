use bevy::prelude::*;
use scene_viewer::systems::commands::{step_character, StepDirection};
use scene_viewer::systems::input::command_for_key;
use scene_viewer::systems::commands::ViewerCommand;

#[test]
fn forward_step_moves_exactly_half_a_unit() {
    let mut character = Transform::from_xyz(0.6, -2.5, 1.5);
    let before = character.translation;

    step_character(Some(&mut character), StepDirection::Forward, 0.5);

    assert_eq!(character.translation.z, before.z - 0.5);
    assert_eq!(character.translation.x, before.x);
    assert_eq!(character.translation.y, before.y);
}

#[test]
fn missing_character_ignores_every_direction() {
    for direction in StepDirection::ALL {
        assert_eq!(step_character(None, direction, 0.5), None);
    }
}

#[test]
fn page_strings_and_keys_map_to_the_same_commands() {
    let from_page = "forward".parse::<StepDirection>().map(ViewerCommand::StepCharacter).unwrap();
    assert_eq!(Some(from_page), command_for_key(KeyCode::ArrowUp));
}
