//! Entry points for the hosting page. Both only queue work; the app applies it
//! on its next frame.

use bevy::log::warn;
use wasm_bindgen::prelude::*;
use crate::systems::commands::{queue_command, StepDirection, ViewerCommand};

#[wasm_bindgen(js_name = resetCamera)]
pub fn reset_camera() {
    queue_command(ViewerCommand::ResetCamera);
}

#[wasm_bindgen(js_name = moveCharacter)]
pub fn move_character(direction: &str) {
    match direction.parse::<StepDirection>() {
        Ok(direction) => queue_command(ViewerCommand::StepCharacter(direction)),
        Err(error) => warn!("{}", error),
    }
}
