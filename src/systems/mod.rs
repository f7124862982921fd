pub mod camera;
pub mod commands;
pub mod input;
pub mod ui;
#[cfg(target_arch = "wasm32")]
pub mod web;
