pub mod light_spawning;
pub mod placeholder;
pub mod scene_spawning;
pub mod transformation;
