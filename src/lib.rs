pub mod core;
pub mod management;
pub mod serialization;
pub mod spawning;
pub mod systems;
