pub mod bounds;
pub mod components;
pub mod fit_spec;
pub mod light_definition;
pub mod viewer_context;
pub mod viewer_error;
pub mod viewer_plugin;
