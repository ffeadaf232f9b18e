pub mod display;
pub mod error;
pub mod exposure;
pub mod presets;
pub mod settings;
