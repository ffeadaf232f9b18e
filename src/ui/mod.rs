pub mod app_shell;
pub mod controls;
pub mod preview;
