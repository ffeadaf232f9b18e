use crate::model::settings::CameraSettings;

/// The one piece of mutable state in the application: the current settings
/// snapshot. Everything shown in the preview is derived from it on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AppState {
    pub settings: CameraSettings,
}
