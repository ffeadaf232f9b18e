use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::model::presets::PRESETS;
use crate::model::settings::CameraSettings;

impl AppState {
    /// Pure reducer: every event yields a complete replacement snapshot.
    /// A single-slider event copies the other three fields unchanged, so
    /// readers never observe a partial update. An out-of-range preset
    /// index leaves the state untouched.
    pub fn apply(&self, event: AppEvent) -> AppState {
        let settings = match event {
            AppEvent::SetIso(iso) => CameraSettings {
                iso,
                ..self.settings
            },
            AppEvent::SetAperture(aperture) => CameraSettings {
                aperture,
                ..self.settings
            },
            AppEvent::SetShutterSpeed(shutter_speed) => CameraSettings {
                shutter_speed,
                ..self.settings
            },
            AppEvent::SetWhiteBalance(white_balance) => CameraSettings {
                white_balance,
                ..self.settings
            },
            AppEvent::ApplyPreset(index) => match PRESETS.get(index) {
                Some(preset) => preset.settings,
                None => self.settings,
            },
        };
        AppState { settings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_event_replaces_only_iso() {
        let before = AppState::default();
        let after = before.apply(AppEvent::SetIso(1600));
        assert_eq!(after.settings.iso, 1600);
        assert_eq!(after.settings.aperture, before.settings.aperture);
        assert_eq!(after.settings.shutter_speed, before.settings.shutter_speed);
        assert_eq!(after.settings.white_balance, before.settings.white_balance);
    }

    #[test]
    fn preset_event_overwrites_all_four_fields() {
        let state = AppState::default()
            .apply(AppEvent::SetIso(6400))
            .apply(AppEvent::SetWhiteBalance(2500));
        let after = state.apply(AppEvent::ApplyPreset(0));
        assert_eq!(after.settings, PRESETS[0].settings);
    }

    #[test]
    fn unknown_preset_index_is_a_no_op() {
        let state = AppState::default();
        assert_eq!(state.apply(AppEvent::ApplyPreset(99)), state);
    }

    #[test]
    fn reducer_does_not_mutate_the_old_snapshot() {
        let before = AppState::default();
        let _ = before.apply(AppEvent::SetAperture(1.4));
        assert_eq!(before, AppState::default());
    }
}
