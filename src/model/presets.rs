use crate::model::settings::CameraSettings;

/// A one-click configuration. Selecting a preset replaces the entire
/// settings snapshot with these values, nothing is merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub icon: &'static str,
    pub settings: CameraSettings,
}

/// The original trainer's Sport and Landscape shutter speeds sit below the
/// slider minimum; they are applied verbatim anyway.
pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "Portrait",
        icon: "\u{1F464}",
        settings: CameraSettings {
            iso: 200,
            aperture: 1.8,
            shutter_speed: 0.008,
            white_balance: 5500,
        },
    },
    Preset {
        name: "Landscape",
        icon: "\u{1F3D4}",
        settings: CameraSettings {
            iso: 100,
            aperture: 11.0,
            shutter_speed: 0.004,
            white_balance: 6500,
        },
    },
    Preset {
        name: "Sport",
        icon: "\u{26BD}",
        settings: CameraSettings {
            iso: 800,
            aperture: 2.8,
            shutter_speed: 0.001,
            white_balance: 5000,
        },
    },
    Preset {
        name: "Night",
        icon: "\u{1F319}",
        settings: CameraSettings {
            iso: 1600,
            aperture: 4.0,
            shutter_speed: 0.5,
            white_balance: 3200,
        },
    },
];
