use crate::model::exposure::VisualParams;

/// `2"` for whole-second exposures, `1/50` for fractional ones. Seconds
/// print untruncated, so slider values like 1.25 survive display.
pub fn format_shutter_speed(seconds: f32) -> String {
    if seconds >= 1.0 {
        format!("{seconds}\"")
    } else {
        format!("1/{}", (1.0 / seconds).round() as u32)
    }
}

pub fn format_aperture(f_number: f32) -> String {
    format!("f/{f_number}")
}

pub fn format_white_balance(kelvin: u32) -> String {
    format!("{kelvin}K")
}

/// Band names kept verbatim from the original trainer UI.
pub fn white_balance_label(kelvin: u32) -> &'static str {
    if kelvin <= 3000 {
        "Tungstène"
    } else if kelvin <= 4000 {
        "Fluorescent"
    } else if kelvin <= 5500 {
        "Daylight"
    } else if kelvin <= 6500 {
        "Flash"
    } else {
        "Ombre"
    }
}

pub fn iso_hint(iso: u32) -> &'static str {
    if iso <= 400 {
        "Clean image, very little noise"
    } else if iso <= 1600 {
        "Moderate noise, still good quality"
    } else {
        "Visible noise, for difficult light"
    }
}

pub fn aperture_hint(f_number: f32) -> &'static str {
    if f_number <= 2.8 {
        "Very blurred background, portraits"
    } else if f_number <= 8.0 {
        "Balanced depth of field"
    } else {
        "Everything sharp, landscapes"
    }
}

pub fn shutter_hint(seconds: f32) -> &'static str {
    if seconds <= 0.02 {
        "Freezes motion"
    } else if seconds <= 0.1 {
        "Slight motion blur"
    } else {
        "Panning and long-exposure effects"
    }
}

pub fn white_balance_hint(kelvin: u32) -> &'static str {
    if kelvin <= 3000 {
        "Warm, orange tones"
    } else if kelvin <= 5500 {
        "Natural light"
    } else {
        "Cool, blue tones"
    }
}

pub fn noise_verdict(params: &VisualParams) -> &'static str {
    if params.noise_level < 0.2 {
        "Low noise"
    } else if params.noise_level < 0.5 {
        "Moderate noise"
    } else {
        "Heavy noise"
    }
}

pub fn sharpness_verdict(params: &VisualParams) -> &'static str {
    if params.blur_amount < 0.3 {
        "Sharp throughout"
    } else if params.blur_amount < 0.7 {
        "Artistic blur"
    } else {
        "Strongly blurred"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::exposure::VisualParams;
    use crate::model::settings::CameraSettings;

    #[test]
    fn fractional_shutter_speeds_display_as_reciprocals() {
        assert_eq!(format_shutter_speed(0.02), "1/50");
        assert_eq!(format_shutter_speed(0.008), "1/125");
        assert_eq!(format_shutter_speed(0.5), "1/2");
    }

    #[test]
    fn whole_second_shutter_speeds_display_with_quotes() {
        assert_eq!(format_shutter_speed(2.0), "2\"");
        assert_eq!(format_shutter_speed(1.0), "1\"");
        assert_eq!(format_shutter_speed(1.5), "1.5\"");
        assert_eq!(format_shutter_speed(1.25), "1.25\"");
    }

    #[test]
    fn aperture_displays_as_f_stop() {
        assert_eq!(format_aperture(5.6), "f/5.6");
        assert_eq!(format_aperture(16.0), "f/16");
        assert_eq!(format_aperture(1.8), "f/1.8");
    }

    #[test]
    fn white_balance_labels_follow_kelvin_bands() {
        assert_eq!(white_balance_label(2800), "Tungstène");
        assert_eq!(white_balance_label(3500), "Fluorescent");
        assert_eq!(white_balance_label(5500), "Daylight");
        assert_eq!(white_balance_label(6000), "Flash");
        assert_eq!(white_balance_label(7500), "Ombre");
    }

    #[test]
    fn verdicts_follow_derived_bands() {
        let sharp = VisualParams::from_settings(&CameraSettings {
            iso: 100,
            aperture: 11.0,
            ..CameraSettings::default()
        });
        assert_eq!(noise_verdict(&sharp), "Low noise");
        assert_eq!(sharpness_verdict(&sharp), "Sharp throughout");

        let noisy = VisualParams::from_settings(&CameraSettings {
            iso: 6400,
            aperture: 1.4,
            ..CameraSettings::default()
        });
        assert_eq!(noise_verdict(&noisy), "Heavy noise");
        assert_eq!(sharpness_verdict(&noisy), "Artistic blur");
    }
}
