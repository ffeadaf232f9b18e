use serde::Serialize;

use crate::model::settings::CameraSettings;

pub const BRIGHTNESS_MIN: f32 = 0.3;
pub const BRIGHTNESS_MAX: f32 = 2.0;
pub const UNDEREXPOSED_BELOW: f32 = 0.5;
pub const OVEREXPOSED_ABOVE: f32 = 1.5;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Exposure {
    Underexposed,
    Normal,
    Overexposed,
}

impl Exposure {
    fn classify(brightness: f32) -> Self {
        if brightness < UNDEREXPOSED_BELOW {
            Self::Underexposed
        } else if brightness > OVEREXPOSED_ABOVE {
            Self::Overexposed
        } else {
            Self::Normal
        }
    }
}

/// Tint applied to the preview for a given color temperature. A zeroed
/// value (boost 1.0) is neutral daylight.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ColorCast {
    pub sepia: f32,
    pub hue_shift_deg: f32,
    pub brightness_boost: f32,
}

impl ColorCast {
    pub const NEUTRAL: Self = Self {
        sepia: 0.0,
        hue_shift_deg: 0.0,
        brightness_boost: 1.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    fn from_kelvin(white_balance: u32) -> Self {
        if white_balance <= 3000 {
            Self {
                sepia: 0.3,
                hue_shift_deg: -10.0,
                brightness_boost: 1.0,
            }
        } else if white_balance <= 4000 {
            Self {
                sepia: 0.1,
                hue_shift_deg: -5.0,
                brightness_boost: 1.0,
            }
        } else if white_balance <= 5500 {
            Self::NEUTRAL
        } else if white_balance <= 6500 {
            Self {
                sepia: 0.0,
                hue_shift_deg: 5.0,
                brightness_boost: 1.05,
            }
        } else {
            Self {
                sepia: 0.0,
                hue_shift_deg: 15.0,
                brightness_boost: 1.1,
            }
        }
    }
}

/// Everything the preview needs, derived from one settings snapshot.
/// Recomputed on every change, never stored.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct VisualParams {
    pub noise_level: f32,
    pub brightness: f32,
    pub blur_amount: f32,
    pub motion_blur: f32,
    pub color_cast: ColorCast,
    pub exposure: Exposure,
}

impl VisualParams {
    pub fn from_settings(settings: &CameraSettings) -> Self {
        let brightness = brightness(settings);
        Self {
            noise_level: noise_level(settings.iso),
            brightness,
            blur_amount: blur_amount(settings.aperture),
            motion_blur: motion_blur(settings.shutter_speed),
            color_cast: ColorCast::from_kelvin(settings.white_balance),
            exposure: Exposure::classify(brightness),
        }
    }
}

/// Piecewise linear in ISO: clean up to 400, ramps to 0.3 at 1600, then to
/// 1.0 at 6400.
fn noise_level(iso: u32) -> f32 {
    if iso <= 400 {
        0.0
    } else if iso <= 1600 {
        (iso - 400) as f32 / 1200.0 * 0.3
    } else {
        0.3 + (iso - 1600) as f32 / 4800.0 * 0.7
    }
}

/// Simplified exposure product of the three triangle factors, clamped so
/// the preview never goes fully black or blown out.
fn brightness(settings: &CameraSettings) -> f32 {
    let iso_factor = settings.iso as f32 / 400.0;
    let aperture_factor = 1.0 / (settings.aperture * settings.aperture);
    let shutter_factor = settings.shutter_speed * 10.0;
    (iso_factor * aperture_factor * shutter_factor).clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX)
}

/// Depth-of-field stand-in: wider apertures (lower f-numbers) blur more;
/// f/4 and narrower render sharp.
fn blur_amount(aperture: f32) -> f32 {
    ((4.0 - aperture) / 4.0).max(0.0)
}

fn motion_blur(shutter_speed: f32) -> f32 {
    ((shutter_speed - 0.02) / 0.3).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(iso: u32, aperture: f32, shutter_speed: f32, white_balance: u32) -> CameraSettings {
        CameraSettings {
            iso,
            aperture,
            shutter_speed,
            white_balance,
        }
    }

    #[test]
    fn low_iso_produces_no_noise() {
        for iso in [100, 200, 400] {
            assert_eq!(noise_level(iso), 0.0, "iso {iso}");
        }
    }

    #[test]
    fn mid_iso_noise_ramps_to_point_three() {
        assert!((noise_level(1000) - 0.15).abs() < 1e-6);
        assert!((noise_level(1600) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn high_iso_noise_is_increasing_and_bounded() {
        let mut last = 0.3;
        for iso in (1700..=6400).step_by(100) {
            let noise = noise_level(iso);
            assert!(noise > last, "iso {iso}");
            assert!(noise <= 1.0);
            last = noise;
        }
        assert!((noise_level(6400) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn brightness_stays_clamped_at_domain_extremes() {
        let dark = settings(100, 16.0, 0.008, 5500);
        let bright = settings(6400, 1.4, 2.0, 5500);
        assert_eq!(brightness(&dark), BRIGHTNESS_MIN);
        assert_eq!(brightness(&bright), BRIGHTNESS_MAX);
    }

    #[test]
    fn blur_is_zero_from_f4_and_decreases_as_aperture_narrows() {
        assert_eq!(blur_amount(4.0), 0.0);
        assert_eq!(blur_amount(16.0), 0.0);
        assert!(blur_amount(1.4) > blur_amount(2.8));
        assert!(blur_amount(2.8) > blur_amount(3.9));
    }

    #[test]
    fn motion_blur_clamps_at_both_ends() {
        assert_eq!(motion_blur(0.008), 0.0);
        assert_eq!(motion_blur(0.02), 0.0);
        assert!((motion_blur(0.32) - 1.0).abs() < 1e-6);
        assert_eq!(motion_blur(2.0), 1.0);
        assert!((motion_blur(0.17) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn color_cast_bands_match_kelvin_ranges() {
        let warm = ColorCast::from_kelvin(2800);
        assert_eq!(warm.sepia, 0.3);
        assert_eq!(warm.hue_shift_deg, -10.0);

        let mild = ColorCast::from_kelvin(3500);
        assert_eq!(mild.sepia, 0.1);

        assert!(ColorCast::from_kelvin(4500).is_neutral());
        assert!(ColorCast::from_kelvin(5500).is_neutral());

        let cool = ColorCast::from_kelvin(6000);
        assert_eq!(cool.hue_shift_deg, 5.0);
        assert!((cool.brightness_boost - 1.05).abs() < 1e-6);

        let shade = ColorCast::from_kelvin(8000);
        assert_eq!(shade.hue_shift_deg, 15.0);
        assert!((shade.brightness_boost - 1.1).abs() < 1e-6);
    }

    #[test]
    fn midday_f5_6_at_one_fiftieth_is_underexposed() {
        // (400/400) * (1/5.6^2) * (0.02*10) ~= 0.0064, clamped up to 0.3.
        let params = VisualParams::from_settings(&settings(400, 5.6, 0.02, 5500));
        assert_eq!(params.noise_level, 0.0);
        assert_eq!(params.brightness, BRIGHTNESS_MIN);
        assert_eq!(params.exposure, Exposure::Underexposed);
        assert!(params.color_cast.is_neutral());
    }

    #[test]
    fn two_second_exposure_maxes_motion_blur() {
        let params = VisualParams::from_settings(&settings(400, 5.6, 2.0, 5500));
        assert_eq!(params.motion_blur, 1.0);
    }

    #[test]
    fn exposure_classification_thresholds() {
        assert_eq!(Exposure::classify(0.49), Exposure::Underexposed);
        assert_eq!(Exposure::classify(0.5), Exposure::Normal);
        assert_eq!(Exposure::classify(1.5), Exposure::Normal);
        assert_eq!(Exposure::classify(1.51), Exposure::Overexposed);
    }
}
