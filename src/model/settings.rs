use serde::{Deserialize, Serialize};

use crate::model::error::SettingsError;

pub const ISO_MIN: u32 = 100;
pub const ISO_MAX: u32 = 6400;
pub const APERTURE_MIN: f32 = 1.4;
pub const APERTURE_MAX: f32 = 16.0;
pub const SHUTTER_MIN: f32 = 0.008;
pub const SHUTTER_MAX: f32 = 2.0;
pub const WHITE_BALANCE_MIN: u32 = 2500;
pub const WHITE_BALANCE_MAX: u32 = 8000;

/// One full exposure snapshot. Updates always replace the whole value;
/// single-field changes go through the reducer, which copies the rest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CameraSettings {
    /// Sensor sensitivity (ISO).
    pub iso: u32,
    /// F-number; lower means a wider aperture.
    pub aperture: f32,
    /// Exposure time in seconds (0.02 = 1/50s).
    pub shutter_speed: f32,
    /// Color temperature in Kelvin.
    pub white_balance: u32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            iso: 400,
            aperture: 5.6,
            shutter_speed: 0.02,
            white_balance: 5500,
        }
    }
}

impl CameraSettings {
    /// Returns a copy with every field forced into its domain. Used on the
    /// CLI path, where no slider constrains the input.
    pub fn clamped(self) -> Self {
        Self {
            iso: self.iso.clamp(ISO_MIN, ISO_MAX),
            aperture: self.aperture.clamp(APERTURE_MIN, APERTURE_MAX),
            shutter_speed: self.shutter_speed.clamp(SHUTTER_MIN, SHUTTER_MAX),
            white_balance: self.white_balance.clamp(WHITE_BALANCE_MIN, WHITE_BALANCE_MAX),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.aperture.is_finite() {
            return Err(SettingsError::NonFiniteField("aperture"));
        }
        if !self.shutter_speed.is_finite() {
            return Err(SettingsError::NonFiniteField("shutter_speed"));
        }
        if self.iso < ISO_MIN || self.iso > ISO_MAX {
            return Err(SettingsError::OutOfDomain {
                field: "iso",
                value: f64::from(self.iso),
                min: f64::from(ISO_MIN),
                max: f64::from(ISO_MAX),
            });
        }
        if self.aperture < APERTURE_MIN || self.aperture > APERTURE_MAX {
            return Err(SettingsError::OutOfDomain {
                field: "aperture",
                value: f64::from(self.aperture),
                min: f64::from(APERTURE_MIN),
                max: f64::from(APERTURE_MAX),
            });
        }
        if self.shutter_speed < SHUTTER_MIN || self.shutter_speed > SHUTTER_MAX {
            return Err(SettingsError::OutOfDomain {
                field: "shutter_speed",
                value: f64::from(self.shutter_speed),
                min: f64::from(SHUTTER_MIN),
                max: f64::from(SHUTTER_MAX),
            });
        }
        if self.white_balance < WHITE_BALANCE_MIN || self.white_balance > WHITE_BALANCE_MAX {
            return Err(SettingsError::OutOfDomain {
                field: "white_balance",
                value: f64::from(self.white_balance),
                min: f64::from(WHITE_BALANCE_MIN),
                max: f64::from(WHITE_BALANCE_MAX),
            });
        }
        Ok(())
    }
}
