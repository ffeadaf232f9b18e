use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    NonFiniteField(&'static str),
    OutOfDomain {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteField(name) => write!(f, "setting {name} must be finite"),
            Self::OutOfDomain {
                field,
                value,
                min,
                max,
            } => write!(f, "setting {field} = {value} is outside [{min}, {max}]"),
        }
    }
}

impl std::error::Error for SettingsError {}
