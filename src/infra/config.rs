#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "CameraTrainer".to_string(),
            window_width: 1120.0,
            window_height: 760.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_sizes_the_window() {
        let config = AppConfig::default();
        assert_eq!(config.window_title, "CameraTrainer");
        assert!(config.window_width > config.window_height);
    }
}
