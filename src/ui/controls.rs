use eframe::egui;

use crate::app::events::AppEvent;
use crate::model::display::{
    aperture_hint, format_aperture, format_shutter_speed, format_white_balance, iso_hint,
    shutter_hint, white_balance_hint, white_balance_label,
};
use crate::model::settings::{
    CameraSettings, APERTURE_MAX, APERTURE_MIN, ISO_MAX, ISO_MIN, SHUTTER_MAX, SHUTTER_MIN,
    WHITE_BALANCE_MAX, WHITE_BALANCE_MIN,
};

const HINT_COLOR: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);

/// One slider block per exposure parameter. Sliders edit a local copy;
/// any change is reported as an event so the reducer owns the state.
/// Clamping is off: a preset value outside the slider range must survive
/// rendering unchanged until the user actually drags.
pub fn settings_panel(ui: &mut egui::Ui, settings: &CameraSettings, events: &mut Vec<AppEvent>) {
    ui.heading("Camera settings");
    ui.add_space(8.0);

    let mut iso = settings.iso;
    slider_block(
        ui,
        "ISO sensitivity",
        &iso.to_string(),
        iso_hint(iso),
        ("100", "6400"),
        |ui| {
            ui.add(
                egui::Slider::new(&mut iso, ISO_MIN..=ISO_MAX)
                    .clamping(egui::SliderClamping::Never)
                    .step_by(100.0)
                    .show_value(false),
            )
        },
    );
    if iso != settings.iso {
        events.push(AppEvent::SetIso(iso));
    }

    let mut aperture = settings.aperture;
    slider_block(
        ui,
        "Aperture",
        &format_aperture(aperture),
        aperture_hint(aperture),
        ("f/1.4", "f/16"),
        |ui| {
            ui.add(
                egui::Slider::new(&mut aperture, APERTURE_MIN..=APERTURE_MAX)
                    .clamping(egui::SliderClamping::Never)
                    .step_by(0.1)
                    .show_value(false),
            )
        },
    );
    if aperture != settings.aperture {
        events.push(AppEvent::SetAperture(aperture));
    }

    let mut shutter_speed = settings.shutter_speed;
    slider_block(
        ui,
        "Shutter speed",
        &format_shutter_speed(shutter_speed),
        shutter_hint(shutter_speed),
        ("1/125", "2\""),
        |ui| {
            ui.add(
                egui::Slider::new(&mut shutter_speed, SHUTTER_MIN..=SHUTTER_MAX)
                    .clamping(egui::SliderClamping::Never)
                    .step_by(0.001)
                    .show_value(false),
            )
        },
    );
    if shutter_speed != settings.shutter_speed {
        events.push(AppEvent::SetShutterSpeed(shutter_speed));
    }

    let mut white_balance = settings.white_balance;
    let wb_hint = format!(
        "{} - {}",
        white_balance_label(white_balance),
        white_balance_hint(white_balance)
    );
    slider_block(
        ui,
        "White balance",
        &format_white_balance(white_balance),
        &wb_hint,
        ("2500K", "8000K"),
        |ui| {
            ui.add(
                egui::Slider::new(&mut white_balance, WHITE_BALANCE_MIN..=WHITE_BALANCE_MAX)
                    .clamping(egui::SliderClamping::Never)
                    .step_by(100.0)
                    .show_value(false),
            )
        },
    );
    if white_balance != settings.white_balance {
        events.push(AppEvent::SetWhiteBalance(white_balance));
    }
}

fn slider_block(
    ui: &mut egui::Ui,
    name: &str,
    value_text: &str,
    hint: &str,
    bounds: (&str, &str),
    add_slider: impl FnOnce(&mut egui::Ui) -> egui::Response,
) {
    ui.horizontal(|ui| {
        ui.label(name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.monospace(egui::RichText::new(value_text).strong());
        });
    });
    ui.spacing_mut().slider_width = ui.available_width();
    add_slider(ui);
    ui.horizontal(|ui| {
        ui.small(bounds.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.small(bounds.1);
        });
    });
    ui.label(
        egui::RichText::new(format!("Effect: {hint}"))
            .small()
            .color(HINT_COLOR),
    );
    ui.add_space(12.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::presets::PRESETS;

    fn render_panel(settings: &CameraSettings) -> Vec<AppEvent> {
        let ctx = egui::Context::default();
        let mut events = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                settings_panel(ui, settings, &mut events);
            });
        });
        events
    }

    #[test]
    fn rendering_in_domain_settings_emits_no_events() {
        assert_eq!(render_panel(&CameraSettings::default()), Vec::new());
    }

    #[test]
    fn sport_preset_shutter_speed_survives_rendering() {
        // Sport's 1/1000s sits below the slider minimum; showing the panel
        // must not rewrite it into the slider range.
        let events = render_panel(&PRESETS[2].settings);
        assert_eq!(events, Vec::new());
    }
}
