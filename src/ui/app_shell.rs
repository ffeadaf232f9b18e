use eframe::egui;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::infra::config::AppConfig;
use crate::model::display::format_aperture;
use crate::model::presets::PRESETS;
use crate::ui::{controls, preview};

struct LearningTip {
    title: &'static str,
    body: &'static str,
}

const LEARNING_TIPS: [LearningTip; 4] = [
    LearningTip {
        title: "🎯 Exposure triangle",
        body: "ISO, aperture and shutter speed work together. Changing one \
               parameter affects the overall exposure.",
    },
    LearningTip {
        title: "🔍 Depth of field",
        body: "A wider aperture (f/1.4) creates more background blur. A \
               narrower aperture (f/11) keeps everything sharp.",
    },
    LearningTip {
        title: "⚡ Shutter speed",
        body: "Fast speeds freeze motion; slow speeds create panning and \
               long-exposure effects.",
    },
    LearningTip {
        title: "🌡 White balance",
        body: "Match the color temperature to your light source for natural \
               colors.",
    },
];

pub struct CameraTrainerApp {
    state: AppState,
}

impl CameraTrainerApp {
    fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for CameraTrainerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events: Vec<AppEvent> = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("📷 CameraTrainer");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak("Training mode");
                });
            });
            ui.weak("Master your camera settings");
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(6.0);
                ui.label("Presets");
                presets_row(ui, &mut events);
                ui.separator();

                ui.columns(2, |columns| {
                    controls::settings_panel(&mut columns[0], &self.state.settings, &mut events);
                    preview::preview_panel(&mut columns[1], &self.state.settings);
                });

                ui.separator();
                tips_section(ui);
            });
        });

        for event in events {
            tracing::debug!(?event, "applying event");
            self.state = self.state.apply(event);
        }
    }
}

fn presets_row(ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
    ui.horizontal_wrapped(|ui| {
        for (index, preset) in PRESETS.iter().enumerate() {
            let label = format!(
                "{}  {}\nISO {} • {}",
                preset.icon,
                preset.name,
                preset.settings.iso,
                format_aperture(preset.settings.aperture)
            );
            if ui
                .add(egui::Button::new(label).min_size(egui::vec2(130.0, 48.0)))
                .clicked()
            {
                events.push(AppEvent::ApplyPreset(index));
            }
        }
    });
}

fn tips_section(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("Learning tips")
        .default_open(true)
        .show(ui, |ui| {
            for tip in &LEARNING_TIPS {
                ui.strong(tip.title);
                ui.weak(tip.body);
                ui.add_space(4.0);
            }
        });
}

pub fn launch_window(config: &AppConfig, state: AppState) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(CameraTrainerApp::new(state)))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
