use eframe::egui::{self, Color32, Pos2, Rect};

use crate::model::display::{
    format_aperture, format_shutter_speed, format_white_balance, noise_verdict, sharpness_verdict,
};
use crate::model::exposure::{Exposure, VisualParams};
use crate::model::settings::CameraSettings;

const GRADIENT_BLUE: Color32 = Color32::from_rgb(37, 99, 235);
const GRADIENT_PURPLE: Color32 = Color32::from_rgb(147, 51, 234);
const GRADIENT_PINK: Color32 = Color32::from_rgb(219, 39, 119);
const SUBJECT_YELLOW: Color32 = Color32::from_rgb(250, 204, 21);
const BACKDROP_GREEN: Color32 = Color32::from_rgb(74, 222, 128);
const BACKDROP_RED: Color32 = Color32::from_rgb(248, 113, 113);

const GRADIENT_STRIPS: usize = 48;
const NOISE_GRID_STEP: f32 = 8.0;

/// The simulated photo plus the settings/result summary. Consumes only the
/// derived parameters; all exposure math lives in the model.
pub fn preview_panel(ui: &mut egui::Ui, settings: &CameraSettings) {
    let params = VisualParams::from_settings(settings);

    ui.horizontal(|ui| {
        ui.heading("Preview");
        exposure_badge(ui, params.exposure);
    });
    ui.add_space(8.0);

    paint_canvas(ui, &params);
    ui.add_space(10.0);

    ui.columns(2, |columns| {
        settings_summary(&mut columns[0], settings);
        result_summary(&mut columns[1], &params);
    });
}

fn exposure_badge(ui: &mut egui::Ui, exposure: Exposure) {
    let (text, fg, bg) = match exposure {
        Exposure::Underexposed => (
            "Underexposed",
            Color32::from_rgb(147, 197, 253),
            Color32::from_rgb(30, 58, 138),
        ),
        Exposure::Overexposed => (
            "Overexposed",
            Color32::from_rgb(252, 165, 165),
            Color32::from_rgb(127, 29, 29),
        ),
        Exposure::Normal => (
            "Well exposed",
            Color32::from_rgb(134, 239, 172),
            Color32::from_rgb(20, 83, 45),
        ),
    };
    ui.label(
        egui::RichText::new(format!("  {text}  "))
            .small()
            .color(fg)
            .background_color(bg),
    );
}

fn paint_canvas(ui: &mut egui::Ui, params: &VisualParams) {
    let width = ui.available_width();
    let desired = egui::vec2(width, width * 9.0 / 16.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, egui::CornerRadius::same(6), Color32::BLACK);

    // Backdrop gradient, blue through purple to pink, as vertical strips.
    let strip_width = rect.width() / GRADIENT_STRIPS as f32;
    for i in 0..GRADIENT_STRIPS {
        let t = i as f32 / (GRADIENT_STRIPS - 1) as f32;
        let base = if t < 0.5 {
            lerp_color(GRADIENT_BLUE, GRADIENT_PURPLE, t * 2.0)
        } else {
            lerp_color(GRADIENT_PURPLE, GRADIENT_PINK, (t - 0.5) * 2.0)
        };
        let x = rect.left() + strip_width * i as f32;
        let strip = Rect::from_min_max(
            Pos2::new(x, rect.top()),
            Pos2::new(x + strip_width + 1.0, rect.bottom()),
        );
        painter.rect_filled(strip, egui::CornerRadius::ZERO, shade(base, params));
    }

    let unit = rect.height() / 270.0;

    // Background elements, always softer than the subject.
    feathered_circle(
        &painter,
        Pos2::new(
            rect.left() + rect.width() * 0.28,
            rect.top() + rect.height() * 0.30,
        ),
        14.0 * unit,
        shade(BACKDROP_GREEN, params).gamma_multiply(0.7),
        (params.blur_amount * 10.0).max(2.0) * unit,
    );
    feathered_circle(
        &painter,
        Pos2::new(
            rect.left() + rect.width() * 0.68,
            rect.top() + rect.height() * 0.64,
        ),
        10.0 * unit,
        shade(BACKDROP_RED, params).gamma_multiply(0.6),
        (params.blur_amount * 12.0).max(3.0) * unit,
    );

    // Foreground subject, shifted sideways by motion blur.
    let subject_center = Pos2::new(
        rect.center().x + params.motion_blur * 20.0 * unit,
        rect.center().y,
    );
    feathered_circle(
        &painter,
        subject_center,
        32.0 * unit,
        shade(SUBJECT_YELLOW, params),
        (params.blur_amount - 0.3).max(0.0) * 8.0 * unit,
    );

    if params.noise_level > 0.0 {
        paint_noise(&painter, rect, params.noise_level);
    }

    // Long exposures wash the frame with a dark veil.
    if params.motion_blur > 0.3 {
        painter.rect_filled(
            rect,
            egui::CornerRadius::same(6),
            Color32::from_black_alpha(51),
        );
    }
}

/// Dot grid standing in for sensor noise; alpha follows the noise level.
fn paint_noise(painter: &egui::Painter, rect: Rect, noise_level: f32) {
    let alpha = (noise_level * 160.0).min(160.0) as u8;
    let dot = Color32::from_white_alpha(alpha);
    let mut y = rect.top() + NOISE_GRID_STEP / 2.0;
    let mut odd_row = false;
    while y < rect.bottom() {
        let offset = if odd_row { NOISE_GRID_STEP / 2.0 } else { 0.0 };
        let mut x = rect.left() + NOISE_GRID_STEP / 2.0 + offset;
        while x < rect.right() {
            painter.circle_filled(Pos2::new(x, y), 0.8, dot);
            x += NOISE_GRID_STEP;
        }
        y += NOISE_GRID_STEP;
        odd_row = !odd_row;
    }
}

/// Cheap gaussian stand-in: a stack of translucent discs widening out to
/// the feather radius.
fn feathered_circle(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    color: Color32,
    feather: f32,
) {
    if feather < 0.5 {
        painter.circle_filled(center, radius, color);
        return;
    }
    let steps = 6;
    let layer = color.gamma_multiply(1.0 / steps as f32 * 1.5);
    for i in 0..steps {
        let spread = feather * (i as f32 / (steps - 1) as f32 - 0.5);
        painter.circle_filled(center, (radius + spread).max(1.0), layer);
    }
}

/// Applies the simulated brightness and color cast to a base color.
fn shade(color: Color32, params: &VisualParams) -> Color32 {
    let gain = params.brightness * params.color_cast.brightness_boost;
    let mut rgb = [
        f32::from(color.r()) / 255.0 * gain,
        f32::from(color.g()) / 255.0 * gain,
        f32::from(color.b()) / 255.0 * gain,
    ];
    if !params.color_cast.is_neutral() {
        rgb = sepia(rgb, params.color_cast.sepia);
        rgb = hue_rotate(rgb, params.color_cast.hue_shift_deg);
    }
    Color32::from_rgb(
        (rgb[0].clamp(0.0, 1.0) * 255.0) as u8,
        (rgb[1].clamp(0.0, 1.0) * 255.0) as u8,
        (rgb[2].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t) as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Standard sepia matrix, blended in by `amount`.
fn sepia([r, g, b]: [f32; 3], amount: f32) -> [f32; 3] {
    let sr = 0.393 * r + 0.769 * g + 0.189 * b;
    let sg = 0.349 * r + 0.686 * g + 0.168 * b;
    let sb = 0.272 * r + 0.534 * g + 0.131 * b;
    [
        r + (sr - r) * amount,
        g + (sg - g) * amount,
        b + (sb - b) * amount,
    ]
}

/// feColorMatrix-style hue rotation.
fn hue_rotate([r, g, b]: [f32; 3], degrees: f32) -> [f32; 3] {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [
        (0.213 + cos * 0.787 - sin * 0.213) * r
            + (0.715 - cos * 0.715 - sin * 0.715) * g
            + (0.072 - cos * 0.072 + sin * 0.928) * b,
        (0.213 - cos * 0.213 + sin * 0.143) * r
            + (0.715 + cos * 0.285 + sin * 0.140) * g
            + (0.072 - cos * 0.072 - sin * 0.283) * b,
        (0.213 - cos * 0.213 - sin * 0.787) * r
            + (0.715 - cos * 0.715 + sin * 0.715) * g
            + (0.072 + cos * 0.928 + sin * 0.072) * b,
    ]
}

fn settings_summary(ui: &mut egui::Ui, settings: &CameraSettings) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label("Current settings");
        summary_row(ui, "ISO:", &settings.iso.to_string());
        summary_row(ui, "Aperture:", &format_aperture(settings.aperture));
        summary_row(ui, "Speed:", &format_shutter_speed(settings.shutter_speed));
        summary_row(ui, "Balance:", &format_white_balance(settings.white_balance));
    });
}

fn summary_row(ui: &mut egui::Ui, name: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.small(name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.monospace(egui::RichText::new(value).small());
        });
    });
}

fn result_summary(ui: &mut egui::Ui, params: &VisualParams) {
    let noise_dot = if params.noise_level < 0.2 {
        Color32::from_rgb(74, 222, 128)
    } else if params.noise_level < 0.5 {
        Color32::from_rgb(250, 204, 21)
    } else {
        Color32::from_rgb(248, 113, 113)
    };
    let sharpness_dot = if params.blur_amount < 0.3 {
        Color32::from_rgb(96, 165, 250)
    } else if params.blur_amount < 0.7 {
        Color32::from_rgb(250, 204, 21)
    } else {
        Color32::from_rgb(248, 113, 113)
    };
    let (exposure_dot, exposure_text) = match params.exposure {
        Exposure::Normal => (Color32::from_rgb(74, 222, 128), "Well exposed"),
        Exposure::Underexposed => (Color32::from_rgb(250, 204, 21), "Underexposed"),
        Exposure::Overexposed => (Color32::from_rgb(250, 204, 21), "Overexposed"),
    };

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label("Result");
        indicator_row(ui, noise_dot, noise_verdict(params));
        indicator_row(ui, sharpness_dot, sharpness_verdict(params));
        indicator_row(ui, exposure_dot, exposure_text);
    });
}

fn indicator_row(ui: &mut egui::Ui, dot: Color32, text: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("●").small().color(dot));
        ui.small(text);
    });
}
