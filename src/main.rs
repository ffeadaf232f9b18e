mod app;
mod infra;
mod model;
mod ui;

use std::process::ExitCode;

use app::state::AppState;
use infra::config::AppConfig;
use model::display::{format_aperture, format_shutter_speed, format_white_balance};
use model::exposure::VisualParams;
use model::presets::PRESETS;
use model::settings::CameraSettings;

fn main() -> ExitCode {
    infra::logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::default();

    match run_command(parse_command(&args), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

#[derive(Debug, Clone)]
enum Command {
    Ui,
    Simulate { settings: CameraSettings },
    Presets,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Ui);
    }

    match args[1].as_str() {
        "ui" => Ok(Command::Ui),
        "simulate" => {
            if args.len() < 6 {
                return Err(CommandError::Usage(
                    "simulate needs <iso> <aperture> <shutter_speed> <white_balance>".to_string(),
                ));
            }
            let iso = parse_number::<u32>("iso", &args[2])?;
            let aperture = parse_number::<f32>("aperture", &args[3])?;
            let shutter_speed = parse_number::<f32>("shutter_speed", &args[4])?;
            let white_balance = parse_number::<u32>("white_balance", &args[5])?;
            Ok(Command::Simulate {
                settings: CameraSettings {
                    iso,
                    aperture,
                    shutter_speed,
                    white_balance,
                },
            })
        }
        "presets" => Ok(Command::Presets),
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, CommandError> {
    raw.parse::<T>()
        .map_err(|_| CommandError::Usage(format!("invalid {name}: {raw}")))
}

fn run_command(
    command: Result<Command, CommandError>,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Ui => {
            tracing::info!("launching trainer window");
            ui::app_shell::launch_window(config, AppState::default())
                .map_err(CommandError::Runtime)
        }
        Command::Simulate { settings } => {
            if let Err(error) = settings.validate() {
                tracing::warn!(%error, "input outside the slider domain, clamping");
            }
            let settings = settings.clamped();
            let derived = VisualParams::from_settings(&settings);
            let report = serde_json::json!({
                "settings": settings,
                "derived": derived,
            });
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|error| CommandError::Runtime(format!("simulate failed: {error}")))?;
            println!("{rendered}");
            Ok(())
        }
        Command::Presets => {
            for preset in &PRESETS {
                println!(
                    "{}\tISO {}\t{}\t{}\t{}",
                    preset.name,
                    preset.settings.iso,
                    format_aperture(preset.settings.aperture),
                    format_shutter_speed(preset.settings.shutter_speed),
                    format_white_balance(preset.settings.white_balance)
                );
            }
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  camera-trainer ui");
    println!("  camera-trainer simulate <iso> <aperture> <shutter_speed> <white_balance>");
    println!("  camera-trainer presets");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn no_args_launches_the_ui() {
        let command = parse_command(&args(&["camera-trainer"])).expect("should parse");
        assert!(matches!(command, Command::Ui));
    }

    #[test]
    fn simulate_parses_all_four_parameters() {
        let parsed = parse_command(&args(&[
            "camera-trainer",
            "simulate",
            "800",
            "2.8",
            "0.01",
            "5000",
        ]))
        .expect("should parse");
        match parsed {
            Command::Simulate { settings } => {
                assert_eq!(settings.iso, 800);
                assert_eq!(settings.white_balance, 5000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn simulate_rejects_missing_or_bad_arguments() {
        let missing = parse_command(&args(&["camera-trainer", "simulate", "800"]));
        assert!(matches!(missing, Err(CommandError::Usage(_))));

        let bad = parse_command(&args(&[
            "camera-trainer",
            "simulate",
            "high",
            "2.8",
            "0.01",
            "5000",
        ]));
        assert!(matches!(bad, Err(CommandError::Usage(_))));
    }

    #[test]
    fn unknown_command_is_a_usage_error() {
        let command = parse_command(&args(&["camera-trainer", "export"]));
        assert!(matches!(command, Err(CommandError::Usage(_))));
    }
}
