//! Hand gesture recognition over recorded landmark frames.

use anyhow::Result;
use clap::Parser;
use hand_gesture_recognition::app::{AppConfig, GestureApp, InputSource};
use hand_gesture_recognition::config::{Config, EXAMPLE_CONFIG};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark recording to replay (JSON Lines); reads stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Movement margin override (normalized units)
    #[arg(short, long)]
    margin: Option<f32>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Print an example configuration file and exit
    #[arg(long)]
    example_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.example_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    info!("Hand Gesture Recognition - Rust Port");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(margin) = args.margin {
        config.movement.margin = margin;
    }

    // Build application configuration
    let app_config = AppConfig {
        input: match args.input {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        },
        config,
    };

    // Create and run application
    let mut app = GestureApp::new(app_config)?;
    app.run()?;

    Ok(())
}
