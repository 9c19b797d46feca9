//! Card Reel - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Card Reel - browse a deck of text cards as a carousel
#[derive(Parser, Debug)]
#[command(name = "cardreel")]
#[command(version)]
#[command(about = "Terminal carousel for browsing a deck of text cards")]
pub struct Args {
    /// Path to deck file (reads from stdin if not provided)
    pub deck: Option<PathBuf>,

    /// Start at specific card number (must be positive)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub start: u32,

    /// Wrap around at the first and last card
    #[arg(long = "loop")]
    pub looping: bool,

    /// Hide the previous/next controls
    #[arg(long)]
    pub no_controls: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = cardreel::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = cardreel::config::merge_config(config_file);

        // 3. Apply environment variable overrides
        let with_env = cardreel::config::apply_env_overrides(merged);

        // 4. Apply CLI argument overrides
        // Flags only override when explicitly set
        let looping_override = args.looping.then_some(true);
        let controls_override = args.no_controls.then_some(false);

        cardreel::config::apply_cli_overrides(with_env, looping_override, controls_override)
    };

    // Initialize tracing with configured log file path
    cardreel::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Detect input source (file or stdin) and read the whole deck
    let source = cardreel::source::detect_deck_source(args.deck.clone())?;
    let slides = source.read_deck()?;

    let colors = cardreel::view::ColorConfig::from_env_and_args(args.no_color);
    let styles = cardreel::view::CardStyles::with_color_config(colors);

    // --start is one-based
    let start = usize::try_from(args.start.saturating_sub(1)).unwrap_or(usize::MAX);

    cardreel::view::run_deck(slides, &config, styles, start)?;

    Ok(())
}
