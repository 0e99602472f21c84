use anyhow::{Context, Result};
use clap::Parser;
use termlayer::cli::{Cli, Commands};
use termlayer::{LoadedSettings, SettingsPaths, report};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI --log-level flag takes precedence over RUST_LOG
    termlayer::debug::init_log_bridge(cli.log_level.map(|l| l.to_level_filter()));
    log::info!("Starting termlayer {}", termlayer::VERSION);

    let paths = SettingsPaths {
        settings: cli.settings,
        defaults: cli.defaults,
    };
    let loaded = LoadedSettings::load(&paths)
        .with_context(|| format!("failed to load settings from {:?}", paths.settings_path()))?;

    for warning in loaded.warnings() {
        log::warn!("{warning}");
    }

    let output = match cli.command {
        Commands::Show => report::show(&loaded)?,
        Commands::Keys => report::keys(&loaded)?,
        Commands::Commands => report::commands(&loaded)?,
        Commands::Schemes => report::schemes(&loaded)?,
        Commands::Warnings => report::warnings(&loaded),
    };
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
