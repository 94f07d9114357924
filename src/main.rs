use arrow_days::commands::{Command, CommandContext};
use arrow_days::config::Config;
use arrow_days::startup;
use clap::Parser;
use tracing::info;

fn main() -> miette::Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    startup::init_logging(&config.log_filter)?;

    info!(
        "Starting arrow_days with {} output (config file {})",
        config.output,
        config.config_path.display()
    );

    let command = Command::parse();
    let ctx = CommandContext::new(config);

    let stdout = std::io::stdout();
    command.run(&ctx, &mut stdout.lock())?;

    Ok(())
}
