use clap::Parser;
use invoker::cli::{self, Cli};
use invoker::config::Settings;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.to_lowercase())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!("Loaded configuration from {}", cli.config.display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&cli, &settings, &mut out)
}
