use anyhow::Context;
use tracing::info;

use onboarding_wizard::cli;
use onboarding_wizard::config::WizardConfig;
use onboarding_wizard::directory::Directory;
use onboarding_wizard::wizard::Wizard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the wizard screens.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = WizardConfig::from_env().context("reading configuration")?;

    let directory = match config.directory_path {
        Some(ref path) => Directory::from_file(path)
            .with_context(|| format!("loading directory from {}", path.display()))?,
        None => Directory::builtin(),
    };

    eprintln!("Employee Onboarding v{}", env!("CARGO_PKG_VERSION"));
    info!(
        departments = directory.departments.len(),
        submit_delay_ms = config.submit_delay.as_millis() as u64,
        "Starting wizard"
    );

    cli::run(Wizard::new(directory), &config).await?;
    Ok(())
}
