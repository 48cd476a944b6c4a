use clap::Parser;
use mlops_scaffold::utils::{logger, validation::Validate};
use mlops_scaffold::{CliConfig, ConfigSource, Scaffolder, TomlConfig};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting mlops-scaffold CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let raw = match &cli.config {
        Some(path) => TomlConfig::from_file(Path::new(path))?.raw_config()?,
        None => cli.raw_config()?,
    };

    let scaffolder = Scaffolder::new(&cli.template_dir);

    match scaffolder.generate(&raw).await {
        Ok(project_path) => {
            tracing::info!("✅ Project generated successfully!");
            tracing::info!("📁 Project created at: {}", project_path.display());
            println!("✅ Project generated successfully!");
            println!("📁 Project created at: {}", project_path.display());
        }
        Err(e) => {
            tracing::error!(
                "❌ Project generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                mlops_scaffold::utils::error::ErrorSeverity::Low => 1,
                mlops_scaffold::utils::error::ErrorSeverity::Medium => 2,
                mlops_scaffold::utils::error::ErrorSeverity::High => 1,
                mlops_scaffold::utils::error::ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
