use clap::Parser;
use std::io::{BufRead, Write};
use word_sort::utils::{logger, validation::Validate};
use word_sort::{CliConfig, LocalStorage, SortEngine, WordSortPipeline};

fn prompt_for_input_path() -> std::io::Result<String> {
    print!("Path and file name: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting word-sort CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Fall back to the interactive prompt when no input path was given.
    if config.input_path.is_none() {
        config.input_path = Some(prompt_for_input_path()?);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new();
    let pipeline = WordSortPipeline::new(storage, config);

    let engine = SortEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Sort completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Sort completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Sort failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                word_sort::utils::error::ErrorSeverity::Low => 0,
                word_sort::utils::error::ErrorSeverity::Medium => 2,
                word_sort::utils::error::ErrorSeverity::High => 1,
                word_sort::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
