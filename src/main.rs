use clap::Parser;
use statuspage_subscribers::utils::{logger, validation::Validate};
use statuspage_subscribers::{
    CliConfig, EtlEngine, LocalStorage, RunReport, StatuspageClient, StatuspageConfig,
    SubscriberError, SubscriberPipeline,
};

fn exit_with(stage: &str, e: &SubscriberError) -> ! {
    tracing::error!("❌ {} failed: {}", stage, e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code().max(1));
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting statuspage-subscribers");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with("Argument validation", &e);
    }

    let statuspage = match StatuspageConfig::from_env().and_then(|c| c.validate().map(|_| c)) {
        Ok(statuspage) => statuspage,
        Err(e) => exit_with("Configuration", &e),
    };
    tracing::debug!("Statuspage config: {:?}", statuspage);

    let client = match StatuspageClient::new(statuspage) {
        Ok(client) => client,
        Err(e) => exit_with("HTTP client setup", &e),
    };
    let target = match config.target() {
        Ok(target) => target,
        Err(e) => exit_with("Argument validation", &e),
    };

    let pipeline = SubscriberPipeline::new(
        client,
        LocalStorage::default(),
        target,
        config.export_targets(),
    );
    let engine = EtlEngine::new(pipeline);

    let report = engine.run().await;
    match &report {
        RunReport::NoSubscribers { component_id } => {
            println!("ℹ️  No subscribers found for component {}", component_id);
        }
        RunReport::Completed {
            component_id,
            records,
            exports,
        } => {
            println!(
                "✅ Found {} subscribers for component {}",
                records.len(),
                component_id
            );
            for outcome in exports {
                match &outcome.result {
                    Ok(()) => println!(
                        "📁 {} saved to: {}",
                        outcome.format,
                        outcome.path.display()
                    ),
                    Err(e) => {
                        eprintln!(
                            "❌ Failed to save {} to {}: {}",
                            outcome.format,
                            outcome.path.display(),
                            e.user_friendly_message()
                        );
                        eprintln!("💡 {}", e.recovery_suggestion());
                    }
                }
            }
        }
        RunReport::Failed(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
    }

    let exit_code = report.exit_code();
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
