use clap::Parser;
use walrus_feeder::utils::{logger, validation::Validate};
use walrus_feeder::{CliConfig, FeedingSession, Walrus};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting walrus-feeder");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置，有 --plan 時以計畫檔為準
    let resolved = config.validate().and_then(|_| config.resolve());
    let (name, meals) = match resolved {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    tracing::info!("🐟 Feeding {} meal(s) to {}", meals.len(), name);
    let mut session = FeedingSession::new(Walrus::new(name));
    let report = session.feed_all(&meals);

    println!("{}", report);
}
