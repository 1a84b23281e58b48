use clap::Parser;
use solid_principles::app::demo;
use solid_principles::utils::logger;
use solid_principles::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let logger = settings.logger.build();
    demo::run_service(&settings, logger.clone());

    if settings.tour {
        demo::run_tour(&settings.student, logger);
    }

    if settings.pause {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
    }

    Ok(())
}
