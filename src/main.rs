use clap::Parser;
use kennel::utils::error::ErrorSeverity;
use kennel::utils::{logger, validation::Validate};
use kennel::{render, CliConfig, Dog, RosterConfig};

fn load_dogs(config: &CliConfig) -> kennel::Result<Vec<Dog>> {
    if let Some(dog) = config.single_dog() {
        return Ok(vec![dog]);
    }

    let path = config.roster.as_deref().unwrap_or_default();
    tracing::info!("Loading roster from: {}", path);
    let roster = RosterConfig::from_file(path)?;
    roster.validate()?;
    Ok(roster.into_dogs())
}

fn run(config: &CliConfig) -> kennel::Result<String> {
    config.validate()?;

    let dogs = load_dogs(config)?;
    for dog in &dogs {
        tracing::debug!(dog = %dog, color = ?dog.get_color(), "Built dog");
    }
    tracing::info!("Rendering {} dog(s)", dogs.len());

    render(&dogs, config.format)
}

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            tracing::error!(
                "kennel failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Critical => 3,
                ErrorSeverity::High => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
