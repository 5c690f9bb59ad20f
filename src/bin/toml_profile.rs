use chrono::{Datelike, NaiveDate};
use clap::Parser;
use nonagon::config::toml_config::TomlConfig;
use nonagon::core::frequency::parse_core_list;
use nonagon::core::numerics::compute_core_numbers;
use nonagon::core::projection::top_archetypes;
use nonagon::core::{CalendarDate, ConfigProvider};
use nonagon::utils::{logger, validation::Validate};
use nonagon::{LocalStorage, ProfileEngine, ProfilePipeline};

#[derive(Parser)]
#[command(name = "toml-profile")]
#[command(about = "Nonagon profile tool with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "nonagon.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override chart angle note setting from config
    #[arg(long)]
    show_angle_note: Option<bool>,

    /// Dry run - show what would be computed without writing output
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based nonagon tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(show) = args.show_angle_note {
        config
            .chart
            .get_or_insert_with(Default::default)
            .show_angle_note = Some(show);
        tracing::info!("🔧 Chart angle note overridden to: {}", show);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no output will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = ProfilePipeline::new(storage, config);
    let engine = ProfileEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Profile computed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Profile computation failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("Configuration summary:");
    println!("  Name:          {}", config.name().unwrap_or("-"));
    println!("  Date of birth: {}", config.date_of_birth());
    println!(
        "  Core list:     {}",
        if config.core_list().is_empty() {
            "(empty)"
        } else {
            config.core_list()
        }
    );
    println!("  Output path:   {}", config.output_path());
    println!("  Angle note:    {}", config.show_angle_note());
}

fn perform_dry_run(config: &TomlConfig) {
    // Validation already guaranteed the date parses.
    let Ok(parsed) = NaiveDate::parse_from_str(config.date_of_birth().trim(), "%d/%m/%Y") else {
        return;
    };
    let date = CalendarDate {
        day: parsed.day(),
        month: parsed.month(),
        year: parsed.year(),
    };

    let numbers = compute_core_numbers(&date);
    let counts = parse_core_list(config.core_list());
    let top: Vec<String> = top_archetypes(&counts)
        .iter()
        .map(|sector| sector.to_string())
        .collect();

    println!("Would compute:");
    println!(
        "  Personality = {} | Life Value = {} (bridge {})",
        numbers.personality, numbers.life_value, numbers.bridge
    );
    println!("  Core digits counted: {}", counts.total());
    println!(
        "  Top archetypes: {}",
        if top.is_empty() {
            "-".to_string()
        } else {
            top.join(", ")
        }
    );
}
