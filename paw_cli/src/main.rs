use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use paw_core::*;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paw")]
#[command(about = "Daily pet check-in insights", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show ranked insights for a pet (default)
    Insights {
        /// Pet id (falls back to insights.default_pet)
        #[arg(long)]
        pet: Option<String>,

        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print insights as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how completely the last week was logged
    Quality {
        /// Pet id (falls back to insights.default_pet)
        #[arg(long)]
        pet: Option<String>,

        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Append a check-in (JSON) to a pet's history
    Log {
        /// Pet id
        #[arg(long)]
        pet: String,

        /// Read the check-in from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    paw_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let store = FileStore::new(data_dir);

    match cli.command {
        Some(Commands::Insights { pet, date, json }) => {
            cmd_insights(&store, &config, pet, date, json)
        }
        Some(Commands::Quality { pet, date }) => cmd_quality(&store, &config, pet, date),
        Some(Commands::Log { pet, file }) => cmd_log(store, &pet, file),
        None => {
            // Default to "insights" command
            cmd_insights(&store, &config, None, None, false)
        }
    }
}

fn resolve_pet(pet: Option<String>, config: &Config) -> Result<String> {
    pet.or_else(|| config.insights.default_pet.clone())
        .ok_or_else(|| {
            Error::Config("No pet given: pass --pet or set insights.default_pet".into())
        })
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn cmd_insights(
    store: &FileStore,
    config: &Config,
    pet: Option<String>,
    date: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let pet_id = resolve_pet(pet, config)?;
    let today = date.unwrap_or_else(local_today);

    let engine = build_engine(store, store, &pet_id, today, config.insights.history_days)?;
    let insights = engine.generate_insights()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    display_header(&format!("{} · {}", engine.pet().name, today));

    if insights.is_empty() {
        println!("  No insights available yet. Complete more daily check-ins");
        println!("  to unlock personalized analytics!");
        println!();
        return Ok(());
    }

    for insight in &insights {
        display_insight(insight);
    }

    Ok(())
}

fn cmd_quality(
    store: &FileStore,
    config: &Config,
    pet: Option<String>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let pet_id = resolve_pet(pet, config)?;
    let today = date.unwrap_or_else(local_today);

    let engine = build_engine(store, store, &pet_id, today, config.insights.history_days)?;
    let quality = engine.data_quality();

    display_header(&format!("{} · data quality", engine.pet().name));
    println!("  Check-ins in the last 7 days: {}", quality.total_days);
    println!();
    println!("  Meals        {:>5.0}%", quality.completeness.meals);
    println!("  Exercise     {:>5.0}%", quality.completeness.exercise);
    println!("  Elimination  {:>5.0}%", quality.completeness.elimination);
    println!("  Mood         {:>5.0}%", quality.completeness.mood);
    println!();

    Ok(())
}

fn cmd_log(mut store: FileStore, pet_id: &str, file: Option<PathBuf>) -> Result<()> {
    if store.load_profile(pet_id)?.is_none() {
        return Err(Error::PetNotFound(pet_id.to_string()));
    }

    let contents = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let checkin: CheckinRecord = serde_json::from_str(&contents)?;

    // Reject here rather than poisoning every later insights run
    checkin.validate()?;

    store.append(pet_id, &checkin)?;

    println!("✓ Check-in for {} logged ({})", pet_id, checkin.date);
    Ok(())
}

fn display_header(title: &str) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  🐾 {}", title);
    println!("╰─────────────────────────────────────────╯");
    println!();
}

fn display_insight(insight: &Insight) {
    println!(
        "  {} [{}] {}",
        insight.icon,
        insight.priority.as_str().to_uppercase(),
        insight.title
    );
    println!("     {}", insight.message);
    println!("     💡 {}", insight.recommendation);

    if let Some(days) = insight.data_points {
        println!("     Based on {} days of data", days);
    }

    println!();
}
