use awesomeness_scorer::{
    character::Character,
    config::{cvars, Settings},
    scoring,
};
use clap::{Parser, Subcommand};
use tracing::{error, info};

#[derive(Parser)]
#[clap(name = "awesomeness-scorer")]
#[clap(about = "Classify character awesomeness scores", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single score
    Classify {
        /// Score to classify
        #[clap(short, long, allow_hyphen_values = true)]
        score: i32,

        /// Override the awesomeness threshold for this run
        #[clap(long)]
        min_awesomeness: Option<i32>,

        /// Print the result as JSON
        #[clap(long)]
        json: bool,
    },

    /// Run a character through a sequence of scores and report transitions
    Simulate {
        /// Character name
        #[clap(short, long, default_value = "Sample")]
        name: String,

        /// Scores applied in order
        #[clap(required = true, allow_hyphen_values = true)]
        scores: Vec<i32>,
    },

    /// Read or set a console variable
    Cvar {
        /// Variable name, e.g. awesomeness.MinAwesomeness
        name: String,

        /// New value; prints the current value when omitted
        value: Option<i32>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|_| {
        info!("Using default settings");
        Settings::default()
    });

    // Validate settings
    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }
    settings.apply();

    match cli.command {
        Commands::Classify {
            score,
            min_awesomeness,
            json,
        } => {
            if let Some(threshold) = min_awesomeness {
                cvars::set_min_awesomeness(threshold);
            }

            let level = scoring::level_from_value(score);
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "score": score,
                        "level": level,
                        "threshold": cvars::min_awesomeness(),
                    })
                );
            } else {
                println!(
                    "score {} -> {} (threshold {})",
                    score,
                    level,
                    cvars::min_awesomeness()
                );
            }
        }

        Commands::Simulate { name, scores } => {
            let mut character = Character::new(name);
            character.activate();

            let label = character.name().to_string();
            character.on_awesomeness_changed.attach(move |level| {
                println!("{} is now {}", label, level);
            });

            for (step, score) in scores.into_iter().enumerate() {
                character.set_awesomeness(score, format!("simulation step {}", step));
            }

            println!(
                "final: score {} -> {}",
                character.awesomeness().value(),
                character.awesomeness_level()
            );
            character.deactivate();
        }

        Commands::Cvar { name, value } => match value {
            Some(value) => {
                cvars::set_by_name(&name, value)?;
                println!("{} = {}", name, value);
            }
            None => {
                let value = cvars::get_by_name(&name)?;
                println!("{} = {}", name, value);
            }
        },
    }

    Ok(())
}
