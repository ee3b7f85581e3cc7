use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use habit_builder::config::Config;
use habit_builder::db::Database;
use habit_builder::models::DEFAULT_MAX;
use habit_builder::render;
use habit_builder::session::{self, Session};
use habit_builder::store::{positive_target, GoalStore};

#[derive(Parser)]
#[command(name = "habit")]
#[command(about = "Track your goals and build better habits")]
struct Cli {
    /// Database file (overrides HABIT_BUILDER_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List goals with progress and statistics
    List,
    /// Add a new goal
    Add {
        name: String,

        /// Target count (non-positive values fall back to the default)
        #[arg(short, long, default_value_t = DEFAULT_MAX as i64, allow_negative_numbers = true)]
        max: i64,
    },
    /// Add one to a goal's progress
    Inc { goal: String },
    /// Set a goal's progress back to 0
    Reset { goal: String },
    /// Delete a goal
    Delete { goal: String },
    /// Change a goal's target, parsed the same way as the interactive field
    SetMax { goal: String, raw: String },
    /// Show statistics
    Stats,
    /// Start an interactive session
    Session,
}

/// Initialize tracing on stderr so stdout only carries rendered output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "habit_builder=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.db {
        Some(path) => Config::with_db_path(path),
        None => Config::from_env()?,
    };

    let db = Database::open(&config.db_path)?;
    db.migrate()?;
    let mut store = GoalStore::open(db).context("Failed to load saved goals")?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::List => {
            print!("{}", session::render_store(&store));
            print!("{}", render::render_stats(&store.stats()));
        }
        Commands::Add { name, max } => {
            let max = positive_target(max).unwrap_or(0);
            match store.create(&name, max)? {
                Some(goal) => println!("Added '{}' (max {}) as {}", goal.name(), goal.max(), goal.id()),
                None => println!("Goal name cannot be empty"),
            }
        }
        Commands::Inc { goal } => {
            let Some(id) = session::resolve_goal(&store, &goal) else {
                println!("No goal matches '{goal}'");
                return Ok(());
            };
            if store.increment(&id)? {
                println!("Progress +1");
            } else {
                println!("Already at max");
            }
        }
        Commands::Reset { goal } => {
            let Some(id) = session::resolve_goal(&store, &goal) else {
                println!("No goal matches '{goal}'");
                return Ok(());
            };
            store.reset(&id)?;
            println!("Progress reset");
        }
        Commands::Delete { goal } => {
            let Some(id) = session::resolve_goal(&store, &goal) else {
                println!("No goal matches '{goal}'");
                return Ok(());
            };
            store.delete(&id)?;
            println!("Deleted");
        }
        Commands::SetMax { goal, raw } => {
            let Some(id) = session::resolve_goal(&store, &goal) else {
                println!("No goal matches '{goal}'");
                return Ok(());
            };
            store.on_buffer_input(&id, &raw)?;
            store.on_buffer_commit(&id)?;
            if let Some(goal) = store.get(&id) {
                println!("Max: {} (progress {})", goal.max(), goal.progress());
            }
        }
        Commands::Stats => {
            let stats = render::render_stats(&store.stats());
            if stats.is_empty() {
                println!("No goals yet");
            } else {
                print!("{stats}");
            }
        }
        Commands::Session => {
            println!("Habit Builder. Type 'help' for commands.");
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Session::new(store).run(stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}
