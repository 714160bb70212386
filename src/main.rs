/// Main entry point for the habit streak tracker CLI
///
/// This file sets up logging, parses command line arguments, opens the
/// database and dispatches to the habit operations in `habit_streaks::commands`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use habit_streaks::commands::{self, CreateHabitParams, EditHabitParams, MarkStatusParams};
use habit_streaks::{today, BadgeCatalog, BadgeDefinition, DayStatus, HabitTracker, DEFAULT_HEATMAP_DAYS};

/// Get the default database path with robust fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        dirs::home_dir().map(|mut p| {
            p.push(".habit_streaks");
            p
        }),
        dirs::data_dir().map(|mut p| {
            p.push("habit_streaks");
            p
        }),
        dirs::config_dir().map(|mut p| {
            p.push("habit_streaks");
            p
        }),
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_streaks");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if let Ok(()) = std::fs::create_dir_all(potential_path) {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.join("habits.db"));
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit_streaks");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit streak tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Owner of the habits being managed
    #[arg(long, global = true, default_value = "local")]
    user: String,

    /// JSON file with a custom badge catalog
    #[arg(long, global = true)]
    badges: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new habit
    Create {
        /// Name of the habit
        name: String,
        /// Target weekdays, comma separated (e.g. Monday,Wednesday)
        #[arg(long, value_delimiter = ',')]
        days: Vec<String>,
        /// Schedule preset: daily, weekdays or weekends
        #[arg(long, conflicts_with = "days")]
        preset: Option<String>,
        /// First day of the habit (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<String>,
    },
    /// Change a habit's name, schedule or start date
    Edit {
        habit_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_delimiter = ',')]
        days: Vec<String>,
        #[arg(long, conflicts_with = "days")]
        preset: Option<String>,
        #[arg(long)]
        start: Option<String>,
    },
    /// Delete a habit and its history
    Delete { habit_id: String },
    /// List all habits with streaks and top badge
    List,
    /// List habits scheduled for today
    Today,
    /// Set the status of a day: completed, missed or unset
    Mark {
        habit_id: String,
        status: DayStatus,
        /// Day to mark (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Cycle a day's status: unset -> completed -> missed -> unset
    Toggle {
        habit_id: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// Show a habit's recent progress heatmap
    Heatmap {
        habit_id: String,
        /// Number of most recent days to show
        #[arg(long, default_value_t = DEFAULT_HEATMAP_DAYS)]
        days: usize,
    },
    /// Show the badge catalog, optionally with a habit's unlocks
    Badges { habit_id: Option<String> },
}

fn print_unlock(badge: &BadgeDefinition) {
    println!("{}", badge.notification());
}

fn print_status_response(response: &commands::MarkStatusResponse) {
    println!("{}", response.message);
    for badge in &response.newly_unlocked {
        print_unlock(badge);
    }
}

fn print_habit_list(response: &commands::ListHabitsResponse, empty_message: &str) {
    if response.habits.is_empty() {
        println!("{}", empty_message);
        return;
    }

    for h in &response.habits {
        println!(
            "🎯 {} ({})\n   📅 {} since {} | 🔥 {} day streak | 🏅 Best: {} | 📆 Best run: {} | ✅ Total: {} | Today: {}{}",
            h.name,
            h.habit_id,
            h.schedule,
            h.start_date,
            h.current_streak,
            h.longest_streak,
            h.best_calendar_run,
            h.total_completions,
            h.status_today,
            h.top_badge.as_ref().map(|b| format!(" | {}", b)).unwrap_or_default()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_streaks={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for command output
        .init();

    // Determine database path
    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let catalog = match &args.badges {
        Some(path) => BadgeCatalog::load(path)?,
        None => BadgeCatalog::standard(),
    };

    let tracker = HabitTracker::with_catalog(db_path, catalog)?;
    let storage = tracker.storage();
    let engine = tracker.engine();
    let today = today();

    match args.command {
        Command::Create { name, days, preset, start } => {
            let response = commands::create_habit(
                storage,
                CreateHabitParams {
                    user_id: args.user,
                    name,
                    days,
                    preset,
                    start_date: start,
                },
                today,
            )?;
            println!("{}\nHabit ID: {}", response.message, response.habit.id);
        }
        Command::Edit { habit_id, name, days, preset, start } => {
            let response = commands::edit_habit(
                storage,
                engine,
                EditHabitParams {
                    habit_id,
                    name,
                    days,
                    preset,
                    start_date: start,
                },
            )?;
            println!("{}", response.message);
            for badge in response.newly_unlocked.iter().filter_map(|id| engine.catalog().get(id)) {
                print_unlock(badge);
            }
        }
        Command::Delete { habit_id } => {
            let response = commands::delete_habit(storage, &habit_id)?;
            println!("{}", response.message);
        }
        Command::List => {
            let response = commands::list_habits(storage, engine, &args.user, today)?;
            print_habit_list(&response, "No habits found. Create your first habit to get started!");
        }
        Command::Today => {
            let response = commands::habits_for_day(storage, engine, &args.user, today)?;
            print_habit_list(&response, "Nothing scheduled for today.");
        }
        Command::Mark { habit_id, status, date } => {
            let response = commands::mark_status(
                storage,
                engine,
                MarkStatusParams { habit_id, date, status },
                today,
            )?;
            print_status_response(&response);
        }
        Command::Toggle { habit_id, date } => {
            let response = commands::toggle_status(storage, engine, &habit_id, date.as_deref(), today)?;
            print_status_response(&response);
        }
        Command::Heatmap { habit_id, days } => {
            let response = commands::habit_heatmap(storage, &habit_id, days, today)?;
            println!("Progress heatmap for '{}'", response.name);
            for row in response.heatmap.rows() {
                let first = row.first().map(|c| c.date.format("%b %d").to_string()).unwrap_or_default();
                let glyphs: String = row.iter().map(|c| c.state.glyph()).collect();
                println!("{:>7}  {}", first, glyphs);
            }
            println!("■ completed  ✗ missed  □ pending  · not scheduled");
        }
        Command::Badges { habit_id } => {
            let response = commands::list_badges(storage, engine, habit_id.as_deref())?;
            for progress in &response.badges {
                let badge = &progress.badge;
                println!(
                    "{} {} {} ({} days) - {}",
                    if progress.unlocked { "✔" } else { " " },
                    badge.icon,
                    badge.name,
                    badge.required_streak,
                    badge.description
                );
            }
        }
    }

    Ok(())
}
