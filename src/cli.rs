use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{Category, Goal};
use crate::planner::{DEFAULT_MAX_CALORIES, DEFAULT_MIN_CALORIES, DEFAULT_TRIP_LENGTH};

/// Pouchamama — browse freeze-dried trail meals and plan multi-day trips.
#[derive(Parser, Debug)]
#[command(name = "pouchamama")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a product catalog JSON file. Uses the built-in catalog if omitted.
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List meals matching diet, calorie and allergen filters.
    Shop {
        /// Only show these diets (repeatable).
        #[arg(long = "diet", value_enum)]
        diets: Vec<Category>,

        /// Hide meals containing this allergen (repeatable).
        #[arg(long = "exclude")]
        exclude: Vec<String>,

        /// Minimum calories per pouch.
        #[arg(long, default_value_t = DEFAULT_MIN_CALORIES)]
        min_calories: f64,

        /// Maximum calories per pouch.
        #[arg(long, default_value_t = DEFAULT_MAX_CALORIES)]
        max_calories: f64,

        /// Also write the listing to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show details for one meal, by id or (approximate) name.
    Product {
        query: String,
    },

    /// Plan meals day by day and add them to the cart.
    Plan {
        /// Trip length in days (1-7).
        #[arg(long, default_value_t = DEFAULT_TRIP_LENGTH)]
        days: u8,

        /// Recommendation goal.
        #[arg(long, value_enum, default_value_t = Goal::Balanced)]
        goal: Goal,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            days: DEFAULT_TRIP_LENGTH,
            goal: Goal::Balanced,
        }
    }
}
