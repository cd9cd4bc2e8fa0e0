// src/cli/mod.rs — CLI definition (clap derive)

pub mod add;
pub mod cook;
pub mod export;
pub mod favorite;
pub mod list;
pub mod migrate;
pub mod show;

use clap::{Parser, Subcommand};

use crate::recipes::query::SortOrder;
use crate::recipes::Difficulty;

#[derive(Parser)]
#[command(name = "stovetop", about = "Recipe book with a guided cooking timer", version)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse recipes in the terminal UI (default)
    Browse,
    /// List recipes
    List {
        /// Only these difficulties (comma-separated: easy,medium,hard)
        #[arg(short, long, value_delimiter = ',')]
        difficulty: Vec<Difficulty>,
        /// Sort by total time: asc or desc
        #[arg(short, long)]
        sort: Option<SortOrder>,
        /// Print the collection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one recipe with its ingredients and steps
    Show {
        id: String,
    },
    /// Add a recipe from a JSON form file ("-" reads stdin)
    Add {
        source: String,
    },
    /// Toggle a recipe's favorite flag
    Favorite {
        id: String,
    },
    /// Export every recipe
    Export {
        /// json or yaml
        #[arg(long, default_value = "json")]
        format: String,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Cook a recipe step by step
    Cook {
        id: String,
        /// Line-based runner instead of the terminal UI
        #[arg(long)]
        plain: bool,
    },
    /// Show or manage database migrations
    #[command(hide = true)]
    Migrate {
        #[arg(long)]
        status: bool,
        #[arg(long)]
        rollback: bool,
    },
}
