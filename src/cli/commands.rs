//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "storystacks")]
#[command(about = "Personal log of the movies, shows and books you finish", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new log
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Log a new entry
    Add {
        /// Title (required, cannot be blank)
        #[arg(short, long)]
        title: String,

        /// Category (movie, tv, book); defaults to the configured category
        #[arg(short, long)]
        category: Option<String>,

        /// Director, showrunner or author
        #[arg(long, default_value = "")]
        creator: String,

        /// Date finished (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Rating, e.g. 4.5
        #[arg(short, long, default_value_t = 0.0)]
        rating: f64,

        /// Format (cinema, streaming, paperback, ...)
        #[arg(long, default_value = "")]
        format: String,

        /// Free-form thoughts
        #[arg(long, default_value = "")]
        thoughts: String,

        /// Quotes or highlights
        #[arg(long, default_value = "")]
        highlights: String,
    },

    /// List entries, pinned first then newest
    List {
        /// Category filter (all, movie, tv, book)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Finished-year filter (all, 2023, Unknown, ...)
        #[arg(short, long, default_value = "all")]
        year: String,

        /// Case-insensitive text search over title, creator, thoughts and highlights
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Pin or unpin an entry
    Pin {
        /// Entry id
        id: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show every finished year in the log
    Years,

    /// Show entry counts
    Stats,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
