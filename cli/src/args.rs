use castpath_core::DEFAULT_FEMALE_THRESHOLD;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "castpath")]
#[command(about = "Explore movie casts: gender ratios, filmographies and degrees of separation")]
pub struct Args {
    /// Cast dataset (CSV: movie, actor, _, _, gender). Defaults to $CASTPATH_DATA
    #[arg(short, long, value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose mode - show dataset counts, search statistics and info logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check every movie's share of female cast against a threshold
    Bechdel {
        /// Percentage of female cast a movie must exceed to pass
        #[arg(short, long, value_name = "PERCENT", default_value_t = DEFAULT_FEMALE_THRESHOLD)]
        threshold: f64,

        /// Only list movies that fail
        #[arg(short, long)]
        failing_only: bool,
    },

    /// List the movies an actor appears in
    Movies {
        actor: String,
    },

    /// List the cast of a movie
    Cast {
        movie: String,
    },

    /// Degree of separation between two actors
    Separation {
        actor1: String,
        actor2: String,

        /// Give up after visiting this many movies and actors
        #[arg(short, long, value_name = "COUNT")]
        max_visited: Option<usize>,
    },

    /// Write the movie/actor graph in Trivial Graph Format
    Export {
        output: PathBuf,
    },
}
