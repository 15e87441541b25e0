//! Command-line surface for `bozza-cli`.

#![deny(clippy::all, clippy::pedantic)]

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "bozza-cli", version, about = "Headless post composer CLI", long_about = None)]
pub struct Cli {
    /// Remote API base URL, e.g. <https://example.com/api>
    #[arg(long, env = "BOZZA_API_URL")]
    pub api_url: Option<String>,

    /// Optional path to a configuration file
    #[arg(long, env = "BOZZA_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Base log level (trace|debug|info|warn|error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Toggle JSON logging
    #[arg(long, default_value_t = false)]
    pub log_json: bool,

    /// Push add/edit/delete to the remote store instead of keeping them
    /// local to the cached list
    #[arg(long, default_value_t = false)]
    pub sync: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Post composing and list management
    Posts(PostsArgs),
    /// Tag vocabulary
    Tags(TagsArgs),
}

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PostsCmd {
    /// Fetch the remote collection and print it
    Fetch,
    /// Compose a new post and append it to the list
    Compose {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        category: Option<CategoryArg>,
        /// May be repeated; values must come from the fixed vocabulary
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Rework the entry at an index; only the provided fields change
    Revise {
        #[arg(long)]
        index: usize,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        category: Option<CategoryArg>,
        /// Toggle membership for each named tag
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Delete the entry at an index
    Remove {
        #[arg(long)]
        index: usize,
    },
}

#[derive(Parser, Debug)]
pub struct TagsArgs {
    #[command(subcommand)]
    pub action: TagsCmd,
}

#[derive(Subcommand, Debug)]
pub enum TagsCmd {
    /// Print the fixed tag vocabulary
    List,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CategoryArg {
    News,
    Sport,
    Entertainment,
}

impl CategoryArg {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Sport => "sport",
            Self::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
