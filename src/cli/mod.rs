// src/cli/mod.rs
// Command-line surface: GUI overrides plus headless tools

pub mod preview;
pub mod show_config;

use clap::{Parser, Subcommand};

use crate::selection::RowId;

#[derive(Parser, Debug)]
#[command(name = "artwork_picker")]
#[command(about = "Browse the Art Institute of Chicago collection and pick rows across pages", long_about = None)]
pub struct Cli {
    /// Rows per page (overrides the settings file)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Base URL of the artworks API (overrides the settings file)
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Page shown first when the window opens
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub start_page: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one page and print which rows a selection would pick
    Preview {
        /// Page to fetch (1-based)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Select the first N rows across all pages
        #[arg(long, allow_hyphen_values = true)]
        bulk: Option<i64>,

        /// Artwork ids on the page to check explicitly
        #[arg(long, value_delimiter = ',')]
        include: Vec<RowId>,

        /// Artwork ids on the page to uncheck explicitly
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<RowId>,
    },

    /// Print the effective configuration and the settings file location
    Config,
}
