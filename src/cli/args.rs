use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::cart::SortMode;

#[derive(Parser)]
#[command(name = "cart-cli")]
#[command(about = "An interactive shopping cart for a fixed product catalog")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load the product catalog from a JSON file instead of the built-in one
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Initial sort order for the cart view
    #[arg(short, long, global = true, default_value = "name-asc")]
    pub sort: SortMode,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive shopping session (the default)
    Shop,
    /// Print the product catalog and exit
    Catalog,
}
