//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use rolecast::RoleId;

/// rolecast - build products by id and switch between their roles
#[derive(Parser)]
#[command(name = "rolecast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (replaces the global and project files)
    #[arg(long, global = true, env = "ROLECAST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the demonstration sequence over every product
    Demo,

    /// Build a product and switch through a sequence of roles
    Run(RunArgs),

    /// List registered products and the roles they accept
    Products(ProductsArgs),

    /// List the defined role ids
    Roles,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Product id (number or name, e.g. `2` or `hybrid`)
    pub product: RoleId,

    /// Roles to switch through, in order, starting from root
    pub roles: Vec<RoleId>,
}

#[derive(Args)]
pub struct ProductsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
