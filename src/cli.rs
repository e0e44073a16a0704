use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "solo-rules",
    version,
    about = "Chapter and sub-chapter extraction for the Solo rulebook text dump"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every catalog chapter and its sub-chapter bodies.
    Extract(ExtractArgs),
    /// Map chapter and sub-chapter titles to table-of-contents pages.
    Pages(PagesArgs),
    /// Resolve the whole catalog and check span invariants.
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[arg(long, default_value = "rules.txt")]
    pub input: PathBuf,

    #[arg(long)]
    pub catalog_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long = "chapter")]
    pub chapters: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct PagesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}
