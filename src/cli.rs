use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::patch::DEFAULT_MARKER;

#[derive(Debug, Clone, Parser)]
#[command(name = "bean-patch")]
#[command(about = "Add JavaBean-style getters alongside record-style accessors in Java sources")]
pub struct Cli {
    #[arg(value_name = "DIR", required = true)]
    pub roots: Vec<PathBuf>,

    #[arg(long, value_name = "EXT", default_value = "java")]
    pub ext: String,

    #[arg(long, value_name = "TEXT", default_value = DEFAULT_MARKER)]
    pub marker: String,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
