//! Command-line argument definitions for the archmap binaries.
//!
//! Both generators run with no arguments and fall back to the configured
//! output paths; the flags here only override defaults. The two binaries
//! have separate argument structures because only the graphical one takes
//! an output format.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for the graphical diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ImageArgs {
    /// Path to the output file (defaults to the configured path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "png")]
    pub format: OutputFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for ImageArgs {
    fn default() -> Self {
        Self {
            output: None,
            format: OutputFormat::Png,
            config: None,
            log_level: "info".to_string(),
        }
    }
}

/// Output flavor of the graphical diagram generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered image via the Graphviz `dot` executable.
    Png,
    /// The DOT source text, without invoking Graphviz.
    Dot,
}

/// Command-line arguments for the textual diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct TextArgs {
    /// Path to the output file (defaults to the configured path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for TextArgs {
    fn default() -> Self {
        Self {
            output: None,
            config: None,
            log_level: "info".to_string(),
        }
    }
}
