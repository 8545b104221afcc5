use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "whitted")]
#[command(about = "Recursive Whitted-style ray tracer")]
pub struct Args {
    /// JSON scene file (defaults to the built-in demo scene)
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Reflection recursion depth
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Include a catalog entry by name (repeatable)
    #[arg(long, value_name = "NAME")]
    pub enable: Vec<String>,

    /// Exclude a catalog entry by name (repeatable)
    #[arg(long, value_name = "NAME")]
    pub disable: Vec<String>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Bucket size in pixels for parallel rendering
    #[arg(long, default_value_t = whitted_renderer::DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Print the catalog entries and exit
    #[arg(long)]
    pub list: bool,

    /// Write the effective scene (settings and catalog) as JSON and exit
    #[arg(long, value_name = "FILE")]
    pub dump_scene: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
