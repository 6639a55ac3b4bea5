use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::RenderConfig;
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, ValueEnum)]
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
#[derive(Parser, Debug)]
#[command(name = "glint_viewer")]
#[command(about = "Render animated Glint scenes to PNG frames")]
pub struct Args {
    /// Scene description (JSON). The built-in demo scene is used when absent.
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Render configuration (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start from the cheaper preview settings instead of the defaults
    #[arg(long)]
    pub preview: bool,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Bounce budget per primary ray
    #[arg(long)]
    pub bounces: Option<u32>,

    /// Samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Number of frames to render
    #[arg(long, default_value_t = 1)]
    pub frames: u32,

    /// Animation time between frames, in seconds
    #[arg(long, default_value_t = 1.0 / 30.0)]
    pub time_step: f32,

    /// Seed for the sampling jitter (random when absent)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory the frames are written to
    #[arg(short, long, default_value = "frames")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply the command line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(bounces) = self.bounces {
            config.bounce_limit = bounces;
        }
        if let Some(samples) = self.samples {
            config.sample_count = samples;
        }
    }
}
