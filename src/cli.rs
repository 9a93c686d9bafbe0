//! Command-line arguments.

use crate::types::Config;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "warpfield", version, about = "A warp-speed starfield for your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Flags for the animation. CLI values override `config.json`.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Stars per column of terminal width.
    #[arg(long)]
    pub density: Option<f64>,

    /// Target frame rate.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Seed for a reproducible field.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with the status line hidden.
    #[arg(long)]
    pub no_hud: bool,

    /// Path to the config file (overrides the default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective settings back to the config file before starting.
    #[arg(long)]
    pub save_config: bool,

    /// Where to write the log.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter (error, warn, info, debug, trace or a directive list).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate a precache manifest and check its assets exist.
    Precache {
        /// Manifest JSON file.
        manifest: PathBuf,

        /// Directory the asset URLs resolve against.
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Print the `urlsToCache` array for a service worker.
        #[arg(long)]
        print: bool,
    },
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &RunArgs) {
        if let Some(density) = args.density {
            self.density = density;
        }
        if let Some(fps) = args.fps {
            self.frames_per_second = fps;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if args.no_hud {
            self.show_hud = false;
        }
        if let Some(ref level) = args.log_level {
            self.log_level = Some(level.clone());
        }
    }
}
