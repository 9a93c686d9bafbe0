use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use warpfield::canvas::PixelCanvas;
use warpfield::cli::{Cli, Command, RunArgs};
use warpfield::driver::{self, StopFlag};
use warpfield::error::Error;
use warpfield::host::TerminalHost;
use warpfield::input::Controls;
use warpfield::manifest::PrecacheManifest;
use warpfield::renderer::StarfieldRenderer;
use warpfield::types::Config;
use warpfield::{config, logging, random};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Precache {
            manifest,
            root,
            print,
        }) => {
            logging::init_stderr_logging(cli.run.log_level.as_deref());
            check_manifest(&manifest, &root, print)
        }
        None => run_starfield(&cli.run).await,
    }
}

fn check_manifest(
    path: &Path,
    root: &Path,
    print: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let manifest = PrecacheManifest::load(path)?;

    if print {
        println!("{}", manifest.to_js_array());
    }

    let missing = manifest.missing_assets(root);
    if missing.is_empty() {
        tracing::info!(
            cache = %manifest.cache_name,
            urls = manifest.urls.len(),
            "all precache assets present"
        );
        return Ok(ExitCode::SUCCESS);
    }

    for url in &missing {
        eprintln!("missing: {} ({})", url, manifest.resolve(root, url).display());
    }
    eprintln!("{} of {} assets missing", missing.len(), manifest.urls.len());
    Ok(ExitCode::FAILURE)
}

async fn run_starfield(args: &RunArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let loaded = config::read_config(&config_path);
    let mut cfg = loaded.as_ref().cloned().unwrap_or_default();
    cfg.apply_cli_overrides(args);

    let log_path = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init_file_logging(&log_path, cfg.log_level.as_deref()) {
        eprintln!("Logging disabled ({}): {}", log_path.display(), e);
    }
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, path = %config_path.display(), "using default config");
    }

    config::validate(&cfg)?;
    if args.save_config {
        config::save_config(&config_path, &cfg)?;
        tracing::info!(path = %config_path.display(), "config saved");
    }

    // Terminal setup
    let stop = StopFlag::new();
    let controls = Controls::new(stop.clone(), cfg.show_hud);
    let mut host = TerminalHost::enter(cfg.frames_per_second, controls)?;

    let result = animate(&mut host, &cfg, &stop).await;

    // Restore terminal
    host.restore()?;

    match &result {
        Ok(frames) => tracing::info!(frames, "exiting"),
        Err(e) => {
            tracing::error!(error = %e, "animation failed");
            eprintln!("Error: {}", e);
        }
    }

    Ok(ExitCode::from(driver::exit_status(&result)))
}

async fn animate(host: &mut TerminalHost, cfg: &Config, stop: &StopFlag) -> Result<u64, Error> {
    let viewport = host.viewport()?;
    let canvas = PixelCanvas::new(viewport.width, viewport.height);
    let rng = random::make_rng(cfg.seed);
    let mut renderer = StarfieldRenderer::new(canvas, rng, cfg.field_params());
    driver::run(&mut renderer, host, stop).await
}
