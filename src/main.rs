use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

use vita::core::config::{self, CliOverrides};
use vita::{resume, tui};

#[derive(Parser)]
#[command(name = "vita", version, about = "Browse a résumé as nested menus in the terminal")]
struct Args {
    /// Config file to read instead of ~/.vita/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where to write the log (default ~/.vita/vita.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Config errors are not fatal; they are logged once the logger is up.
    let (file_config, config_error) = match config::load_config(args.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => (config::VitaConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            log_file: args.log_file,
        },
    );

    // Initialize file logger. The terminal belongs to the TUI, so the log
    // never goes to stdout/stderr.
    if let Some(path) = &resolved.log_file {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        if let Ok(log_file) = File::create(path) {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
    }

    log::info!("Vita v{} starting up", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(&resolved, resume::root())
}
