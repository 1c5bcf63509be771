//! File logging.
//!
//! The terminal belongs to the animation, so log records go to
//! `<data dir>/woolfall.log` instead of stderr. `RUST_LOG` filters them.

use std::fs::{self, File};
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use env_logger::{Builder, Env, Target};

const LOG_FILE: &str = "woolfall.log";

/// Route `log` records to the log file. Returns the file path, if any.
///
/// Without a data directory logging stays disabled.
pub fn init() -> Result<Option<PathBuf>> {
    let Some(dir) = woolfall_config::data_dir() else {
        return Ok(None);
    };
    fs::create_dir_all(&dir).wrap_err_with(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = File::create(&path).wrap_err_with(|| format!("failed to open {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("failed to install logger")?;
    Ok(Some(path))
}
