//! Measure the brand logo and print optimization advice

use anyhow::{Context, Result};
use cli_lib::render::{self, Style};
use cli_lib::util::find_project_root;
use report::{ReportConfig, SizeReport};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

pub fn run(root: Option<PathBuf>, config_path: Option<PathBuf>, style: Style) -> Result<()> {
    let config = match config_path {
        Some(path) => ReportConfig::load(&path)?,
        None => ReportConfig::default(),
    };

    let root = match root {
        Some(root) => root,
        None => find_project_root(&config.logo_path)?,
    };
    debug!(root = %root.display(), ?config, "Resolved report settings");

    let logo_path = config.logo_path_in(&root);
    let report = SizeReport::measure(&logo_path, config.threshold_bytes)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::write_report(&mut out, &report, &config.logo_path, style)
        .and_then(|()| out.flush())
        .context("Failed to write report")?;

    Ok(())
}
