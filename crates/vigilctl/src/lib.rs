//! CLI plumbing for vigilctl: config discovery, check execution, report
//! rendering. The probe/cascade/dispatcher core lives in `vigil_common`.

pub mod paths;
pub mod report;

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use vigil_common::{run_checks, Config, NetProbes};

/// Resolve the config, fan out the checks, print the report.
pub async fn run(config_flag: Option<PathBuf>) -> Result<()> {
    let candidates = paths::candidate_paths(config_flag);
    let (config, path) = Config::load_first(&candidates)?;
    info!(
        path = %path.display(),
        services = config.services.len(),
        "config loaded"
    );

    let suite = Arc::new(NetProbes::new());
    let results = run_checks(&config.services, suite).await;

    for line in report::render(&results) {
        println!("{line}");
    }

    Ok(())
}
