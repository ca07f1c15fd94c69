use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use orbit_query::analyze_group;

use super::open;
use crate::output::format::format_analysis;
use crate::output::OutputFormat;

pub fn run(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let ws = open(data_dir)?;
    let analysis = analyze_group(&ws.store, Utc::now());
    print!("{}", format_analysis(&analysis, format));
    Ok(())
}
