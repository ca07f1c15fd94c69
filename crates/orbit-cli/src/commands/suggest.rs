use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use orbit_query::follow_up_suggestions;

use super::open;
use crate::output::format::format_suggestions;
use crate::output::OutputFormat;

pub fn run(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let ws = open(data_dir)?;
    let suggestions = follow_up_suggestions(&ws.store, Utc::now());
    print!("{}", format_suggestions(&suggestions, format));
    Ok(())
}
