use std::path::Path;

use anyhow::Result;
use orbit_query::{analyze_all, overall_insights};

use super::open;
use crate::output::format::format_sentiment;
use crate::output::OutputFormat;

pub fn run(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let ws = open(data_dir)?;
    let results = analyze_all(&ws.store);
    let overall = overall_insights(&results);
    print!("{}", format_sentiment(&results, &overall, format));
    Ok(())
}
