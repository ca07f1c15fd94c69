use std::path::Path;

use anyhow::Result;

use super::open;
use crate::output::format::format_stats;
use crate::output::OutputFormat;

pub fn run(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let ws = open(data_dir)?;
    print!("{}", format_stats(&ws.store.get_stats(), format));
    Ok(())
}
