use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use orbit_query::needing_attention;

use super::open;
use crate::output::format::format_contact_list;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct AttentionArgs {
    /// Health score cutoff (defaults to attention_threshold from config.json)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: Option<u8>,
}

pub fn run(args: &AttentionArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let ws = open(data_dir)?;
    let threshold = args.threshold.unwrap_or(ws.config.attention_threshold);

    let weak = needing_attention(&ws.store, threshold, Utc::now());
    print!("{}", format_contact_list(&weak, format));
    Ok(())
}
