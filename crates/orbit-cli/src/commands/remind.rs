use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use super::{open, persisted, resolve_contact};
use crate::output::format::format_reminders;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct RemindArgs {
    /// Contact ID (full or prefix)
    pub id: String,

    /// Days from now
    #[arg(value_parser = clap::value_parser!(i64).range(0..=3650))]
    pub days: i64,
}

pub fn run(args: &RemindArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let mut ws = open(data_dir)?;
    let id = resolve_contact(&ws.store, &args.id)?;

    let applied = ws
        .store
        .schedule_reminder(&id, args.days)
        .context("Failed to schedule reminder")?;
    let reminder = persisted(applied)?;

    print!("{}", format_reminders(&[&reminder], format));
    Ok(())
}
