use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use super::{open, persisted, resolve_reminder};

#[derive(Args)]
pub struct DoneArgs {
    /// Reminder ID (full or prefix)
    pub id: String,
}

pub fn run(args: &DoneArgs, data_dir: &Path) -> Result<()> {
    let mut ws = open(data_dir)?;
    let id = resolve_reminder(&ws.store, &args.id)?;

    let applied = ws
        .store
        .complete_reminder(&id)
        .with_context(|| format!("Failed to complete reminder '{id}'"))?;
    let reminder = persisted(applied)?;

    println!("Done: reach out to {}.", reminder.contact_name);
    Ok(())
}
