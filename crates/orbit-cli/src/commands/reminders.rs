use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use orbit_core::model::Reminder;

use super::open;
use crate::output::format::format_reminders;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct RemindersArgs {
    /// Only pending reminders that are due now
    #[arg(long)]
    pub due: bool,
}

pub fn run(args: &RemindersArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let ws = open(data_dir)?;

    let reminders: Vec<&Reminder> = if args.due {
        ws.store.due_reminders(Utc::now())
    } else {
        let mut all: Vec<&Reminder> = ws.store.reminders().iter().collect();
        all.sort_by_key(|r| r.scheduled_for);
        all
    };

    print!("{}", format_reminders(&reminders, format));
    Ok(())
}
