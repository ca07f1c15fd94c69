use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use orbit_query::calculate_health_score;

use super::{open, resolve_contact};
use crate::output::format::format_contact_full;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ShowArgs {
    /// Contact ID (full or prefix)
    pub id: String,
}

pub fn run(args: &ShowArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let ws = open(data_dir)?;
    let id = resolve_contact(&ws.store, &args.id)?;

    let view = ws.store.get_contact_with_interactions(&id);
    let Some(contact) = view.contact else {
        anyhow::bail!("Contact '{id}' not found");
    };
    let score = calculate_health_score(&ws.store, &id, Utc::now());

    print!(
        "{}",
        format_contact_full(contact, &view.interactions, score, format)
    );
    Ok(())
}
