use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use orbit_core::model::{ContactUpdate, EnergyLevel, RelationshipType};

use super::{open, persisted, resolve_contact};
use crate::output::format::format_contact;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct EditArgs {
    /// Contact ID (full or prefix)
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(short = 't', long = "type")]
    pub kind: Option<RelationshipType>,

    /// Notes (an empty string clears them)
    #[arg(long)]
    pub notes: Option<String>,

    /// Comma-separated tags, replacing the current ones
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Energy level (draining, low, neutral, good, nourishing)
    #[arg(short, long)]
    pub energy: Option<EnergyLevel>,
}

pub fn run(args: &EditArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let mut ws = open(data_dir)?;
    let id = resolve_contact(&ws.store, &args.id)?;

    let update = ContactUpdate {
        name: args.name.clone(),
        kind: args.kind,
        notes: args.notes.clone(),
        tags: args.tags.clone(),
        energy: args.energy,
    };
    if update.is_empty() {
        anyhow::bail!("Nothing to change. Pass at least one of --name, --type, --notes, --tags, --energy");
    }

    let applied = ws
        .store
        .update_contact(&id, update)
        .with_context(|| format!("Failed to update contact '{id}'"))?;
    let contact = persisted(applied)?;

    print!("{}", format_contact(&contact, format));
    Ok(())
}
