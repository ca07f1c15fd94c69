use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use orbit_core::model::{NewContact, RelationshipType};

use super::{open, persisted};
use crate::output::format::format_contact;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct AddArgs {
    /// Display name
    pub name: String,

    /// Relationship type (family, friend, professional, romantic, acquaintance)
    #[arg(short = 't', long = "type", default_value = "friend")]
    pub kind: RelationshipType,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Comma-separated tags
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

pub fn run(args: &AddArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let mut ws = open(data_dir)?;

    let data = NewContact {
        name: args.name.clone(),
        kind: args.kind,
        notes: args.notes.clone(),
        tags: args.tags.clone(),
    };
    let applied = ws.store.add_contact(data).context("Failed to add contact")?;
    let contact = persisted(applied)?;

    print!("{}", format_contact(&contact, format));
    Ok(())
}
