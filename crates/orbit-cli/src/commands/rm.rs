use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::{open, persisted, resolve_contact};

#[derive(Args)]
pub struct RmArgs {
    /// Contact ID (full or prefix)
    pub id: String,
}

pub fn run(args: &RmArgs, data_dir: &Path) -> Result<()> {
    let mut ws = open(data_dir)?;
    let id = resolve_contact(&ws.store, &args.id)?;

    if let Some(contact) = persisted(ws.store.delete_contact(&id))? {
        println!("Deleted {} and their history.", contact.name);
    }
    Ok(())
}
