use std::path::Path;

use anyhow::Result;
use clap::Args;
use orbit_query::{energy_average, energy_trend};

use super::{open, resolve_contact};
use crate::output::format::format_energy;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct EnergyArgs {
    /// Contact ID (full or prefix)
    pub id: String,
}

pub fn run(args: &EnergyArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let ws = open(data_dir)?;
    let id = resolve_contact(&ws.store, &args.id)?;
    let Some(contact) = ws.store.contact(&id) else {
        anyhow::bail!("Contact '{id}' not found");
    };

    let history = ws.store.energy_history(&id);
    print!(
        "{}",
        format_energy(
            contact,
            history,
            energy_average(history),
            energy_trend(history),
            format
        )
    );
    Ok(())
}
