use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use orbit_core::model::{InteractionKind, Mood, NewInteraction};

use super::{open, persisted, resolve_contact};
use crate::output::format::format_interaction;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct LogArgs {
    /// Contact ID (full or prefix)
    pub id: String,

    /// What happened
    pub summary: String,

    /// How it felt (positive, neutral, negative)
    #[arg(short, long, default_value = "neutral")]
    pub mood: Mood,

    /// Channel (call, text, in_person, email, video, other)
    #[arg(short, long, default_value = "in_person")]
    pub kind: InteractionKind,

    /// Comma-separated topics
    #[arg(long, default_value = "")]
    pub topics: String,
}

pub fn run(args: &LogArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let mut ws = open(data_dir)?;
    let id = resolve_contact(&ws.store, &args.id)?;

    let data = NewInteraction::new(id, args.summary.clone())
        .mood(args.mood)
        .kind(args.kind)
        .topics(&args.topics);
    let applied = ws
        .store
        .add_interaction(data)
        .context("Failed to log interaction")?;
    let interaction = persisted(applied)?;

    print!("{}", format_interaction(&interaction, format));
    Ok(())
}
