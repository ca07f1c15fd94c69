use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use orbit_core::model::RelationshipType;
use orbit_query::health::{calculate_health_score, score_all};
use orbit_query::ScoredContact;

use super::open;
use crate::output::format::format_contact_list;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ListArgs {
    /// Only show contacts of this relationship type
    #[arg(short = 't', long = "type")]
    pub kind: Option<RelationshipType>,
}

pub fn run(args: &ListArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let ws = open(data_dir)?;
    let now = Utc::now();

    let scored: Vec<ScoredContact<'_>> = match args.kind {
        Some(kind) => ws
            .store
            .get_by_type(kind)
            .into_iter()
            .map(|contact| ScoredContact {
                contact,
                score: calculate_health_score(&ws.store, &contact.id, now),
            })
            .collect(),
        None => score_all(&ws.store, now),
    };

    print!("{}", format_contact_list(&scored, format));
    Ok(())
}
