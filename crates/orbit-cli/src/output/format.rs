use chrono::{DateTime, Utc};
use serde::Serialize;

use orbit_core::model::{Contact, EnergyReading, Interaction, Reminder, ReminderStatus};
use orbit_core::Stats;
use orbit_query::sentiment::{ContactSentiment, OverallInsights};
use orbit_query::{GroupAnalysis, HealthBucket, ScoredContact, Suggestion, Trend};

use super::OutputFormat;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn bucket_label(bucket: HealthBucket) -> &'static str {
    match bucket {
        HealthBucket::Healthy => "healthy",
        HealthBucket::Moderate => "moderate",
        HealthBucket::NeedsAttention => "needs attention",
    }
}

fn date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

pub fn format_contact_list(scored: &[ScoredContact<'_>], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => to_json(scored),
        OutputFormat::Text => format_contact_list_text(scored),
    }
}

fn format_contact_list_text(scored: &[ScoredContact<'_>]) -> String {
    if scored.is_empty() {
        return "No contacts found.\n".to_string();
    }

    let mut out = String::new();
    for s in scored {
        let c = s.contact;
        let last = c
            .last_interaction
            .map(date)
            .unwrap_or_else(|| "never".to_string());
        out.push_str(&format!(
            "{} {} {:<24} {:<13} {:>3} {:<16} last: {last}\n",
            c.kind.emoji(),
            c.id.short(),
            c.name,
            c.kind.label(),
            s.score,
            bucket_label(HealthBucket::from_score(s.score)),
        ));
    }
    out
}

pub fn format_contact(contact: &Contact, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => to_json(contact),
        OutputFormat::Text => format!(
            "{} {} ({}) {}\n",
            contact.kind.emoji(),
            contact.name,
            contact.kind.label(),
            contact.id
        ),
    }
}

pub fn format_contact_full(
    contact: &Contact,
    interactions: &[&Interaction],
    score: u8,
    fmt: OutputFormat,
) -> String {
    match fmt {
        OutputFormat::Json => to_json(&serde_json::json!({
            "contact": contact,
            "health": score,
            "interactions": interactions,
        })),
        OutputFormat::Text => format_contact_full_text(contact, interactions, score),
    }
}

fn format_contact_full_text(contact: &Contact, interactions: &[&Interaction], score: u8) -> String {
    let mut out = String::new();
    out.push_str(&format!("Contact: {}\n", contact.id));
    out.push_str(&format!("Name:    {}\n", contact.name));
    out.push_str(&format!(
        "Type:    {} {}\n",
        contact.kind.emoji(),
        contact.kind.label()
    ));
    out.push_str(&format!("Energy:  {}\n", contact.energy.label()));
    out.push_str(&format!(
        "Health:  {score} ({})\n",
        bucket_label(HealthBucket::from_score(score))
    ));
    out.push_str(&format!("Added:   {}\n", date(contact.created_at)));
    if !contact.tags.is_empty() {
        out.push_str(&format!("Tags:    {}\n", contact.tags.join(", ")));
    }
    if let Some(notes) = &contact.notes {
        out.push_str(&format!("Notes:   {notes}\n"));
    }

    out.push_str(&format!("\n--- Interactions ({}) ---\n", interactions.len()));
    for i in interactions {
        out.push_str(&format_interaction_line(i));
    }
    out
}

fn format_interaction_line(i: &Interaction) -> String {
    let mut line = format!(
        "  {} {} {:<10} [{}] {}",
        i.kind.emoji(),
        date(i.created_at),
        i.kind.label(),
        i.mood,
        i.summary
    );
    if !i.topics.is_empty() {
        let tags: Vec<String> = i.topics.iter().map(|t| format!("#{t}")).collect();
        line.push_str(&format!("  {}", tags.join(" ")));
    }
    line.push('\n');
    line
}

pub fn format_interaction(interaction: &Interaction, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => to_json(interaction),
        OutputFormat::Text => format_interaction_line(interaction),
    }
}

pub fn format_stats(stats: &Stats, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => to_json(stats),
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str("Orbit Statistics\n");
            out.push_str("================\n");
            out.push_str(&format!("Total contacts:     {}\n", stats.total_contacts));
            out.push_str(&format!("Total interactions: {}\n", stats.total_interactions));
            if !stats.by_type.is_empty() {
                out.push_str("\nBy Type:\n");
                for (kind, count) in &stats.by_type {
                    out.push_str(&format!("  {} {}: {count}\n", kind.emoji(), kind.label()));
                }
            }
            out
        }
    }
}

pub fn format_sentiment(
    results: &[ContactSentiment<'_>],
    overall: &OverallInsights,
    fmt: OutputFormat,
) -> String {
    match fmt {
        OutputFormat::Json => to_json(&serde_json::json!({
            "contacts": results,
            "overall": overall,
        })),
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("{}\n", overall.summary));
            out.push_str(&format!(
                "Positive: {}  Negative: {}  Improving: {}  Declining: {}\n\n",
                overall.positive, overall.negative, overall.improving, overall.declining
            ));
            for r in results {
                out.push_str(&format!(
                    "{} {:<24} {:<9} {:>6.1} {:<10} {} ({} interactions)\n",
                    r.descriptor.emoji,
                    r.contact.name,
                    r.sentiment.as_str(),
                    r.score,
                    r.trend.as_str(),
                    r.insight,
                    r.interaction_count,
                ));
            }
            out
        }
    }
}

pub fn format_suggestions(suggestions: &[Suggestion<'_>], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => to_json(suggestions),
        OutputFormat::Text => {
            if suggestions.is_empty() {
                return "Everyone is up to date.\n".to_string();
            }
            let mut out = String::new();
            for s in suggestions {
                let marker = match s.priority {
                    orbit_query::Priority::High => "!!",
                    orbit_query::Priority::Medium => "! ",
                };
                out.push_str(&format!("{marker} {} {}\n", s.contact.id.short(), s.message));
            }
            out
        }
    }
}

pub fn format_analysis(analysis: &GroupAnalysis, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => to_json(analysis),
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str("Group Analysis\n");
            out.push_str("==============\n");
            out.push_str(&format!("Contacts:     {}\n", analysis.total_contacts));
            out.push_str(&format!("Interactions: {}\n", analysis.total_interactions));

            out.push_str("\nHealth:\n");
            out.push_str(&format!("  healthy:         {}\n", analysis.health.healthy));
            out.push_str(&format!("  moderate:        {}\n", analysis.health.moderate));
            out.push_str(&format!(
                "  needs attention: {}\n",
                analysis.health.needs_attention
            ));

            out.push_str("\nEnergy:\n");
            for (level, count) in &analysis.by_energy {
                out.push_str(&format!("  {:<11} {count}\n", level.label()));
            }

            if !analysis.by_type.is_empty() {
                out.push_str("\nBy Type:\n");
                for (kind, count) in &analysis.by_type {
                    out.push_str(&format!("  {} {}: {count}\n", kind.emoji(), kind.label()));
                }
            }

            if !analysis.insights.is_empty() {
                out.push_str("\nInsights:\n");
                for insight in &analysis.insights {
                    out.push_str(&format!("  - {insight}\n"));
                }
            }
            out
        }
    }
}

pub fn format_energy(
    contact: &Contact,
    history: &[EnergyReading],
    average: f64,
    trend: Trend,
    fmt: OutputFormat,
) -> String {
    match fmt {
        OutputFormat::Json => to_json(&serde_json::json!({
            "contactId": contact.id,
            "current": contact.energy,
            "average": average,
            "trend": trend,
            "history": history,
        })),
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!(
                "{}: {} now, average {average:.2}, {}\n",
                contact.name,
                contact.energy.label(),
                trend.as_str()
            ));
            for reading in history {
                out.push_str(&format!(
                    "  {} {}\n",
                    reading.recorded_at.format("%Y-%m-%d %H:%M"),
                    reading.energy.label()
                ));
            }
            out
        }
    }
}

pub fn format_reminders(reminders: &[&Reminder], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => to_json(reminders),
        OutputFormat::Text => {
            if reminders.is_empty() {
                return "No reminders.\n".to_string();
            }
            let mut out = String::new();
            for r in reminders {
                let status = match r.status {
                    ReminderStatus::Pending => " ",
                    ReminderStatus::Completed => "x",
                };
                out.push_str(&format!(
                    "[{status}] {} {} reach out to {}\n",
                    r.id.short(),
                    r.scheduled_for.format("%Y-%m-%d %H:%M"),
                    r.contact_name
                ));
            }
            out
        }
    }
}
