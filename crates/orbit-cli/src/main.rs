use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "orbit",
    version,
    about = "Keep track of the people in your life and who needs a check-in"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// Directory holding config.json and the contacts snapshot
    #[arg(long, global = true, env = "ORBIT_DATA_DIR", default_value = ".orbit")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = cli.data_dir.as_path();
    let format = cli.format;
    match &cli.command {
        commands::Commands::Init(args) => commands::init::run(args, dir),
        commands::Commands::Add(args) => commands::add::run(args, dir, format),
        commands::Commands::Edit(args) => commands::edit::run(args, dir, format),
        commands::Commands::Rm(args) => commands::rm::run(args, dir),
        commands::Commands::Log(args) => commands::log::run(args, dir, format),
        commands::Commands::List(args) => commands::list::run(args, dir, format),
        commands::Commands::Show(args) => commands::show::run(args, dir, format),
        commands::Commands::Stats => commands::stats::run(dir, format),
        commands::Commands::Attention(args) => commands::attention::run(args, dir, format),
        commands::Commands::Sentiment => commands::sentiment::run(dir, format),
        commands::Commands::Suggest => commands::suggest::run(dir, format),
        commands::Commands::Analyze => commands::analyze::run(dir, format),
        commands::Commands::Energy(args) => commands::energy::run(args, dir, format),
        commands::Commands::Remind(args) => commands::remind::run(args, dir, format),
        commands::Commands::Reminders(args) => commands::reminders::run(args, dir, format),
        commands::Commands::Done(args) => commands::done::run(args, dir),
    }
}
