use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "teamgrid",
    about = "TeamGrid — constraint-first team balancing",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Balance a roster file onto teams.
    ///
    /// The roster is JSON: {"players": [...], "existing_teams": [[...], ...]}.
    /// Constraints come from teamgrid.toml when --config is given.
    Balance {
        /// Roster JSON file
        #[arg(short, long)]
        roster: String,
        /// Number of teams
        #[arg(short, long)]
        teams: usize,
        /// Players per team
        #[arg(short, long)]
        size: usize,
        /// Path to teamgrid.toml
        #[arg(short, long)]
        config: Option<String>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Audit already-formed teams for empty rosters and elite overflow
    Validate {
        /// Teams JSON file: {"teams": [[...], ...]}
        #[arg(short, long)]
        teams: String,
        /// Override the elite cap from the config
        #[arg(long)]
        max_elite: Option<usize>,
        /// Path to teamgrid.toml
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Write a teamgrid.toml with default constraints
    Init {
        #[arg(short, long, default_value = ".")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("teamgrid=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Balance {
            roster,
            teams,
            size,
            config,
            format,
        } => commands::balance::run(&roster, teams, size, config.as_deref(), &format),
        Commands::Validate {
            teams,
            max_elite,
            config,
        } => commands::validate::run(&teams, max_elite, config.as_deref()),
        Commands::Init { path } => commands::init::run(&path),
    }
}
