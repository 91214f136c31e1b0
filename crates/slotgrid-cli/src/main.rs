use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "slotgrid",
    about = "Slotgrid — weighted slot allocation",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run allocation rounds over a plan and print the resulting grid
    Run {
        /// Path to the plan file
        #[arg(short, long, default_value = "slotgrid.toml")]
        plan: String,
        /// Number of rounds to run
        #[arg(short, long, default_value_t = 1)]
        rounds: u32,
        /// Fill value written into winning cells (default: plan's [grid].fill)
        #[arg(short, long, allow_negative_numbers = true)]
        fill: Option<i64>,
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate a plan and report columns no entry can take
    Check {
        #[arg(short, long, default_value = "slotgrid.toml")]
        plan: String,
    },
    /// Generate a slotgrid.toml scaffold
    Init {
        /// Directory to write slotgrid.toml into
        #[arg(short, long, default_value = ".")]
        path: String,
        #[arg(short, long, default_value_t = 3)]
        entries: usize,
        #[arg(short, long, default_value_t = 4)]
        slots: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("slotgrid=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { plan, rounds, fill, format } => {
            commands::run::run(&plan, rounds, fill, &format)
        }
        Commands::Check { plan } => commands::check::check(&plan),
        Commands::Init { path, entries, slots } => {
            commands::init::init(&path, entries, slots)
        }
    }
}
