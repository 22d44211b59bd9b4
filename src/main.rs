use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "rostr")]
#[command(about = "Resource search and workload assignment client")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GUI (search, profiles, dashboard)
    Gui,

    /// Search for resources with an AI-ranked query
    Search {
        /// Natural-language query, e.g. "senior react developer"
        query: String,

        /// How many ranked results to request
        #[arg(long, default_value_t = 20)]
        top_k: u32,
    },

    /// List resources
    Resources {
        /// Only show resources with this availability (available, busy)
        #[arg(long)]
        availability: Option<String>,

        /// Only show resources with this skill (fuzzy matched)
        #[arg(long)]
        skill: Option<String>,

        /// Only show resources in this department
        #[arg(long)]
        department: Option<String>,
    },

    /// Show one resource's full profile
    Show {
        /// Resource id
        id: i64,
    },

    /// Assign a task to a resource
    Assign {
        /// Task id
        task_id: i64,

        /// Resource id
        resource_id: i64,
    },

    /// Show dashboard statistics
    Stats,

    /// Initialize a ~/.rostr/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Search { query, top_k }) => {
            cli::search::search_command(&query, top_k)?;
        }
        Some(Commands::Resources {
            availability,
            skill,
            department,
        }) => {
            cli::resources::resources_command(availability, skill, department)?;
        }
        Some(Commands::Show { id }) => {
            cli::show::show_command(id)?;
        }
        Some(Commands::Assign {
            task_id,
            resource_id,
        }) => {
            cli::assign::assign_command(task_id, resource_id)?;
        }
        Some(Commands::Stats) => {
            cli::stats::stats_command()?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(force)?;
        }
        Some(Commands::Gui) | None => {
            // Default: run the GUI application
            rostr::gui::run_gui()?;
        }
    }

    Ok(())
}
