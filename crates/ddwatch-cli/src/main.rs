mod cmd;
mod output;
mod settings;

use clap::{Parser, Subcommand};
use settings::Overrides;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ddwatch",
    about = "Report the latest ddclient update and health-check status",
    version,
    propagate_version = true
)]
struct Cli {
    /// YAML config file (keys: ddclient_log, healthcheck_log, ddclient_bin, ddclient_conf)
    #[arg(long, global = true, env = "DDWATCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0", env = "DDWATCH_HOST")]
        host: String,

        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "8000", env = "DDWATCH_PORT")]
        port: u16,
    },

    /// Print the latest status fields from both logs
    Status,

    /// Run ddclient once and record its output in the log
    Run,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = settings::resolve(cli.config.as_deref(), &cli.overrides).and_then(|config| {
        match cli.command {
            Commands::Serve { host, port } => cmd::serve::run(config, &host, port),
            Commands::Status => cmd::status::run(&config, cli.json),
            Commands::Run => cmd::run::run(&config, cli.json),
        }
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
