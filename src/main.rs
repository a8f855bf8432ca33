use anyhow::Result;
use clap::{Parser, Subcommand};
use kvithyld::cli::submit::SubmitArgs;

/// kvithyld - Kvithyld Sikkerhet website
#[derive(Parser)]
#[command(name = "kvithyld")]
#[command(about = "Website and contact form for Kvithyld Sikkerhet", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send one contact-form submission through the configured submitter
    Submit(SubmitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = kvithyld::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    kvithyld::observability::init_observability(
        "kvithyld",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => kvithyld::cli::server::serve(config, host, port).await,
        Commands::Submit(args) => {
            let submitter = kvithyld_contact::create_submitter(&config.contact)?;
            kvithyld::cli::submit::submit(submitter, args).await
        }
    }
}
