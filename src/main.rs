use anyhow::Result;
use clap::{Parser, Subcommand};
use strukter_inquiry::Inquiry;

/// strukter - Vacation rental technology website
#[derive(Parser)]
#[command(name = "strukter")]
#[command(about = "Landing page and contact form for Strukter Services", long_about = None)]
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
    /// Send one inquiry through the configured email provider
    Send {
        #[arg(long)]
        fname: String,
        #[arg(long)]
        lname: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = strukter::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    strukter::observability::init_observability(
        "strukter",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => strukter::cli::serve(config, host, port).await,
        Commands::Send {
            fname,
            lname,
            email,
            phone,
            message,
        } => {
            strukter::cli::send(
                config,
                Inquiry {
                    fname,
                    lname,
                    email,
                    phone,
                    message,
                },
            )
            .await
        }
    }
}
