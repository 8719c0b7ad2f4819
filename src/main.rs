use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tpl_board::backend::{HttpRepositoryClient, RepositoryClient};
use tpl_board::config::loader;
use tpl_board::panel::surface::shared_stdin;
use tpl_board::panel::{PanelManager, StdioSurface, render, validate_repository_url};
use tpl_board::types::EnablementChange;

#[derive(Parser)]
#[command(name = "tpl-board", version, about = "Template repositories panel")]
struct Cli {
    /// Path to config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config).
    #[arg(long)]
    backend: Option<String>,

    /// Enable debug logging to debug.log.
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive panel (reads JSON UI messages from stdin).
    Panel,
    /// Print the current repository list.
    List,
    /// Register a new template repository.
    Add {
        /// Raw content URL of the repository index.
        url: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Remove a template repository.
    Remove { url: String },
    /// Enable a template repository.
    Enable { url: String },
    /// Disable a template repository.
    Disable { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing.
    if cli.debug {
        let file = std::fs::File::create("debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(file)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    // Load config, then apply CLI overrides.
    let mut config = loader::load_config(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config.backend.base_url = backend;
    }

    // Install the rustls CryptoProvider before any TLS client is constructed;
    // rustls 0.23 no longer auto-installs a provider.
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install default CryptoProvider"))?;

    let client = HttpRepositoryClient::new(&config.backend)?;

    tracing::info!("tpl-board starting");

    match cli.command.unwrap_or(Commands::Panel) {
        Commands::Panel => {
            let input = shared_stdin();
            let surface_input = input.clone();
            let mut manager = PanelManager::new(Box::new(move || {
                Box::new(StdioSurface::new(surface_input.clone()))
            }));
            tpl_board::host::run(&mut manager, &client, input).await?;
        }
        Commands::List => {
            let repositories = client.list().await?;
            println!("{}", render(&repositories).to_text());
        }
        Commands::Add { url, description } => {
            if let Err(hint) = validate_repository_url(&url) {
                anyhow::bail!("{hint}");
            }
            let description = description.unwrap_or_else(|| "(No description)".to_owned());
            client.add(&url, &description).await?;
            println!("added {url}");
        }
        Commands::Remove { url } => {
            client.remove(&url).await?;
            println!("removed {url}");
        }
        Commands::Enable { url } => {
            set_enabled(&client, url, true).await?;
        }
        Commands::Disable { url } => {
            set_enabled(&client, url, false).await?;
        }
    }

    Ok(())
}

async fn set_enabled(client: &HttpRepositoryClient, url: String, enable: bool) -> Result<()> {
    let batch = [EnablementChange {
        repo_id: url.clone(),
        enable,
    }];
    client.set_enablement(&batch).await?;
    println!("{} {url}", if enable { "enabled" } else { "disabled" });
    Ok(())
}
