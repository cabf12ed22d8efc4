//! Isotank portal server binary

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use isoportal_config::{ConfigLoader, PortalConfig, SourceKind};
use isoportal_logging::init_tracing;
use isoportal_server::Server;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Inventory source: local or mbm
    #[arg(long)]
    source: Option<SourceKind>,

    /// JSON fixture for the local source
    #[arg(long, value_name = "FILE")]
    fixture: Option<String>,

    /// Print a sample configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", PortalConfig::generate_sample());
        return Ok(());
    }

    let mut config = ConfigLoader::new().load(cli.config.as_deref())?;
    apply_cli_overrides(&mut config, &cli);
    config.validate_all()?;

    init_tracing(&config.logging)?;

    let server = Server::new(config).await?;
    server.start().await
}

fn apply_cli_overrides(config: &mut PortalConfig, cli: &Cli) {
    if let Some(bind) = &cli.bind {
        config.server.bind_address = bind.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(kind) = cli.source {
        config.source.kind = kind;
    }
    if let Some(fixture) = &cli.fixture {
        config.source.kind = SourceKind::Local;
        config.source.fixture_path = Some(fixture.clone());
    }
}
