mod config;

use anyhow::Result;
use clap::Parser;
use dhub_socket::{EndpointName, EndpointPath, Platform};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, Config};

/// Print the local IPC endpoint path a dhub process binds or connects to
#[derive(Debug, Parser)]
#[command(name = "dhub-socket-path", version, about, long_about = None)]
struct Cli {
    /// Logical endpoint name (defaults to the config value, then `dhub`)
    name: Option<String>,

    /// Resolve for this platform instead of the host (`unix` or `windows`)
    #[arg(long)]
    platform: Option<Platform>,

    /// Print a JSON object instead of the bare path
    #[arg(long)]
    json: bool,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Resolved {
    name: String,
    platform: Platform,
    path: String,
}

fn resolve(cli: &Cli, config: &Config) -> Resolved {
    let name = cli
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .or(config.endpoint.name.as_deref());
    let name = EndpointName::new(name);
    let platform = cli
        .platform
        .or(config.endpoint.platform)
        .unwrap_or_else(Platform::current);

    if !name.is_path_safe() {
        warn!("Endpoint name {:?} contains path separators or NUL bytes", name.as_str());
    }

    let path = EndpointPath::new(platform, &name);
    debug!("Resolved {} on {} to {}", name, platform, path);

    Resolved {
        name: name.to_string(),
        platform,
        path: path.into_string(),
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config);

    let resolved = resolve(&cli, &config);
    if cli.json {
        println!("{}", serde_json::to_string(&resolved)?);
    } else {
        println!("{}", resolved.path);
    }

    Ok(())
}
