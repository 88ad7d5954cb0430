use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use server_config::{load_config, ServerConfig};

#[derive(Parser)]
#[command(name = "config-cli")]
#[command(about = "Management CLI for server configuration documents", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "etc/server.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the document and report what it binds
    Check,
    /// Print the normalized model as pretty JSON
    Dump,
    /// List virtual-host bindings
    Hosts,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server_config=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.file)?;

    match cli.command {
        Commands::Check => check(&config),
        Commands::Dump => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Hosts => hosts(&config),
    }

    Ok(())
}

fn check(config: &ServerConfig) {
    println!(
        "{} ({}) listening on {}:{} via {}",
        config.name(),
        config.server_type(),
        config.address(),
        config.port(),
        config.transport()
    );
    println!("  modules:             {}", config.modules().len());
    println!("  connection handlers: {}", config.connection_handlers().len());
    println!("  handlers:            {}", config.handlers().len());
    println!("  locations:           {}", config.locations().len());
    println!("  rewrites:            {}", config.rewrites().len());
    println!("  virtual hosts:       {}", config.virtual_hosts().len());
    println!("  certificates:        {}", config.certificates().len());
}

fn hosts(config: &ServerConfig) {
    if config.virtual_hosts().is_empty() {
        println!("no virtual hosts declared");
        return;
    }

    let mut hostnames: Vec<_> = config.virtual_hosts().keys().collect();
    hostnames.sort();
    for hostname in hostnames {
        let host = &config.virtual_hosts()[hostname];
        println!(
            "{}: {} params, {} locations, {} rewrites",
            hostname,
            host.params().len(),
            host.locations().len(),
            host.rewrites().len()
        );
    }
}
