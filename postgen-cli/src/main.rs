//! postgen CLI - generate Postman collections from route tables.

mod colors;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "postgen")]
#[command(author, version, about = "Postman collections from route tables", long_about = None)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version information
    Version,
    /// Generate a Postman collection from a route table
    Generate {
        /// Route table (JSON array of mappings)
        #[arg(short, long)]
        routes: PathBuf,
        /// Output file path [default: $COLLECTION_OUTPUT or postman_collection.json]
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Application name, used as the collection name [default: $APP_NAME]
        #[arg(short, long)]
        name: Option<String>,
        /// Port the application listens on [default: $SERVER_PORT or 8080]
        #[arg(short, long)]
        port: Option<u16>,
        /// TOML configuration file (`[app] name`, `[server] port`, `[collection] output`)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the routes a route table expands to
    Routes {
        /// Route table (JSON array of mappings)
        #[arg(short, long)]
        routes: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match cli.command {
        Some(Commands::Version) => {
            print_version();
        }
        Some(Commands::Generate {
            routes,
            output,
            name,
            port,
            config,
        }) => {
            let config = commands::generate::GenerateConfig {
                routes,
                output,
                name,
                port,
                config,
            };
            if let Err(e) = commands::generate::execute(config) {
                eprintln!("{} {}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
        Some(Commands::Routes { routes }) => {
            if let Err(e) = commands::routes::execute(&routes) {
                eprintln!("{} {}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
        None => {
            println!();
            println!("  {}", "postgen".bold().custom_color(colors::mauve()));
            println!();
            println!("Run {} for usage information.", "postgen --help".cyan());
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_version() {
    println!("postgen-cli {}", env!("CARGO_PKG_VERSION"));
}
