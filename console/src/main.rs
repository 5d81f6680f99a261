//! Warehouse Console - terminal client
//!
//! Connects to the warehouse REST backend and drives one screen at a time
//! from commands typed on stdin.

use std::path::PathBuf;

use clap::Parser;
use shared::Language;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warehouse_console::config::{Config, Overrides};
use warehouse_console::routes::Route;
use warehouse_console::shell::Shell;
use warehouse_console::views::ViewContext;

#[derive(Parser, Debug)]
#[command(name = "wms-console", version, about = "Warehouse administration console")]
struct Cli {
    /// Backend base URL (overrides api.base_url)
    #[arg(long)]
    base_url: Option<String>,

    /// Page to open first
    #[arg(long, default_value = "/")]
    route: String,

    /// Directory holding <environment>.toml
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Interface language: vi or en
    #[arg(long)]
    language: Option<Language>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout belongs to the rendered screens
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wms_console=info,warehouse_console=info,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let cli = Cli::parse();
    let config = Config::load_from(
        &cli.config_dir,
        &Overrides {
            base_url: cli.base_url,
            language: cli.language,
        },
    )?;

    tracing::info!("Starting Warehouse Console");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Backend: {}", config.api.base_url);

    let ctx = ViewContext::from_config(&config)?;
    let mut shell = Shell::new(ctx, Route::parse(&cli.route));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    shell.run(stdin, &mut stdout).await?;

    tracing::info!("Bye");
    Ok(())
}
