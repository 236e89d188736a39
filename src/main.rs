use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use flowboard::config::Settings;
use flowboard::logging::init_logging;
use flowboard::server;
use flowboard::source::FileHost;
use flowboard::Dashboard;

#[derive(Parser, Debug)]
#[command(name = "flowboard")]
#[command(about = "Self-refreshing HTML status dashboard for the components of a host runtime")]
struct Args {
    /// Path to the host runtime JSON document
    #[arg(long)]
    host_file: PathBuf,

    /// Optional TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides the settings file)
    #[arg(short, long)]
    listen: Option<String>,

    /// Path the dashboard is served at (overrides the settings file)
    #[arg(short, long)]
    path: Option<String>,

    /// Render the dashboard once to stdout and exit
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    if let Some(listen) = args.listen {
        settings.server.listen_addr = listen;
    }
    if let Some(path) = args.path {
        settings.server.path = path;
    }

    let host = FileHost::open(&args.host_file)?;
    let dashboard = Dashboard::initialise(&settings.dashboard, &host)
        .context("Failed to initialise dashboard")?;

    // Handle print mode (non-interactive)
    if args.print {
        return print_page(&dashboard, &mut std::io::stdout().lock());
    }

    run_server(Arc::new(dashboard), settings)
}

/// Write one rendered page and nothing else
fn print_page(dashboard: &Dashboard, out: &mut impl Write) -> Result<()> {
    out.write_all(dashboard.render().as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Serve the dashboard until Ctrl-C
fn run_server(dashboard: Arc<Dashboard>, settings: Settings) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        tokio::select! {
            result = server::serve(dashboard, settings.server) => result,
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                Ok(())
            }
        }
    })
}
