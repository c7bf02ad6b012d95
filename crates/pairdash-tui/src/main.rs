mod input;
mod render;
mod runtime;
mod ui;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use pairdash_core::config::CoreConfig;
use pairdash_core::runtime::FeedRuntime;
use pairdash_core::tracing_setup;

use crate::runtime::run_app;
use crate::ui::App;

/// Terminal dashboard for a human/agent pairing session: collaboration
/// stats, activity heatmap, and a live observation log.
#[derive(Parser)]
#[command(name = "pairdash", version)]
struct Args {
    /// Stats endpoint URL (falls back to PAIRDASH_STATS_URL, then to
    /// embedded data)
    #[arg(long)]
    stats_url: Option<String>,

    /// Observations backend base URL (falls back to
    /// PAIRDASH_OBSERVATIONS_URL, then to embedded data)
    #[arg(long)]
    observations_url: Option<String>,

    /// Seconds between stats polls
    #[arg(long, default_value_t = 30)]
    poll_interval: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_setup::init_tracing();

    // Restore the terminal before the panic message prints, or it is lost
    // to the alternate screen
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        original_hook(panic_info);
    }));

    let mut config = CoreConfig::from_env(args.stats_url, args.observations_url);
    config.poll_interval = Some(Duration::from_secs(args.poll_interval.max(1)));

    let feeds = FeedRuntime::start(config).await;
    let mut app = App::new(feeds);

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;
    ui::restore_terminal()?;

    result
}
