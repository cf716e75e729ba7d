use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use marquee::{
    infrastructure::{
        catalog_store::CatalogStore, cli::Cli, config::Config, tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based), then apply command line overrides
    let config = args.apply_overrides(Config::new()?);
    log::info!(
        "starting with overlay blur {}, search latency {}ms",
        config.capabilities.supports_overlay_blur,
        config.search.latency_ms
    );

    let store = Arc::new(CatalogStore::new(config.catalog.clone(), config.search)?);

    let mut runner = {
        let tui = Arc::new(Mutex::new(
            RealTui::new()?
                .tick_rate(args.tick_rate)
                .frame_rate(args.frame_rate),
        ));
        AppRunner::new(config, tui, Arc::clone(&store) as _, store)?
    };
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
