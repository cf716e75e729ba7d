use clap::Parser;

use crate::{infrastructure::config::Config, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(long, help = "Disable the dimming overlay shown after a long press")]
    pub no_overlay_blur: bool,

    #[arg(
        long,
        value_name = "MILLIS",
        help = "Override the simulated search latency of the catalog store"
    )]
    pub search_latency_ms: Option<u64>,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if self.no_overlay_blur {
            config.capabilities.supports_overlay_blur = false;
        }
        if let Some(latency_ms) = self.search_latency_ms {
            config.search.latency_ms = latency_ms;
        }
        config
    }
}
