use std::{io, path::PathBuf};

use clap::{ArgAction, Parser};
use shipping_weather_core::{
    ConfigStore, OpenWeatherProvider, default_api_key_path, load_api_key,
    provider::openweather::DEFAULT_COUNTRY,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    session::{InquireReader, Session, Settings, initial_alarms},
    table::Layout,
};

/// Looked up when the user just presses Enter.
pub const DEFAULT_POSTAL_CODES: [&str; 2] = ["32712", "90210"];

/// Top-level CLI struct. Every flag is optional; with none the tool runs
/// fully interactively.
#[derive(Debug, Parser)]
#[command(
    name = "shipping-weather",
    version,
    about = "Multi-day forecast highs and lows for US postal codes"
)]
pub struct Cli {
    /// JSON config file holding the alarm temps.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// File containing the OpenWeather API key.
    #[arg(long, value_name = "PATH")]
    pub api_key_file: Option<PathBuf>,

    /// Country the postal codes belong to.
    #[arg(long, value_name = "CODE", default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Postal code to look up on empty input; repeat for several.
    #[arg(long = "zip", value_name = "CODE")]
    pub zips: Vec<String>,

    /// Log to stderr; -v for info, -vv for debug. RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Don't show a spinner while fetching.
    #[arg(long)]
    pub no_spinner: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        let default_postal_codes = if self.zips.is_empty() {
            DEFAULT_POSTAL_CODES.iter().map(|c| c.to_string()).collect()
        } else {
            self.zips.clone()
        };

        Settings { default_postal_codes, layout: Layout::default(), show_spinner: !self.no_spinner }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let settings = self.settings();
        let mut out = io::stdout();

        let store = match self.config {
            Some(path) => ConfigStore::new(path),
            None => ConfigStore::at_default_location()?,
        };
        let alarms = initial_alarms(&store, &mut out)?;

        let api_key_path = match self.api_key_file {
            Some(path) => path,
            None => default_api_key_path()?,
        };
        let api_key = load_api_key(&api_key_path)?;
        let provider = OpenWeatherProvider::new(api_key, self.country);

        let mut session = Session::new(settings, store, &provider, alarms);
        session.run(&mut InquireReader, &mut out).await
    }
}

/// Logs go to stderr so they never interleave with the table on stdout.
pub fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}
