use signal_relay::infrastructure::ConfigError;
use signal_relay::{LogFormat, Relay, RelayConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "signal_relay=info,tower_http=debug";

const USAGE: &str = "\
Usage: signal-relay [--config <PATH>]

  -c, --config <PATH>   JSON configuration file
  -h, --help            Show this message

Environment: HOST, PORT (default 5000), LOG_FORMAT (text|json), RUST_LOG";

fn init_tracing(config: &RelayConfig) {
    let fallback = config
        .logging
        .filter
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn load_config(path: Option<&str>) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => RelayConfig::from_file(path)?,
        None => RelayConfig::default(),
    };
    config.apply_env_overrides()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config_path: Option<String> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                eprintln!("{USAGE}");
                return Ok(());
            }
            "--config" | "-c" => {
                config_path = Some(args.next().ok_or("--config requires a path argument")?);
            }
            other => {
                eprintln!("{USAGE}");
                return Err(format!("Unknown argument: {other}").into());
            }
        }
    }

    let config = load_config(config_path.as_deref())?;
    init_tracing(&config);

    if let Some(path) = &config_path {
        tracing::info!("Loaded configuration from: {}", path);
    }
    tracing::info!("Starting {}", config.name);
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /");
    tracing::info!("  POST /webhook");
    tracing::info!("  GET  /signals");
    tracing::info!("  POST /clear");

    Relay::new(config).run().await
}
