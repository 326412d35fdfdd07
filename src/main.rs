use broker_sim::infrastructure::BrokerConfig;
use broker_sim::Broker;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Broker Simulator - simulated stock-trading service

USAGE:
    broker-sim [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                    Server host (default: 0.0.0.0)
    PORT                    Server port (default: 8080)
    ALPHA_VANTAGE_API_KEY   API key for the live quote provider
    RUST_LOG                Log level filter

EXAMPLES:
    # Run with defaults (simulated quotes, built-in catalog)
    broker-sim

    # Run with config file
    broker-sim --config config.json

    # Run with custom port
    PORT=9000 broker-sim
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "broker_sim=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = if let Some(path) = config_path {
        tracing::info!("Loading configuration from: {}", path);
        let config = BrokerConfig::from_file(&path)?;
        tracing::info!("Broker: {}", config.name);
        tracing::info!("Starting balance: {}", config.ledger.starting_balance);
        tracing::info!("Seed accounts: {}", config.accounts.len());
        config
    } else {
        // Default configuration with env var overrides
        let mut config = BrokerConfig::default();
        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse().unwrap_or(config.server.port);
        }
        tracing::info!("Using default configuration");
        config
    };

    let broker = Broker::new(config)?;

    tracing::info!("Starting Broker Simulator");
    tracing::info!(
        "REST API: http://{}:{}/api/v1/",
        broker.config.server.host,
        broker.config.server.port
    );
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /api/v1/ping");
    tracing::info!("  GET  /api/v1/time");
    tracing::info!("  POST /api/v1/accounts");
    tracing::info!("  GET  /api/v1/accounts/{{owner_id}}");
    tracing::info!("  GET  /api/v1/accounts/{{owner_id}}/balance");
    tracing::info!("  GET  /api/v1/accounts/{{owner_id}}/holdings?page=1&per_page=10");
    tracing::info!("  GET  /api/v1/accounts/{{owner_id}}/holdings/search?q=AAPL");
    tracing::info!("  GET  /api/v1/accounts/{{owner_id}}/trades?page=1");
    tracing::info!("  POST /api/v1/trades");
    tracing::info!("  GET  /api/v1/quote?symbol=AAPL");
    tracing::info!("  GET  /api/v1/symbols?q=apple");

    broker.run().await
}
