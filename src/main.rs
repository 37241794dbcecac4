use binance_assistant::binance::BinanceClient;
use binance_assistant::config::BinanceConfig;
use binance_assistant::mcp::BinanceServer;
use binance_assistant::transport::{TransportMode, DEFAULT_SSE_PORT};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments first to determine mode
    let args: Vec<String> = std::env::args().collect();
    let (mode, port) = parse_args(&args);

    // stdout is reserved for the MCP protocol in stdio mode
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Binance Assistant in {} mode...", mode);

    let config = BinanceConfig::from_env()?;
    tracing::info!(
        environment = %config.environment,
        base_url = %config.base_url,
        "Binance endpoint selected"
    );

    if config.credentials.is_complete() {
        tracing::info!("API credentials found - account tools enabled");
    } else {
        tracing::warn!("API credentials not found - only public market data tools will work");
        tracing::warn!("Set BINANCE_API_KEY and BINANCE_API_SECRET for full functionality");
    }

    let server = BinanceServer::new(Arc::new(BinanceClient::new(config)?));

    match mode {
        TransportMode::Stdio => {
            binance_assistant::transport::stdio::run_stdio_server(server).await?
        }
        TransportMode::Sse => run_sse_server(server, port).await?,
    }

    Ok(())
}

/// Parse command-line arguments
fn parse_args(args: &[String]) -> (TransportMode, u16) {
    let mut mode = TransportMode::default();
    let mut port = DEFAULT_SSE_PORT;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                if i + 1 < args.len() {
                    mode = match args[i + 1].parse() {
                        Ok(mode) => mode,
                        Err(e) => {
                            eprintln!("{}", e);
                            print_usage();
                            std::process::exit(1);
                        }
                    };
                    i += 1;
                }
            }
            "--stdio" => mode = TransportMode::Stdio,
            "--sse" => mode = TransportMode::Sse,
            "--port" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse().unwrap_or(DEFAULT_SSE_PORT);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if port == 0 {
        port = DEFAULT_SSE_PORT;
    }

    (mode, port)
}

/// Print usage information
fn print_usage() {
    println!("Binance Assistant - read-only MCP server for Binance market and account data");
    println!();
    println!("USAGE:");
    println!("    binance-assistant [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --mode <MODE>       Transport mode: stdio or sse (default: stdio)");
    println!("    --stdio             Run in stdio MCP mode (shortcut for --mode stdio)");
    println!("    --sse               Run in SSE mode (shortcut for --mode sse)");
    println!("    --port <PORT>       Port for SSE mode (default: 8000)");
    println!("    --help, -h          Print this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    BINANCE_API_KEY           Binance API key (required for account tools)");
    println!("    BINANCE_API_SECRET        Binance API secret (required for account tools)");
    println!("    BINANCE_ENVIRONMENT       production or testnet (default: production)");
    println!("    BINANCE_BASE_URL          Override the REST base URL");
    println!("    BINANCE_ANNOUNCEMENT_URL  Override the announcements endpoint");
    println!("    RUST_LOG                  Logging level (default: info)");
    println!();
    println!("EXAMPLES:");
    println!("    # Start in stdio mode");
    println!("    binance-assistant --stdio");
    println!();
    println!("    # Start SSE server on a custom port");
    println!("    binance-assistant --sse --port 8080");
}

#[cfg(feature = "sse")]
async fn run_sse_server(server: BinanceServer, port: u16) -> anyhow::Result<()> {
    binance_assistant::transport::sse::run_sse_server(server, port).await
}

#[cfg(not(feature = "sse"))]
async fn run_sse_server(_server: BinanceServer, _port: u16) -> anyhow::Result<()> {
    tracing::error!("SSE mode not available - compile with 'sse' feature");
    anyhow::bail!("SSE mode not available")
}
