use std::time::Duration;

use bulkbench::sender::{self, SenderConfig, DEFAULT_BLOCK_SIZE, DEFAULT_HOST, DEFAULT_PORT};
use clap::Parser;

/// TCP bulk sender. Streams random fixed-size blocks at a sink server
/// for a fixed wall-clock window, then closes the connection.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Sink server address
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Sink server port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// How long to keep sending, in seconds
    #[arg(long, default_value_t = 10)]
    duration_secs: u64,

    /// Bytes per block
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    let config = SenderConfig {
        target: format!("{}:{}", args.host, args.port),
        duration: Duration::from_secs(args.duration_secs),
        block_size: args.block_size,
    };

    sender::run(&config).await?;
    Ok(())
}
