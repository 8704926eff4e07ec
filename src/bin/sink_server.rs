use bulkbench::sink::{Sink, SinkConfig, DEFAULT_BIND, DEFAULT_CHUNK_SIZE, DEFAULT_PORT};
use clap::Parser;

/// Sink server. Accepts one connection from the bulk sender, counts the
/// bytes received until the peer closes, and prints the total.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Listen address
    #[arg(long, default_value = DEFAULT_BIND)]
    bind: String,

    /// Listen port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Bytes requested per read, and the per-read counter increment
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
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
    let config = SinkConfig {
        bind: format!("{}:{}", args.bind, args.port),
        chunk_size: args.chunk_size,
    };

    Sink::bind(&config).await?.serve().await?;
    Ok(())
}
