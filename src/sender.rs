//! Bulk sender: one outbound TCP connection, random 512-byte blocks,
//! written flat out until a wall-clock deadline.

use std::time::{Duration, Instant};

use rand::RngCore;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::error::TransferError;

/// Default sink address from the original deployment.
pub const DEFAULT_HOST: &str = "192.168.0.13";
pub const DEFAULT_PORT: u16 = 54321;
pub const DEFAULT_DURATION: Duration = Duration::from_secs(10);
pub const DEFAULT_BLOCK_SIZE: usize = 512;

#[derive(Debug, Clone)]
pub struct SenderConfig {
    /// Target address, `host:port`.
    pub target: String,
    /// How long to keep issuing writes, measured from loop entry.
    pub duration: Duration,
    /// Size of each block; every write delivers exactly this many bytes.
    pub block_size: usize,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            target: format!("{DEFAULT_HOST}:{DEFAULT_PORT}"),
            duration: DEFAULT_DURATION,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

/// What a completed send loop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendStats {
    pub blocks: u64,
    pub bytes: u64,
    pub elapsed_millis: u128,
}

/// The timed pump loop.
///
/// The deadline is checked between iterations only; a block that starts
/// before the deadline is written in full, so the last block may land
/// after `duration` has elapsed. Zero blocks are written if `duration`
/// is already zero at the first check.
pub async fn pump<W>(
    writer: &mut W,
    duration: Duration,
    block_size: usize,
) -> Result<SendStats, TransferError>
where
    W: AsyncWrite + Unpin,
{
    let mut block = vec![0u8; block_size];
    let mut rng = rand::thread_rng();
    let mut blocks: u64 = 0;

    let start = Instant::now();
    while start.elapsed() < duration {
        rng.fill_bytes(&mut block);
        writer.write_all(&block).await?;
        blocks += 1;
    }

    Ok(SendStats {
        blocks,
        bytes: blocks * block_size as u64,
        elapsed_millis: start.elapsed().as_millis(),
    })
}

/// Connect, pump for the configured duration, close.
///
/// Any failure is fatal: a refused connection never sends a byte, and a
/// write error mid-stream leaves the connection half-written.
pub async fn run(config: &SenderConfig) -> Result<SendStats, TransferError> {
    let mut stream =
        TcpStream::connect(config.target.as_str())
            .await
            .map_err(|source| TransferError::Connect {
                addr: config.target.clone(),
                source,
            })?;

    println!("Connected to: {}", config.target);
    tracing::debug!(peer = %config.target, "connection established");

    let stats = pump(&mut stream, config.duration, config.block_size).await?;
    stream.shutdown().await?;

    println!("Done!");
    tracing::info!(
        blocks = stats.blocks,
        bytes = stats.bytes,
        elapsed_ms = stats.elapsed_millis,
        "send loop finished"
    );
    Ok(stats)
}
