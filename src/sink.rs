//! Sink server: accept one connection, count what arrives, report, exit.

use std::net::SocketAddr;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::TcpListener;

use crate::error::TransferError;

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 54321;
pub const DEFAULT_CHUNK_SIZE: usize = 512;

#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Listen address, `host:port`. The default binds all interfaces.
    pub bind: String,
    /// Bytes requested per read call, and the increment added to the
    /// counter for every nonzero read.
    pub chunk_size: usize,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            bind: format!("{DEFAULT_BIND}:{DEFAULT_PORT}"),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// The counting drain loop.
///
/// Reads into a `chunk_size` buffer until the peer closes its write side.
/// The counter advances by `chunk_size` per nonzero read regardless of how
/// many bytes the read actually returned: a short final fragment still
/// counts as a full chunk, so the reported total is always a multiple of
/// `chunk_size` and can overcount.
pub async fn drain<R>(reader: &mut R, chunk_size: usize) -> Result<u64, TransferError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; chunk_size];
    let mut bytes: u64 = 0;

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        bytes += chunk_size as u64;
    }

    Ok(bytes)
}

/// A bound, listening sink that has not yet accepted its connection.
pub struct Sink {
    listener: TcpListener,
    chunk_size: usize,
}

impl Sink {
    pub async fn bind(config: &SinkConfig) -> Result<Self, TransferError> {
        let listener =
            TcpListener::bind(config.bind.as_str())
                .await
                .map_err(|source| TransferError::Bind {
                    addr: config.bind.clone(),
                    source,
                })?;

        Ok(Self {
            listener,
            chunk_size: config.chunk_size,
        })
    }

    /// The actual bound address; lets tests bind port 0.
    pub fn local_addr(&self) -> Result<SocketAddr, TransferError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept exactly one connection, drain it, report the total.
    ///
    /// Further connection attempts are never serviced: one peer, one
    /// count, then return.
    pub async fn serve(self) -> Result<u64, TransferError> {
        println!("Waiting for connection...");
        let (mut stream, addr) = self.listener.accept().await?;
        println!("Connected by {addr}");

        let start = Instant::now();
        let bytes = drain(&mut stream, self.chunk_size).await?;

        println!("Total Bytes Received: {bytes}");
        tracing::info!(
            peer = %addr,
            bytes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "peer closed, sink done"
        );
        Ok(bytes)
    }
}
