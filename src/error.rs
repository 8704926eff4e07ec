use std::io;

use thiserror::Error;

/// Everything that can go wrong during a transfer.
///
/// There is no local recovery anywhere in this crate: each variant is fatal
/// to the program that hits it, and the binaries let it propagate straight
/// out of `main`.
#[derive(Error, Debug)]
pub enum TransferError {
    /// The sender could not establish its outbound connection.
    #[error("unable to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The sink could not bind/listen on its configured endpoint.
    #[error("unable to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// A read, write, or accept failed during the data phase.
    #[error("i/o error during transfer: {0}")]
    Io(#[from] io::Error),
}
