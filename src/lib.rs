//! Point-to-point TCP throughput test pair.
//!
//! Two programs, no protocol beyond raw byte streaming:
//! - [`sender`] connects out and blasts fixed-size blocks of random bytes
//!   at the peer for a wall-clock duration.
//! - [`sink`] accepts a single connection, counts what arrives until the
//!   peer closes, and reports the total.
//!
//! The timed pump loop and the counting drain loop are exposed separately
//! from the connect/bind plumbing so they can be exercised over in-process
//! streams in tests.

pub mod error;
pub mod sender;
pub mod sink;

pub use error::TransferError;
