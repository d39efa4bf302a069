// alertops-api: Async Rust client for the AlertOps REST API v2

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::Client;
pub use error::Error;
pub use transport::{RetryPolicy, TransportConfig};
