//! Handle to the hosted backend used by page content.

pub mod client;
pub mod config;
pub mod error;

pub use client::{BackendClient, BackendClientBuilder};
pub use config::BackendConfig;
pub use error::{BackendError, Result};
