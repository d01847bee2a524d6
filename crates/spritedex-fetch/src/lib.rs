#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::HttpFetcher;

// Configuration
pub use config::FetcherConfig;

// Errors
pub use error::{FetchError, FetchResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
#[cfg(test)]
use tokio_test as _;
#[cfg(test)]
use tokio as _;
