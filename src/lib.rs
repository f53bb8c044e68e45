/*
 * TCIA REST Client - Rust client for The Cancer Imaging Archive REST API
 */

// Internal modules
mod apis;
mod auth;
mod client;
mod config;
mod download;
pub mod endpoints;
mod error;
mod models;
mod query;

// Re-export public types and interfaces
pub use apis::{ImageApi, MetadataApi};
pub use client::TciaClient;
pub use config::ClientConfig;
pub use download::save_to;
pub use error::{TciaError, TciaResult};
pub use models::{ImageResult, OutputFormat, SeriesFilter};

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClientConfig, ImageResult, OutputFormat, SeriesFilter, TciaClient, TciaError, TciaResult,
    };
}
