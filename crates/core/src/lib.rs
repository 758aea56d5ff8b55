//! yr-core: Core library for the yr URL shortener client
//!
//! This crate provides the core functionality for the yr CLI, including:
//! - Configuration management
//! - The short URL entity and its two historical payload shapes
//! - Response classification and entity mapping
//! - The Transport trait for issuing requests
//!
//! This crate is designed to be independent of any specific HTTP client,
//! allowing for easy testing with scripted transports.

pub mod config;
pub mod entity;
pub mod error;
pub mod protocol;
pub mod transport;

pub use config::{Config, ConfigManager};
pub use entity::ShortUrl;
pub use error::{ApiError, Error, Result};
pub use transport::{Method, Request, Response, Transport};
