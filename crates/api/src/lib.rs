//! yr-api: HTTP adapter for the yr URL shortener client
//!
//! This crate provides the reqwest-backed Transport implementation and
//! the operation facade over it. It is the only crate that directly
//! depends on an HTTP client.

pub mod client;
pub mod http;

pub use client::{default_user_agent, CreateOptions, ShortUrlClient, UpdateShortUrl};
pub use http::HttpTransport;
