//! Shared HTTP plumbing for outbound adapters

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
