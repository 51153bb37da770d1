// src/transport/mod.rs
//! HTTP transport layer
//!
//! This module isolates everything HTTP-specific behind the [`Transport`]
//! trait so the status decoder never touches the network directly. The
//! stock implementation, [`HttpTransport`], papers over the quirks of real
//! NOMP deployments: missing content-type headers, self-signed TLS
//! certificates, and the occasional need to dump raw traffic while
//! debugging a misbehaving pool.

/// Transport trait and the reqwest-backed implementation
pub mod http;

// Re-export main components for cleaner imports
pub use http::{HttpTransport, Transport, TransportResponse};
