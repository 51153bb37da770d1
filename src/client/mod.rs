// src/client/mod.rs
//! NOMP API client
//!
//! The [`NompClient`] ties the pieces together: it builds the `api/stats`
//! request URL, hands it to the transport collaborator, and runs the
//! response bytes through the status decoder. One call, one request, one
//! fully normalized [`crate::status::Status`].

/// Client implementation
pub mod nomp;

// Re-export main components for cleaner imports
pub use nomp::NompClient;
