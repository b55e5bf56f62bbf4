//! Infrastructure Services
//!
//! - **client**: authentication service client and the traits the workflow depends on
//! - **config**: configuration management and global settings
//! - **errors**: registration error taxonomy
//!
//! The services are WASM-first, using async traits without Send/Sync bounds.

pub mod client;
pub mod config;
pub mod errors;
