//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: email grammar and field styling helpers shared by the form

pub mod console_macros;
pub mod validation;

pub use validation::*;
