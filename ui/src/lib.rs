//! This crate contains all shared UI components for the account registration flow.

pub mod app;
pub use app::RegistrationService;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
