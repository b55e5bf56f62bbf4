//! User Interface Components
//!
//! Reusable Dioxus components for the registration UI:
//!
//! - **forms**: the sign-up form
//! - **display**: status banners, the toaster, the first-user hint and loading placeholders
//! - **input**: validated input fields and per-field feedback

pub mod display;
pub mod forms;
pub mod input;
