pub mod advisory;
pub mod form_validation;
pub mod session;
pub mod types;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_support;

pub use advisory::*;
pub use form_validation::*;
pub use session::resolve_readiness;
pub use types::*;
pub use workflow::*;
