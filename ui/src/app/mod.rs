pub mod navigation;
pub mod registration_service;

pub use navigation::RouterNavigator;
pub use registration_service::RegistrationService;
