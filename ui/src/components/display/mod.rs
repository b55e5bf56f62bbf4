pub mod first_user_hint;
pub mod loading_indicator;
pub mod status_banner;

pub use first_user_hint::*;
pub use loading_indicator::*;
pub use status_banner::*;
