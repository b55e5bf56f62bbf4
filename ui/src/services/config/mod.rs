use std::sync::OnceLock;
use tracing::warn;

/// Origin used when the page origin cannot be read (native builds and tests)
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationConfig {
    pub auth: AuthServiceConfig,
    pub rules: FormRules,
    pub ui: UiConfig,
}

/// Where the authentication service lives and which endpoints it exposes
#[derive(Debug, Clone, PartialEq)]
pub struct AuthServiceConfig {
    pub base_url: String,
    pub sign_up_path: String,
    pub user_count_path: String,
    pub assign_admin_path: String,
    pub session_path: String,
}

/// Client-side validation thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
    pub min_name_chars: usize,
    pub min_password_chars: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Authenticated area reached after every successful registration
    pub landing_route: String,
    pub sign_in_route: String,
    /// How long a success toast stays on screen
    pub status_dismiss_ms: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self::for_origin(DEFAULT_BASE_URL)
    }
}

impl AuthServiceConfig {
    /// Standard endpoint layout served from `origin`
    pub fn for_origin(origin: &str) -> Self {
        Self {
            base_url: origin.trim_end_matches('/').to_string(),
            sign_up_path: "/api/auth/sign-up/email".to_string(),
            user_count_path: "/api/users/count".to_string(),
            assign_admin_path: "/api/users/assign-admin".to_string(),
            session_path: "/api/auth/get-session".to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            min_name_chars: 2,
            min_password_chars: 8,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            landing_route: "/dashboard".to_string(),
            sign_in_route: "/sign-in".to_string(),
            status_dismiss_ms: 4000, // 4 seconds
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationConfig {
    pub fn new() -> Self {
        Self {
            auth: AuthServiceConfig::default(),
            rules: FormRules::default(),
            ui: UiConfig::default(),
        }
    }

    /// Create configuration pointing at the origin the page was served from
    pub fn from_window() -> Self {
        match window_origin() {
            Some(origin) => Self {
                auth: AuthServiceConfig::for_origin(&origin),
                ..Self::new()
            },
            None => Self::new(),
        }
    }

    /// Returns every problem found rather than stopping at the first one
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(self.auth.base_url.starts_with("http://") || self.auth.base_url.starts_with("https://"))
        {
            errors.push(format!(
                "base_url must be an http(s) origin, got '{}'",
                self.auth.base_url
            ));
        }

        let paths = [
            ("sign_up_path", &self.auth.sign_up_path),
            ("user_count_path", &self.auth.user_count_path),
            ("assign_admin_path", &self.auth.assign_admin_path),
            ("session_path", &self.auth.session_path),
            ("landing_route", &self.ui.landing_route),
            ("sign_in_route", &self.ui.sign_in_route),
        ];
        for (name, path) in paths {
            if !path.starts_with('/') {
                errors.push(format!("{} must start with '/', got '{}'", name, path));
            }
        }

        if self.rules.min_name_chars == 0 {
            errors.push("min_name_chars must be greater than 0".to_string());
        }

        if self.rules.min_password_chars == 0 {
            errors.push("min_password_chars must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn window_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn window_origin() -> Option<String> {
    None
}

static GLOBAL_CONFIG: OnceLock<RegistrationConfig> = OnceLock::new();

/// Get the global configuration, derived from the page origin on first access
pub fn get_global_config() -> RegistrationConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = RegistrationConfig::from_window();
            if let Err(errors) = config.validate() {
                warn!("Invalid configuration, using defaults: {}", errors.join("; "));
                RegistrationConfig::new()
            } else {
                config
            }
        })
        .clone()
}
