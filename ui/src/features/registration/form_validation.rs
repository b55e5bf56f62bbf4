use crate::features::registration::types::*;
use crate::services::config::FormRules;
use crate::utils::validation::is_valid_email;

/// Checks a single field, returning the message to show when it fails
pub fn validate_field(field: Field, value: &str, rules: &FormRules) -> Option<String> {
    match field {
        Field::Name => (value.trim().chars().count() < rules.min_name_chars)
            .then(|| format!("Name must be at least {} characters", rules.min_name_chars)),
        Field::Email => (!is_valid_email(value.trim()))
            .then(|| "Please enter a valid email address".to_string()),
        Field::Password => (value.chars().count() < rules.min_password_chars).then(|| {
            format!(
                "Password must be at least {} characters",
                rules.min_password_chars
            )
        }),
    }
}

/// Applies every rule without short-circuiting so all violations show at once
pub fn validate_registration(input: &RegistrationInput, rules: &FormRules) -> Vec<FieldError> {
    Field::ALL
        .iter()
        .filter_map(|&field| {
            validate_field(field, input.value_of(field), rules)
                .map(|message| FieldError { field, message })
        })
        .collect()
}
