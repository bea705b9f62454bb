// Local input checks and display formatting. These run before any request
// so the user gets every problem at once.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{BetaUserCreate, ValidationReport};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 254;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"))
}

/// Check a registration payload. Lengths are counted in characters.
pub fn validate_beta_user_input(user: &BetaUserCreate) -> ValidationReport {
    let mut errors = Vec::new();

    let name_len = user.name.trim().chars().count();
    if name_len < NAME_MIN_CHARS {
        errors.push("Please enter your full name (at least 2 characters)".to_string());
    }
    if name_len > NAME_MAX_CHARS {
        errors.push("Name must be less than 100 characters".to_string());
    }

    if !email_regex().is_match(&user.email) {
        errors.push("Please enter a valid email address".to_string());
    }
    if user.email.chars().count() > EMAIL_MAX_CHARS {
        errors.push("Email address is too long".to_string());
    }

    ValidationReport::from_errors(errors)
}

/// Title-case each space-separated word of a trimmed name.
pub fn format_user_name(name: &str) -> String {
    name.trim()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
