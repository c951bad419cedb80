//! Character variety check - checks for lowercase, uppercase and digit characters.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;

/// Checks if the candidate contains all required character classes.
///
/// Class membership is ASCII range membership: accented letters and
/// non-ASCII digits never satisfy a class.
///
/// # Returns
/// - `Some(reason)` if missing required character classes
/// - `None` if all character classes are present
pub fn character_variety_check(password: &SecretString) -> CheckResult {
    let pwd = password.expose_secret();
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());

    let missing: Vec<_> = vec![
        if !has_lower { Some("lowercase") } else { None },
        if !has_upper { Some("uppercase") } else { None },
        if !has_digit { Some("digits") } else { None },
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        return Some(format!("Missing: {}", missing.join(", ")));
    }
    None
}
