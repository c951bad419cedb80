//! Length check - checks candidate minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;

const MIN_LENGTH: usize = 12;

/// Checks if the candidate meets minimum length requirements.
///
/// Length is a character count, not a byte count.
///
/// # Returns
/// - `Some(reason)` if candidate is too short
/// - `None` if candidate has sufficient length
pub fn length_check(password: &SecretString) -> CheckResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    None
}
