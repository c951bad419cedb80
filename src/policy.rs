//! Complexity policy evaluator - decides whether a candidate qualifies.

use secrecy::SecretString;

use crate::checks::{CheckResult, character_variety_check, length_check};

/// Outcome of evaluating one candidate against the complexity policy.
///
/// A candidate qualifies iff no check rejected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateVerdict {
    /// Rejection reasons, one per failed check. Empty means qualifying.
    pub reasons: Vec<String>,
}

impl CandidateVerdict {
    /// Returns `true` if the candidate passed every policy check.
    pub fn is_qualifying(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Evaluates a candidate password against the complexity policy.
///
/// All checks run regardless of earlier failures, so the verdict carries
/// every reason the candidate was rejected.
///
/// # Arguments
/// * `password` - The candidate to evaluate, already stripped of
///   surrounding whitespace
///
/// # Returns
/// A `CandidateVerdict` containing the rejection reasons, if any.
pub fn evaluate_candidate(password: &SecretString) -> CandidateVerdict {
    let mut reasons = Vec::new();

    // Run checks in sequence
    let checks: Vec<(&str, fn(&SecretString) -> CheckResult)> = vec![
        ("length", length_check),
        ("variety", character_variety_check),
    ];

    for (check_name, check_fn) in checks {
        if let Some(reason) = check_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Candidate rejected by {} check: {}", check_name, reason);

            reasons.push(reason);
        }
    }

    CandidateVerdict { reasons }
}
