//! Candidate policy checks
//!
//! Each check verifies one aspect of the complexity policy.

mod length;
mod variety;

pub use length::length_check;
pub use variety::character_variety_check;

/// Result type for policy check functions.
/// - `Some(reason)` - Check failed with reason
/// - `None` - Check passed
pub type CheckResult = Option<String>;
