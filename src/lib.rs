//! Password wordlist filtering library
//!
//! This library streams candidate passwords from a wordlist and keeps
//! those meeting a minimum complexity policy: at least 12 characters,
//! with at least one ASCII lowercase letter, one ASCII uppercase letter
//! and one digit.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based scanning with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to the wordlist file
//!   (default: `<temp dir>/darkweb2017-top10000.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_filter::{scan_path, wordlist_path};
//!
//! // Scan the default wordlist, printing qualifying passwords
//! let mut stdout = std::io::stdout();
//!
//! #[cfg(feature = "async")]
//! let emitted = scan_path(wordlist_path(), &mut stdout, None)?;
//!
//! #[cfg(not(feature = "async"))]
//! let emitted = scan_path(wordlist_path(), &mut stdout)?;
//!
//! eprintln!("{} qualifying passwords", emitted);
//! # Ok::<(), pwd_filter::ScanError>(())
//! ```

// Internal modules
mod checks;
mod filter;
mod policy;
mod wordlist;

// Public API
pub use filter::{ScanError, scan, scan_path};
pub use policy::{CandidateVerdict, evaluate_candidate};
pub use wordlist::{WordlistError, read_lines, wordlist_path};

#[cfg(feature = "async")]
pub use filter::scan_wordlist_tx;
