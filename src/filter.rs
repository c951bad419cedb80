//! Wordlist scan - streams candidates through the policy into a sink.

use std::io::{self, Write};
use std::path::Path;

use secrecy::SecretString;
use thiserror::Error;

#[cfg(feature = "async")]
use std::path::PathBuf;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::evaluate_candidate;
use crate::wordlist::{self, WordlistError};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Wordlist(#[from] WordlistError),
    #[error("Failed to write output: {0}")]
    WriteError(#[source] io::Error),
}

/// Filters a sequence of candidate lines through the complexity policy.
///
/// Each line is stripped of surrounding whitespace, evaluated, and written
/// to `out` newline-terminated if it qualifies. Output order is input order;
/// no deduplication or sorting is performed. Lines are evaluated
/// independently, so an empty input produces an empty output and is not an
/// error.
///
/// The scan is fail-fast: the first read or write failure aborts it.
/// Already-written output is not rolled back.
///
/// # Arguments
/// * `lines` - The candidate line source
/// * `out` - Sink for qualifying passwords
/// * `token` - Optional cancellation token, checked once per line
///   (async feature only)
///
/// # Returns
/// The number of qualifying passwords written to `out`.
pub fn scan<I, W>(
    lines: I,
    out: &mut W,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<usize, ScanError>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut emitted = 0;

    for line in lines {
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Wordlist scan cancelled after {} passwords", emitted);
                    break;
                }
            }
        }

        let line = line.map_err(WordlistError::ReadError)?;
        let candidate = line.trim();

        let secret = SecretString::new(candidate.to_string().into());
        if evaluate_candidate(&secret).is_qualifying() {
            writeln!(out, "{}", candidate).map_err(ScanError::WriteError)?;
            emitted += 1;
        }
    }

    Ok(emitted)
}

/// Scans the wordlist at `path` and writes qualifying passwords to `out`.
///
/// # Errors
///
/// Returns error if:
/// - The wordlist does not exist or cannot be opened
/// - A line cannot be read mid-stream
/// - The sink rejects a write
pub fn scan_path<P: AsRef<Path>, W: Write>(
    path: P,
    out: &mut W,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<usize, ScanError> {
    let lines = wordlist::read_lines(path)?;

    #[cfg(feature = "async")]
    let emitted = scan(lines, out, token)?;

    #[cfg(not(feature = "async"))]
    let emitted = scan(lines, out)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist scan complete: {} qualifying passwords", emitted);

    Ok(emitted)
}

/// Async version that streams qualifying passwords via channel.
///
/// Passwords are sent in input order. The scan stops early when `token` is
/// cancelled or the receiver is dropped.
#[cfg(feature = "async")]
pub async fn scan_wordlist_tx(
    path: PathBuf,
    token: CancellationToken,
    tx: mpsc::Sender<String>,
) -> Result<usize, ScanError> {
    #[cfg(feature = "tracing")]
    tracing::info!("wordlist scan is about to start...");

    let lines = wordlist::read_lines(&path)?;
    let mut emitted = 0;

    for line in lines {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Wordlist scan cancelled after {} passwords", emitted);
            break;
        }

        let line = line.map_err(WordlistError::ReadError)?;
        let candidate = line.trim();

        let secret = SecretString::new(candidate.to_string().into());
        if evaluate_candidate(&secret).is_qualifying() {
            if tx.send(candidate.to_string()).await.is_err() {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send qualifying password: receiver dropped");
                break;
            }
            emitted += 1;
        }
    }

    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn wordlist_file(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    fn run_scan(path: &Path) -> Result<(Vec<String>, usize), ScanError> {
        let mut out = Vec::new();

        #[cfg(feature = "async")]
        let emitted = scan_path(path, &mut out, None)?;

        #[cfg(not(feature = "async"))]
        let emitted = scan_path(path, &mut out)?;

        let printed = String::from_utf8(out).expect("Output is not UTF-8");
        let lines = printed.lines().map(str::to_string).collect();
        Ok((lines, emitted))
    }

    #[test]
    fn test_scan_emits_only_qualifying() {
        let temp_file = wordlist_file(&[
            "Passw0rdLonger!",
            "alllowercase123456",
            "Short1A",
            "NoDigitsHereAtAll",
        ]);

        let (lines, emitted) = run_scan(temp_file.path()).expect("Scan failed");

        assert_eq!(emitted, 1);
        assert_eq!(lines, vec!["Passw0rdLonger!"]);
    }

    #[test]
    fn test_scan_preserves_input_order() {
        let temp_file = wordlist_file(&[
            "Zfirst0Qualifier",
            "rejected",
            "Asecond1Qualifier",
            "Bthird2Qualifier",
        ]);

        let (lines, emitted) = run_scan(temp_file.path()).expect("Scan failed");

        assert_eq!(emitted, 3);
        assert_eq!(
            lines,
            vec!["Zfirst0Qualifier", "Asecond1Qualifier", "Bthird2Qualifier"]
        );
    }

    #[test]
    fn test_scan_strips_surrounding_whitespace() {
        let temp_file = wordlist_file(&["  Passw0rdLonger!  ", "\tAn0therGoodOne\t"]);

        let (lines, _) = run_scan(temp_file.path()).expect("Scan failed");

        assert_eq!(lines, vec!["Passw0rdLonger!", "An0therGoodOne"]);
    }

    #[test]
    fn test_scan_empty_file() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");

        let (lines, emitted) = run_scan(temp_file.path()).expect("Scan failed");

        assert_eq!(emitted, 0);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_scan_blank_lines_rejected() {
        let temp_file = wordlist_file(&["", "   ", "Passw0rdLonger!"]);

        let (lines, emitted) = run_scan(temp_file.path()).expect("Scan failed");

        assert_eq!(emitted, 1);
        assert_eq!(lines, vec!["Passw0rdLonger!"]);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let temp_file = wordlist_file(&["Passw0rdLonger!", "nope", "An0therGoodOne"]);

        let first = run_scan(temp_file.path()).expect("Scan failed");
        let second = run_scan(temp_file.path()).expect("Scan failed");

        assert_eq!(first, second);
    }

    #[test]
    fn test_scan_missing_file() {
        let result = run_scan(Path::new("/nonexistent/path/wordlist.txt"));

        assert!(matches!(
            result,
            Err(ScanError::Wordlist(WordlistError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_scan_duplicates_not_deduplicated() {
        let temp_file = wordlist_file(&["Passw0rdLonger!", "Passw0rdLonger!"]);

        let (lines, emitted) = run_scan(temp_file.path()).expect("Scan failed");

        assert_eq!(emitted, 2);
        assert_eq!(lines, vec!["Passw0rdLonger!", "Passw0rdLonger!"]);
    }
}
