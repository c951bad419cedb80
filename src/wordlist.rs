//! Wordlist management module
//!
//! Handles locating and streaming the candidate wordlist.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_WORDLIST_FILE: &str = "darkweb2017-top10000.txt";

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] io::Error),
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `<temp dir>/darkweb2017-top10000.txt`
pub fn wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join(DEFAULT_WORDLIST_FILE))
}

/// Opens the wordlist and returns a lazy line iterator over its candidates.
///
/// Lines are yielded in file order, newline excluded; any further stripping
/// is the caller's concern. The file handle is released when the iterator is
/// dropped.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be opened
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<io::Lines<BufReader<File>>, WordlistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist open FAILED: FileNotFound {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist opened: {:?}", path);

    Ok(BufReader::new(file).lines())
}
