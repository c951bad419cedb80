//! Wordlist scan binary - prints qualifying passwords to stdout.

use std::io::{self, Write};

use pwd_filter::wordlist_path;

fn main() {
    let path = wordlist_path();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    #[cfg(feature = "async")]
    let result = pwd_filter::scan_path(&path, &mut out, None);

    #[cfg(not(feature = "async"))]
    let result = pwd_filter::scan_path(&path, &mut out);

    if let Err(e) = result {
        eprintln!("pwd-filter: {}", e);
        std::process::exit(1);
    }

    let _ = out.flush();
}
