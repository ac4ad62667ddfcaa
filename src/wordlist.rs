//! Common-password wordlist
//!
//! Handles the reference set of known-weak passwords. A built-in default set
//! is always available; an external file can replace it once at startup.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{LazyLock, RwLock};
use thiserror::Error;

/// Built-in known-weak passwords, stored lowercase. Matching is
/// case-insensitive.
const DEFAULT_COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "12345678", "12345", "1234567", "qwerty", "abc123",
    "password1", "password123", "admin", "letmein", "welcome", "welcome1", "monkey", "dragon",
    "111111", "baseball", "iloveyou", "trustno1", "sunshine", "master", "hello", "freedom",
    "whatever", "qazwsx", "654321", "superman", "1qaz2wsx", "michael", "football", "shadow",
    "jesus", "ninja", "mustang", "batman", "passw0rd", "zaq12wsx", "jordan", "harley", "ranger",
    "hunter", "buster", "soccer", "hockey", "killer", "george", "charlie", "andrew", "thomas",
    "robert", "daniel", "matthew", "joshua", "000000", "666666", "777777", "121212", "123123",
    "112233", "princess", "flower", "lovely", "hottie", "loveme", "zxcvbnm", "asdfgh",
    "asdfghjkl", "qwertyuiop", "starwars", "computer", "michelle", "jessica", "pepper", "ginger",
    "secret", "access", "maggie", "summer", "ashley", "bailey", "nicole", "chelsea", "biteme",
    "taylor", "matrix", "yankees", "pokemon", "internet", "cookie", "orange", "banana", "cheese",
    "login", "admin123", "root", "toor", "guest", "test123", "letmein1", "abc12345",
];

static DEFAULT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEFAULT_COMMON_PASSWORDS.iter().copied().collect());

static CUSTOM_WORDLIST: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_WORDLIST_PATH`
/// 2. Default path `./assets/wordlist.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var("PWD_POLICY_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/wordlist.txt"))
}

/// Replaces the built-in common-password set with an external file.
///
/// Calling this is optional: without it the engine answers from the built-in
/// set. Set `PWD_POLICY_WORDLIST_PATH` to point at a custom file, one
/// password per line.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist() -> Result<usize, WordlistError> {
    let path = get_wordlist_path();
    init_wordlist_from_path(&path)
}

/// Replaces the built-in common-password set from a specific file path.
///
/// Idempotent: once a custom wordlist is loaded, later calls return its size
/// without re-reading.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    {
        let guard = CUSTOM_WORDLIST.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: FileNotFound {}", path.display());
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: Empty file {}", path.display());
        return Err(WordlistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = CUSTOM_WORDLIST.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Checks if a password is in the common-password set (case-insensitive).
///
/// Consults the custom wordlist if one was loaded, otherwise the built-in
/// default set.
pub fn is_common(password: &str) -> bool {
    let folded = password.to_lowercase();
    let guard = CUSTOM_WORDLIST.read().unwrap();
    match guard.as_ref() {
        Some(custom) => custom.contains(&folded),
        None => DEFAULT_SET.contains(folded.as_str()),
    }
}

/// Restores the built-in default set, for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    let mut guard = CUSTOM_WORDLIST.write().unwrap();
    *guard = None;
}
