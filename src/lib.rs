//! Password policy engine
//!
//! This library evaluates candidate passwords two ways: a strict, fail-fast
//! gate for account creation and password reset, and an exhaustive strength
//! score with itemized feedback for real-time meters. Evaluation is pure and
//! stateless; the password value never reaches logs or error output.
//!
//! # Features
//!
//! - `async` (default): Enables a debounced async evaluation helper with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_WORDLIST_PATH`: Custom path to a common-password wordlist
//!   file (optional; a built-in set is used otherwise)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{calculate_strength, validate};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyStr0ng!Pass".to_string().into());
//!
//! let verdict = validate(&password);
//! assert!(verdict.accepted);
//!
//! let report = calculate_strength(&password);
//! println!("Score: {} ({})", report.score, report.tier);
//! for line in &report.feedback {
//!     println!("- {line}");
//! }
//! ```

// Internal modules
mod checks;
mod engine;
mod report;
mod wordlist;

// Public API
pub use checks::{
    MAX_LENGTH, MIN_LENGTH, REPEATED_RUN_LENGTH, SEQUENTIAL_RUN_LENGTH, SPECIAL_CHARS,
};
pub use engine::{calculate_strength, validate};
pub use report::{RuleChecks, StrengthReport, StrengthTier, ValidationResult};
pub use wordlist::{WordlistError, init_wordlist, init_wordlist_from_path, is_common};

#[cfg(feature = "async")]
pub use engine::calculate_strength_tx;
