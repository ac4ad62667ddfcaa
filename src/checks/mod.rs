//! Individual policy rules
//!
//! Each function is a pure predicate over the candidate string; the engine
//! composes them into the fail-fast gate and the exhaustive strength report.

mod length;
mod pattern;
mod variety;

pub use length::{MAX_LENGTH, MIN_LENGTH, char_count, within_max_length, within_min_length};
pub use pattern::{
    REPEATED_RUN_LENGTH, SEQUENTIAL_RUN_LENGTH, has_keyboard_pattern, has_repeated_run,
    has_sequential_run,
};
pub use variety::{SPECIAL_CHARS, has_digit, has_letter, has_lowercase, has_special, has_uppercase};
