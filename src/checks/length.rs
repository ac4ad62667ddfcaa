//! Length rules - minimum and maximum password length.

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 64;

/// Length in Unicode scalar values, not bytes.
pub fn char_count(password: &str) -> usize {
    password.chars().count()
}

pub fn within_min_length(password: &str) -> bool {
    char_count(password) >= MIN_LENGTH
}

pub fn within_max_length(password: &str) -> bool {
    char_count(password) <= MAX_LENGTH
}
