//! Pattern rules - sequential runs, repeated runs, keyboard patterns.

/// Window size for sequential-run detection.
pub const SEQUENTIAL_RUN_LENGTH: usize = 4;

/// Window size for repeated-run detection.
pub const REPEATED_RUN_LENGTH: usize = 3;

/// Physical keyboard-row sequences, stored lowercase. Matched as substrings,
/// forward or character-reversed, case-insensitively.
const KEYBOARD_PATTERNS: &[&str] = &[
    "qwertyuiop",
    "qwerty",
    "asdfghjkl",
    "asdfgh",
    "asdf",
    "zxcvbnm",
    "zxcvbn",
    "zxcv",
    "1234567890",
    "12345678",
    "qazwsx",
    "wsxedc",
    "edcrfv",
    "1qaz2wsx",
    "zaq1xsw2",
    "q1w2e3r4",
];

/// Detects a run of `SEQUENTIAL_RUN_LENGTH` consecutive ascending or
/// descending characters, numeric or alphabetic.
///
/// Every window is classified first: all-digit windows compare digit values,
/// all-letter windows compare case-folded ordinals. Mixed windows (e.g.
/// "12ab") match neither branch.
pub fn has_sequential_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() < SEQUENTIAL_RUN_LENGTH {
        return false;
    }

    chars.windows(SEQUENTIAL_RUN_LENGTH).any(|window| {
        let all_digits = window.iter().all(|c| c.is_ascii_digit());
        let all_alpha = window.iter().all(|c| c.is_alphabetic());
        if !all_digits && !all_alpha {
            return false;
        }

        let ordinals: Vec<i64> = window
            .iter()
            .map(|c| c.to_ascii_lowercase() as i64)
            .collect();

        let ascending = ordinals.windows(2).all(|w| w[1] == w[0] + 1);
        let descending = ordinals.windows(2).all(|w| w[1] == w[0] - 1);
        ascending || descending
    })
}

/// Detects `REPEATED_RUN_LENGTH` or more identical consecutive characters.
pub fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(REPEATED_RUN_LENGTH)
        .any(|window| window.iter().all(|c| *c == window[0]))
}

/// Checks for any keyboard-row sequence, forward or reversed.
pub fn has_keyboard_pattern(password: &str) -> bool {
    let folded = password.to_lowercase();
    KEYBOARD_PATTERNS.iter().any(|pattern| {
        let reversed: String = pattern.chars().rev().collect();
        folded.contains(pattern) || folded.contains(&reversed)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ascending_digits() {
        assert!(has_sequential_run("abcx1234"));
        assert!(has_sequential_run("test6789"));
    }

    #[test]
    fn test_sequential_descending_digits() {
        assert!(has_sequential_run("Test4321"));
        assert!(has_sequential_run("9876pass"));
    }

    #[test]
    fn test_sequential_letters() {
        assert!(has_sequential_run("abcdTest1"));
        assert!(has_sequential_run("passwxyz"));
        assert!(has_sequential_run("TestDCBA"));
    }

    #[test]
    fn test_sequential_case_insensitive() {
        assert!(has_sequential_run("AbCd9!77"));
    }

    #[test]
    fn test_sequential_non_adjacent_values() {
        assert!(!has_sequential_run("test13579"));
        assert!(!has_sequential_run("acegik"));
    }

    #[test]
    fn test_sequential_mixed_window_never_matches() {
        // '9' then ':;<' would be consecutive codepoints, but the window
        // mixes digit and non-digit
        assert!(!has_sequential_run("ab12cd34"));
        assert!(!has_sequential_run("a1b2c3d4"));
    }

    #[test]
    fn test_sequential_too_short() {
        assert!(!has_sequential_run("abc"));
        assert!(!has_sequential_run(""));
    }

    #[test]
    fn test_repeated_run() {
        assert!(has_repeated_run("aaaa1234"));
        assert!(has_repeated_run("xxXaaa"));
        assert!(has_repeated_run("111"));
    }

    #[test]
    fn test_repeated_pairs_are_fine() {
        assert!(!has_repeated_run("testabcd"));
        assert!(!has_repeated_run("aabbccdd"));
        assert!(!has_repeated_run(""));
    }

    #[test]
    fn test_keyboard_pattern_forward() {
        assert!(has_keyboard_pattern("myqwerty1"));
        assert!(has_keyboard_pattern("xxasdfxx"));
        assert!(has_keyboard_pattern("1qaz2wsx!"));
    }

    #[test]
    fn test_keyboard_pattern_reversed() {
        assert!(has_keyboard_pattern("ytrewq99"));
        assert!(has_keyboard_pattern("pass-fdsa"));
    }

    #[test]
    fn test_keyboard_pattern_case_insensitive() {
        assert!(has_keyboard_pattern("MyQWERTY1"));
        assert!(has_keyboard_pattern("ZxCv-pass"));
    }

    #[test]
    fn test_keyboard_pattern_clean() {
        assert!(!has_keyboard_pattern("RandomPhrase!9"));
        assert!(!has_keyboard_pattern("MyStr0ng!Pass"));
    }
}
