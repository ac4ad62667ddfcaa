//! Character variety rules - uppercase, lowercase, digits, special chars.

/// The special-character set rewarded by the scoring rules.
pub const SPECIAL_CHARS: &str = r##"!@#$%^&*()_+-=[]{};:'",.<>?/\|`~"##;

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// At least one letter of either case. This is the gate's baseline class
/// requirement, deliberately weaker than the per-class scoring bonuses.
pub fn has_letter(password: &str) -> bool {
    password.chars().any(|c| c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_uppercase() {
        assert!(!has_uppercase("lowercase123!"));
        assert!(has_uppercase("Mixed123!"));
    }

    #[test]
    fn test_missing_lowercase() {
        assert!(!has_lowercase("UPPERCASE123!"));
        assert!(has_lowercase("Mixed123!"));
    }

    #[test]
    fn test_missing_digit() {
        assert!(!has_digit("NoNumbers!"));
        assert!(has_digit("With1Number"));
    }

    #[test]
    fn test_missing_special() {
        assert!(!has_special("NoSpecial123"));
        assert!(has_special("With!Special"));
        assert!(has_special("back\\slash"));
        assert!(has_special("tick`mark"));
    }

    #[test]
    fn test_has_letter() {
        assert!(has_letter("abc"));
        assert!(has_letter("ABC"));
        assert!(has_letter("123a"));
        assert!(!has_letter("12345678"));
        assert!(!has_letter("1234!@#$"));
    }
}
