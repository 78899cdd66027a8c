//! Length checks - password character count against the policy bounds.

/// True if the password has fewer characters than `min_length`.
///
/// Length is counted in characters, not bytes, so multi-byte characters
/// count once.
pub fn too_short(password: &str, min_length: u32) -> bool {
    password.chars().count() < min_length as usize
}

/// True if the password has more characters than `max_length`.
pub fn too_long(password: &str, max_length: u32) -> bool {
    password.chars().count() > max_length as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_below_minimum() {
        assert!(too_short("Short1!", 8));
    }

    #[test]
    fn test_too_short_exactly_minimum() {
        assert!(!too_short("12345678", 8));
    }

    #[test]
    fn test_too_short_zero_minimum() {
        assert!(!too_short("", 0));
    }

    #[test]
    fn test_too_long_above_maximum() {
        assert!(too_long("123456789", 8));
    }

    #[test]
    fn test_too_long_exactly_maximum() {
        assert!(!too_long("12345678", 8));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 5 characters, 6 bytes
        assert!(!too_long("héllo", 5));
        assert!(!too_short("héllo", 5));
    }
}
