//! Class count checks - occurrences of each character class against the
//! policy minimums.

fn count_matching(password: &str, matches: impl Fn(char) -> bool) -> usize {
    password.chars().filter(|&c| matches(c)).count()
}

/// True if the password contains fewer than `min_digits` decimal digits.
pub fn insufficient_digits(password: &str, min_digits: u32) -> bool {
    count_matching(password, |c| c.is_ascii_digit()) < min_digits as usize
}

/// True if the password contains fewer than `min_special` special
/// characters. A character is special when it is outside `[0-9A-Za-z]`;
/// underscore counts.
pub fn insufficient_special(password: &str, min_special: u32) -> bool {
    count_matching(password, |c| !c.is_ascii_alphanumeric()) < min_special as usize
}

/// True if the password contains fewer than `min_uppercase` uppercase
/// letters.
pub fn insufficient_uppercase(password: &str, min_uppercase: u32) -> bool {
    count_matching(password, char::is_uppercase) < min_uppercase as usize
}

/// True if the password contains fewer than `min_lowercase` lowercase
/// letters.
pub fn insufficient_lowercase(password: &str, min_lowercase: u32) -> bool {
    count_matching(password, char::is_lowercase) < min_lowercase as usize
}
