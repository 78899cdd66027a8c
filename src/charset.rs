//! Character class alphabets
//!
//! Fixed alphabets each policy minimum draws from during generation.

/// One of the four character classes a policy can set a minimum for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Digit,
    Special,
    Uppercase,
    Lowercase,
}

const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Union of all four class alphabets, used for padding beyond the minimums.
pub(crate) const POOL: &str =
    "0123456789!@#$%^&*()_+-=[]{}|;:,.<>?ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

impl CharacterClass {
    /// All classes, in the order their minimums are seeded during generation.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Digit,
        CharacterClass::Special,
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
    ];

    /// The fixed alphabet this class draws from.
    ///
    /// The exact member sets are an external contract: digits `0-9`,
    /// uppercase `A-Z`, lowercase `a-z`, and a fixed punctuation set for
    /// specials.
    pub const fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
        }
    }
}
