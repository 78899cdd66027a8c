//! Password policy model
//!
//! Composition thresholds a password must satisfy, built once per
//! invocation by layering CLI flags over config-file values over defaults.

use std::collections::HashMap;
use thiserror::Error;

use crate::charset::CharacterClass;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Invalid config value for {key}: expected {expected}, got {value:?}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Composition thresholds for validation and generation.
///
/// Generation additionally expects `min_length <= max_length` and the sum
/// of the four class minimums to fit within `min_length`; violations
/// surface as [`GenerateError`](crate::GenerateError) constraint variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: u32,
    pub max_length: u32,
    pub min_digits: u32,
    pub min_special: u32,
    pub min_uppercase: u32,
    pub min_lowercase: u32,
    /// Reject candidates in which any character value appears twice.
    pub no_recurring: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 12,
            max_length: 32,
            min_digits: 1,
            min_special: 1,
            min_uppercase: 1,
            min_lowercase: 1,
            no_recurring: false,
        }
    }
}

impl PasswordPolicy {
    /// Builds a policy from config-file values layered over the defaults.
    pub fn from_config(values: &HashMap<String, String>) -> Result<Self, PolicyError> {
        let mut policy = Self::default();
        policy.apply_config(values)?;
        Ok(policy)
    }

    /// Applies recognized config keys to this policy.
    ///
    /// Recognized keys: `minLength`, `maxLength`, `minDigits`,
    /// `minSpecials`, `minUppercase`, `minLowercase` (non-negative
    /// integers) and `noRecurring` (`true` or `false`). Unknown keys are
    /// ignored.
    ///
    /// # Errors
    /// Returns [`PolicyError::InvalidValue`] when a recognized key carries
    /// a value that does not parse.
    pub fn apply_config(&mut self, values: &HashMap<String, String>) -> Result<(), PolicyError> {
        for (key, value) in values {
            match key.as_str() {
                "minLength" => self.min_length = parse_count(key, value)?,
                "maxLength" => self.max_length = parse_count(key, value)?,
                "minDigits" => self.min_digits = parse_count(key, value)?,
                "minSpecials" => self.min_special = parse_count(key, value)?,
                "minUppercase" => self.min_uppercase = parse_count(key, value)?,
                "minLowercase" => self.min_lowercase = parse_count(key, value)?,
                "noRecurring" => self.no_recurring = parse_flag(key, value)?,
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Ignoring unknown config key: {}", key);
                }
            }
        }
        Ok(())
    }

    /// The configured minimum for one character class.
    pub fn class_minimum(&self, class: CharacterClass) -> u32 {
        match class {
            CharacterClass::Digit => self.min_digits,
            CharacterClass::Special => self.min_special,
            CharacterClass::Uppercase => self.min_uppercase,
            CharacterClass::Lowercase => self.min_lowercase,
        }
    }
}

fn parse_count(key: &str, value: &str) -> Result<u32, PolicyError> {
    value.parse().map_err(|_| PolicyError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected: "a non-negative integer",
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, PolicyError> {
    value.parse().map_err(|_| PolicyError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected: "true or false",
    })
}
