//! Password validator - aggregates rule checks into a violation report.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::PasswordPolicy;
use crate::rules::{
    has_recurring, insufficient_digits, insufficient_lowercase, insufficient_special,
    insufficient_uppercase, too_long, too_short,
};

/// Ordered violation messages from one validation call.
///
/// An empty report means the password satisfies the policy. Reports are
/// built fresh per call; nothing is accumulated across invocations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub violations: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validates a password against a policy.
///
/// Runs the rule checks in a fixed order (length minimum, length maximum,
/// digits, specials, uppercase, lowercase, recurring) and appends one
/// message per violated requirement, naming the unmet threshold. The
/// recurring check only runs when the policy sets `no_recurring`.
///
/// A non-compliant password is a normal outcome, not an error: this
/// function always returns a report.
pub fn validate_password(password: &SecretString, policy: &PasswordPolicy) -> ValidationReport {
    let pwd = password.expose_secret();
    let mut violations = Vec::new();

    if too_short(pwd, policy.min_length) {
        violations.push(format!(
            "Password must be at least {} characters long",
            policy.min_length
        ));
    }
    if too_long(pwd, policy.max_length) {
        violations.push(format!(
            "Password must be at most {} characters long",
            policy.max_length
        ));
    }
    if insufficient_digits(pwd, policy.min_digits) {
        violations.push(format!(
            "Password must contain at least {} digit(s)",
            policy.min_digits
        ));
    }
    if insufficient_special(pwd, policy.min_special) {
        violations.push(format!(
            "Password must contain at least {} special character(s)",
            policy.min_special
        ));
    }
    if insufficient_uppercase(pwd, policy.min_uppercase) {
        violations.push(format!(
            "Password must contain at least {} uppercase letter(s)",
            policy.min_uppercase
        ));
    }
    if insufficient_lowercase(pwd, policy.min_lowercase) {
        violations.push(format!(
            "Password must contain at least {} lowercase letter(s)",
            policy.min_lowercase
        ));
    }
    if policy.no_recurring && has_recurring(pwd) {
        violations.push("Password must not contain recurring characters".to_string());
    }

    ValidationReport { violations }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_validate_compliant_password() {
        let policy = PasswordPolicy {
            min_length: 8,
            ..PasswordPolicy::default()
        };
        let report = validate_password(&secret("Valid1Password!"), &policy);
        assert!(report.is_valid(), "unexpected violations: {:?}", report.violations);
    }

    #[test]
    fn test_validate_short_password_reports_length_first() {
        let policy = PasswordPolicy {
            min_length: 8,
            ..PasswordPolicy::default()
        };
        let report = validate_password(&secret("short1!"), &policy);
        assert!(!report.is_valid());
        assert_eq!(
            report.violations[0],
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_validate_reports_in_fixed_order() {
        let policy = PasswordPolicy {
            min_length: 8,
            ..PasswordPolicy::default()
        };
        let report = validate_password(&secret(""), &policy);
        assert_eq!(
            report.violations,
            vec![
                "Password must be at least 8 characters long",
                "Password must contain at least 1 digit(s)",
                "Password must contain at least 1 special character(s)",
                "Password must contain at least 1 uppercase letter(s)",
                "Password must contain at least 1 lowercase letter(s)",
            ]
        );
    }

    #[test]
    fn test_validate_over_maximum_length() {
        let policy = PasswordPolicy {
            min_length: 1,
            max_length: 10,
            min_digits: 0,
            min_special: 0,
            min_uppercase: 0,
            min_lowercase: 0,
            no_recurring: false,
        };
        let report = validate_password(&secret("elevenchars"), &policy);
        assert_eq!(
            report.violations,
            vec!["Password must be at most 10 characters long"]
        );
    }

    #[test]
    fn test_validate_recurring_only_when_flagged() {
        let mut policy = PasswordPolicy {
            min_length: 0,
            max_length: 32,
            min_digits: 0,
            min_special: 0,
            min_uppercase: 0,
            min_lowercase: 0,
            no_recurring: false,
        };
        let password = secret("aabb");

        let report = validate_password(&password, &policy);
        assert!(report.is_valid());

        policy.no_recurring = true;
        let report = validate_password(&password, &policy);
        assert_eq!(
            report.violations,
            vec!["Password must not contain recurring characters"]
        );
    }

    #[test]
    fn test_validate_recurring_message_comes_last() {
        let policy = PasswordPolicy {
            min_length: 0,
            max_length: 32,
            min_digits: 1,
            min_special: 0,
            min_uppercase: 0,
            min_lowercase: 0,
            no_recurring: true,
        };
        let report = validate_password(&secret("aa"), &policy);
        assert_eq!(
            report.violations,
            vec![
                "Password must contain at least 1 digit(s)",
                "Password must not contain recurring characters",
            ]
        );
    }

    #[test]
    fn test_empty_report_is_valid() {
        assert!(ValidationReport::default().is_valid());
    }
}
