//! Black-box properties of generation and validation through the public
//! API.

use std::collections::HashSet;

use secrecy::SecretString;

use passmith::{PasswordPolicy, generate_password, validate_password};

#[test]
fn thousand_generations_are_distinct() {
    let policy = PasswordPolicy::default();
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let password = generate_password(&policy).expect("generation should succeed");
        assert!(
            seen.insert(password.clone()),
            "duplicate password generated: {:?}",
            password
        );
    }
}

#[test]
fn generated_passwords_validate_against_their_policy() {
    let policies = [
        PasswordPolicy::default(),
        PasswordPolicy {
            min_length: 8,
            max_length: 16,
            min_digits: 2,
            min_special: 2,
            min_uppercase: 2,
            min_lowercase: 2,
            no_recurring: false,
        },
        PasswordPolicy {
            min_length: 4,
            max_length: 4,
            min_digits: 1,
            min_special: 1,
            min_uppercase: 1,
            min_lowercase: 1,
            no_recurring: false,
        },
        PasswordPolicy {
            min_length: 12,
            max_length: 16,
            no_recurring: true,
            ..PasswordPolicy::default()
        },
        PasswordPolicy {
            min_length: 0,
            max_length: 10,
            min_digits: 0,
            min_special: 0,
            min_uppercase: 0,
            min_lowercase: 0,
            no_recurring: false,
        },
    ];

    for policy in &policies {
        for _ in 0..50 {
            let password = generate_password(policy).expect("generation should succeed");

            let length = password.chars().count() as u32;
            assert!(
                length >= policy.min_length && length <= policy.max_length,
                "length {} outside [{}, {}]",
                length,
                policy.min_length,
                policy.max_length
            );

            let report = validate_password(&SecretString::new(password.into()), policy);
            assert!(
                report.is_valid(),
                "generated password violates its own policy: {:?}",
                report.violations
            );
        }
    }
}

#[test]
fn single_class_policy_generates_from_that_class() {
    let policy = PasswordPolicy {
        min_length: 1,
        max_length: 1,
        min_digits: 1,
        min_special: 0,
        min_uppercase: 0,
        min_lowercase: 0,
        no_recurring: false,
    };
    for _ in 0..20 {
        let password = generate_password(&policy).expect("generation should succeed");
        assert_eq!(password.len(), 1);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }
}
