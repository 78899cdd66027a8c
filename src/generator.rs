//! Password generator - constrained random generation with bounded retry.

use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::{self, CharacterClass};
use crate::policy::PasswordPolicy;
use crate::rng::{self, RngError};
use crate::rules::has_recurring;

/// Upper bound on generation attempts when `no_recurring` rejects
/// candidates. Reaching it fails with [`GenerateError::Exhausted`] instead
/// of looping forever.
pub const MAX_ATTEMPTS: u32 = 100;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Minimum length ({min_length}) cannot be greater than maximum length ({max_length})")]
    MinExceedsMax { min_length: u32, max_length: u32 },
    #[error(
        "Minimum length ({min_length}) must be at least the sum of minimum requirements ({required})"
    )]
    MinimumsExceedLength { min_length: u32, required: u64 },
    #[error("Failed to generate a password meeting all criteria after {0} attempts")]
    Exhausted(u32),
    #[error(transparent)]
    Rng(#[from] RngError),
}

/// Generates a password satisfying the policy.
///
/// Each attempt picks a target length uniformly in
/// `[min_length, max_length]`, seeds exactly the per-class minimums from
/// each class alphabet, pads from the union of all alphabets up to the
/// target, and shuffles. Under `no_recurring`, candidates with a repeated
/// character are discarded and rebuilt, up to [`MAX_ATTEMPTS`] times.
///
/// # Errors
/// - [`GenerateError::MinExceedsMax`] if `min_length > max_length`
/// - [`GenerateError::MinimumsExceedLength`] if the class minimums sum to
///   more than `min_length`
/// - [`GenerateError::Exhausted`] if the retry budget runs out
/// - [`GenerateError::Rng`] if the entropy source fails
pub fn generate_password(policy: &PasswordPolicy) -> Result<String, GenerateError> {
    if policy.min_length > policy.max_length {
        return Err(GenerateError::MinExceedsMax {
            min_length: policy.min_length,
            max_length: policy.max_length,
        });
    }

    let required: u64 = CharacterClass::ALL
        .iter()
        .map(|&class| u64::from(policy.class_minimum(class)))
        .sum();
    if required > u64::from(policy.min_length) {
        return Err(GenerateError::MinimumsExceedLength {
            min_length: policy.min_length,
            required,
        });
    }

    for _ in 0..MAX_ATTEMPTS {
        let candidate = build_candidate(policy)?;
        if policy.no_recurring && has_recurring(&candidate) {
            continue;
        }
        return Ok(candidate);
    }

    Err(GenerateError::Exhausted(MAX_ATTEMPTS))
}

/// One attempt: seed the class minimums, pad from the union pool to a
/// fresh target length, shuffle in place.
fn build_candidate(policy: &PasswordPolicy) -> Result<String, RngError> {
    let target = rng::uniform_int(policy.min_length, policy.max_length)? as usize;
    let mut chars = Vec::with_capacity(target);

    for class in CharacterClass::ALL {
        for _ in 0..policy.class_minimum(class) {
            chars.push(rng::random_char(class.alphabet())?);
        }
    }
    while chars.len() < target {
        chars.push(rng::random_char(charset::POOL)?);
    }

    rng::shuffle(&mut chars)?;
    Ok(chars.into_iter().collect())
}

/// Async wrapper that delivers the generation result over a channel.
///
/// Returns without sending when the token is already cancelled; the
/// dropped sender closes the channel, which the receiver observes as
/// `None`.
#[cfg(feature = "async")]
pub async fn generate_password_tx(
    policy: &PasswordPolicy,
    token: CancellationToken,
    tx: mpsc::Sender<Result<String, GenerateError>>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("Password generation cancelled before starting");
        return;
    }

    let result = generate_password(policy);

    if tx.send(result).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: receiver dropped");
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_password_tx_delivers_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let policy = PasswordPolicy::default();

        generate_password_tx(&policy, token, tx).await;

        let result = rx.recv().await.expect("Should receive a result");
        let password = result.expect("generation should succeed");
        assert!(password.chars().count() >= 12);
    }

    #[tokio::test]
    async fn test_generate_password_tx_cancelled_before_start() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        generate_password_tx(&PasswordPolicy::default(), token, tx).await;

        assert!(
            rx.recv().await.is_none(),
            "cancelled generation must not send a result"
        );
    }

    #[tokio::test]
    async fn test_generate_password_tx_constraint_error_is_delivered() {
        let (tx, mut rx) = mpsc::channel(1);
        let policy = PasswordPolicy {
            min_length: 20,
            max_length: 10,
            ..PasswordPolicy::default()
        };

        generate_password_tx(&policy, CancellationToken::new(), tx).await;

        let result = rx.recv().await.expect("Should receive a result");
        assert!(matches!(result, Err(GenerateError::MinExceedsMax { .. })));
    }
}
