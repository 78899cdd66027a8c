//! Secure random primitives
//!
//! Every draw pulls fresh bytes from the operating-system CSPRNG. Integer
//! draws are rejection-sampled so that ranges which do not evenly divide the
//! 32-bit value space carry no modulo bias.

use thiserror::Error;

#[derive(Error, Debug)]
#[error("Failed to read from the system entropy source: {0}")]
pub struct RngError(#[from] getrandom::Error);

/// Draws a uniformly distributed integer in `[min, max]`, both bounds
/// inclusive.
///
/// Draws a fresh 32-bit value from the OS entropy source and discards any
/// value falling in the truncated remainder of the range, redrawing until
/// one lands in the unbiased zone.
///
/// `min` must be less than or equal to `max`.
///
/// # Errors
/// Returns `RngError` if the entropy source fails.
pub fn uniform_int(min: u32, max: u32) -> Result<u32, RngError> {
    debug_assert!(min <= max);
    let range = u64::from(max) - u64::from(min) + 1;
    // Largest multiple of `range` representable in 32 bits; draws at or
    // above it would bias the low values and are rejected.
    let zone = (1u64 << 32) / range * range;

    let mut buf = [0u8; 4];
    loop {
        getrandom::fill(&mut buf)?;
        let value = u64::from(u32::from_be_bytes(buf));
        if value < zone {
            return Ok(min + (value % range) as u32);
        }
    }
}

/// Picks one character uniformly from `alphabet`.
///
/// The alphabet must be non-empty ASCII; all class alphabets used for
/// generation satisfy this.
pub fn random_char(alphabet: &str) -> Result<char, RngError> {
    debug_assert!(!alphabet.is_empty() && alphabet.is_ascii());
    let bytes = alphabet.as_bytes();
    let index = uniform_int(0, bytes.len() as u32 - 1)?;
    Ok(bytes[index as usize] as char)
}

/// Shuffles the slice in place with a Fisher-Yates pass, walking from the
/// last index down and swapping each position with a uniformly chosen
/// earlier one (or itself).
pub fn shuffle(chars: &mut [char]) -> Result<(), RngError> {
    for i in (1..chars.len()).rev() {
        let j = uniform_int(0, i as u32)?;
        chars.swap(i, j as usize);
    }
    Ok(())
}
