//! Policy-driven password validation and generation
//!
//! This library validates passwords against configurable composition
//! rules and generates random passwords meeting those rules. Random draws
//! come from the operating-system CSPRNG and are rejection-sampled, so
//! integer draws carry no modulo bias. Policies are built by merging CLI
//! flags over `.cpc` config-file values over built-in defaults.
//!
//! # Features
//!
//! - `async` (default): Enables async generation with cancellation support
//! - `cli` (default): Builds the `passmith` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Config files
//!
//! `.cpc` files hold `key=value` lines; `#` starts a comment and values
//! may reference environment variables as `${VAR}`:
//!
//! ```text
//! # corporate password policy
//! minLength = 16
//! minSpecials = 2
//! noRecurring = true
//! ```
//!
//! # Example
//!
//! ```rust
//! use passmith::{generate_password, validate_password, PasswordPolicy};
//! use secrecy::SecretString;
//!
//! let policy = PasswordPolicy::default();
//!
//! // Generate a password satisfying the policy
//! let password = generate_password(&policy).expect("Failed to generate");
//!
//! // Anything it produces validates cleanly against the same policy
//! let report = validate_password(&SecretString::new(password.into()), &policy);
//! assert!(report.is_valid());
//! ```

// Internal modules
mod charset;
mod config;
mod generator;
mod policy;
mod rng;
mod rules;
mod validator;

// Public API
pub use charset::CharacterClass;
pub use config::{
    read_config, read_config_with, ConfigError, ReadOptions, ValueValidator, CONFIG_EXTENSION,
};
pub use generator::{generate_password, GenerateError, MAX_ATTEMPTS};
pub use policy::{PasswordPolicy, PolicyError};
pub use rng::{random_char, shuffle, uniform_int, RngError};
pub use validator::{validate_password, ValidationReport};

#[cfg(feature = "async")]
pub use generator::generate_password_tx;
