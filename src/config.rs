//! Config file reader
//!
//! Reads `.cpc` files of `key=value` lines with `#` comments and `${VAR}`
//! environment-variable interpolation. Transient read failures are retried
//! with exponential backoff; missing files, parse failures, unset
//! variables, and validation failures are terminal.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Extension config files must carry.
pub const CONFIG_EXTENSION: &str = "cpc";

const DEFAULT_ATTEMPTS: u32 = 3;
const BACKOFF_BASE: Duration = Duration::from_millis(100);
const BACKOFF_CAP: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config file extension. Expecting a .{} file", CONFIG_EXTENSION)]
    InvalidExtension(PathBuf),
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config line format at line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("Missing key or value at line {line}: {content:?}")]
    MissingKeyOrValue { line: usize, content: String },
    #[error("Environment variable not found: {0}")]
    UnsetVariable(String),
    #[error("Invalid config value for {key}: {reason}")]
    Validation { key: String, reason: String },
}

impl ConfigError {
    /// Only transient read failures are worth retrying; everything else
    /// is terminal.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ConfigError::Io(_))
    }
}

/// Per-entry validation hook, run after interpolation. Returning
/// `Err(reason)` aborts the read with [`ConfigError::Validation`].
pub type ValueValidator = Box<dyn Fn(&str, &str) -> Result<(), String>>;

/// Options for [`read_config_with`].
pub struct ReadOptions {
    /// Total read attempts before a transient failure is surfaced.
    /// At least one attempt is always made.
    pub attempts: u32,
    /// Optional hook validating each `(key, value)` pair.
    pub validate: Option<ValueValidator>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            validate: None,
        }
    }
}

/// Reads a config file with default options.
pub fn read_config<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>, ConfigError> {
    read_config_with(path, ReadOptions::default())
}

/// Reads a config file into a flat key/value map.
///
/// The file must use the `.cpc` extension. Lines are trimmed; blank lines
/// and `#` comments are skipped; every other line must be `key=value`
/// (split on the first `=`). `${VAR}` occurrences in values are replaced
/// from the environment and later occurrences of a key overwrite earlier
/// ones.
///
/// # Errors
/// - [`ConfigError::InvalidExtension`] for paths not ending in `.cpc`
/// - [`ConfigError::NotFound`] when the file does not exist
/// - [`ConfigError::Io`] when reading still fails after
///   [`ReadOptions::attempts`] tries
/// - [`ConfigError::MalformedLine`] / [`ConfigError::MissingKeyOrValue`]
///   for lines that do not parse
/// - [`ConfigError::UnsetVariable`] when `${VAR}` names an unset variable
/// - [`ConfigError::Validation`] when the validation hook rejects a pair
pub fn read_config_with<P: AsRef<Path>>(
    path: P,
    options: ReadOptions,
) -> Result<HashMap<String, String>, ConfigError> {
    let path = path.as_ref();
    if path.extension().and_then(|ext| ext.to_str()) != Some(CONFIG_EXTENSION) {
        return Err(ConfigError::InvalidExtension(path.to_path_buf()));
    }

    let contents = with_retries(options.attempts, || read_file(path))?;
    let values = parse_config(&contents, options.validate.as_deref())?;

    #[cfg(feature = "tracing")]
    tracing::info!("Loaded {} config entries from {:?}", values.len(), path);

    Ok(values)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Io(err)
        }
    })
}

/// Runs `operation` up to `attempts` times, sleeping with exponential
/// backoff between retryable failures. Terminal errors and the last
/// failure are returned as-is.
fn with_retries<T>(
    attempts: u32,
    mut operation: impl FnMut() -> Result<T, ConfigError>,
) -> Result<T, ConfigError> {
    let mut attempt = 0;
    loop {
        match operation() {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt + 1 < attempts => {
                let delay = backoff_delay(attempt);
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "Config read failed (attempt {} of {}), retrying in {:?}: {}",
                    attempt + 1,
                    attempts,
                    delay,
                    err
                );
                std::thread::sleep(delay);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

fn backoff_delay(attempt: u32) -> Duration {
    BACKOFF_BASE
        .saturating_mul(2u32.saturating_pow(attempt))
        .min(BACKOFF_CAP)
}

fn parse_config(
    contents: &str,
    validate: Option<&dyn Fn(&str, &str) -> Result<(), String>>,
) -> Result<HashMap<String, String>, ConfigError> {
    let mut values = HashMap::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            });
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return Err(ConfigError::MissingKeyOrValue {
                line: index + 1,
                content: line.to_string(),
            });
        }

        let value = interpolate_env(value)?;
        if let Some(validate) = validate {
            validate(key, &value).map_err(|reason| ConfigError::Validation {
                key: key.to_string(),
                reason,
            })?;
        }
        values.insert(key.to_string(), value);
    }

    Ok(values)
}

/// Replaces each `${VAR}` with the variable's value. An unset variable is
/// an error; an unterminated `${` is kept verbatim.
fn interpolate_env(value: &str) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                let resolved = std::env::var(name)
                    .map_err(|_| ConfigError::UnsetVariable(name.to_string()))?;
                out.push_str(&resolved);
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                return Ok(out);
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}
