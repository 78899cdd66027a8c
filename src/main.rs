//! Command-line interface for password generation and validation.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use secrecy::SecretString;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use passmith::{PasswordPolicy, generate_password, read_config, validate_password};

#[derive(Parser, Debug)]
#[command(
    name = "passmith",
    version,
    about = "Generate and validate passwords against composition policies"
)]
struct Cli {
    /// Path to a .cpc config file with policy defaults
    #[arg(long, global = true, env = "PASSMITH_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a password satisfying the policy
    Generate {
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Validate a password against the policy
    Validate {
        /// Password to validate
        #[arg(long)]
        password: String,

        #[command(flatten)]
        policy: PolicyArgs,
    },
}

/// Policy overrides. Flags win over config-file values, which win over
/// the built-in defaults.
#[derive(Args, Debug)]
struct PolicyArgs {
    /// Minimum password length
    #[arg(long, value_name = "N")]
    min_length: Option<u32>,

    /// Maximum password length
    #[arg(long, value_name = "N")]
    max_length: Option<u32>,

    /// Minimum number of digits
    #[arg(long, value_name = "N")]
    min_digits: Option<u32>,

    /// Minimum number of special characters
    #[arg(long, value_name = "N")]
    min_specials: Option<u32>,

    /// Minimum number of uppercase letters
    #[arg(long, value_name = "N")]
    min_uppercase: Option<u32>,

    /// Minimum number of lowercase letters
    #[arg(long, value_name = "N")]
    min_lowercase: Option<u32>,

    /// Reject passwords with any repeated character
    #[arg(long)]
    no_recurring: bool,
}

impl PolicyArgs {
    fn apply(&self, policy: &mut PasswordPolicy) {
        if let Some(min_length) = self.min_length {
            policy.min_length = min_length;
        }
        if let Some(max_length) = self.max_length {
            policy.max_length = max_length;
        }
        if let Some(min_digits) = self.min_digits {
            policy.min_digits = min_digits;
        }
        if let Some(min_specials) = self.min_specials {
            policy.min_special = min_specials;
        }
        if let Some(min_uppercase) = self.min_uppercase {
            policy.min_uppercase = min_uppercase;
        }
        if let Some(min_lowercase) = self.min_lowercase {
            policy.min_lowercase = min_lowercase;
        }
        if self.no_recurring {
            policy.no_recurring = true;
        }
    }
}

const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(log_filter_from_verbosity(verbose)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_policy(config: Option<&PathBuf>, args: &PolicyArgs) -> anyhow::Result<PasswordPolicy> {
    let mut policy = PasswordPolicy::default();
    if let Some(path) = config {
        let values = read_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
        policy.apply_config(&values)?;
    }
    args.apply(&mut policy);
    tracing::debug!("Resolved policy: {:?}", policy);
    Ok(policy)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Generate { policy: args } => {
            let policy = resolve_policy(cli.config.as_ref(), &args)?;
            let password = generate_password(&policy)?;
            println!("{}", password);
        }
        Command::Validate {
            password,
            policy: args,
        } => {
            let policy = resolve_policy(cli.config.as_ref(), &args)?;
            let password = SecretString::new(password.into());
            let report = validate_password(&password, &policy);
            if report.is_valid() {
                println!("Password is valid");
            } else {
                eprintln!("Password is invalid:");
                for violation in &report.violations {
                    eprintln!("- {}", violation);
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
