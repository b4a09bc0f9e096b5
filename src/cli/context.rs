//! Command execution context
//!
//! Loads the configuration, builds a fresh client session and, when an email
//! was given, signs in before the command runs.

use colored::Colorize;
use dialoguer::Password;
use log::debug;

use dojo_client::models::{Credentials, UserRecord};
use dojo_client::{Config, Result, SessionContext};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;

/// Environment variable holding the sign-in password
pub const PASSWORD_ENV: &str = "DOJO_PASSWORD";

/// Context for command execution containing the client session and
/// runtime options.
pub struct CommandContext {
    /// Client session shared by every facade
    pub session: SessionContext,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a context without signing in.
    ///
    /// # Errors
    /// Returns error if the config cannot be loaded or is invalid.
    pub fn unauthenticated(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        debug!("Using backend {}", config.base_url);

        Ok(Self {
            session: SessionContext::new(config)?,
            format: opts.format,
        })
    }

    /// Create a context and sign in when `--email` was given.
    ///
    /// A failed sign-in is reported and the command continues signed out;
    /// the facades fall back to public data or samples.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let ctx = Self::unauthenticated(opts)?;

        if let Some(email) = opts.email_ref()
            && let Err(e) = ctx.sign_in(email).await
        {
            eprintln!("{} Sign-in failed: {}", "⚠".yellow(), e);
        }

        Ok(ctx)
    }

    /// Sign in as `email`, reading the password from the environment or a
    /// prompt.
    pub async fn sign_in(&self, email: &str) -> Result<UserRecord> {
        let password = read_password(email)?;
        self.session
            .auth()
            .login(&Credentials::new(email, password))
            .await
    }
}

fn read_password(email: &str) -> Result<String> {
    if let Ok(password) = std::env::var(PASSWORD_ENV)
        && !password.is_empty()
    {
        return Ok(password);
    }

    let password = Password::new()
        .with_prompt(format!("Password for {}", email))
        .interact()?;
    Ok(password)
}
