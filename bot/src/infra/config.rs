//! Environment-backed configuration loading via `envy`.

use anyhow::{Context, Result};

use crate::domain::BotConfig;

/// Required environment variables, for error messages.
pub const REQUIRED_VARS: [&str; 6] = [
    "TELEGRAM_TOKEN",
    "AWS_INSTANCE_ID",
    "AWS_ACCESS_KEY_ID",
    "AWS_ACCESS_KEY_SECRET",
    "MC_HOST",
    "MC_PORT",
];

/// Load configuration from the process environment.
///
/// # Errors
///
/// Returns an error if a required variable is missing or malformed.
pub fn load() -> Result<BotConfig> {
    from_vars(std::env::vars())
}

/// Load configuration from an explicit set of variables.
///
/// # Errors
///
/// Returns an error if a required variable is missing or malformed.
pub fn from_vars<I>(vars: I) -> Result<BotConfig>
where
    I: IntoIterator<Item = (String, String)>,
{
    envy::from_iter(vars).with_context(|| {
        format!(
            "failed to load config from environment ({} are required)",
            REQUIRED_VARS.join(", ")
        )
    })
}
