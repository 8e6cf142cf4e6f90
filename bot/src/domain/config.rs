//! Bot configuration values.
//!
//! Loaded from the environment by `crate::infra::config`; this module only
//! describes the shape and defaults.

use std::fmt;

use serde::Deserialize;

/// Startup configuration. Every field without a default is required.
///
/// Field names map to upper-case environment variables, e.g.
/// `telegram_token` ← `TELEGRAM_TOKEN`.
#[derive(Clone, Deserialize)]
pub struct BotConfig {
    /// Telegram Bot API token.
    pub telegram_token: String,

    /// EC2 instance hosting the game server.
    pub aws_instance_id: String,

    pub aws_access_key_id: String,

    pub aws_access_key_secret: String,

    /// Region of `aws_instance_id`.
    #[serde(default = "default_aws_region")]
    pub aws_region: String,

    /// Host of the game server control API.
    pub mc_host: String,

    pub mc_port: u16,
}

fn default_aws_region() -> String {
    "ap-southeast-1".to_string()
}

impl BotConfig {
    /// Base URL of the game server control API.
    #[must_use]
    pub fn game_server_url(&self) -> String {
        format!("http://{}:{}", self.mc_host, self.mc_port)
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_token", &"<redacted>")
            .field("aws_instance_id", &self.aws_instance_id)
            .field("aws_access_key_id", &self.aws_access_key_id)
            .field("aws_access_key_secret", &"<redacted>")
            .field("aws_region", &self.aws_region)
            .field("mc_host", &self.mc_host)
            .field("mc_port", &self.mc_port)
            .finish()
    }
}
