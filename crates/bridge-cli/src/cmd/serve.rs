use anyhow::{Context, Result};
use bridge_core::slack::{SlackConfig, DEFAULT_API_BASE, DEFAULT_CHANNEL};
use bridge_server::AppState;
use clap::Args;
use std::net::{IpAddr, SocketAddr};

/// Listener and Slack settings, read once at startup.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "BRIDGE_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on (0 = OS-assigned)
    #[arg(long, env = "BRIDGE_PORT", default_value = "8000")]
    pub port: u16,

    /// Slack bot user OAuth token (xoxb-...)
    #[arg(long, env = "SLACK_BOT_TOKEN", default_value = "", hide_env_values = true)]
    pub slack_token: String,

    /// Channel to post handoff notifications to
    #[arg(long, env = "SLACK_CHANNEL_ID", default_value = DEFAULT_CHANNEL)]
    pub slack_channel: String,

    /// Slack app signing secret (currently unused)
    #[arg(long, env = "SLACK_SIGNING_SECRET", hide_env_values = true)]
    pub slack_signing_secret: Option<String>,

    /// Slack Web API base URL
    #[arg(long, env = "SLACK_API_BASE", default_value = DEFAULT_API_BASE)]
    pub slack_api_base: String,
}

impl ServeArgs {
    pub fn slack_config(&self) -> SlackConfig {
        SlackConfig::new(self.slack_token.clone(), self.slack_channel.clone())
            .with_api_base(self.slack_api_base.clone())
            .with_signing_secret(self.slack_signing_secret.clone())
    }
}

pub fn run(args: ServeArgs) -> Result<()> {
    let config = args.slack_config();
    config.validate()?;
    if !config.has_token() {
        tracing::warn!("SLACK_BOT_TOKEN is not set; notifications will be rejected by Slack");
    }
    tracing::info!(channel = %config.channel_id, "posting handoffs to slack");

    let addr = SocketAddr::new(args.host, args.port);
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(bridge_server::serve(AppState::new(config), addr))
        .with_context(|| format!("server on {addr} stopped"))
}
