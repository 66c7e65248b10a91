use crate::config::TelegramConfig;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Outbound notification transport. The dispatcher only decides what to
/// send and when; this trait owns how it is transmitted. Implementations
/// must bound each send with a timeout so a hanging channel surfaces as a
/// delivery failure.
#[async_trait::async_trait]
pub trait IMessenger: Send + Sync {
    /// The delivery target recorded in the alert history, e.g. a chat id
    fn target(&self) -> String;
    async fn send(&self, text: &str) -> anyhow::Result<()>;
}

pub struct TelegramMessenger {
    http: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramMessenger {
    pub fn new(config: &TelegramConfig, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }
}

#[async_trait::async_trait]
impl IMessenger for TelegramMessenger {
    fn target(&self) -> String {
        self.chat_id.clone()
    }

    async fn send(&self, text: &str) -> anyhow::Result<()> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let res = self
            .http
            .post(&url)
            .json(&json!({
                "chat_id": self.chat_id,
                "text": text,
            }))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            anyhow::bail!("Telegram API error ({}): {}", status, body);
        }
        debug!("Telegram message delivered to chat {}", self.chat_id);
        Ok(())
    }
}
