use async_trait::async_trait;
use log::info;

use crate::errors::AppResult;

/// Outbound delivery of password-reset codes. Swapped for a real transport in
/// deployments; the default just logs so the flow works without SMTP
/// credentials.
#[async_trait]
pub trait ResetCodeMailer: Send + Sync {
    async fn send_reset_code(&self, to_email: &str, to_name: &str, code: &str) -> AppResult<()>;
}

pub struct LogMailer;

#[async_trait]
impl ResetCodeMailer for LogMailer {
    async fn send_reset_code(&self, to_email: &str, to_name: &str, code: &str) -> AppResult<()> {
        info!("reset code for {to_name} <{to_email}>: {code}");
        Ok(())
    }
}
