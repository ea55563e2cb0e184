pub mod log;

use async_trait::async_trait;

use crate::models::QuoteRequest;

/// Where a validated quote request goes once submitted.
#[async_trait]
pub trait QuoteSink: Send + Sync {
    async fn deliver(&self, submission_id: &str, quote: &QuoteRequest) -> anyhow::Result<()>;
}
