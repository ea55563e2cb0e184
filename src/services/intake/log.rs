use async_trait::async_trait;

use super::QuoteSink;
use crate::models::QuoteRequest;

/// Writes each submission to the diagnostic log and nothing else. No
/// delivery backend is wired up for quote requests.
pub struct LogSink;

#[async_trait]
impl QuoteSink for LogSink {
    async fn deliver(&self, submission_id: &str, quote: &QuoteRequest) -> anyhow::Result<()> {
        tracing::info!(
            submission_id = %submission_id,
            name = %quote.name,
            email = %quote.email,
            phone = %quote.phone,
            service = quote.service.as_str(),
            details = %quote.message,
            "form submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::models::ServiceKind;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn jane() -> QuoteRequest {
        QuoteRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "5875551234".to_string(),
            service: ServiceKind::Deck,
            message: "Need my deck stained before July.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_log_sink_accepts_quote() {
        assert!(LogSink.deliver("test-id", &jane()).await.is_ok());
    }

    #[tokio::test]
    async fn test_log_sink_writes_every_field_labeled() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        LogSink.deliver("id1", &jane()).await.unwrap();

        let line = captured.text();
        assert!(line.contains("form submitted"), "{line}");
        assert!(line.contains("submission_id=id1"), "{line}");
        assert!(line.contains("name=Jane Doe"), "{line}");
        assert!(line.contains("email=jane@example.com"), "{line}");
        assert!(line.contains("phone=5875551234"), "{line}");
        assert!(line.contains("service=\"deck\""), "{line}");
        assert!(line.contains("details=Need my deck stained before July."), "{line}");
    }
}
