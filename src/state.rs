use crate::config::AppConfig;
use crate::services::intake::QuoteSink;

pub struct AppState {
    pub config: AppConfig,
    pub quotes: Box<dyn QuoteSink>,
}
