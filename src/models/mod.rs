pub mod navigation;
pub mod quote;
pub mod reveal;

pub use navigation::{Navigation, Section, SECTIONS};
pub use quote::{QuoteError, QuoteField, QuoteForm, QuoteRequest, ServiceKind};
pub use reveal::{RevealLatch, REVEAL_THRESHOLD};
