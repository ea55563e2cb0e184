// Landing page sections, top to bottom.

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod quote_form;
mod reveal;
mod services;
mod standout;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use quote_form::QuoteForm;
pub use reveal::RevealSection;
pub use services::{ServiceCard, Services};
pub use standout::Standout;
