pub mod assets;
pub mod fallback;
pub mod health;
pub mod page;
pub mod quote;
