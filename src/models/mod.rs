pub mod format;
pub mod quote;

pub use format::{extension_of, Format};
pub use quote::QuoteRecord;
