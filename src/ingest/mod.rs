pub mod dispatcher;
pub mod extract;
pub mod parsers;
pub mod scanner;
pub mod separator;

pub use dispatcher::Dispatcher;
pub use extract::{BuiltinExtractor, ExtractError, Pdftotext, TextExtractor};
pub use parsers::FormatParser;
pub use scanner::Scanner;
