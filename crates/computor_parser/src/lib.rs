pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ErrorKind, ParseError};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, parse_tokens};
