pub mod filter;
pub mod lexer;
pub mod parser;
pub mod tokens;

pub use filter::{to_filter, BasicFilter, Category, Operator};
pub use parser::try_parse;
pub use tokens::{Atom, TokenKind};
