pub mod lang;

pub use lang::{to_filter, try_parse, BasicFilter};
