mod base;
mod interface;
mod printer;

pub use base::{ConfigError, ParseError, ParseErrors};
pub(crate) use base::Parser;
pub(crate) use interface::*;
pub(crate) use printer::*;
