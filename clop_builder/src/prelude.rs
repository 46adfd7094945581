//! Traits which, typically, may be imported without concern: `use clop::prelude::*`.

use crate::api::CommandLineOption;
use crate::model::OptionId;

/// Behaviour for locating a registered option amongst the parser's options.
// Needs to be imported in order to implement a custom lookup.
pub trait OptionLookup {
    /// Find the position of the matching option, if it is registered.
    fn position(&self, options: &[(OptionId, CommandLineOption)]) -> Option<usize>;
}

impl OptionLookup for OptionId {
    fn position(&self, options: &[(OptionId, CommandLineOption)]) -> Option<usize> {
        options.iter().position(|(id, _)| id == self)
    }
}

impl OptionLookup for &CommandLineOption {
    fn position(&self, options: &[(OptionId, CommandLineOption)]) -> Option<usize> {
        options.iter().position(|(_, option)| option == *self)
    }
}

impl OptionLookup for CommandLineOption {
    fn position(&self, options: &[(OptionId, CommandLineOption)]) -> Option<usize> {
        options.iter().position(|(_, option)| option == self)
    }
}
