use thiserror::Error;

use crate::api::CommandLineOption;
use crate::model::{OptionId, Outcome};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An invalid option declaration.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// A single reason that parsing failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A value option was the final token, so there was nothing to consume as its value.
    #[error("Parse error: option ({form} / {alt_form}) requires a value, but none was provided.")]
    MissingValue {
        /// The primary form of the option.
        form: String,
        /// The alternate form of the option.
        alt_form: String,
    },

    /// A required option was neither matched nor defaulted.
    #[error("Parse error: required option ({form} / {alt_form}) not set.")]
    MissingRequired {
        /// The primary form of the option.
        form: String,
        /// The alternate form of the option.
        alt_form: String,
    },

    /// A token matched no option and was not consumed as a value (strict parsing only).
    #[error("Parse error: unrecognized token '{token}'.")]
    UnrecognizedToken {
        /// The offending token.
        token: String,
    },

    /// The declared options are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ParseError {
    fn missing_value(option: &CommandLineOption) -> Self {
        ParseError::MissingValue {
            form: option.form().to_string(),
            alt_form: option.alt_form().to_string(),
        }
    }

    fn missing_required(option: &CommandLineOption) -> Self {
        ParseError::MissingRequired {
            form: option.form().to_string(),
            alt_form: option.alt_form().to_string(),
        }
    }
}

/// Every reason that parsing failed, in the order they were found.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseErrors(Vec<ParseError>);

impl ParseErrors {
    /// The individual errors.
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }

    /// Iterate over the individual errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.0.iter()
    }
}

impl From<ParseError> for ParseErrors {
    fn from(error: ParseError) -> Self {
        ParseErrors(vec![error])
    }
}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "{error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

pub(crate) struct Parser<'p> {
    options: &'p mut [(OptionId, CommandLineOption)],
    help: Option<OptionId>,
    version: Option<OptionId>,
    reject_unrecognized: bool,
}

impl<'p> std::fmt::Debug for Parser<'p> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'p> Parser<'p> {
    pub(crate) fn new(
        options: &'p mut [(OptionId, CommandLineOption)],
        help: Option<OptionId>,
        version: Option<OptionId>,
        reject_unrecognized: bool,
    ) -> Self {
        Self {
            options,
            help,
            version,
            reject_unrecognized,
        }
    }

    /// Match the tokens (excluding the program path) against the options.
    pub(crate) fn consume(self, tokens: &[&str], require_match: bool) -> Result<Outcome, ParseErrors> {
        self.validate().map_err(ParseError::from)?;

        let Parser {
            options,
            help,
            version,
            reject_unrecognized,
        } = self;
        let mut any_match = false;
        let mut unrecognized = Vec::default();
        let mut index = 0;

        // 1. Offer each token to every option, in registration order.
        while index < tokens.len() {
            let token = tokens[index];
            let mut recognized = false;

            for (_id, option) in options.iter_mut() {
                if option.check(token) {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Matched '{token}' to option {_id}.");
                    }

                    // 2. A value option swallows the following token, whatever it looks like.
                    if option.requires_value() {
                        index += 1;

                        match tokens.get(index) {
                            Some(value) => {
                                #[cfg(feature = "tracing_debug")]
                                {
                                    debug!("Assigned '{value}' to option {_id}.");
                                }

                                option.assign(*value);
                            }
                            None => {
                                return Err(ParseError::missing_value(option).into());
                            }
                        }
                    }

                    recognized = true;
                    any_match = true;
                }
            }

            if !recognized {
                unrecognized.push(token);
            }

            index += 1;
        }

        // 3. Help & version pre-empt any validation of the other options.
        let is_set = |target: Option<OptionId>| {
            options
                .iter()
                .any(|(id, option)| Some(*id) == target && option.is_set())
        };
        let strict_miss = reject_unrecognized && !unrecognized.is_empty();

        if is_set(help) || (!any_match && require_match && !strict_miss) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help requested (any_match={any_match}, require_match={require_match}).");
            }

            return Ok(Outcome::Help);
        }

        if is_set(version) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Version requested.");
            }

            return Ok(Outcome::Version);
        }

        // 4. Collect every remaining problem.
        let mut errors = Vec::default();

        if reject_unrecognized {
            errors.extend(
                unrecognized
                    .into_iter()
                    .map(|token| ParseError::UnrecognizedToken {
                        token: token.to_string(),
                    }),
            );
        }

        errors.extend(
            options
                .iter()
                .filter(|(_, option)| {
                    option.is_required() && !option.is_separator() && !option.is_set()
                })
                .map(|(_, option)| ParseError::missing_required(option)),
        );

        if errors.is_empty() {
            Ok(Outcome::Parsed)
        } else {
            Err(ParseErrors(errors))
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (id, option) in self.options.iter() {
            if !option.is_separator()
                && option.form().is_empty()
                && option.alt_form().split_whitespace().next().is_none()
            {
                return Err(ConfigError(format!(
                    "option {id} ('{}') has neither a form nor an alternate form.",
                    option.description()
                )));
            }
        }

        Ok(())
    }
}
