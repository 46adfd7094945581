use std::env;
use std::ffi::OsString;

use crate::api::CommandLineOption;
use crate::constant::*;
use crate::model::{OptionId, Outcome};
use crate::parser::{ConsoleInterface, ParseErrors, Parser, Printer, UserInterface};
use crate::prelude::OptionLookup;

/// The command line parser.
///
/// Declare options on the parser, parse the arguments, then query the options by their [`OptionId`] (or by an equal [`CommandLineOption`]).
/// The parser owns its own copy of every registered option; that copy is the one updated during parsing.
///
/// ### Example
/// ```
/// # use clop_builder as clop;
/// use clop::{CommandLineOption, CommandLineParser};
///
/// let mut parser = CommandLineParser::new(["copy", "-i", "in.txt"])
///     .program_name("copy")
///     .program_version("1.0.0");
/// parser.add_help_option();
/// let input = parser.add_option(CommandLineOption::value("-i", "--input", "The input file.").required());
/// let output = parser.add_option(
///     CommandLineOption::value("-o", "--output", "The output file.").default_value("out.txt"),
/// );
///
/// parser.parse_status(true).unwrap();
///
/// assert_eq!(parser.get_value(input), "in.txt");
/// assert_eq!(parser.get_value(output), "out.txt");
/// ```
pub struct CommandLineParser {
    args: Vec<String>,
    program_name: String,
    program_version: String,
    options: Vec<(OptionId, CommandLineOption)>,
    help: Option<OptionId>,
    version: Option<OptionId>,
    next_id: u32,
    reject_unrecognized: bool,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for CommandLineParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("args", &self.args)
            .field("program_name", &self.program_name)
            .field("program_version", &self.program_version)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl CommandLineParser {
    /// Create a command line parser over the raw arguments.
    /// The first argument is the program path; it is displayed in the help message but never matched.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            program_name: String::default(),
            program_version: String::default(),
            options: Vec::default(),
            help: None,
            version: None,
            next_id: 0,
            reject_unrecognized: false,
            printer: Printer::default(),
            user_interface: Box::new(ConsoleInterface::default()),
        }
    }

    /// Create a command line parser over the process arguments ([`env::args_os`]).
    /// Arguments which aren't valid unicode are converted lossily.
    pub fn from_env() -> Self {
        Self::new(lossy(env::args_os()))
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Create a command line parser which records its output, rather than printing to the console.
    ///
    /// ### Example
    /// ```
    /// # use clop_builder as clop;
    /// use clop::CommandLineParser;
    ///
    /// let (mut parser, output) = CommandLineParser::test_dummy(["program", "--version"]);
    /// parser.add_version_option();
    ///
    /// assert_eq!(parser.parse_status(true), Err(0));
    /// assert_eq!(output.messages(), "\n");
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy<I, S>(args: I) -> (Self, crate::api::CapturedOutput)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let interface = crate::parser::util::InMemoryInterface::default();
        let parser = Self::new(args).with_interface(Box::new(interface.clone()));
        (parser, crate::api::CapturedOutput::new(interface))
    }

    #[cfg_attr(not(any(test, feature = "unit_test")), allow(dead_code))]
    pub(crate) fn with_interface(mut self, user_interface: Box<dyn UserInterface>) -> Self {
        self.user_interface = user_interface;
        self
    }

    /// Set the program name, displayed by the version option.
    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    /// Set the program version, displayed by the version option.
    pub fn program_version(mut self, version: impl Into<String>) -> Self {
        self.program_version = version.into();
        self
    }

    /// Set the width (in columns) the help message is wrapped to.
    /// Defaults to 80.
    pub fn line_width(mut self, width: usize) -> Self {
        self.printer = Printer::new(width);
        self
    }

    /// Wrap the help message to the width of the attached terminal (or 80, when there isn't one).
    pub fn terminal_line_width(mut self) -> Self {
        self.printer = Printer::terminal();
        self
    }

    /// Report tokens which neither match an option nor are consumed as a value.
    ///
    /// By default such tokens are ignored.
    /// When every token is unrecognized, the default behaviour is to display the help message; under this setting the tokens are reported instead.
    ///
    /// ### Example
    /// ```
    /// # use clop_builder as clop;
    /// use clop::{CommandLineOption, CommandLineParser, ParseError};
    ///
    /// let mut parser = CommandLineParser::new(["program", "--quite"]).reject_unrecognized(true);
    /// parser.add_option(CommandLineOption::flag("-q", "--quiet", "Print nothing."));
    ///
    /// let errors = parser.try_parse(true).unwrap_err();
    /// assert_eq!(
    ///     errors.errors(),
    ///     &[ParseError::UnrecognizedToken { token: "--quite".to_string() }]
    /// );
    /// ```
    pub fn reject_unrecognized(mut self, reject: bool) -> Self {
        self.reject_unrecognized = reject;
        self
    }

    fn register(&mut self, option: CommandLineOption, front: bool) -> OptionId {
        let id = OptionId(self.next_id);
        self.next_id += 1;

        if front {
            self.options.insert(0, (id, option));
        } else {
            self.options.push((id, option));
        }

        id
    }

    fn deregister(&mut self, id: Option<OptionId>) {
        if let Some(id) = id {
            self.options.retain(|(registered, _)| *registered != id);
        }
    }

    /// Add an option to the end of the parser.
    ///
    /// The order of the options is both the order they are matched in, and the order they are displayed in.
    pub fn add_option(&mut self, option: CommandLineOption) -> OptionId {
        self.register(option, false)
    }

    /// Add a separator (a blank line in the help message) to the end of the parser.
    pub fn add_separator(&mut self) -> OptionId {
        self.register(CommandLineOption::separator(), false)
    }

    /// Add the help option (`-h`, `--help`) to the front of the parser.
    ///
    /// If repeated, only the final help option will apply.
    pub fn add_help_option(&mut self) -> OptionId {
        self.add_help_option_with(CommandLineOption::flag(
            HELP_FORM,
            HELP_ALT_FORM,
            HELP_MESSAGE,
        ))
    }

    /// Add a custom help option to the front of the parser.
    ///
    /// If repeated, only the final help option will apply.
    ///
    /// ### Example
    /// ```
    /// # use clop_builder as clop;
    /// use clop::{CommandLineOption, CommandLineParser, Outcome};
    ///
    /// let mut parser = CommandLineParser::new(["program", "-?"]);
    /// parser.add_option(CommandLineOption::flag("-q", "--quiet", "Print nothing."));
    /// parser.add_help_option_with(CommandLineOption::flag("-?", "--usage", "Show the usage."));
    ///
    /// assert_eq!(parser.try_parse(true), Ok(Outcome::Help));
    /// assert_eq!(parser.options().next().unwrap().form(), "-?");
    /// ```
    pub fn add_help_option_with(&mut self, option: CommandLineOption) -> OptionId {
        self.deregister(self.help);
        let id = self.register(option, true);
        self.help.replace(id);
        id
    }

    /// Add the version option (`-v`, `--version`) to the end of the parser.
    ///
    /// If repeated, only the final version option will apply.
    pub fn add_version_option(&mut self) -> OptionId {
        self.add_version_option_with(CommandLineOption::flag(
            VERSION_FORM,
            VERSION_ALT_FORM,
            VERSION_MESSAGE,
        ))
    }

    /// Add a custom version option to the end of the parser.
    ///
    /// If repeated, only the final version option will apply.
    pub fn add_version_option_with(&mut self, option: CommandLineOption) -> OptionId {
        self.deregister(self.version);
        let id = self.register(option, false);
        self.version.replace(id);
        id
    }

    /// Parse the arguments, without printing anything or exiting.
    ///
    /// Every token after the program path is offered to every option, in order.
    /// A matched option which requires a value consumes the next token as its value.
    ///
    /// * [`Outcome::Help`] when the help option is set, or when `require_match` and no option matched.
    /// * [`Outcome::Version`] when the version option is set.
    /// * [`Outcome::Parsed`] when every required option is set.
    ///
    /// Otherwise, returns every error found.
    /// A value option at the very end of the arguments stops parsing immediately.
    ///
    /// Parsing starts over each time this is invoked.
    pub fn try_parse(&mut self, require_match: bool) -> Result<Outcome, ParseErrors> {
        for (_, option) in self.options.iter_mut() {
            option.reset();
        }

        let tokens: Vec<&str> = self.args.iter().skip(1).map(String::as_str).collect();
        Parser::new(
            &mut self.options,
            self.help,
            self.version,
            self.reject_unrecognized,
        )
        .consume(tokens.as_slice(), require_match)
    }

    /// Parse the arguments, printing the help message, version, or errors as appropriate.
    ///
    /// Returns `Err(0)` after displaying the help message or version, and `Err(1)` after displaying the errors.
    ///
    /// ### Example
    /// ```
    /// # use clop_builder as clop;
    /// use clop::{CommandLineOption, CommandLineParser};
    ///
    /// let mut parser = CommandLineParser::new(["program", "-q"]);
    /// let name = parser.add_option(CommandLineOption::value("-n", "--name", "Your name.").required());
    /// parser.add_option(CommandLineOption::flag("-q", "--quiet", "Print nothing."));
    ///
    /// // Prints: Parse error: required option (-n / --name) not set.
    /// assert_eq!(parser.parse_status(true), Err(1));
    /// assert!(!parser.is_set(name));
    /// ```
    pub fn parse_status(&mut self, require_match: bool) -> Result<(), i32> {
        match self.try_parse(require_match) {
            Ok(Outcome::Parsed) => Ok(()),
            Ok(Outcome::Help) => {
                self.print_help();
                Err(0)
            }
            Ok(Outcome::Version) => {
                self.print_version();
                Err(0)
            }
            Err(errors) => {
                for error in errors.iter() {
                    self.user_interface.print_error(error);
                }

                Err(1)
            }
        }
    }

    /// Parse the arguments, printing the help message, version, or errors as appropriate.
    ///
    /// After displaying the help message or version, exits with code `0` (via [`std::process::exit`]).
    /// After displaying errors, exits with code `1`.
    pub fn parse(&mut self, require_match: bool) {
        match self.parse_status(require_match) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }

    /// Whether the option was matched, or otherwise has a default value.
    /// `false` when the option is not registered.
    pub fn is_set(&self, lookup: impl OptionLookup) -> bool {
        self.option(lookup)
            .map(CommandLineOption::is_set)
            .unwrap_or(false)
    }

    /// The value of the option: its assigned value when matched, otherwise its default.
    /// Empty when the option is not registered.
    pub fn get_value(&self, lookup: impl OptionLookup) -> String {
        self.option(lookup)
            .map(|option| option.get_value().to_string())
            .unwrap_or_default()
    }

    /// The value of the option, split on the first character of `delimiter` (`,` when `delimiter` is empty).
    /// Empty fields are preserved, except after a trailing delimiter.
    /// Empty when the option is not registered.
    ///
    /// ### Example
    /// ```
    /// # use clop_builder as clop;
    /// use clop::{CommandLineOption, CommandLineParser};
    ///
    /// let mut parser = CommandLineParser::new(["program", "-t", "a,b,,c"]);
    /// let tags = parser.add_option(CommandLineOption::value("-t", "--tags", "The tags."));
    /// parser.parse_status(true).unwrap();
    ///
    /// assert_eq!(parser.get_value_list(tags, ","), vec!["a", "b", "", "c"]);
    /// ```
    pub fn get_value_list(&self, lookup: impl OptionLookup, delimiter: &str) -> Vec<String> {
        match self.option(lookup) {
            Some(option) => split(option.get_value(), delimiter),
            None => Vec::default(),
        }
    }

    /// The registered option.
    pub fn option(&self, lookup: impl OptionLookup) -> Option<&CommandLineOption> {
        lookup
            .position(&self.options)
            .map(|index| &self.options[index].1)
    }

    /// The registered options, in order.
    pub fn options(&self) -> impl Iterator<Item = &CommandLineOption> {
        self.options.iter().map(|(_, option)| option)
    }

    /// Print the help message.
    pub fn print_help(&mut self) {
        let program_path = self.args.first().map(String::as_str).unwrap_or_default();
        self.printer
            .print_help(program_path, &mut self.options, &*self.user_interface);
    }

    /// Print the version.
    pub fn print_version(&self) {
        self.printer.print_version(
            &self.program_name,
            &self.program_version,
            &*self.user_interface,
        );
    }
}

/// *Available using 'unit_test' crate feature only.*</br></br>
/// The output recorded by a parser built with [`CommandLineParser::test_dummy`].
#[cfg(feature = "unit_test")]
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    interface: crate::parser::util::InMemoryInterface,
}

#[cfg(feature = "unit_test")]
impl CapturedOutput {
    fn new(interface: crate::parser::util::InMemoryInterface) -> Self {
        Self { interface }
    }

    /// Everything printed to standard output since the last call, each line newline terminated.
    pub fn messages(&self) -> String {
        self.interface.take_messages().unwrap_or_default()
    }

    /// Everything printed to standard error since the last call, each line newline terminated.
    pub fn errors(&self) -> String {
        self.interface.take_errors().unwrap_or_default()
    }
}

fn lossy(args: impl IntoIterator<Item = OsString>) -> impl Iterator<Item = String> {
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
}

fn split(value: &str, delimiter: &str) -> Vec<String> {
    let delimiter = delimiter.chars().next().unwrap_or(DEFAULT_DELIMITER);
    let mut parts: Vec<String> = value.split(delimiter).map(str::to_string).collect();

    // A trailing delimiter terminates the final field, rather than starting an empty one.
    if parts.last().is_some_and(String::is_empty) {
        parts.pop();
    }

    parts
}
