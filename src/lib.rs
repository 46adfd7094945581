//! `clop` is a small command line option parser for Rust.
//!
//! A program declares its options, parses the arguments against them, then queries each option for whether it was set and with what value.
//! `clop` deliberately keeps to this declare-parse-query paradigm:
//! * *String values*:
//! Every value is handed back exactly as it appeared on the command line; conversion is left to the program.
//! * *Forgiving matching*:
//! Tokens which match no option are skipped, unless the parser is made strict via [`CommandLineParser::reject_unrecognized`].
//! * *Plain, wrapped help*:
//! The help message lists every option in declaration order, wrapped to a fixed width (80 columns, by default).
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/file_copy.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ file_copy -h
//! Usage: file_copy option
//!
//! -h, --help       Displays Help
//! -i, --input      The file to copy from. (required)
//! -o, --output     The file to copy to. DEFAULT: out.txt
//!
//! -x, --exclude    Comma separated line prefixes to leave out of the copy.
//! -q, --quiet      Print nothing.
//!
//! $ file_copy -i in.txt -x '#,//'
//! Copying 'in.txt' to 'out.txt'.
//! Excluding lines starting with '#'.
//! Excluding lines starting with '//'.
//!
//! $ file_copy -q
//! Parse error: required option (-i / --input) not set.
//!
//! $ file_copy -i
//! Parse error: option (-i / --input) requires a value, but none was provided.
//! ```
//!
//! # Options
//! Declare each option with a [`CommandLineOption`], and register it via [`CommandLineParser::add_option`].
//! Registration returns an [`OptionId`], the handle used to query the option after parsing.
//!
//! * [`CommandLineOption::value`]: an option which consumes the following token as its value (ex: `-f out.txt`).
//! The following token is consumed whatever it looks like, even if it spells another option.
//! * [`CommandLineOption::flag`]: an option without a value (ex: `--quiet`).
//! * [`CommandLineOption::separator`]: a blank line in the help message.
//! * [`CommandLineOption::new`]: the full declaration, via [`OptionConfig`].
//!
//! Options may be marked [`CommandLineOption::required`], or given a [`CommandLineOption::default_value`].
//! An option with a default value always consumes a value, and is always *set*.
//!
//! The alternate form may list several whitespace separated spellings (ex: `--input --in`).
//! Only the first is matched; all are displayed.
//!
//! Each option matches at most once.
//! Repeating an option on the command line leaves the first occurrence in effect.
//!
//! # Help & Version
//! [`CommandLineParser::add_help_option`] registers `-h`/`--help` at the front of the parser.
//! [`CommandLineParser::add_version_option`] registers `-v`/`--version` at the end of the parser.
//! Either may be customized via its `_with` variant.
//!
//! The help message is displayed when the help option is set, or when `require_match` is requested and no option matched.
//! Displaying help or version pre-empts checking for required options.
//!
//! ```no_run
#![doc = include_str!("../demos/version_banner.rs")]
//! ```
//!
//! ```console
//! $ version_banner --version
//! banner - 0.3.1
//! ```
//!
//! # Parsing
//! There are three levels at which to parse:
//! * [`CommandLineParser::try_parse`]: report the [`Outcome`] or the [`ParseErrors`], without printing or exiting.
//! * [`CommandLineParser::parse_status`]: print the help message, version, or errors, then report the exit code.
//! * [`CommandLineParser::parse`]: print the help message, version, or errors, then exit the program.
//!
//! ```no_run
#![doc = include_str!("../demos/strict.rs")]
//! ```
//!
//! ```console
//! $ strict -l 3 --dryrun
//! Parse error: unrecognized token '--dryrun'.
//! ```
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while parsing and rendering.
pub use clop_builder::*;
