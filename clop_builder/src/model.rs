/// Opaque handle to an option registered on a [`CommandLineParser`](./struct.CommandLineParser.html).
///
/// Handles are generated at registration time and stay valid regardless of where the option sits in the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionId(pub(crate) u32);

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The successful result of parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All tokens were matched and every required option is set.
    Parsed,
    /// The help option was set, or nothing matched while a match was required.
    Help,
    /// The version option was set.
    Version,
}
