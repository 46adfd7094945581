use crate::constant::*;
use crate::parser::{ColumnRenderer, GutterWidth, LeftWidth, TotalWidth};

/// The full declaration of a [`CommandLineOption`].
///
/// Every field is named explicitly, so there is no guessing which shape of option is being built.
/// Start from `OptionConfig::default()` and override the fields of interest.
///
/// ### Example
/// ```
/// # use clop_builder as clop;
/// use clop::{CommandLineOption, OptionConfig};
///
/// let option = CommandLineOption::new(OptionConfig {
///     form: "-o".to_string(),
///     alt_form: "--output".to_string(),
///     description: "Where to write the result.".to_string(),
///     default_value: Some("out.txt".to_string()),
///     requires_value: true,
///     ..OptionConfig::default()
/// });
///
/// assert!(option.is_set());
/// assert_eq!(option.get_value(), "out.txt");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionConfig {
    /// The primary form, ex: `-f`.
    pub form: String,
    /// The alternate form, ex: `--file`.
    /// Only the first whitespace delimited token is matched; the full text is displayed.
    pub alt_form: String,
    /// The help text.
    pub description: String,
    /// The value reported when the option is absent from the command line.
    pub default_value: Option<String>,
    /// Whether the token following the option is consumed as its value.
    pub requires_value: bool,
    /// Whether parsing fails when the option is neither matched nor defaulted.
    pub required: bool,
    /// Whether this is a blank line in the help listing rather than an option.
    pub separator: bool,
}

/// A declared command line option (flag).
///
/// The declarative fields are fixed at construction.
/// Only the match state, the assigned value, and the display padding change while parsing.
///
/// Two options are equal when their forms and description are equal.
#[derive(Debug, Clone)]
pub struct CommandLineOption {
    form: String,
    alt_form: String,
    description: String,
    default_value: String,
    requires_value: bool,
    required: bool,
    separator: bool,
    matched: bool,
    value: String,
    padding: usize,
}

impl CommandLineOption {
    /// Create an option from its full declaration.
    pub fn new(config: OptionConfig) -> Self {
        let OptionConfig {
            form,
            alt_form,
            description,
            default_value,
            requires_value,
            required,
            separator,
        } = config;

        Self {
            form,
            alt_form,
            description,
            default_value: default_value.unwrap_or_default(),
            requires_value,
            required,
            separator,
            matched: false,
            value: String::default(),
            padding: 0,
        }
    }

    /// Create an option which consumes the following token as its value.
    ///
    /// ### Example
    /// ```
    /// # use clop_builder as clop;
    /// use clop::CommandLineOption;
    ///
    /// let mut option = CommandLineOption::value("-f", "--file", "The input file.");
    /// assert!(option.requires_value());
    /// assert!(option.check("--file"));
    /// ```
    pub fn value(
        form: impl Into<String>,
        alt_form: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(OptionConfig {
            form: form.into(),
            alt_form: alt_form.into(),
            description: description.into(),
            requires_value: true,
            ..OptionConfig::default()
        })
    }

    /// Create an option which takes no value (a switch).
    ///
    /// ### Example
    /// ```
    /// # use clop_builder as clop;
    /// use clop::CommandLineOption;
    ///
    /// let mut option = CommandLineOption::flag("-q", "--quiet", "Print nothing.");
    /// assert!(!option.requires_value());
    /// assert!(option.check("-q"));
    /// assert!(option.is_set());
    /// ```
    pub fn flag(
        form: impl Into<String>,
        alt_form: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(OptionConfig {
            form: form.into(),
            alt_form: alt_form.into(),
            description: description.into(),
            ..OptionConfig::default()
        })
    }

    /// Create a separator: a blank line in the help listing which never matches.
    pub fn separator() -> Self {
        Self::new(OptionConfig {
            separator: true,
            ..OptionConfig::default()
        })
    }

    /// Set the default value of this option.
    /// An option with a default always takes a value.
    /// If repeated, only the final default will apply.
    ///
    /// ### Example
    /// ```
    /// # use clop_builder as clop;
    /// use clop::CommandLineOption;
    ///
    /// let option = CommandLineOption::flag("-l", "--level", "Compression level.")
    ///     .default_value("6");
    /// assert!(option.requires_value());
    /// assert_eq!(option.get_value(), "6");
    /// ```
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self.requires_value = true;
        self
    }

    /// Mark this option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Test the token against this option, marking the option as matched when it applies.
    ///
    /// Once matched, the option never matches again (first occurrence wins).
    pub fn check(&mut self, token: &str) -> bool {
        if self.matched || self.separator {
            return false;
        }

        let alt_token = self.alt_form.split_whitespace().next().unwrap_or_default();
        self.matched = (!self.form.is_empty() && self.form == token)
            || (!alt_token.is_empty() && alt_token == token);
        self.matched
    }

    /// Whether this option was matched, or otherwise has a default value.
    pub fn is_set(&self) -> bool {
        self.matched || !self.default_value.is_empty()
    }

    /// The assigned value when matched, otherwise the default value (which may be empty).
    pub fn get_value(&self) -> &str {
        if self.matched {
            &self.value
        } else {
            &self.default_value
        }
    }

    /// Whether this option was matched on the command line (ignoring any default).
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// The primary form.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// The alternate form.
    pub fn alt_form(&self) -> &str {
        &self.alt_form
    }

    /// The help text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The default value (empty when there is none).
    pub fn get_default(&self) -> &str {
        &self.default_value
    }

    /// Whether the option consumes the following token as its value.
    pub fn requires_value(&self) -> bool {
        self.requires_value
    }

    /// Whether the option is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the option is a separator.
    pub fn is_separator(&self) -> bool {
        self.separator
    }

    pub(crate) fn assign(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub(crate) fn reset(&mut self) {
        self.matched = false;
        self.value.clear();
    }

    pub(crate) fn pad(&mut self, padding: usize) {
        self.padding = padding;
    }

    /// The width of `"form, alt_form"`, or `0` for a separator.
    pub(crate) fn forms_width(&self) -> usize {
        if self.separator {
            0
        } else {
            self.forms().chars().count()
        }
    }

    fn forms(&self) -> String {
        format!("{}, {}", self.form, self.alt_form)
    }

    pub(crate) fn render(&self, line_width: usize) -> Vec<String> {
        if self.separator {
            return vec![String::default()];
        }

        let mut description = self.description.clone();

        if self.required {
            description.push_str(" (required)");
        }

        if !self.default_value.is_empty() {
            description.push_str(" DEFAULT: ");
            description.push_str(&self.default_value);
        }

        let column_renderer = ColumnRenderer::guided(
            LeftWidth(self.padding),
            GutterWidth::new(GUTTER_WIDTH).expect("internal error - gutter must be valid"),
            TotalWidth(line_width),
        );
        column_renderer.render(&self.forms(), &description)
    }
}

impl PartialEq for CommandLineOption {
    fn eq(&self, other: &Self) -> bool {
        self.form == other.form
            && self.alt_form == other.alt_form
            && self.description == other.description
    }
}

impl Eq for CommandLineOption {}

impl std::fmt::Display for CommandLineOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.render(DEFAULT_LINE_WIDTH) {
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn random_value() -> String {
        let length = thread_rng().gen_range(1..16);
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }

    #[test]
    fn config_default() {
        let option = CommandLineOption::new(OptionConfig::default());
        assert_eq!(option.form(), "");
        assert_eq!(option.alt_form(), "");
        assert_eq!(option.description(), "");
        assert_eq!(option.get_default(), "");
        assert!(!option.requires_value());
        assert!(!option.is_required());
        assert!(!option.is_separator());
        assert!(!option.is_set());
        assert!(!option.is_matched());
    }

    #[test]
    fn constructors() {
        let value = CommandLineOption::value("-f", "--file", "the file");
        assert!(value.requires_value());
        assert!(!value.is_required());
        assert_eq!(value.get_default(), "");

        let flag = CommandLineOption::flag("-q", "--quiet", "be quiet");
        assert!(!flag.requires_value());
        assert!(!flag.is_required());

        let separator = CommandLineOption::separator();
        assert!(separator.is_separator());
        assert!(!separator.requires_value());
        assert!(!separator.is_required());
        assert_eq!(separator.forms_width(), 0);

        let defaulted = CommandLineOption::flag("-l", "--level", "the level")
            .default_value("DEFAULT")
            .required();
        assert!(defaulted.requires_value());
        assert!(defaulted.is_required());
        assert_eq!(defaulted.get_default(), "DEFAULT");
    }

    #[rstest]
    #[case("-f", true)]
    #[case("--file", true)]
    #[case("--fil", false)]
    #[case("-F", false)]
    #[case("", false)]
    #[case("file", false)]
    fn check(#[case] token: &str, #[case] expected: bool) {
        // Setup
        let mut option = CommandLineOption::value("-f", "--file", "the file");

        // Execute
        let result = option.check(token);

        // Verify
        assert_eq!(result, expected);
        assert_eq!(option.is_matched(), expected);
        assert_eq!(option.is_set(), expected);
    }

    #[rstest]
    #[case("--file", true)]
    #[case("--input", false)]
    #[case("--file --input", false)]
    fn check_alt_form_aliases(#[case] token: &str, #[case] expected: bool) {
        let mut option = CommandLineOption::value("-f", "--file --input", "the file");
        assert_eq!(option.check(token), expected);
    }

    #[rstest]
    #[case("", "--file", "--file", true)]
    #[case("", "--file", "", false)]
    #[case("-f", "", "-f", true)]
    #[case("-f", "", "", false)]
    #[case("", "", "", false)]
    fn check_empty_forms(
        #[case] form: &str,
        #[case] alt_form: &str,
        #[case] token: &str,
        #[case] expected: bool,
    ) {
        let mut option = CommandLineOption::flag(form, alt_form, "");
        assert_eq!(option.check(token), expected);
    }

    #[test]
    fn check_separator() {
        let mut option = CommandLineOption::separator();
        assert!(!option.check(""));
        assert!(!option.check("-h"));
        assert!(!option.is_set());
    }

    #[rstest]
    #[case("-f", "-f")]
    #[case("-f", "--file")]
    #[case("--file", "-f")]
    #[case("-f", "other")]
    fn check_idempotent(#[case] first: &str, #[case] second: &str) {
        // Setup
        let mut option = CommandLineOption::value("-f", "--file", "the file");
        assert!(option.check(first));
        option.assign("out.txt");

        // Execute
        let result = option.check(second);

        // Verify
        assert!(!result);
        assert!(option.is_matched());
        assert_eq!(option.get_value(), "out.txt");
    }

    #[test]
    fn default_unmatched() {
        for _ in 0..100 {
            let default = random_value();
            let requires_value: bool = thread_rng().gen();
            let option = CommandLineOption::new(OptionConfig {
                form: "-d".to_string(),
                alt_form: "--default".to_string(),
                default_value: Some(default.clone()),
                requires_value,
                ..OptionConfig::default()
            });
            assert!(option.is_set());
            assert!(!option.is_matched());
            assert_eq!(option.get_value(), default);
        }
    }

    #[test]
    fn value_verbatim() {
        for _ in 0..100 {
            let value = format!(" {} ", random_value());
            let mut option = CommandLineOption::value("-f", "--file", "").default_value("x");
            assert!(option.check("-f"));
            option.assign(value.clone());
            assert_eq!(option.get_value(), value);
        }
    }

    #[test]
    fn reset() {
        let mut option = CommandLineOption::value("-f", "--file", "").default_value("x");
        assert!(option.check("-f"));
        option.assign("out.txt");

        option.reset();

        assert!(!option.is_matched());
        assert_eq!(option.get_value(), "x");
        assert!(option.check("-f"));
        assert_eq!(option.get_value(), "");
    }

    #[test]
    fn matched_flag_value_empty() {
        let mut option = CommandLineOption::flag("-q", "--quiet", "").default_value("loud");
        assert!(option.check("--quiet"));
        assert_eq!(option.get_value(), "");
    }

    #[test]
    fn equality() {
        let option = CommandLineOption::value("-f", "--file", "the file");
        assert_eq!(
            option,
            CommandLineOption::flag("-f", "--file", "the file")
                .default_value("abc")
                .required()
        );
        assert_ne!(option, CommandLineOption::value("-f", "--file", "a file"));
        assert_ne!(option, CommandLineOption::value("-g", "--file", "the file"));
        assert_ne!(option, CommandLineOption::value("-f", "--files", "the file"));
    }

    #[test]
    fn render_separator() {
        let mut option = CommandLineOption::separator();
        option.pad(12);
        assert_eq!(option.render(80), vec!["".to_string()]);
        assert_eq!(option.to_string(), "\n");
    }

    #[rstest]
    #[case(false, None, "-f, --file    the file")]
    #[case(true, None, "-f, --file    the file (required)")]
    #[case(false, Some("a.txt"), "-f, --file    the file DEFAULT: a.txt")]
    #[case(true, Some("a.txt"), "-f, --file    the file (required) DEFAULT: a.txt")]
    fn render(#[case] required: bool, #[case] default: Option<&str>, #[case] expected: &str) {
        // Setup
        let mut option = CommandLineOption::new(OptionConfig {
            form: "-f".to_string(),
            alt_form: "--file".to_string(),
            description: "the file".to_string(),
            default_value: default.map(str::to_string),
            requires_value: true,
            required,
            separator: false,
        });
        option.pad(10);

        // Execute
        let lines = option.render(80);

        // Verify
        assert_eq!(lines, vec![expected.to_string()]);
    }

    #[test]
    fn render_padded() {
        let mut option = CommandLineOption::flag("-q", "--quiet", "be quiet");
        option.pad(14);
        assert_eq!(option.to_string(), "-q, --quiet       be quiet\n");
    }

    #[test]
    fn render_empty_description() {
        let mut option = CommandLineOption::flag("-q", "--quiet", "");
        option.pad(11);
        assert_eq!(option.render(80), vec!["-q, --quiet    ".to_string()]);
    }

    #[test]
    fn render_wrapped() {
        // Setup
        let mut option = CommandLineOption::value(
            "-f",
            "--file",
            "The file to read the input records from, which may be compressed with gzip or left as plain text.",
        );
        option.pad(10);

        // Execute
        let message = option.to_string();

        // Verify
        assert_eq!(
            message,
            r#"-f, --file    The file to read the input records from, which may be compressed
              with gzip or left as plain text.
"#
        );
        for line in message.lines() {
            assert!(line.len() <= 80, "'{line}' is wider than 80");
        }
    }
}
