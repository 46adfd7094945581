pub(crate) const HELP_FORM: &str = "-h";
pub(crate) const HELP_ALT_FORM: &str = "--help";
pub(crate) const HELP_MESSAGE: &str = "Displays Help";
pub(crate) const VERSION_FORM: &str = "-v";
pub(crate) const VERSION_ALT_FORM: &str = "--version";
pub(crate) const VERSION_MESSAGE: &str = "Print the version";

// The classic console is 80 columns wide.
pub(crate) const DEFAULT_LINE_WIDTH: usize = 80;
pub(crate) const GUTTER_WIDTH: usize = 4;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

pub(crate) const DEFAULT_DELIMITER: char = ',';
