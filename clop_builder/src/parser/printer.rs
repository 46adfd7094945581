use std::path::Path;
use terminal_size::{terminal_size, Width};

use crate::api::CommandLineOption;
use crate::constant::*;
use crate::model::OptionId;
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug)]
pub(crate) struct Printer {
    line_width: usize,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_WIDTH)
    }
}

impl Printer {
    pub(crate) fn new(line_width: usize) -> Self {
        Self { line_width }
    }

    /// A printer sized to the attached terminal, or the default width when there is none.
    pub(crate) fn terminal() -> Self {
        match terminal_size() {
            Some((Width(terminal_width), _)) => Self::new(terminal_width as usize),
            None => Self::default(),
        }
    }

    pub(crate) fn print_help(
        &self,
        program_path: &str,
        options: &mut [(OptionId, CommandLineOption)],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let padding = options
            .iter()
            .map(|(_, option)| option.forms_width())
            .max()
            .unwrap_or(0);
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Padding options to {padding} (line width {}).", self.line_width);
        }

        for (_, option) in options.iter_mut() {
            option.pad(padding);
        }

        user_interface.print(format!(
            "Usage: {p} option",
            p = invocation_name(program_path)
        ));
        user_interface.print("".to_string());

        for (_, option) in options.iter() {
            for line in option.render(self.line_width) {
                user_interface.print(line);
            }
        }
    }

    pub(crate) fn print_version(
        &self,
        program_name: &str,
        program_version: &str,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let banner = match (program_name.is_empty(), program_version.is_empty()) {
            (false, false) => format!("{program_name} - {program_version}"),
            (false, true) => program_name.to_string(),
            (true, false) => program_version.to_string(),
            (true, true) => "".to_string(),
        };
        user_interface.print(banner);
    }
}

/// The name the program was invoked as: the final component of its path (`.` when there isn't one).
fn invocation_name(program_path: &str) -> String {
    let path = Path::new(program_path);

    // Windows drops the extension (ex: `tool.exe` is displayed as `tool`).
    #[cfg(windows)]
    let name = path.file_stem();
    #[cfg(not(windows))]
    let name = path.file_name();

    match name {
        Some(n) if !n.is_empty() => n.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}
