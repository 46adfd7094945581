use clop::{CommandLineOption, CommandLineParser};

fn main() {
    let mut parser = CommandLineParser::from_env()
        .program_name("banner")
        .program_version(env!("CARGO_PKG_VERSION"))
        .terminal_line_width();
    parser.add_help_option();
    let message = parser.add_option(
        CommandLineOption::value("-m", "--message", "The message to display on the banner.")
            .default_value("hello"),
    );
    parser.add_version_option();

    parser.parse(false);

    let message = parser.get_value(message);
    println!("{}", "*".repeat(message.chars().count() + 4));
    println!("* {message} *");
    println!("{}", "*".repeat(message.chars().count() + 4));
}
