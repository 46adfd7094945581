use clop::{CommandLineOption, CommandLineParser, Outcome};

fn main() {
    let mut parser = CommandLineParser::from_env().reject_unrecognized(true);
    parser.add_help_option();
    let level = parser.add_option(
        CommandLineOption::value("-l", "--level", "The level to run at.").default_value("1"),
    );
    let dry_run = parser.add_option(CommandLineOption::flag(
        "-n",
        "--dry-run",
        "Report what would happen, without doing it.",
    ));

    match parser.try_parse(false) {
        Ok(Outcome::Parsed) => {
            println!(
                "Running at level {}{}.",
                parser.get_value(level),
                if parser.is_set(dry_run) { " (dry run)" } else { "" }
            );
        }
        Ok(_) => {
            parser.print_help();
        }
        Err(errors) => {
            eprintln!("{errors}");
            std::process::exit(1);
        }
    }
}
