use clop::{CommandLineOption, CommandLineParser};

fn main() {
    let mut parser = CommandLineParser::from_env();
    parser.add_help_option();
    let input = parser.add_option(
        CommandLineOption::value("-i", "--input", "The file to copy from.").required(),
    );
    let output = parser.add_option(
        CommandLineOption::value("-o", "--output", "The file to copy to.").default_value("out.txt"),
    );
    parser.add_separator();
    let exclude = parser.add_option(CommandLineOption::value(
        "-x",
        "--exclude",
        "Comma separated line prefixes to leave out of the copy.",
    ));
    let quiet = parser.add_option(CommandLineOption::flag("-q", "--quiet", "Print nothing."));

    parser.parse(true);

    if !parser.is_set(quiet) {
        println!(
            "Copying '{}' to '{}'.",
            parser.get_value(input),
            parser.get_value(output)
        );

        for prefix in parser.get_value_list(exclude, ",") {
            println!("Excluding lines starting with '{prefix}'.");
        }
    }
}
