use clap::Parser;
use std::process;
use weather_filter::cli::{args::FilterArgs, commands};

fn main() {
    // Parse command line arguments
    let args = FilterArgs::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the summary line has already been printed
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with the mapped code
            eprintln!("Error: {}", error);
            process::exit(error.exit_code());
        }
    }
}
