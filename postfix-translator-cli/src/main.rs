use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use postfix_translator::translator::{convert, StringSink};
use std::process::ExitCode;

/// Converts the given infix expression into its postfix form
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The infix expression to convert
    expression: String,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<ExitCode> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    println!("INPUT:  {}", args.expression);

    let mut sink = StringSink::new();
    let outcome = convert(&args.expression, &mut sink);
    let emitted = sink.into_string()?;

    match outcome {
        Ok(()) => {
            // The line terminator was already emitted through the sink.
            print!("OUTPUT: {}", emitted);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            debug!("Translation failed: {:#}", error);
            println!("OUTPUT: {}", emitted);
            println!("Error in the expression");
            Ok(ExitCode::FAILURE)
        }
    }
}
