use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use clap::Parser;
use sumomo::{error::describe_error, lex_bytes, lexer::tokens::Token, source_map::column};

mod commandline;
mod prelude;

use commandline::Options;
use prelude::*;

fn main() -> Result<ExitCode> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(options.quiet)
        .verbosity(options.verbose)
        .init()?;

    let source = read_source(&options)?;

    match lex_bytes(&source) {
        Ok(tokens) => {
            info!("Lexed {} tokens", tokens.len());
            for token in &tokens {
                print_token(token, options.positions);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", describe_error(&err, &String::from_utf8_lossy(&source)));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_source(options: &Options) -> Result<Vec<u8>> {
    let mut source = vec![];
    if options.reads_stdin() {
        io::stdin()
            .read_to_end(&mut source)
            .context("Unable to read source from stdin")?;
    } else {
        source = fs::read(&options.file)
            .with_context(|| format!("Unable to read {}", options.file.display()))?;
    }

    debug!("Read {} bytes of source", source.len());
    Ok(source)
}

fn print_token(token: &Token, positions: bool) {
    if positions {
        let column = column(token.range.start(), token.line_number, token.line_start);
        println!(
            "{}:{}\t{:?}\t{}",
            token.line_number + 1,
            column + 1,
            token.range,
            token
        );
    } else {
        println!("{}", token);
    }
}
