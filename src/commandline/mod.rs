use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = "A lexer for sumomo")]
pub struct Options {
    /// Source file to lex, or `-` to read from stdin
    pub file: PathBuf,
    #[clap(short, long, default_value_t = 1)]
    pub verbose: usize,
    #[clap(short, long)]
    pub quiet: bool,
    /// Print the line, column and range of every token
    #[clap(short, long)]
    pub positions: bool,
}

impl Options {
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Options::command().debug_assert();
    }

    #[test]
    fn dash_reads_stdin() {
        let options = Options::parse_from(["sumomo", "-"]);

        assert!(options.reads_stdin());
        assert_eq!(options.verbose, 1);
    }

    #[test]
    fn flags_are_parsed() {
        let options = Options::parse_from(["sumomo", "-q", "--positions", "-v", "3", "hello.sumomo"]);

        assert!(!options.reads_stdin());
        assert!(options.quiet);
        assert!(options.positions);
        assert_eq!(options.verbose, 3);
    }
}
