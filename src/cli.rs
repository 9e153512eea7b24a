use lexopt::{Arg, Parser};
use std::path::PathBuf;

pub(crate) const USAGE: &str = concat!(
    "Usage: wrapsnake [<options>]\n",
    "\n",
    "Play Snake in your terminal.  The snake may wrap around the edges of the\n",
    "board a limited number of times.\n",
    "\n",
    "Options:\n",
    "  -c, --config <FILE>     Read configuration from the given file\n",
    "      --log-file <FILE>   Write log messages to the given file\n",
    "      --state <FILE>      Override the initial game state with the JSON\n",
    "                          fields in the given file\n",
    "      --dump-state <FILE> Write the final game state to the given file as\n",
    "                          JSON on exit\n",
    "      --reset-high-score  Forget the stored high score before starting\n",
    "  -h, --help              Display this help message and exit\n",
    "  -V, --version           Show the program version and exit\n",
);

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) state: Option<PathBuf>,
    pub(crate) dump_state: Option<PathBuf>,
    pub(crate) reset_high_score: bool,
}

impl Invocation {
    pub(crate) fn from_env() -> Result<Invocation, lexopt::Error> {
        Invocation::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => args.config = Some(parser.value()?.into()),
                Arg::Long("log-file") => args.log_file = Some(parser.value()?.into()),
                Arg::Long("state") => args.state = Some(parser.value()?.into()),
                Arg::Long("dump-state") => args.dump_state = Some(parser.value()?.into()),
                Arg::Long("reset-high-score") => args.reset_high_score = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(argv: &[&str]) -> Result<Invocation, lexopt::Error> {
        Invocation::from_parser(Parser::from_iter(
            std::iter::once("wrapsnake").chain(argv.iter().copied()),
        ))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Invocation::Run(Arguments::default()));
    }

    #[test]
    fn all_args() {
        let inv = parse(&[
            "-c",
            "cfg.toml",
            "--log-file=snake.log",
            "--state",
            "state.json",
            "--dump-state",
            "out.json",
            "--reset-high-score",
        ])
        .unwrap();
        assert_eq!(
            inv,
            Invocation::Run(Arguments {
                config: Some(PathBuf::from("cfg.toml")),
                log_file: Some(PathBuf::from("snake.log")),
                state: Some(PathBuf::from("state.json")),
                dump_state: Some(PathBuf::from("out.json")),
                reset_high_score: true,
            })
        );
    }

    #[rstest]
    #[case(&["-h"], Invocation::Help)]
    #[case(&["--help", "--bogus"], Invocation::Help)]
    #[case(&["-V"], Invocation::Version)]
    #[case(&["--config", "x.toml", "--version"], Invocation::Version)]
    fn help_and_version(#[case] argv: &[&str], #[case] inv: Invocation) {
        assert_eq!(parse(argv).unwrap(), inv);
    }

    #[rstest]
    #[case(&["--bogus"])]
    #[case(&["--config"])]
    #[case(&["extra"])]
    #[case(&["--reset-high-score=yes"])]
    fn bad_args(#[case] argv: &[&str]) {
        assert!(parse(argv).is_err());
    }
}
