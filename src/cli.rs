use clap::{ArgAction, Parser};
use tracing::Level;

/// Label printed in front of the digest unless overridden.
pub const DEFAULT_LABEL: &str = "SHA-256:";

/// Prompt shown before reading the message from stdin.
pub const PROMPT: &str = "Enter a message : ";

#[derive(Debug, Parser)]
#[command(
    name = "sha256-modified",
    about = "Compute the SHA-256 digest of a line of text",
    version
)]
pub struct Cli {
    /// Message to hash; when omitted, one line is read from stdin
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Do not print the input prompt
    #[arg(long = "no-prompt", action = ArgAction::SetTrue)]
    pub no_prompt: bool,

    /// Label printed before the hex digest
    #[arg(long = "label", value_name = "LABEL", default_value = DEFAULT_LABEL)]
    pub label: String,

    /// Fail unless the digest equals this hex value
    #[arg(long = "expect", value_name = "HEX")]
    pub expect: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runtime settings derived from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub message: Option<String>,
    pub prompt: bool,
    pub label: String,
    pub expect: Option<String>,
    pub log_level: Level,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let log_level = match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };

        Config {
            // A message given on the command line never prompts.
            prompt: !cli.no_prompt && cli.message.is_none(),
            message: cli.message,
            label: cli.label,
            expect: cli.expect,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let argv = std::iter::once("sha256-modified").chain(args.iter().copied());
        Config::from(Cli::parse_from(argv))
    }

    #[test]
    fn defaults_prompt_and_label() {
        let cfg = parse(&[]);

        assert!(cfg.prompt);
        assert_eq!(cfg.label, DEFAULT_LABEL);
        assert_eq!(cfg.message, None);
        assert_eq!(cfg.log_level, Level::WARN);
    }

    #[test]
    fn positional_message_disables_prompt() {
        let cfg = parse(&["abc"]);

        assert!(!cfg.prompt);
        assert_eq!(cfg.message.as_deref(), Some("abc"));
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(parse(&["-v"]).log_level, Level::INFO);
        assert_eq!(parse(&["-vv"]).log_level, Level::DEBUG);
        assert_eq!(parse(&["-vvvv"]).log_level, Level::TRACE);
    }

    #[test]
    fn label_and_expect_are_forwarded() {
        let cfg = parse(&["--no-prompt", "--label", "digest", "--expect", "00"]);

        assert!(!cfg.prompt);
        assert_eq!(cfg.label, "digest");
        assert_eq!(cfg.expect.as_deref(), Some("00"));
    }
}
