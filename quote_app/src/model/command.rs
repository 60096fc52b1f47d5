//! Commands typed by the user on stdin.
//!
//! Each command has a long form and a one-letter alias, parsed
//! case-insensitively via `strum`.
use strum_macros::{Display, EnumString};

/// Interactive command parsed from one stdin line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AppCommand {
    /// Fetch a new quote from the bundled dataset.
    #[strum(serialize = "new", serialize = "n")]
    New,
    /// Fetch a new quote from the remote endpoint.
    #[strum(serialize = "remote", serialize = "r")]
    Remote,
    /// Print the share payload for the current quote.
    #[strum(serialize = "share", serialize = "s")]
    Share,
    /// Copy the share payload to the system clipboard.
    #[strum(serialize = "copy", serialize = "c")]
    Copy,
    /// Exit the application.
    #[strum(serialize = "quit", serialize = "q")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!("new".parse::<AppCommand>().unwrap(), AppCommand::New);
        assert_eq!("N".parse::<AppCommand>().unwrap(), AppCommand::New);
        assert_eq!("r".parse::<AppCommand>().unwrap(), AppCommand::Remote);
        assert_eq!("Share".parse::<AppCommand>().unwrap(), AppCommand::Share);
        assert_eq!("q".parse::<AppCommand>().unwrap(), AppCommand::Quit);
    }

    #[test]
    fn rejects_unknown_input() {
        assert!("refresh".parse::<AppCommand>().is_err());
        assert!("".parse::<AppCommand>().is_err());
    }
}
