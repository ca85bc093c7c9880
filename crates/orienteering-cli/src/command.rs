//! Command parsing for the interactive loop.

use anyhow::{anyhow, bail, Result};
use std::str::FromStr;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Map,
    Points,
    Routes,
    Route(String),
    Length(String),
    Rise(String),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  MAP              draw the terrain grid
  POINTS           list waypoints and their markers
  ROUTES           list route names
  ROUTE <name>     show the waypoints of a route
  LENGTH <name>    planar length of a route
  RISE <point>     greatest rise after a waypoint
  HELP             show this help
  QUIT             exit
";

impl FromStr for Command {
    type Err = anyhow::Error;

    /// Keywords are case-insensitive. Everything after the keyword is the
    /// name argument, with runs of whitespace collapsed to single spaces.
    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let keyword = words
            .next()
            .ok_or_else(|| anyhow!("empty command"))?
            .to_ascii_uppercase();
        let argument = words.collect::<Vec<_>>().join(" ");

        match keyword.as_str() {
            "MAP" => bare(Command::Map, &keyword, &argument),
            "POINTS" => bare(Command::Points, &keyword, &argument),
            "ROUTES" => bare(Command::Routes, &keyword, &argument),
            "HELP" => bare(Command::Help, &keyword, &argument),
            "QUIT" => bare(Command::Quit, &keyword, &argument),
            "ROUTE" => named(Command::Route, &keyword, argument),
            "LENGTH" => named(Command::Length, &keyword, argument),
            "RISE" => named(Command::Rise, &keyword, argument),
            _ => bail!("unknown command {keyword}"),
        }
    }
}

fn bare(command: Command, keyword: &str, argument: &str) -> Result<Command> {
    if !argument.is_empty() {
        bail!("{keyword} takes no arguments");
    }
    Ok(command)
}

fn named(make: fn(String) -> Command, keyword: &str, argument: String) -> Result<Command> {
    if argument.is_empty() {
        bail!("{keyword} needs a name");
    }
    Ok(make(argument))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!("map".parse::<Command>().unwrap(), Command::Map);
        assert_eq!("Points".parse::<Command>().unwrap(), Command::Points);
        assert_eq!("  QUIT  ".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn names_keep_case_and_join_words() {
        assert_eq!(
            "rise Old   Mill".parse::<Command>().unwrap(),
            Command::Rise("Old Mill".into())
        );
        assert_eq!(
            "LENGTH r1".parse::<Command>().unwrap(),
            Command::Length("r1".into())
        );
    }

    #[test]
    fn argument_errors() {
        let err = "ROUTE".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "ROUTE needs a name");

        let err = "routes extra".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "ROUTES takes no arguments");

        let err = "fly home".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "unknown command FLY");

        assert!("   ".parse::<Command>().is_err());
    }
}
