//! Interactive command parsing.

use std::collections::BTreeSet;
use std::str::FromStr;

use thiserror::Error;

use crate::coin::{FilterCriterion, ParseFilterError};

pub const HELP_TEXT: &str = "\
Commands:
  load                     fetch the coin list again
  search [text]            filter by name or symbol (case-sensitive); no text clears
  toggle <filter>          switch one filter on or off
  filters [f1,f2,...]      replace all filters; no list clears them
  clear                    remove all filters
  status                   show active filters and search text
  help                     show this help
  quit                     exit
Filters: active, new, coin, inactive, token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load,
    Search(String),
    Toggle(FilterCriterion),
    Filters(BTreeSet<FilterCriterion>),
    Clear,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Filter(#[from] ParseFilterError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start_matches([' ', '\t']).trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        match word {
            "" => Err(CommandError::Empty),
            "load" | "reload" => Ok(Command::Load),
            // Search text is kept verbatim apart from the separating space
            "search" => Ok(Command::Search(rest.to_string())),
            "toggle" => {
                let keyword = rest.trim();
                if keyword.is_empty() {
                    return Err(CommandError::MissingArgument("toggle"));
                }
                Ok(Command::Toggle(keyword.parse()?))
            }
            "filters" => Ok(Command::Filters(parse_filter_list(rest)?)),
            "clear" => Ok(Command::Clear),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Comma- or space-separated filter keywords. Empty input is the empty set.
pub fn parse_filter_list(input: &str) -> Result<BTreeSet<FilterCriterion>, ParseFilterError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}
