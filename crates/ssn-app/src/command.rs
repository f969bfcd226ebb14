//! Parsing of the terminal command language

use anyhow::{anyhow, bail, Result};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Next,
    Previous,
    Goto(u64),
    Jump(String),
    Scroll(i64),
    Show,
    History,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        // "/123" is shorthand for "search 123"
        if let Some(text) = line.strip_prefix('/') {
            return Ok(Some(Command::Search(text.trim().to_string())));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "search" | "s" => {
                if rest.is_empty() {
                    bail!("search needs some text");
                }
                Command::Search(rest.to_string())
            }
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "goto" | "g" => Command::Goto(
                rest.parse()
                    .map_err(|_| anyhow!("goto needs an index, got {:?}", rest))?,
            ),
            "jump" | "j" => {
                if rest.is_empty() {
                    bail!("jump needs an identifier");
                }
                Command::Jump(rest.to_string())
            }
            "down" | "d" => Command::Scroll(scroll_amount(rest)?),
            "up" | "u" => Command::Scroll(
                scroll_amount(rest)?
                    .checked_neg()
                    .ok_or_else(|| anyhow!("cannot scroll up by {}", rest))?,
            ),
            "show" | "ls" => Command::Show,
            "history" | "h" => Command::History,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command {:?}, try 'help'", other),
        };
        Ok(Some(command))
    }
}

fn scroll_amount(rest: &str) -> Result<i64> {
    if rest.is_empty() {
        return Ok(1);
    }
    rest.parse()
        .map_err(|_| anyhow!("expected a row count, got {:?}", rest))
}

pub const HELP: &str = "\
commands:
  /TEXT | search TEXT   search for identifiers containing TEXT
  n | next              next match
  p | prev              previous match
  goto INDEX            scroll to an index
  jump NNN-NN-NNNN      scroll to an identifier
  down [K] | up [K]     scroll by K rows
  show                  print the displayed rows
  history               print the search history
  reset                 end the current search
  quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/12-3").unwrap(), Some(Command::Search("12-3".to_string())));
        assert_eq!(Command::parse("search 999").unwrap(), Some(Command::Search("999".to_string())));
        assert_eq!(Command::parse("n").unwrap(), Some(Command::Next));
        assert_eq!(Command::parse("  PREV ").unwrap(), Some(Command::Previous));
        assert_eq!(Command::parse("goto 898").unwrap(), Some(Command::Goto(898)));
        assert_eq!(
            Command::parse("jump 001-02-0001").unwrap(),
            Some(Command::Jump("001-02-0001".to_string()))
        );
        assert_eq!(Command::parse("down").unwrap(), Some(Command::Scroll(1)));
        assert_eq!(Command::parse("up 5").unwrap(), Some(Command::Scroll(-5)));
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("goto").is_err());
        assert!(Command::parse("goto -1").is_err());
        assert!(Command::parse("search").is_err());
        assert!(Command::parse("down many").is_err());
        assert!(Command::parse("up -9223372036854775808").is_err());
        assert!(Command::parse("fly").is_err());
    }
}
