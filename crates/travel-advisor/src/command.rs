pub const USAGE: &str = "\
Commands:
  /search <city> | <country> [| <hobbies>]   get travel advice
  /ask <question>                            follow-up on the shown destination
  /history                                   show or hide search history
  /open <n>                                  show history entry n
  /section <n>                               expand or collapse section n
  /help                                      show this help
  /quit                                      exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search { city: String, country: String, hobbies: String },
    Ask(String),
    ToggleHistory,
    /// Zero-based.
    Open(usize),
    /// Zero-based.
    Section(usize),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Blank lines parse to `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let command = match name {
        "/search" => {
            let mut fields = rest.splitn(3, '|').map(str::trim);
            let city = fields.next().unwrap_or_default();
            let country = fields.next().unwrap_or_default();
            let hobbies = fields.next().unwrap_or_default();
            if city.is_empty() || country.is_empty() {
                return Err(ParseError::Usage("/search <city> | <country> [| <hobbies>]"));
            }
            Command::Search {
                city: city.to_string(),
                country: country.to_string(),
                hobbies: hobbies.to_string(),
            }
        }
        "/ask" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("/ask <question>"));
            }
            Command::Ask(rest.to_string())
        }
        "/history" => Command::ToggleHistory,
        "/open" => Command::Open(parse_position(rest).ok_or(ParseError::Usage("/open <n>"))?),
        "/section" => {
            Command::Section(parse_position(rest).ok_or(ParseError::Usage("/section <n>"))?)
        }
        "/help" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_position(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_splits_on_pipes() {
        assert_eq!(
            parse("/search  New York | USA | jazz, food ").expect("parse"),
            Some(Command::Search {
                city: "New York".to_string(),
                country: "USA".to_string(),
                hobbies: "jazz, food".to_string(),
            })
        );
        assert_eq!(
            parse("/search Oslo|Norway").expect("parse"),
            Some(Command::Search {
                city: "Oslo".to_string(),
                country: "Norway".to_string(),
                hobbies: String::new(),
            })
        );
    }

    #[test]
    fn search_requires_city_and_country() {
        assert!(matches!(parse("/search Oslo"), Err(ParseError::Usage(_))));
        assert!(matches!(parse("/search | Norway"), Err(ParseError::Usage(_))));
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(parse("/open 1").expect("parse"), Some(Command::Open(0)));
        assert_eq!(parse("/section 3").expect("parse"), Some(Command::Section(2)));
        assert!(parse("/open 0").is_err());
        assert!(parse("/section x").is_err());
    }

    #[test]
    fn misc_commands() {
        assert_eq!(parse("   ").expect("parse"), None);
        assert_eq!(
            parse("/ask Is tap water safe?").expect("parse"),
            Some(Command::Ask("Is tap water safe?".to_string()))
        );
        assert!(parse("/ask").is_err());
        assert_eq!(parse("/history").expect("parse"), Some(Command::ToggleHistory));
        assert_eq!(parse("/quit").expect("parse"), Some(Command::Quit));
        assert_eq!(
            parse("hello"),
            Err(ParseError::Unknown("hello".to_string()))
        );
    }
}
