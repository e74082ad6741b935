//! Interactive commands read from stdin, one per line.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    More,
    Repo {
        organization: String,
        repository: String,
    },
    /// Empty clears the organization.
    Org(String),
    /// Empty clears the repository.
    Name(String),
    Limit(usize),
    Status,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("expected ORG/REPO, got `{0}`")]
    InvalidRepo(String),
    #[error("expected a page size of at least 1, got `{0}`")]
    InvalidLimit(String),
}

/// Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "more" | "m" => Command::More,
        "repo" => {
            let (organization, repository) = rest
                .split_once('/')
                .filter(|(org, repo)| !org.is_empty() && !repo.is_empty() && !repo.contains('/'))
                .ok_or_else(|| CommandError::InvalidRepo(rest.to_string()))?;
            Command::Repo {
                organization: organization.to_string(),
                repository: repository.to_string(),
            }
        }
        "org" => Command::Org(rest.to_string()),
        "name" => Command::Name(rest.to_string()),
        "limit" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Limit(n),
            _ => return Err(CommandError::InvalidLimit(rest.to_string())),
        },
        "status" => Command::Status,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, CommandError};

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_command("   \n"), Ok(None));
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_command("more"), Ok(Some(Command::More)));
        assert_eq!(parse_command(" MORE "), Ok(Some(Command::More)));
        assert_eq!(parse_command("status"), Ok(Some(Command::Status)));
        assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn parses_repository_switch() {
        assert_eq!(
            parse_command("repo haxtheweb/webcomponents"),
            Ok(Some(Command::Repo {
                organization: "haxtheweb".to_string(),
                repository: "webcomponents".to_string(),
            }))
        );
        assert!(matches!(
            parse_command("repo haxtheweb"),
            Err(CommandError::InvalidRepo(_))
        ));
        assert!(matches!(
            parse_command("repo a/b/c"),
            Err(CommandError::InvalidRepo(_))
        ));
    }

    #[test]
    fn org_and_name_may_be_cleared() {
        assert_eq!(parse_command("org"), Ok(Some(Command::Org(String::new()))));
        assert_eq!(
            parse_command("name  lit "),
            Ok(Some(Command::Name("lit".to_string())))
        );
    }

    #[test]
    fn limit_must_be_positive() {
        assert_eq!(parse_command("limit 3"), Ok(Some(Command::Limit(3))));
        assert_eq!(
            parse_command("limit 0"),
            Err(CommandError::InvalidLimit("0".to_string()))
        );
        assert!(parse_command("limit lots").is_err());
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
