use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;
use super::ui::avatar::AvatarStyle;

/// Render a GitHub repository's contributors as a grid of avatar cards.
///
/// Values given on the command line override those read from `--config`.
///
/// The written page is static: its "Show More" button only advances through
/// `--reveal N` or the `more` command of an `--interactive` session, each of
/// which rewrites the page.
#[derive(Debug, Parser)]
#[command(name = "contributor-cards", version, about)]
pub struct Cli {
    /// GitHub organization or user owning the repository.
    #[arg(long)]
    pub org: Option<String>,

    /// Repository name.
    #[arg(long)]
    pub repo: Option<String>,

    /// Cards shown after a fetch (default 10).
    #[arg(long)]
    pub page_size: Option<usize>,

    /// REST API base URL (default https://api.github.com).
    #[arg(long)]
    pub api_base: Option<String>,

    /// Avatar style drawn on each card.
    #[arg(long, value_enum)]
    pub avatar: Option<AvatarStyle>,

    /// Module script loaded for `rpg` avatars.
    #[arg(long)]
    pub avatar_module: Option<String>,

    /// Where the rendered page is written (default contributors.html).
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// RON file providing any of the options above.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Activate "show more" this many times before writing the page.
    #[arg(long, default_value_t = 0, conflicts_with = "interactive")]
    pub reveal: usize,

    /// Read commands (`more`, `repo ORG/REPO`, `limit N`, `quit`, ...) from stdin.
    #[arg(long, short)]
    pub interactive: bool,

    /// Log destination.
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    /// Log at debug level.
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_explains_how_show_more_advances() {
        let help = Cli::command()
            .get_long_about()
            .map(ToString::to_string)
            .unwrap_or_default();
        assert!(help.contains("--reveal N"));
        assert!(help.contains("`more`"));
    }

    #[test]
    fn reveal_conflicts_with_interactive() {
        let result = Cli::try_parse_from(["contributor-cards", "--reveal", "2", "--interactive"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_repository_flags() {
        let cli = Cli::parse_from([
            "contributor-cards",
            "--org",
            "haxtheweb",
            "--repo",
            "webcomponents",
            "--page-size",
            "4",
            "--avatar",
            "identicon",
        ]);
        assert_eq!(cli.org.as_deref(), Some("haxtheweb"));
        assert_eq!(cli.repo.as_deref(), Some("webcomponents"));
        assert_eq!(cli.page_size, Some(4));
        assert_eq!(cli.reveal, 0);
        assert!(!cli.interactive);
    }
}
