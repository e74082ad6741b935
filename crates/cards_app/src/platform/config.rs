use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use cards_core::{WidgetConfig, DEFAULT_PAGE_SIZE};
use cards_engine::FetchSettings;
use serde::Deserialize;

use super::cli::Cli;
use super::ui::avatar::AvatarStyle;

pub const DEFAULT_OUTPUT: &str = "contributors.html";

/// Optional RON configuration file. Every field may be omitted.
///
/// ```ron
/// #![enable(implicit_some)]
/// (
///     organization: "haxtheweb",
///     repository: "webcomponents",
///     page_size: 12,
///     avatar: rpg,
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub organization: Option<String>,
    pub repository: Option<String>,
    pub page_size: Option<usize>,
    pub api_base: Option<String>,
    pub avatar: Option<AvatarStyle>,
    pub avatar_module: Option<String>,
    pub output: Option<PathBuf>,
}

/// Fully resolved host settings: flag, then file, then default.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub widget: WidgetConfig,
    pub fetch: FetchSettings,
    pub avatar: AvatarStyle,
    pub avatar_module: Option<String>,
    pub output: PathBuf,
}

pub fn load_file_config(path: &Path) -> anyhow::Result<FileConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
}

pub fn resolve(cli: &Cli, file: FileConfig) -> anyhow::Result<HostConfig> {
    let page_size = cli
        .page_size
        .or(file.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size == 0 {
        bail!("page size must be at least 1");
    }

    let organization = cli.org.clone().or(file.organization).unwrap_or_default();
    let repository = cli.repo.clone().or(file.repository).unwrap_or_default();

    let mut fetch = FetchSettings::default();
    if let Some(api_base) = cli.api_base.clone().or(file.api_base) {
        fetch.api_base = api_base;
    }

    Ok(HostConfig {
        widget: WidgetConfig::new(organization.trim(), repository.trim()).with_page_size(page_size),
        fetch,
        avatar: cli.avatar.or(file.avatar).unwrap_or_default(),
        avatar_module: cli.avatar_module.clone().or(file.avatar_module),
        output: cli
            .output
            .clone()
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
    })
}
