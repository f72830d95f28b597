use super::Args;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use tracing::warn;

pub const REPO_NAME: &str = "telegram-news-scraper";
pub const DESCRIPTION: &str = "High-performance intelligent news scraping system with MongoDB Atlas, Google Gemini AI, and advanced caching mechanisms";
pub const REMOTE: &str = "origin";
pub const BRANCH: &str = "main";
pub const OWNER_PLACEHOLDER: &str = "YOUR_USERNAME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Public => "--public",
            Self::Private => "--private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "PUBLIC"),
            Self::Private => write!(f, "PRIVATE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
    pub remote: String,
    pub branch: String,
    pub owner: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            name: REPO_NAME.into(),
            description: DESCRIPTION.into(),
            visibility: Visibility::Public,
            remote: REMOTE.into(),
            branch: BRANCH.into(),
            owner: OWNER_PLACEHOLDER.into(),
        }
    }
}

impl PublishConfig {
    /// Overrides from the command line. Nothing here stops the workflow:
    /// anything unusable is logged and the default kept.
    pub(crate) fn from_args(args: &Args) -> Self {
        for arg in args.unknown() {
            warn!(%arg, "ignoring unrecognised argument");
        }
        for key in args.missing_values() {
            warn!(%key, "ignoring argument without a value");
        }

        let mut config = Self::default();
        if let Some(name) = args.value("--name") {
            if is_valid_name(&name) {
                config.name = name;
            } else {
                warn!(%name, default = REPO_NAME, "ignoring invalid repository name");
            }
        }
        if let Some(description) = args.value("--description") {
            config.description = description;
        }
        if let Some(owner) = args.value("--owner") {
            if is_valid_name(&owner) {
                config.owner = owner;
            } else {
                warn!(%owner, "ignoring invalid account name");
            }
        }
        match (args.flag("--public"), args.flag("--private")) {
            (true, true) => warn!("both --public and --private given, keeping public"),
            (false, true) => config.visibility = Visibility::Private,
            _ => {}
        }
        config
    }

    pub fn web_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }

    pub fn clone_url(&self) -> String {
        format!("{}.git", self.web_url())
    }

    /// `telegram-news-scraper` becomes `Telegram News Scraper`.
    pub fn title(&self) -> String {
        self.name
            .split(['-', '_'])
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// GitHub repository and account names: letters, digits, `.`, `_` and `-`.
fn is_valid_name(name: &str) -> bool {
    static NAME: OnceLock<Regex> = OnceLock::new();
    NAME.get_or_init(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("name pattern is valid"))
        .is_match(name)
        && name != "."
        && name != ".."
}
