use super::RemoteHosting;
use crate::{PublishConfig, Runner};
use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

/// The GitHub CLI, `gh`.
#[derive(Clone)]
pub struct GhCli {
    runner: Runner,
}

impl GhCli {
    pub fn new(runner: Runner) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl RemoteHosting for GhCli {
    async fn version(&self) -> Option<String> {
        let output = self.runner.run("gh --version", "Checking GitHub CLI").await?;
        if let Some(version) = parse_version(&output) {
            info!(version, "found GitHub CLI");
        }
        Some(output)
    }

    async fn auth_status(&self) -> Option<String> {
        self.runner
            .run("gh auth status", "Checking GitHub authentication")
            .await
    }

    async fn login(&self) -> Option<String> {
        self.runner
            .run_interactive("gh auth login", "GitHub authentication")
            .await
    }

    async fn create_repo(&self, config: &PublishConfig) -> Option<String> {
        self.runner
            .run(&create_command(config), "Creating GitHub repository")
            .await
    }
}

pub(crate) fn create_command(config: &PublishConfig) -> String {
    format!(
        "gh repo create {} {} --description {} --source=. --remote={} --push",
        word(&config.name),
        config.visibility.flag(),
        quote(&config.description),
        word(&config.remote),
    )
}

/// Plain words go in as they are, anything else is quoted.
fn word(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if plain {
        value.to_string()
    } else {
        quote(value)
    }
}

/// Double-quotes `value` for `sh -c`, escaping the characters that stay live inside.
#[cfg(not(windows))]
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Double-quotes `value` for `cmd /C`, following the argv rules of the program it
/// starts. `$` and backticks are literal there. `%VAR%` is still expanded by `cmd`.
#[cfg(windows)]
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    let mut backslashes = 0;
    for c in value.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                // Backslashes before a quote are literal only when doubled.
                quoted.extend(std::iter::repeat('\\').take(backslashes * 2 + 1));
                backslashes = 0;
            }
            _ => {
                quoted.extend(std::iter::repeat('\\').take(backslashes));
                backslashes = 0;
            }
        }
        if c != '\\' {
            quoted.push(c);
        }
    }
    quoted.extend(std::iter::repeat('\\').take(backslashes * 2));
    quoted.push('"');
    quoted
}

fn parse_version(output: &str) -> Option<&str> {
    static VERSION: OnceLock<Regex> = OnceLock::new();
    let re = VERSION.get_or_init(|| {
        Regex::new(r"gh version (\d+\.\d+\.\d+)").expect("version pattern is valid")
    });
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
