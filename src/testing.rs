use super::{
    shell::{CommandOutput, Mode, Shell, ShellContext},
    Result,
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub(crate) type Calls = Arc<Mutex<Vec<(String, Mode)>>>;

/// Scripted shell: canned output per command line, everything else exits 127.
#[derive(Debug, Default)]
pub(crate) struct FakeShell {
    ctx: ShellContext,
    responses: HashMap<String, CommandOutput>,
    spawn_errors: HashSet<String>,
    calls: Calls,
}

impl FakeShell {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn in_dir(ctx: ShellContext) -> Self {
        Self {
            ctx,
            ..Self::default()
        }
    }

    pub(crate) fn respond(mut self, command: &str, output: CommandOutput) -> Self {
        self.responses.insert(command.into(), output);
        self
    }

    pub(crate) fn spawn_error(mut self, command: &str) -> Self {
        self.spawn_errors.insert(command.into());
        self
    }

    pub(crate) fn calls(&self) -> Calls {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Shell for FakeShell {
    fn context(&self) -> &ShellContext {
        &self.ctx
    }

    async fn exec(&self, command: &str, mode: Mode) -> Result<CommandOutput> {
        self.calls.lock().unwrap().push((command.into(), mode));

        if self.spawn_errors.contains(command) {
            return Err(anyhow::anyhow!("failed to spawn `{command}`").into());
        }

        Ok(self
            .responses
            .get(command)
            .cloned()
            .unwrap_or_else(|| CommandOutput::failed("sh: command not found")))
    }
}

/// Commands issued so far, in order.
pub(crate) fn issued(calls: &Calls) -> Vec<String> {
    calls.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
}

/// What the manual fallback prints with the default configuration.
pub(crate) const MANUAL_BLOCK: &str = "
📋 Manual GitHub Repository Setup
==================================================
1. Go to https://github.com and sign in
2. Click the '+' icon → 'New repository'
3. Repository name: telegram-news-scraper
4. Description: High-performance intelligent news scraping system with MongoDB Atlas, Google Gemini AI, and advanced caching mechanisms
5. Make it PUBLIC
6. DO NOT initialize with README, .gitignore, or license
7. Click 'Create repository'

After creating the repository, run these commands:

==================================================
git remote add origin https://github.com/YOUR_USERNAME/telegram-news-scraper.git
git branch -M main
git push -u origin main
==================================================
";
