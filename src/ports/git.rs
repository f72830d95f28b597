use super::VersionControl;
use crate::{Runner, GIT_DIR};
use async_trait::async_trait;

/// The system `git` binary.
#[derive(Clone)]
pub struct GitCli {
    runner: Runner,
}

impl GitCli {
    pub fn new(runner: Runner) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl VersionControl for GitCli {
    fn is_initialized(&self) -> bool {
        self.runner.context().working_dir.join(GIT_DIR).exists()
    }

    async fn commit_log(&self) -> Option<String> {
        self.runner
            .run("git log --oneline", "Checking git commits")
            .await
    }

    async fn remotes(&self) -> Option<String> {
        self.runner.run("git remote -v", "Checking git remotes").await
    }

    async fn rename_branch(&self, branch: &str) -> Option<String> {
        self.runner
            .run(
                &format!("git branch -M {branch}"),
                &format!("Renaming branch to {branch}"),
            )
            .await
    }

    async fn push_upstream(&self, remote: &str, branch: &str) -> Option<String> {
        self.runner
            .run(&format!("git push -u {remote} {branch}"), "Pushing to GitHub")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{CommandOutput, ShellContext};
    use crate::testing::{issued, FakeShell};
    use crate::Console;
    use std::sync::Arc;

    #[test]
    fn it_detects_git_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let shell = FakeShell::in_dir(ShellContext::new(dir.path()));
        let git = GitCli::new(Runner::new(Arc::new(shell), Console::buffered()));
        assert!(!git.is_initialized());

        std::fs::create_dir(dir.path().join(".git")).unwrap();
        assert!(git.is_initialized());
    }

    #[tokio::test]
    async fn it_issues_the_literal_git_commands() {
        let shell = FakeShell::new()
            .respond("git branch -M main", CommandOutput::ok(""))
            .respond("git push -u origin main", CommandOutput::ok(""));
        let calls = shell.calls();
        let git = GitCli::new(Runner::new(Arc::new(shell), Console::buffered()));

        assert_eq!(git.rename_branch("main").await, Some(String::new()));
        assert_eq!(git.push_upstream("origin", "main").await, Some(String::new()));
        assert_eq!(git.commit_log().await, None);
        assert_eq!(
            issued(&calls),
            vec!["git branch -M main", "git push -u origin main", "git log --oneline"]
        );
    }
}
