use super::{Console, Error, Result, VersionControl};

/// Number of commits in the workspace, or the reason nothing may happen.
pub(crate) async fn check(git: &dyn VersionControl, console: &Console) -> Result<usize> {
    if !git.is_initialized() {
        return Err(Error::NotARepository);
    }

    let log = git
        .commit_log()
        .await
        .filter(|log| !log.is_empty())
        .ok_or(Error::NoCommits)?;

    let count = log.lines().count();
    console.line(format!("✅ Found {count} commits"));
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{CommandOutput, ShellContext};
    use crate::testing::{issued, FakeShell};
    use crate::{GitCli, Runner};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn repo(with_git_dir: bool) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        if with_git_dir {
            std::fs::create_dir(dir.path().join(".git")).unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn it_stops_without_git_metadata() {
        let dir = repo(false);
        let shell = FakeShell::in_dir(ShellContext::new(dir.path()));
        let calls = shell.calls();
        let console = Console::buffered();
        let git = GitCli::new(Runner::new(Arc::new(shell), console.clone()));

        assert!(matches!(check(&git, &console).await, Err(Error::NotARepository)));
        assert!(issued(&calls).is_empty());
    }

    #[tokio::test]
    async fn it_stops_on_an_empty_history() {
        let dir = repo(true);
        let shell = FakeShell::in_dir(ShellContext::new(dir.path()))
            .respond("git log --oneline", CommandOutput::ok("\n"));
        let console = Console::buffered();
        let git = GitCli::new(Runner::new(Arc::new(shell), console.clone()));

        assert!(matches!(check(&git, &console).await, Err(Error::NoCommits)));
    }

    #[tokio::test]
    async fn it_counts_commits() {
        let dir = repo(true);
        let shell = FakeShell::in_dir(ShellContext::new(dir.path())).respond(
            "git log --oneline",
            CommandOutput::ok("a1b2c3d third\n9f8e7d6 second\n0123456 first\n"),
        );
        let console = Console::buffered();
        let git = GitCli::new(Runner::new(Arc::new(shell), console.clone()));

        assert_eq!(check(&git, &console).await.unwrap(), 3);
        assert!(console.contents().ends_with("✅ Found 3 commits\n"));
    }
}
