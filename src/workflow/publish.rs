use super::{Console, Error, PublishConfig, Result, VersionControl, RULE_WIDTH};
use regex::Regex;

pub(crate) async fn publish(
    git: &dyn VersionControl,
    config: &PublishConfig,
    console: &Console,
) -> Result<()> {
    console.line("\n📤 Pushing to GitHub");
    console.rule(RULE_WIDTH);

    let remotes = git.remotes().await.unwrap_or_default();
    if !has_remote(&remotes, &config.remote) {
        let err = Error::RemoteMissing(config.remote.clone());
        console.line(format!("❌ {err}"));
        return Err(err);
    }

    console.line("\n🔄 Pushing code to GitHub...");

    // Renaming onto the current name is a no-op, so the outcome is not checked.
    git.rename_branch(&config.branch).await;

    if git.push_upstream(&config.remote, &config.branch).await.is_none() {
        console.line(format!("\n❌ {}", Error::PushFailed));
        return Err(Error::PushFailed);
    }

    console.line("\n🎉 Successfully pushed to GitHub!");
    console.line("🌐 Your repository is now live on GitHub!");
    Ok(())
}

/// `git remote -v` lines look like `origin\thttps://... (fetch)`.
fn has_remote(listing: &str, remote: &str) -> bool {
    let pattern = format!(r"(?m)^{}\s", regex::escape(remote));
    Regex::new(&pattern).is_ok_and(|re| re.is_match(listing))
}
