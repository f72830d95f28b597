use super::{Console, Error, PublishConfig, RemoteHosting, RULE_WIDTH};
use tracing::{info, warn};

#[derive(Debug)]
pub enum Creation {
    /// `gh` created the repository, added the remote and pushed.
    AutomatedSuccess,
    /// The user was given instructions instead.
    ManualFallback(Error),
}

pub(crate) async fn create(
    gh: &dyn RemoteHosting,
    config: &PublishConfig,
    console: &Console,
) -> Creation {
    console.line("🚀 GitHub Repository Setup");
    console.rule(RULE_WIDTH);

    let reason = match automated(gh, config, console).await {
        Ok(()) => return Creation::AutomatedSuccess,
        Err(reason) => reason,
    };

    warn!(%reason, "falling back to manual repository setup");
    print_manual_instructions(config, console);
    Creation::ManualFallback(reason)
}

async fn automated(
    gh: &dyn RemoteHosting,
    config: &PublishConfig,
    console: &Console,
) -> Result<(), Error> {
    gh.version().await.ok_or(Error::ToolUnavailable)?;
    console.line("\n📋 GitHub CLI detected! Using automated setup...");

    if gh.auth_status().await.is_none() {
        info!(reason = %Error::AuthenticationRequired, "starting interactive login");
        console.line("\n🔐 Please authenticate with GitHub CLI:");
        gh.login().await;
    }

    console.line(format!("\n📦 Creating repository: {}", config.name));
    if gh.create_repo(config).await.is_none() {
        console.line("\n⚠️ Automated creation failed. Using manual instructions...");
        return Err(Error::RemoteCreationFailed);
    }

    console.line("\n🎉 Repository created successfully!");
    console.line(format!("🌐 View your repository at: {}", config.web_url()));
    Ok(())
}

pub(crate) fn print_manual_instructions(config: &PublishConfig, console: &Console) {
    console.line("\n📋 Manual GitHub Repository Setup");
    console.rule(RULE_WIDTH);
    console.line("1. Go to https://github.com and sign in");
    console.line("2. Click the '+' icon → 'New repository'");
    console.line(format!("3. Repository name: {}", config.name));
    console.line(format!("4. Description: {}", config.description));
    console.line(format!("5. Make it {}", config.visibility));
    console.line("6. DO NOT initialize with README, .gitignore, or license");
    console.line("7. Click 'Create repository'");
    console.line("\nAfter creating the repository, run these commands:");
    console.line("");
    console.rule(RULE_WIDTH);
    console.line(format!(
        "git remote add {} {}",
        config.remote,
        config.clone_url()
    ));
    console.line(format!("git branch -M {}", config.branch));
    console.line(format!("git push -u {} {}", config.remote, config.branch));
    console.rule(RULE_WIDTH);
}
