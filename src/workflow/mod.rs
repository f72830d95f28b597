//! The publishing workflow: check the workspace, get a remote repository,
//! then push to it.
//!
//! ```text
//! preconditions --fail--> Fatal
//!      |
//!   create repo --manual--> ManualFallback
//!      |
//!   automated --> publish --> AutomatedSuccess { publish }
//! ```

mod create_repo;
mod preconditions;
mod publish;

use super::{
    console::{BANNER_WIDTH, RULE_WIDTH},
    Console, Error, PublishConfig, RemoteHosting, Result, VersionControl,
};
use std::sync::Arc;
use tracing::{info, warn};

pub use create_repo::Creation;

#[derive(Debug)]
pub enum Outcome {
    /// The repository was created by `gh`; `publish` is the result of the push that followed.
    AutomatedSuccess { publish: Result<()> },
    /// Instructions were printed and the user finishes by hand.
    ManualFallback { reason: Error },
    /// A precondition failed before anything was attempted.
    Fatal(Error),
}

pub struct Workflow {
    git: Arc<dyn VersionControl>,
    gh: Arc<dyn RemoteHosting>,
    config: PublishConfig,
    console: Console,
}

impl Workflow {
    pub fn new(
        git: Arc<dyn VersionControl>,
        gh: Arc<dyn RemoteHosting>,
        config: PublishConfig,
        console: Console,
    ) -> Self {
        Self {
            git,
            gh,
            config,
            console,
        }
    }

    pub async fn run(&self) -> Outcome {
        self.console
            .line(format!("🚀 {} - GitHub Repository Setup", self.config.title()));
        self.console.rule(BANNER_WIDTH);

        match preconditions::check(self.git.as_ref(), &self.console).await {
            Ok(commits) => info!(commits, "workspace ready"),
            Err(err) => {
                warn!(%err, "precondition failed");
                self.console.line(format!("❌ {err}"));
                return Outcome::Fatal(err);
            }
        }

        match create_repo::create(self.gh.as_ref(), &self.config, &self.console).await {
            Creation::AutomatedSuccess => {
                let publish =
                    publish::publish(self.git.as_ref(), &self.config, &self.console).await;
                if let Err(ref err) = publish {
                    warn!(%err, "publish failed");
                }
                Outcome::AutomatedSuccess { publish }
            }
            Creation::ManualFallback(reason) => {
                self.console.line(
                    "\n📝 Please follow the manual instructions above to create your repository.",
                );
                self.console.line("Then run the push commands shown above.");
                Outcome::ManualFallback { reason }
            }
        }
    }
}
