//! The two external tools the workflow drives, behind narrow traits.
//!
//! Every method mirrors one check or action. Results follow the
//! [`Runner`](crate::Runner) contract: `Some(stdout)` when the tool exited
//! with status zero, `None` otherwise.

mod gh;
mod git;

use super::PublishConfig;
use async_trait::async_trait;

pub use gh::GhCli;
pub use git::GitCli;

#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Whether version-control metadata exists in the working directory.
    fn is_initialized(&self) -> bool;

    async fn commit_log(&self) -> Option<String>;

    async fn remotes(&self) -> Option<String>;

    async fn rename_branch(&self, branch: &str) -> Option<String>;

    async fn push_upstream(&self, remote: &str, branch: &str) -> Option<String>;
}

#[async_trait]
pub trait RemoteHosting: Send + Sync {
    async fn version(&self) -> Option<String>;

    async fn auth_status(&self) -> Option<String>;

    /// May block on the user for as long as the login flow takes.
    async fn login(&self) -> Option<String>;

    /// Creates the repository, registers it as a remote and pushes.
    async fn create_repo(&self, config: &PublishConfig) -> Option<String>;
}
