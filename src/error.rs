use std::io;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("ERR - Io: {0}")]
    Io(#[from] io::Error),

    #[error("Not in a git repository. Please run 'git init' first.")]
    NotARepository,

    #[error("No commits found. Please commit your changes first.")]
    NoCommits,

    #[error("GitHub CLI is not available")]
    ToolUnavailable,

    #[error("GitHub CLI is not authenticated")]
    AuthenticationRequired,

    #[error("Automated repository creation failed")]
    RemoteCreationFailed,

    #[error("No remote {0} found. Please create the GitHub repository first.")]
    RemoteMissing(String),

    #[error("Failed to push to GitHub. Please check your repository URL and try again.")]
    PushFailed,

    #[error("ERR - Other: {0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Precondition failures stop the workflow before anything is created or pushed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NotARepository | Self::NoCommits)
    }
}
