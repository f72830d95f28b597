mod args;
mod cmd;
mod config;
mod console;
mod error;
mod ports;
mod shell;
#[cfg(test)]
mod testing;
mod workflow;

const GIT_DIR: &str = ".git";

use args::{Args, ArgsBuilder};
pub use cmd::Command;
pub use config::{PublishConfig, Visibility};
pub use console::Console;
pub use error::Error;
pub use ports::{GhCli, GitCli, RemoteHosting, VersionControl};
pub use shell::{CommandOutput, Mode, Runner, Shell, ShellContext, SystemShell};
pub use workflow::{Creation, Outcome, Workflow};
pub type Result<T> = std::result::Result<T, Error>;
