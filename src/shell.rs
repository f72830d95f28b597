//! Child-process plumbing: the injected shell context, the [`Shell`] seam and
//! the [`Runner`] that turns exit statuses into status lines.

use super::{Console, Result};
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tracing::debug;

/// Working directory and extra environment handed to every child process.
#[derive(Debug, Clone, Default)]
pub struct ShellContext {
    pub working_dir: PathBuf,
    pub envs: Vec<(String, String)>,
}

impl ShellContext {
    pub fn new<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_dir: working_dir.into(),
            envs: vec![],
        }
    }

    pub fn current() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// stdout and stderr are captured, stdin is closed.
    Captured,
    /// The child shares the terminal, for prompts and browser hand-offs.
    Interactive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: &str) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: &str) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

#[async_trait]
pub trait Shell: Send + Sync {
    fn context(&self) -> &ShellContext;

    async fn exec(&self, command: &str, mode: Mode) -> Result<CommandOutput>;
}

#[derive(Debug, Clone)]
pub struct SystemShell {
    ctx: ShellContext,
}

impl SystemShell {
    pub fn new(ctx: ShellContext) -> Self {
        Self { ctx }
    }

    fn command(&self, line: &str) -> Command {
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(line);
            cmd
        };
        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(line);
            cmd
        };

        cmd.current_dir(&self.ctx.working_dir);
        for (k, v) in &self.ctx.envs {
            cmd.env(k, v);
        }
        cmd
    }
}

#[async_trait]
impl Shell for SystemShell {
    fn context(&self) -> &ShellContext {
        &self.ctx
    }

    async fn exec(&self, line: &str, mode: Mode) -> Result<CommandOutput> {
        let mut cmd = self.command(line);
        debug!(command = line, ?mode, "spawning");

        let output = match mode {
            Mode::Captured => {
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped());
                let output = cmd
                    .output()
                    .await
                    .with_context(|| format!("failed to spawn `{line}`"))?;
                CommandOutput {
                    success: output.status.success(),
                    stdout: String::from_utf8_lossy(&output.stdout).into(),
                    stderr: String::from_utf8_lossy(&output.stderr).into(),
                }
            }
            Mode::Interactive => {
                let status = cmd
                    .status()
                    .await
                    .with_context(|| format!("failed to spawn `{line}`"))?;
                CommandOutput {
                    success: status.success(),
                    ..Default::default()
                }
            }
        };

        debug!(command = line, success = output.success, "finished");
        Ok(output)
    }
}

/// Runs one command, reports it on the console and never fails past itself.
#[derive(Clone)]
pub struct Runner {
    shell: Arc<dyn Shell>,
    console: Console,
}

impl Runner {
    pub fn new(shell: Arc<dyn Shell>, console: Console) -> Self {
        Self { shell, console }
    }

    pub fn context(&self) -> &ShellContext {
        self.shell.context()
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Trimmed stdout on a zero exit status, `None` otherwise.
    pub async fn run(&self, command: &str, description: &str) -> Option<String> {
        self.run_with(command, description, Mode::Captured).await
    }

    pub async fn run_interactive(&self, command: &str, description: &str) -> Option<String> {
        self.run_with(command, description, Mode::Interactive).await
    }

    async fn run_with(&self, command: &str, description: &str, mode: Mode) -> Option<String> {
        self.console.line(format!("🔄 {description}..."));

        let output = self
            .shell
            .exec(command, mode)
            .await
            .unwrap_or_else(|err| CommandOutput::failed(&err.to_string()));

        if output.success {
            self.console
                .line(format!("✅ {description} completed successfully"));
            Some(output.stdout.trim().to_string())
        } else {
            self.console
                .line(format!("❌ {description} failed: {}", output.stderr));
            None
        }
    }
}
