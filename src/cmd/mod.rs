use super::{
    ArgsBuilder, Console, GhCli, GitCli, Outcome, PublishConfig, Result, Runner, ShellContext,
    SystemShell, Workflow,
};
use std::sync::Arc;
use tracing::info;

const USAGE: &str = "Create the GitHub repository for this workspace and push to it.

Usage: repo-publisher [OPTIONS]

Options:
  --name <NAME>         Repository name [default: telegram-news-scraper]
  --description <TEXT>  Repository description
  --public              Create a public repository (default)
  --private             Create a private repository
  --owner <ACCOUNT>     Account shown in repository URLs [default: YOUR_USERNAME]
  -h, --help            Print this help";

pub(crate) fn publish_args() -> ArgsBuilder {
    ArgsBuilder::new()
        .flag("--public")
        .flag("--private")
        .arg("--name")
        .arg("--description")
        .arg("--owner")
}

#[derive(Debug)]
pub enum Command {
    Publish(PublishConfig),
    Help,
}

impl Command {
    pub fn new(args: &[String]) -> Result<Self> {
        if args.iter().any(|a| a == "-h" || a == "--help") {
            return Ok(Self::Help);
        }
        let args = publish_args().build(args);
        Ok(Self::Publish(PublishConfig::from_args(&args)))
    }

    pub async fn run(self) -> Result<()> {
        match self {
            Self::Help => {
                println!("{USAGE}");
                Ok(())
            }
            Self::Publish(config) => {
                let ctx = ShellContext::current()?;
                let runner = Runner::new(Arc::new(SystemShell::new(ctx)), Console::stdout());
                let workflow = Workflow::new(
                    Arc::new(GitCli::new(runner.clone())),
                    Arc::new(GhCli::new(runner)),
                    config,
                    Console::stdout(),
                );

                // Every handled outcome ends the process normally.
                match workflow.run().await {
                    Outcome::AutomatedSuccess { publish } => {
                        info!(pushed = publish.is_ok(), "repository created automatically")
                    }
                    Outcome::ManualFallback { reason } => info!(%reason, "manual setup required"),
                    Outcome::Fatal(reason) => info!(%reason, "workflow stopped"),
                }
                Ok(())
            }
        }
    }
}
