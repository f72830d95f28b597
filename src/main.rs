use repo_publisher::{Command, Result};
use std::env;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    if let Err(err) = run(&args[1..]).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: &[String]) -> Result<()> {
    let cmd = Command::new(args)?;
    cmd.run().await
}
