use std::io;

use anyhow::Context;
use relevo_demo::{Demo, DemoConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Ok(path) = &dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = DemoConfig::from_env().context("invalid relevo configuration")?;
    let demo = Demo::from_config(&config).context("failed to build API clients")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo.run(config.mode, &mut out)
        .await
        .with_context(|| format!("{:?} demo failed", config.mode))?;
    Ok(())
}
