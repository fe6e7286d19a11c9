use std::path::Path;

use tracing_subscriber::EnvFilter;

use topicnews::{OUT_PATH, TOPIC_RSS};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let outcome = topicnews::run(TOPIC_RSS, Path::new(OUT_PATH))?;
    println!("{outcome}");
    Ok(())
}
