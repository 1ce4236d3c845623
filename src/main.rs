use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use smartq::config::{DEFAULT_LOG_DIR, DEFAULT_SYSTEM_PROMPT};
use smartq::protocol::DEFAULT_SERVER_URL;
use smartq::{BackendConfig, ClientConfig};

#[derive(Parser, Debug)]
#[command(name = "smartq")]
#[command(version, about = "Terminal client for the SmartQ quiz service", long_about = None)]
struct Args {
    /// Base URL of the quiz backend
    #[arg(short, long, env = "SMARTQ_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Request timeout in seconds (waits indefinitely when unset)
    #[arg(short, long, env = "SMARTQ_TIMEOUT", value_name = "SECS")]
    timeout: Option<u64>,

    /// Topic offered in the topic selector (repeatable)
    #[arg(long = "topic", value_name = "TOPIC")]
    topics: Vec<String>,

    /// Initial system prompt
    #[arg(long, default_value = DEFAULT_SYSTEM_PROMPT)]
    system_prompt: String,

    /// File whose contents preload the knowledge base field
    #[arg(short, long, value_name = "FILE")]
    knowledge_file: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    smartq::logging::init(&args.log_dir, args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "client exited with error");
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = ClientConfig {
        backend: BackendConfig {
            base_url: args.server,
            timeout: args.timeout.map(Duration::from_secs),
        },
        system_prompt: args.system_prompt,
        ..ClientConfig::default()
    }
    .with_topics(args.topics);

    if let Some(path) = &args.knowledge_file {
        config = config.with_knowledge_file(path)?;
    }

    tracing::debug!(?config, "configuration loaded");
    smartq::run(config).await?;
    Ok(())
}
