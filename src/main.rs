use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

mod download;
mod error;
mod output;
mod telemetry;

#[derive(Parser)]
#[command(name = "paper-dl", about = "Download paper PDFs from ACL Anthology and arXiv landing pages")]
struct Cli {
    /// Emit a single JSON envelope to stdout; logs and progress go to stderr
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(flatten)]
    download: download::DownloadCmd,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and PAPERDL_LOG_FORMAT
    telemetry::config::init_tracing();

    download::run(cli.download).await
}
